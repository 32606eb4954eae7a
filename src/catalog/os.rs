// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host operating system catalogs.

use super::{Catalog, VarSpec, var};

static WINDOWS_VARS: &[VarSpec] = &[
    var("AllUsersProfile", "ALLUSERSPROFILE", "A directory path like C:\\ProgramData\\"),
    var("AppData", "APPDATA", "A directory path like C:\\Users\\{username}\\AppData\\Roaming"),
    var("ClientName", "ClientName", "Terminal servers only - the ComputerName of a remote host."),
    var("CmdExtVersion", "CMDEXTVERSION", "The current Command Processor Extensions version number. (Before Windows 2000 (NT): 1, Windows 2000 and later: 2)"),
    var("CommonProgramFiles", "COMMONPROGRAMFILES", "Same as CSIDL_PROGRAM_FILES_COMMON."),
    var("CommonProgramFilesX86", "COMMONPROGRAMFILES(X86)", "Refers to the C:\\Program Files (x86)\\Common Files folder on 64-bit systems."),
    var("ComputerName", "COMPUTERNAME", "This computer name"),
    var("ComSpec", "COMSPEC", "Refers to the C:\\Windows\\System32\\cmd.exe."),
    var("HomeDrive", "HOMEDRIVE", "Refers to C:\\"),
    var("HomePath", "HOMEPATH", "Refers to \\Users\\{username}"),
    var("HomeShare", "HOMESHARE", "Network home folder."),
    var("LocalAppData", "LOCALAPPDATA", "A directory path like C:\\Users\\{username}\\AppData\\Local"),
    var("LogonServer", "LOGONSERVER", "A UNC path like \\\\{domain_logon_server}"),
    var("NumberOfProcessors", "NUMBER_OF_PROCESSORS", "The Number of processors running on the machine."),
    var("OneDrive", "OneDrive", "OneDrive synchronisation folder. Typically C:\\users\\%username%\\OneDrive. If only a single OneDrive client is installed then use %OneDrive%."),
    var("OneDriveCommercial", "OneDriveCommercial", "OneDrive for Organizations' synchronisation folder (if installed). Typically C:\\users\\%username%\\OneDrive."),
    var("OneDriveConsumer", "OneDriveConsumer", "OneDrive Personal synchronisation folder. Typically C:\\users\\%username%\\OneDrive"),
    var("OS", "OS", "Operating system on the user’s workstation."),
    var("Path", "PATH", "The execution path."),
    var("PathExtensions", "PATHEXT", "Determine the default executable file extensions to search for and use, and in which order, left to right."),
    var("ProcessorArchitecture", "PROCESSOR_ARCHITECTURE", "(AMD64/IA64/x86) This doesn’t tell you the architecture of the processor but only of the current process, so it returns \"x86\" for a 32 bit WOW process running on 64 bit Windows."),
    var("ProcessorArchitectureW6432", "PROCESSOR_ARCHITEW6432", "Same as %PROCESSOR_ARCHITECTURE% (but only available to 64 bit processes)"),
    var("ProcessorIdentifier", "PROCESSOR_IDENTIFIER", "Processor ID of the user’s workstation."),
    var("ProcessorLevel", "PROCESSOR_LEVEL", "Processor level of the user’s workstation."),
    var("ProcessorRevision", "PROCESSOR_REVISION", "Processor version of the user’s workstation."),
    var("ProgramData", "ProgramData", "A directory path like C:\\ProgramData"),
    var("ProgramFiles", "PROGRAMFILES", "Same as CSIDL_PROGRAM_FILES."),
    var("ProgramFilesX86", "PROGRAMFILES(X86)", "Refers to the C:\\Program Files (x86) folder on 64-bit systems."),
    var("ProgramW6432", "ProgramW6432", "Same as %ProgramFiles% (but only available when running under a 64 bit OS)"),
    var("WindowsPowerShellModulePath", "PSModulePath", "A directory path like %SystemRoot%\\system32\\WindowsPowerShell\\v1.0\\Modules\\"),
    var("Public", "Public", "A directory path like C:\\Users\\Public"),
    var("SessionName", "SessionName", "Terminal servers only - for a terminal server session, SessionName is a combination of the connection name, followed by #SessionNumber. For a console session, SessionName returns \"Console\"."),
    var("SystemDrive", "SYSTEMDRIVE", "The drive that holds the Windows folder. This value is a drive name and not a folder name (C: not C:\\)."),
    var("SystemRoot", "SYSTEMROT", "Same as WINDIR."),
    var("Temp", "TEMP", "Temporary directory (TEMP)"),
    var("Tmp", "TMP", "Temporary directory (TMP)"),
    var("UserDnsDomain", "UserDnsDomain", "Set if a user is a logged on to a domain and returns the fully qualified DNS domain that the currently logged on user’s account belongs to."),
    var("UserDomain", "USERDOMAIN", "Current user domain name"),
    var("UserDomainRoamingProfile", "USERDOMAIN_roamingprofile", "The user domain for RDS or standard roaming profile paths. Windows 8, Windows Server 2012 or higher version required."),
    var("UserName", "USERNAME", "Current Username"),
    var("UserProfile", "USERPROFILE", "User profile directory path"),
    var("WinDir", "WINDIR", "Refers to the Windows folder located on the system drive."),
    var("ZESEnableSysman", "ZES_ENABLE_SYSMAN", "System Resource Management library, Windows 11. Enables driver initialization and dependencies for system management. Set to 0 to disable."),
];

/// Represents a collection of environment variables used in Windows operating systems.
///
/// <https://ss64.com/nt/syntax-variables.html>
pub static WINDOWS: Catalog = Catalog {
    name: "windows",
    title: "Windows",
    docs_url: "https://ss64.com/nt/syntax-variables.html",
    vars: WINDOWS_VARS,
    prefixes: &[],
};

static LINUX_VARS: &[VarSpec] = &[
    var("BashVersion", "BASH_VERSION", "Holds the version of this instance of bash."),
    var("Display", "DISPLAY", "Set X display name"),
    var("Editor", "EDITOR", "Set name of default text editor."),
    var("HostName", "HOSTNAME", "The name of the your computer."),
    var("HistoryFile", "HISTFILE", "The name of the file in which command history is saved."),
    var("HistoryFileSize", "HISTFILESIZE", "The maximum number of lines contained in the history file."),
    var("HistorySize", "HISTSIZE", "The number of commands to remember in the command history. The default value is 500."),
    var("Home", "HOME", "The home directory of the current user."),
    var("HostType", "HOSTTYPE", "A string describing the machine Bash is running on."),
    var("IFS", "IFS", "The Internal Field Separator that is used for word splitting after expansion and to split lines into words with the read builtin command. The default value is [space][tab][newline]."),
    var("Lang", "LANG", "The locale of the runtime (en_US.UTF-8)."),
    var("LdLibraryPath", "LD_LIBRARY_PATH", "The system library path (/var/lang/lib:/lib64:/usr/lib64:$LAMBDA_RUNTIME_DIR:$LAMBDA_RUNTIME_DIR/lib:$LAMBDA_TASK_ROOT:$LAMBDA_TASK_ROOT/lib:/opt/lib)."),
    var("Path", "PATH", "The execution path."),
    var("PS1", "PS1", "Your prompt settings."),
    var("Pwd", "PWD", "Current directory path."),
    var("Shell", "SHELL", "Set path to login shell."),
    var("Timeout", "TMOUT", "The default timeout for the read builtin command. Also in an interactive shell, the value is interpreted as the number of seconds to wait for input after issuing the command. If not input provided it will logou user."),
    var("Terminal", "TERM", "Your login terminal type."),
    var("Tz", "TZ", "The environment's time zone (:UTC)."),
    var("Uid", "UID", "Gives user ID of current user."),
    var("DebianFrontend", "DEBIAN_FRONTEND", "Configures Debian-based systems to avoid interactive prompts during package installation."),
    var("User", "USER", "The user that is executing the build script, typically set to \"travis\"."),
    var("LCAll", "LC_ALL", "Ensures that all locale settings are consistent and set to US English (UTF-8)."),
];

/// Represents a collection of environment variables used in Linux operating systems.
pub static LINUX: Catalog = Catalog {
    name: "linux",
    title: "Linux",
    docs_url: "",
    vars: LINUX_VARS,
    prefixes: &[],
};
