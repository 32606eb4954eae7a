// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Azure Oryx build platform catalogs.

use super::super::{Catalog, VarSpec, var};

static ORYX_BUILD_AUTOMATION_VARS: &[VarSpec] = &[
    var("PreBuildCommand", "PRE_BUILD_COMMAND", "Command to a shell script to be run before build"),
    var("PreBuildScriptPath", "PRE_BUILD_SCRIPT_PATH", "A repo-relative path to a shell script to be run before build"),
    var("PostBuildCommand", "POST_BUILD_COMMAND", "Command to a shell script to be run after build"),
    var("PostBuildScriptPath", "POST_BUILD_SCRIPT_PATH", "A repo-relative path to a shell script to be run after build"),
    var("EnableDynamicInstall", "ENABLE_DYNAMIC_INSTALL", "Enable dynamically install platform binaries if not presented inside the image"),
    var("OryxSdkStorageBaseUrl", "ORYX_SDK_STORAGE_BASE_URL", "The storage base url from where oryx dynamically install sdks"),
    var("DynamicInstallRootDirectory", "DYNAMIC_INSTALL_ROOT_DIR", "Root directory path under which dynamically installed SDKs are created."),
    var("DisableCheckers", "DISABLE_CHECKERS", "Disable running version checkers during the build."),
    var("OryxDisableTelemetry", "ORYX_DISABLE_TELEMETRY", "Disable Oryx command line tools from collecting any data."),
    var("OryxAppType", "ORYX_APP_TYPE", "Type of application that the the source directory has."),
    var("DisableRecursiveLookup", "DISABLE_RECURSIVE_LOOKUP", "Indicates if detectors should consider looking into sub-directories for files"),
    var("EnableMultiplatformBuild", "ENABLE_MULTIPLATFORM_BUILD", "Apply more than one toolset if repo indicates it"),
    var("PlatformName", "PLATFORM_NAME", "Specify which platform the app is using. Possible values are: nodejs, hugo, python, dotnet, php, ruby, java."),
    var("PlatformVersion", "PLATFORM_VERSION", "Specify which platform version the app is using"),
    var("RequiredOsPackages", "REQUIRED_OS_PACKAGES", "Indicate if it requires OS packages for Node or Python packages"),
    var("CreatePackage", "CREATE_PACKAGE", "Indicate if it should create packages for the app"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_BUILD_AUTOMATION: Catalog = Catalog {
    name: "azure-oryx-build-automation",
    title: "Azure Oryx Build Automation",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_BUILD_AUTOMATION_VARS,
    prefixes: &[],
};

static ORYX_DOTNET_VARS: &[VarSpec] = &[
    var("DotnetVersion", "DOTNET_VERSION", "Specify which .NET version the app is using"),
    var("DotnetDefaultVersion", "DOTNET_DEFAULT_VERSION", "Specify which .NET version the app defaults to if none detected"),
    var("DisableDotnetCoreBuild", "DISABLE_DOTNETCORE_BUILD", "Indicates that the .NET Core build disabled even if repo indicates it"),
    var("Project", "PROJECT", "repo-relative path to directory with .csproj file for build"),
    var("MsbuildConfiguration", "MSBUILD_CONFIGURATION", "Configuration (Debug or Release) that is used to build a .NET Core project"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/.NET Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_DOTNET: Catalog = Catalog {
    name: "azure-oryx-dotnet",
    title: "Azure Oryx .NET",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_DOTNET_VARS,
    prefixes: &[],
};

static ORYX_GOLANG_VARS: &[VarSpec] = &[
    var("GolangVersion", "GOLANG_VERSION", "Specify which Golang version the app is using"),
    var("GolangDefaultVersion", "GOLANG_DEFAULT_VERSION", "Specify which Golang version the app defaults to if none detected"),
    var("DisableGolangBuild", "DISABLE_GOLANG_BUILD", "Indicates that the Golang build disabled even if repo indicates it"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/Golang Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_GOLANG: Catalog = Catalog {
    name: "azure-oryx-golang",
    title: "Azure Oryx Go",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_GOLANG_VARS,
    prefixes: &[],
};

static ORYX_HUGO_VARS: &[VarSpec] = &[
    var("HugoVersion", "HUGO_VERSION", "Specify which Hugo version the app is using"),
    var("HugoDefaultVersion", "HUGO_DEFAULT_VERSION", "Specify which Hugo version the app defaults to if none detected"),
    var("DisableHugoBuild", "DISABLE_HUGO_BUILD", "Indicates that the Hugo build disabled even if repo indicates it"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/Hugo Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_HUGO: Catalog = Catalog {
    name: "azure-oryx-hugo",
    title: "Azure Oryx Hugo",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_HUGO_VARS,
    prefixes: &[],
};

static ORYX_JAVA_VARS: &[VarSpec] = &[
    var("JavaVersion", "JAVA_VERSION", "Specify which Java version the app is using"),
    var("JavaDefaultVersion", "JAVA_DEFAULT_VERSION", "Specify which Java version the app defaults to if none detected"),
    var("MavenVersion", "MAVEN_VERSION", "Specify which Maven version the app is using"),
    var("MavenDefaultVersion", "MAVEN_DEFAULT_VERSION", "Specify which Maven version the app defaults to if none detected"),
    var("DisableJavaBuild", "DISABLE_JAVA__BUILD", "Indicates that the Java build disabled even if repo indicates it"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/Java Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_JAVA: Catalog = Catalog {
    name: "azure-oryx-java",
    title: "Azure Oryx Java",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_JAVA_VARS,
    prefixes: &[],
};

static ORYX_NODE_VARS: &[VarSpec] = &[
    var("NodeVersion", "NODE_VERSION", "Specify which Node version the app is using"),
    var("NodeDefaultVersion", "NODE_DEFAULT_VERSION", "Specify which Node version the app defaults to if none detected"),
    var("DisableNodejsBuild", "DISABLE_NODEJS_BUILD", "Indicates that the Node.js build disabled even if repo indicates it"),
    var("CustomBuildCommand", "CUSTOM_BUILD_COMMAND", "Custom build command to be run to build Node app"),
    var("RunBuildCommand", "RUN_BUILD_COMMAND", "Custom run build command to be run after package install commands"),
    var("EnableNodeMonoRepoBuild", "ENABLE_NODE_MONOREPO_BUILD", "Apply node monorepo build if repo indicates it"),
    var("CompressDestinationDirectory", "COMPRESS_DESTINATION_DIR", "Indicates if the entire output directory needs to be compressed."),
    var("PruneDevDependencies", "PRUNE_DEV_DEPENDENCIES", "Only the prod dependencies are copied to the output for Node apps."),
    var("NpmRegistryUrl", "NPM_REGISTRY_URL", "Specify the npm registry url."),
    var("YarnTimeoutConfig", "YARN_TIMEOUT_CONFIG", "Specify the yarn timeout config with a delay in milliseconds."),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/Node.JS Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_NODE: Catalog = Catalog {
    name: "azure-oryx-node",
    title: "Azure Oryx Node.js",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_NODE_VARS,
    prefixes: &[],
};

static ORYX_PHP_VARS: &[VarSpec] = &[
    var("PhpVersion", "PHP_VERSION", "Specify which Php version the app is using"),
    var("PhpDefaultVersion", "PHP_DEFAULT_VERSION", "Specify which Php version the app defaults to if none detected"),
    var("PhpComposerVersion", "PHP_COMPOSER_VERSION", "Specify which Php composer version the app is using"),
    var("PhpComposerDefaultVersion", "PHP__COMPOSER_DEFAULT_VERSION", "Specify which Php composer version the app defaults to if none detected"),
    var("DisablePhpBuild", "DISABLE_PHP_BUILD", "Indicates that the PHP build disabled even if repo indicates it"),
    var("FpmMaxChildren", "FPM_MAX_CHILDREN", "The maximum number of child processes to be created"),
    var("FpmStartServers", "FPM_START_SERVERS", "The number of child processes created on startup"),
    var("FpmMaxSpareServers", "FPM_MAX_SPARE_SERVERS", "The desired maximum number of idle server processes"),
    var("FpmMinSpareServers", "FPM_MIN_SPARE_SERVERS", "The desired minimum number of idle server processes"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/PHP Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_PHP: Catalog = Catalog {
    name: "azure-oryx-php",
    title: "Azure Oryx PHP",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_PHP_VARS,
    prefixes: &[],
};

static ORYX_PYTHON_VARS: &[VarSpec] = &[
    var("PythonVersion", "PYTHON_VERSION", "Specify which Python version the app is using"),
    var("PythonDefaultVersion", "PYTHON_DEFAULT_VERSION", "Specify which Python version the app defaults to if none detected"),
    var("DisablePythonBuild", "DISABLE_PYTHON_BUILD", "Indicates that the Python build disabled even if repo indicates it"),
    var("VirtualEnvName", "VIRTUALENV_NAME", "Specify Python virtual environment name"),
    var("DisableCollectStatic", "DISABLE_COLLECTSTATIC", "Disable running collectstatic when building Django apps."),
    var("CustomRequirementsTxtPath", "CUSTOM_REQUIREMENTSTXT_PATH", "Specify where a requirements.txt is locating. If not set, default is at root of the repo."),
    var("PythonEnableGunicornMultiworkers", "PYTHON_ENABLE_GUNICORN_MULTIWORKERS", "Enable Gunicorn multi worker multi thread config."),
    var("PythonGunicornCustomWorkerNum", "PYTHON_GUNICORN_CUSTOM_WORKER_NUM", "Only works when PYTHON\\_ENABLE\\_GUNICORN\\_MULTIWORKERS is set to true. Specify Gunicorn multi worker number. If not set, default is (2 * CPU core num) + 1"),
    var("PythonGunicornCustomThreadNum", "PYTHON_GUNICORN_CUSTOM_THREAD_NUM", "Only works when PYTHON\\_ENABLE\\_GUNICORN\\_MULTIWORKERS is set to true. Specify Gunicorn multi thread number. If not set, default is single thread."),
    var("OryxDisablePipUpgrade", "ORYX_DISABLE_PIP_UPGRADE", "Remove the --upgrade flag from the pip install command when targeting a specific package installation directory."),
    var("NginxConfFile", "NGINX_CONF_FILE", "Specify a customized configuration file to modify nginx.conf file"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/Python Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_PYTHON: Catalog = Catalog {
    name: "azure-oryx-python",
    title: "Azure Oryx Python",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_PYTHON_VARS,
    prefixes: &[],
};

static ORYX_RUBY_VARS: &[VarSpec] = &[
    var("RubyVersion", "RUBY_VERSION", "Specify which Ruby version the app is using"),
    var("RubyDefaultVersion", "RUBY_DEFAULT_VERSION", "Specify which Ruby version the app defaults to if none detected"),
    var("DisableRubyBuild", "DISABLE_RUBY__BUILD", "Indicates that the Ruby build disabled even if repo indicates it"),
];

/// Represents a collection of environment variables used in Azure Web Apps. (Oryx/Ruby Build Automation)
///
/// <https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings>
pub static ORYX_RUBY: Catalog = Catalog {
    name: "azure-oryx-ruby",
    title: "Azure Oryx Ruby",
    docs_url: "https://learn.microsoft.com/en-us/azure/app-service/reference-app-settings",
    vars: ORYX_RUBY_VARS,
    prefixes: &[],
};
