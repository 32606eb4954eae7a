// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Storage tiers for environment variables.
//!
//! # Architecture
//!
//! ```text
//! Scope: Process (default) | User | Machine
//!
//! Windows backing stores:
//!   User    HKCU\Environment
//!   Machine HKLM\SYSTEM\CurrentControlSet\Control\
//!           Session Manager\Environment
//!
//! Non-Windows hosts have no user/machine tier; both
//! degrade silently to Process.
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The storage tier an environment variable is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// The environment block of the current process.
    #[default]
    Process,
    /// The current user's persisted environment (Windows registry).
    User,
    /// The machine-wide persisted environment (Windows registry).
    Machine,
}

impl Scope {
    /// The scope actually used on the executing host.
    ///
    /// User and machine tiers only exist on Windows; elsewhere the
    /// distinction is non-critical and the process tier is used.
    #[must_use]
    pub const fn effective(self) -> Self {
        if cfg!(windows) { self } else { Self::Process }
    }

    /// Config/CLI spelling of the scope.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::User => "user",
            Self::Machine => "machine",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "process" => Ok(Self::Process),
            "user" => Ok(Self::User),
            "machine" => Ok(Self::Machine),
            other => Err(format!(
                "invalid scope '{other}', expected one of process, user, machine"
            )),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Registry access for the user/machine tiers.
#[cfg(windows)]
pub(crate) mod registry {
    use std::collections::BTreeMap;

    use windows::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_ITEMS, WIN32_ERROR};
    use windows::Win32::System::Registry::{
        HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, REG_VALUE_TYPE, RegCloseKey,
        RegEnumValueW, RegOpenKeyExW, RegQueryValueExW,
    };
    use windows::core::PCWSTR;

    use super::Scope;
    use crate::error::EnvError;

    const USER_SUBKEY: &str = "Environment";
    const MACHINE_SUBKEY: &str =
        r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

    fn subkey_path(scope: Scope) -> (HKEY, &'static str) {
        match scope {
            Scope::Machine => (HKEY_LOCAL_MACHINE, MACHINE_SUBKEY),
            // Process never reaches the registry path.
            _ => (HKEY_CURRENT_USER, USER_SUBKEY),
        }
    }

    fn to_wide(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(std::iter::once(0)).collect()
    }

    fn win32_io_error(code: WIN32_ERROR) -> std::io::Error {
        std::io::Error::from_raw_os_error(code.0 as i32)
    }

    struct OpenKey(HKEY);

    impl OpenKey {
        fn open(scope: Scope) -> Result<Self, EnvError> {
            let (root, path) = subkey_path(scope);
            let wide = to_wide(path);
            let mut key = HKEY::default();
            // SAFETY: `wide` is NUL-terminated and outlives the call.
            let status = unsafe {
                RegOpenKeyExW(root, PCWSTR(wide.as_ptr()), Some(0), KEY_READ, &mut key)
            };
            if status.is_err() {
                return Err(EnvError::RegistryOpen {
                    key: path.to_string(),
                    source: win32_io_error(status),
                });
            }
            Ok(Self(key))
        }
    }

    impl Drop for OpenKey {
        fn drop(&mut self) {
            // SAFETY: the handle was opened by RegOpenKeyExW and is closed once.
            let _ = unsafe { RegCloseKey(self.0) };
        }
    }

    fn decode_reg_string(buf: &[u16]) -> String {
        let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        String::from_utf16_lossy(&buf[..end])
    }

    /// Reads a single value from the scope's backing registry key.
    ///
    /// A missing value is reported as `Ok(None)`, matching the process
    /// environment semantics.
    pub(crate) fn read_value(scope: Scope, name: &str) -> Result<Option<String>, EnvError> {
        let key = OpenKey::open(scope)?;
        let wide_name = to_wide(name);
        let mut size: u32 = 0;
        // SAFETY: querying the required size with a null buffer is the
        // documented RegQueryValueExW size-probe pattern.
        let status = unsafe {
            RegQueryValueExW(
                key.0,
                PCWSTR(wide_name.as_ptr()),
                None,
                None,
                None,
                Some(&mut size),
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status.is_err() {
            return Err(registry_read_error(scope, name, status));
        }

        let mut buf = vec![0u16; (size as usize).div_ceil(2)];
        let mut value_type = REG_VALUE_TYPE::default();
        // SAFETY: `buf` holds at least `size` bytes as reported by the probe.
        let status = unsafe {
            RegQueryValueExW(
                key.0,
                PCWSTR(wide_name.as_ptr()),
                None,
                Some(&mut value_type),
                Some(buf.as_mut_ptr().cast::<u8>()),
                Some(&mut size),
            )
        };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status.is_err() {
            return Err(registry_read_error(scope, name, status));
        }
        Ok(Some(decode_reg_string(&buf)))
    }

    /// Enumerates every value under the scope's backing registry key.
    pub(crate) fn enumerate(scope: Scope) -> Result<BTreeMap<String, String>, EnvError> {
        let key = OpenKey::open(scope)?;
        let mut vars = BTreeMap::new();

        for index in 0.. {
            let mut name_buf = vec![0u16; 16_384];
            let mut name_len = name_buf.len() as u32;
            // SAFETY: buffers are sized and lengths passed per the
            // RegEnumValueW contract; the name length is in characters.
            let status = unsafe {
                RegEnumValueW(
                    key.0,
                    index,
                    Some(windows::core::PWSTR(name_buf.as_mut_ptr())),
                    &mut name_len,
                    None,
                    None,
                    None,
                    None,
                )
            };
            if status == ERROR_NO_MORE_ITEMS {
                break;
            }
            if status.is_err() {
                return Err(registry_read_error(scope, "<enumerate>", status));
            }

            let name = String::from_utf16_lossy(&name_buf[..name_len as usize]);
            if let Some(value) = read_value(scope, &name)? {
                vars.insert(name, value);
            }
        }

        Ok(vars)
    }

    fn registry_read_error(scope: Scope, name: &str, status: WIN32_ERROR) -> EnvError {
        let (_, path) = subkey_path(scope);
        EnvError::RegistryRead {
            key: path.to_string(),
            name: name.to_string(),
            source: win32_io_error(status),
        }
    }
}
