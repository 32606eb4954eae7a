// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scoped guard for mutating the process environment in tests.
//!
//! The library itself is strictly read-only; this guard exists so tests
//! can stage variables and restore the previous state on drop. Each
//! mutation happens under a global mutex so concurrently running tests
//! stay serialised.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Guard object that restores the previous environment state upon drop.
pub struct VarGuard {
    key: String,
    previous: Option<String>,
}

/// Acquires the global environment mutex, ensuring serialised mutations.
fn lock() -> MutexGuard<'static, ()> {
    static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl VarGuard {
    /// Sets the variable for the duration of the guard.
    #[must_use]
    pub fn set(key: impl Into<String>, value: &str) -> Self {
        let key = key.into();
        let _lock = lock();
        let previous = std::env::var(&key).ok();
        // SAFETY: the global environment mutex is held, so no other
        // guard mutates the process environment concurrently.
        unsafe { std::env::set_var(&key, value) };
        Self { key, previous }
    }

    /// Unsets the variable for the duration of the guard.
    #[must_use]
    pub fn unset(key: impl Into<String>) -> Self {
        let key = key.into();
        let _lock = lock();
        let previous = std::env::var(&key).ok();
        // SAFETY: the global environment mutex is held, so no other
        // guard mutates the process environment concurrently.
        unsafe { std::env::remove_var(&key) };
        Self { key, previous }
    }
}

impl Drop for VarGuard {
    fn drop(&mut self) {
        let _lock = lock();
        match &self.previous {
            // SAFETY: restoration happens under the same global mutex
            // as the original mutation.
            Some(previous) => unsafe { std::env::set_var(&self.key, previous) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}
