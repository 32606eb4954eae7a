// envatlas: Typed Catalog of Platform Environment Variables
//
// SPDX-FileCopyrightText: 2026 Envatlas Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(5).is_ok());
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(3), Some(LogLevel::INFO));
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::INFO.to_filter_string(), "info");
    assert_eq!(LogLevel::TRACE.to_filter_string(), "trace");
}

#[test]
fn test_log_level_tracing_conversion() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::ERROR.to_tracing_level(), Some(tracing::Level::ERROR));
    assert_eq!(LogLevel::TRACE.to_tracing_level(), Some(tracing::Level::TRACE));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("atlas.log".to_string())
        .build();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), Some("atlas.log"));
}
