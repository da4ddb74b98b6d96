//! Configuration module for the shell
//!
//! This module handles:
//! - Config file discovery (`anomaly-shell.toml`, `.anomaly-shell.json`, user config)
//! - Upload locations
//! - Starting threshold and menu greeting

mod shell_config;

pub use shell_config::{ShellConfig, DATA_DIR_ENV};
