//! Configuration and file management for the NetServe console
//!
//! This crate provides:
//! - Directory utilities for config and cache files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig) including the operator accounts

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, OperatorAccount};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir};
