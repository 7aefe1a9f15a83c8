//! Shared utilities for the Aba marketplace assistant
//!
//! This crate provides the ambient pieces used across the workspace:
//! tracing setup and helpers for reading configuration from files and the
//! environment.

pub mod config;
pub mod logging;

pub use config::{ConfigFileError, env_var, parse_var, read_json_file};
pub use logging::{LogFormat, init_tracing, init_tracing_with};
