//! CLI module for course-api
//!
//! Provides command-line interface for:
//! - init: Create the database and its tables
//! - serve: Open the database and serve the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
