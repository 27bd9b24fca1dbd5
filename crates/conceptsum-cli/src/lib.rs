//! Conceptsum CLI library.
//!
//! This library provides the core functionality for the `conceptsum`
//! command-line interface: configuration management, a simple text
//! segmenter, JSONL dataset handling, command execution, and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod text;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
