//! cunum CLI library
//!
//! This library provides the command-line interface for converting
//! integers to and from Cyrillic numerals.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
