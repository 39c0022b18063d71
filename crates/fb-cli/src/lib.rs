//! Fair billing CLI library.
//!
//! This crate provides the command-line interface over `fb-core`.

mod cli;
pub mod input;

pub use cli::Cli;
