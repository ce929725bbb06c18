//! Layered configuration for the `evaluate` command: built-in defaults, an optional
//! TOML file, `-S` overrides of that file, then explicit command-line flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, load_table};
pub use models::OutputFormat;
