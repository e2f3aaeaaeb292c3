//! Parsing and validation of `hdlconv.toml` harness configuration files.
//!
//! The configuration names the fixture root, the debug flag forwarded to the
//! parser, the golden-update switch, and an optional external converter
//! command. Every section is optional; a missing file yields the defaults.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, load_config_or_default, CONFIG_FILE_NAME};
pub use types::*;
