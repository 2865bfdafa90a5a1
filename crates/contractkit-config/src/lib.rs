//! Configuration loading for the contractkit smart-contract toolchain.
//!
//! This crate handles:
//! - Built-in defaults
//! - Toolchain configuration files (contractkit.kdl)
//! - Validation of untrusted input
//! - The process-wide read-only configuration

pub mod builder;
pub mod defaults;
pub mod error;
pub mod global;
pub mod toolchain;
pub mod validate;

pub use builder::ConfigurationBuilder;
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use global::{get, install};
pub use toolchain::{load_from_path, parse_toolchain_config};
pub use validate::validate;

use contractkit_core::Configuration;

/// Build the configuration from the built-in defaults.
///
/// The defaults are literals, so this only fails if they are edited into an
/// invalid state.
pub fn load() -> ConfigResult<Configuration> {
    let config = defaults::literal_defaults();
    validate(&config)?;
    Ok(config)
}
