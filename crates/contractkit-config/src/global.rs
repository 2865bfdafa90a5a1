//! Process-wide configuration.

use crate::defaults::literal_defaults;
use crate::validate::validate;
use crate::{ConfigError, ConfigResult};
use contractkit_core::Configuration;
use std::sync::OnceLock;
use tracing::info;

static CONFIG: OnceLock<Configuration> = OnceLock::new();

/// Validate `config` and make it the process configuration.
///
/// Must run before the first [`get`]. Installing a value equal to the one
/// already installed succeeds; anything else fails with
/// [`ConfigError::AlreadyInitialized`].
pub fn install(config: Configuration) -> ConfigResult<&'static Configuration> {
    install_into(&CONFIG, config)
}

/// The process configuration, falling back to the built-in defaults when
/// nothing was installed.
pub fn get() -> &'static Configuration {
    get_from(&CONFIG)
}

fn install_into(
    slot: &'static OnceLock<Configuration>,
    config: Configuration,
) -> ConfigResult<&'static Configuration> {
    validate(&config)?;

    match slot.set(config) {
        Ok(()) => info!("installed toolchain configuration"),
        Err(rejected) if slot.get() != Some(&rejected) => {
            return Err(ConfigError::AlreadyInitialized);
        }
        Err(_) => {}
    }

    Ok(get_from(slot))
}

fn get_from(slot: &'static OnceLock<Configuration>) -> &'static Configuration {
    slot.get_or_init(|| {
        info!("using built-in toolchain configuration");
        literal_defaults()
    })
}
