//! CLI command implementations.

use anyhow::{Context, Result};
use contractkit_config::ConfigResult;
use contractkit_core::Configuration;
use std::fmt::Write;
use tracing::debug;

/// Load the configuration from `path`, or the built-in defaults.
fn load(path: Option<&str>) -> ConfigResult<Configuration> {
    match path {
        Some(path) => contractkit_config::load_from_path(path),
        None => contractkit_config::load(),
    }
}

/// Load and install the process configuration. Any failure aborts startup.
pub fn startup(path: Option<&str>) -> Result<&'static Configuration> {
    let source = path.unwrap_or("built-in defaults");
    debug!(source, "loading toolchain configuration");

    let config =
        load(path).with_context(|| format!("Failed to load configuration from {}", source))?;
    contractkit_config::install(config).context("Failed to install configuration")
}

pub fn validate(path: Option<&str>) -> Result<()> {
    match load(path) {
        Ok(_config) => {
            println!("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn show(config: &Configuration, json: bool) -> Result<()> {
    if json {
        println!("{}", config.to_json_pretty()?);
    } else {
        print!("{}", render_summary(config)?);
    }
    Ok(())
}

pub fn account(config: &Configuration, role: &str, accounts: Option<&[String]>) -> Result<()> {
    match accounts {
        Some(list) => {
            let account = config.named_accounts.resolve(role, list)?;
            println!("{}", account);
        }
        None => {
            let index = config
                .named_accounts
                .index_of(role)
                .with_context(|| format!("Unknown named account '{}'", role))?;
            println!("{}", index);
        }
    }
    Ok(())
}

fn render_summary(config: &Configuration) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Compilers:")?;
    for compiler in &config.solidity.compilers {
        let optimizer = compiler.optimizer();
        let state = if optimizer.enabled { "on" } else { "off" };
        writeln!(
            out,
            "  {} (optimizer {}, runs {})",
            compiler.version, state, optimizer.runs
        )?;
    }

    writeln!(out, "Named accounts:")?;
    if config.named_accounts.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (role, index) in config.named_accounts.iter() {
        writeln!(out, "  {} -> {}", role, index)?;
    }

    Ok(out)
}
