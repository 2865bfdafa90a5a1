//! Core configuration types for the contractkit smart-contract toolchain.
//!
//! This crate contains:
//! - The toolchain configuration record (compilers, optimizer, named accounts)
//! - Compiler version identifiers
//! - Named account role resolution

pub mod accounts;
pub mod error;
pub mod toolchain;
pub mod version;

pub use accounts::NamedAccounts;
pub use error::{Error, Result};
pub use toolchain::{
    CompilerSettings, CompilerSettingsBody, Configuration, OptimizerSettings, SolidityConfig,
};
pub use version::CompilerVersion;
