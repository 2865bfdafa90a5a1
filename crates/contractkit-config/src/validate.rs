//! Invariant checks on a typed configuration.

use crate::{ConfigResult, ValidationError};
use contractkit_core::Configuration;
use std::collections::HashSet;
use tracing::debug;

/// Check the invariants the type system does not already enforce.
///
/// Version syntax, non-negative runs and unique roles are guaranteed by the
/// typed record; what remains is the shape of the compiler list and role names.
pub fn validate(config: &Configuration) -> ConfigResult<()> {
    let compilers = &config.solidity.compilers;
    if compilers.is_empty() {
        return Err(ValidationError::NoCompilers.into());
    }

    let mut seen = HashSet::new();
    for compiler in compilers {
        if !seen.insert(compiler.version) {
            return Err(ValidationError::DuplicateCompiler(compiler.version.to_string()).into());
        }
    }

    if config.named_accounts.roles().any(|role| role.trim().is_empty()) {
        return Err(ValidationError::EmptyRoleName.into());
    }

    debug!(
        compilers = compilers.len(),
        named_accounts = config.named_accounts.len(),
        "configuration validated"
    );
    Ok(())
}
