//! Toolchain configuration record.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{CompilerVersion, Error, NamedAccounts, Result};

/// Build and deploy parameters handed to the external toolchain runner.
///
/// Deserialized input is checked before a value is produced: at least one
/// compiler, no repeated compiler version, no empty role name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawConfiguration")]
pub struct Configuration {
    /// Compiler selection.
    pub solidity: SolidityConfig,
    /// Account roles used by deploy scripts.
    pub named_accounts: NamedAccounts,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfiguration {
    solidity: SolidityConfig,
    #[serde(default)]
    named_accounts: NamedAccounts,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = Error;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        let compilers = &raw.solidity.compilers;
        if compilers.is_empty() {
            return Err(Error::InvalidInput(
                "at least one compiler must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for compiler in compilers {
            if !seen.insert(compiler.version) {
                return Err(Error::InvalidInput(format!(
                    "compiler {} is configured more than once",
                    compiler.version
                )));
            }
        }

        if raw.named_accounts.roles().any(|role| role.trim().is_empty()) {
            return Err(Error::InvalidInput(
                "named account role must not be empty".to_string(),
            ));
        }

        Ok(Self {
            solidity: raw.solidity,
            named_accounts: raw.named_accounts,
        })
    }
}

/// Compiler selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    /// Compiler descriptors, in declaration order.
    pub compilers: Vec<CompilerSettings>,
}

/// One compiler release and the settings it is invoked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    pub version: CompilerVersion,
    pub settings: CompilerSettingsBody,
}

/// Settings passed through to the compiler's standard JSON input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettingsBody {
    pub optimizer: OptimizerSettings,
}

/// Optimizer pass configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    /// Expected number of executions of each opcode over the contract's
    /// lifetime. Higher values favour cheaper calls over smaller bytecode.
    pub runs: u32,
}

impl OptimizerSettings {
    /// Runs value the compiler assumes when none is given.
    pub const DEFAULT_RUNS: u32 = 200;
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: Self::DEFAULT_RUNS,
        }
    }
}

impl CompilerSettings {
    pub fn new(version: CompilerVersion, optimizer: OptimizerSettings) -> Self {
        Self {
            version,
            settings: CompilerSettingsBody { optimizer },
        }
    }

    pub fn optimizer(&self) -> &OptimizerSettings {
        &self.settings.optimizer
    }
}

impl Configuration {
    /// The descriptor with the highest compiler version.
    pub fn latest_compiler(&self) -> Option<&CompilerSettings> {
        self.solidity.compilers.iter().max_by_key(|c| c.version)
    }

    /// Look up the descriptor for an exact compiler version.
    pub fn compiler(&self, version: &CompilerVersion) -> Option<&CompilerSettings> {
        self.solidity.compilers.iter().find(|c| &c.version == version)
    }

    /// Serialize in the layout the toolchain runner reads.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
