//! Construction of a configuration from untrusted input.

use crate::validate::validate;
use crate::{ConfigResult, ValidationError};
use contractkit_core::{
    CompilerSettings, CompilerVersion, Configuration, NamedAccounts, OptimizerSettings,
    SolidityConfig,
};

/// Raw compiler descriptor, checked on [`ConfigurationBuilder::build`].
#[derive(Debug, Clone)]
struct RawCompiler {
    version: String,
    enabled: bool,
    runs: i64,
}

/// Collects configuration values as given and validates them all at once.
///
/// Values are kept in their raw form (string versions, signed runs, repeated
/// role names) so that `build` can report exactly what was wrong with the
/// input instead of the caller having to pre-check it.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    compilers: Vec<RawCompiler>,
    named_accounts: Vec<(String, u32)>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compiler(mut self, version: impl Into<String>, enabled: bool, runs: i64) -> Self {
        self.compilers.push(RawCompiler {
            version: version.into(),
            enabled,
            runs,
        });
        self
    }

    pub fn named_account(mut self, role: impl Into<String>, index: u32) -> Self {
        self.named_accounts.push((role.into(), index));
        self
    }

    pub fn build(self) -> ConfigResult<Configuration> {
        let mut compilers = Vec::with_capacity(self.compilers.len());
        for raw in self.compilers {
            let version = CompilerVersion::parse(&raw.version).map_err(|e| {
                ValidationError::MalformedVersion {
                    version: raw.version.clone(),
                    reason: e.to_string(),
                }
            })?;
            let runs = check_runs(&raw.version, raw.runs)?;

            compilers.push(CompilerSettings::new(
                version,
                OptimizerSettings {
                    enabled: raw.enabled,
                    runs,
                },
            ));
        }

        let mut named_accounts = NamedAccounts::new();
        for (role, index) in self.named_accounts {
            if named_accounts.contains(&role) {
                return Err(ValidationError::DuplicateRole(role).into());
            }
            named_accounts.insert(role, index);
        }

        let config = Configuration {
            solidity: SolidityConfig { compilers },
            named_accounts,
        };
        validate(&config)?;
        Ok(config)
    }
}

fn check_runs(version: &str, runs: i64) -> Result<u32, ValidationError> {
    if runs < 0 {
        return Err(ValidationError::NegativeRuns {
            version: version.to_string(),
            runs,
        });
    }
    u32::try_from(runs).map_err(|_| ValidationError::RunsOutOfRange {
        version: version.to_string(),
        runs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_build_literal_configuration() {
        let config = ConfigurationBuilder::new()
            .compiler("0.8.19", true, 2000)
            .named_account("deployer", 0)
            .named_account("simpleERC20Beneficiary", 1)
            .build()
            .unwrap();

        assert_eq!(config.solidity.compilers.len(), 1);
        let compiler = &config.solidity.compilers[0];
        assert_eq!(compiler.version.to_string(), "0.8.19");
        assert!(compiler.optimizer().enabled);
        assert_eq!(compiler.optimizer().runs, 2000);
        assert_eq!(config.named_accounts.index_of("deployer"), Some(0));
        assert_eq!(config.named_accounts.index_of("simpleERC20Beneficiary"), Some(1));
    }

    #[test]
    fn test_negative_runs_rejected() {
        let result = ConfigurationBuilder::new()
            .compiler("0.8.19", true, -5)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::NegativeRuns { runs: -5, .. }))
        ));
    }

    #[test]
    fn test_minus_one_runs_rejected() {
        let result = ConfigurationBuilder::new()
            .compiler("0.8.19", true, -1)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::NegativeRuns { .. }))
        ));
    }

    #[test]
    fn test_zero_runs_accepted() {
        let config = ConfigurationBuilder::new()
            .compiler("0.8.19", true, 0)
            .build()
            .unwrap();
        assert_eq!(config.solidity.compilers[0].optimizer().runs, 0);
    }

    #[test]
    fn test_runs_beyond_u32_rejected() {
        let result = ConfigurationBuilder::new()
            .compiler("0.8.19", true, i64::from(u32::MAX) + 1)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::RunsOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let result = ConfigurationBuilder::new()
            .compiler("0.8.19", true, 2000)
            .named_account("deployer", 0)
            .named_account("deployer", 1)
            .build();

        match result {
            Err(ConfigError::Validation(ValidationError::DuplicateRole(role))) => {
                assert_eq!(role, "deployer")
            }
            other => panic!("expected duplicate role error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_version_rejected() {
        let result = ConfigurationBuilder::new()
            .compiler("0.8", true, 2000)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::MalformedVersion { .. }))
        ));
    }

    #[test]
    fn test_no_compilers_rejected() {
        let result = ConfigurationBuilder::new()
            .named_account("deployer", 0)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::NoCompilers))
        ));
    }
}
