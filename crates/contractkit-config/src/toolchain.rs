//! Toolchain configuration parsing.

use crate::{ConfigError, ConfigResult, ConfigurationBuilder};
use contractkit_core::{Configuration, OptimizerSettings};
use kdl::{KdlDocument, KdlNode, KdlValue};
use std::path::Path;
use tracing::{debug, warn};

/// Parse a toolchain configuration from KDL text.
///
/// ```kdl
/// solidity {
///     compiler "0.8.19" {
///         optimizer enabled=#true runs=2000
///     }
/// }
/// named-accounts {
///     deployer 0
/// }
/// ```
pub fn parse_toolchain_config(kdl: &str) -> ConfigResult<Configuration> {
    let doc: KdlDocument = kdl.parse()?;

    let mut builder = ConfigurationBuilder::new();
    let mut saw_solidity = false;

    for node in doc.nodes() {
        match node.name().value() {
            "solidity" => {
                saw_solidity = true;
                builder = parse_solidity(node, builder)?;
            }
            "named-accounts" | "named_accounts" | "namedAccounts" => {
                builder = parse_named_accounts(node, builder)?;
            }
            other => debug!(node = other, "ignoring unknown top-level node"),
        }
    }

    if !saw_solidity {
        return Err(ConfigError::MissingField("solidity".to_string()));
    }

    builder.build()
}

/// Read and parse a toolchain configuration file.
pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<Configuration> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading toolchain configuration");
    let content = std::fs::read_to_string(path)?;
    parse_toolchain_config(&content)
}

fn parse_solidity(
    node: &KdlNode,
    mut builder: ConfigurationBuilder,
) -> ConfigResult<ConfigurationBuilder> {
    let Some(children) = node.children() else {
        return Ok(builder);
    };

    for child in children.nodes() {
        if child.name().value() != "compiler" {
            warn!(node = child.name().value(), "ignoring unknown node in solidity block");
            continue;
        }

        let version = get_first_string_arg(child)
            .ok_or_else(|| ConfigError::MissingField("compiler version".to_string()))?;

        let mut enabled = false;
        let mut runs = i64::from(OptimizerSettings::DEFAULT_RUNS);

        if let Some(settings) = child.children() {
            for setting in settings.nodes() {
                if setting.name().value() != "optimizer" {
                    warn!(
                        node = setting.name().value(),
                        compiler = %version,
                        "ignoring unknown compiler setting"
                    );
                    continue;
                }

                if let Some(value) = setting.get("enabled") {
                    enabled = bool_value(value, &format!("enabled for compiler {}", version))?;
                }
                if let Some(value) = setting.get("runs") {
                    runs = integer_value(value, &format!("runs for compiler {}", version))?;
                }
            }
        }

        builder = builder.compiler(version, enabled, runs);
    }

    Ok(builder)
}

fn parse_named_accounts(
    node: &KdlNode,
    mut builder: ConfigurationBuilder,
) -> ConfigResult<ConfigurationBuilder> {
    let Some(children) = node.children() else {
        return Ok(builder);
    };

    for child in children.nodes() {
        let role = child.name().value().to_string();
        let field = format!("named account '{}'", role);

        let value = child
            .entries()
            .iter()
            .find(|e| e.name().is_none())
            .map(|e| e.value())
            .ok_or_else(|| ConfigError::MissingField(format!("index for {}", field)))?;

        let index = integer_value(value, &field)?;
        let index = u32::try_from(index).map_err(|_| ConfigError::InvalidValue {
            field,
            message: format!("account index must be between 0 and {}, got {}", u32::MAX, index),
        })?;

        builder = builder.named_account(role, index);
    }

    Ok(builder)
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn bool_value(value: &KdlValue, field: &str) -> ConfigResult<bool> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("expected #true or #false, got {}", value),
    })
}

fn integer_value(value: &KdlValue, field: &str) -> ConfigResult<i64> {
    let raw = value.as_integer().ok_or_else(|| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("expected an integer, got {}", value),
    })?;

    i64::try_from(raw).map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("integer {} is out of range", raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;
    use crate::defaults::literal_defaults;
    use std::io::Write;

    const DEFAULT_KDL: &str = r#"
        solidity {
            compiler "0.8.19" {
                optimizer enabled=#true runs=2000
            }
        }

        named-accounts {
            deployer 0
            simpleERC20Beneficiary 1
        }
    "#;

    #[test]
    fn test_parse_matches_literal_defaults() {
        let config = parse_toolchain_config(DEFAULT_KDL).unwrap();
        assert_eq!(config, literal_defaults());
    }

    #[test]
    fn test_parse_multiple_compilers_keeps_order() {
        let kdl = r#"
            solidity {
                compiler "0.8.19" {
                    optimizer enabled=#true runs=2000
                }
                compiler "0.6.12"
            }
        "#;

        let config = parse_toolchain_config(kdl).unwrap();
        let versions: Vec<String> = config
            .solidity
            .compilers
            .iter()
            .map(|c| c.version.to_string())
            .collect();
        assert_eq!(versions, vec!["0.8.19", "0.6.12"]);

        let fallback = config.solidity.compilers[1].optimizer();
        assert!(!fallback.enabled);
        assert_eq!(fallback.runs, OptimizerSettings::DEFAULT_RUNS);
        assert!(config.named_accounts.is_empty());
    }

    #[test]
    fn test_negative_runs_rejected() {
        let kdl = r#"
            solidity {
                compiler "0.8.19" {
                    optimizer enabled=#true runs=-5
                }
            }
        "#;

        let result = parse_toolchain_config(kdl);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::NegativeRuns { runs: -5, .. }))
        ));
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let kdl = r#"
            solidity {
                compiler "0.8.19"
            }
            named-accounts {
                deployer 0
                deployer 1
            }
        "#;

        let result = parse_toolchain_config(kdl);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::DuplicateRole(_)))
        ));
    }

    #[test]
    fn test_malformed_version_rejected() {
        let kdl = r#"
            solidity {
                compiler "^0.8.0"
            }
        "#;

        let result = parse_toolchain_config(kdl);
        assert!(matches!(
            result,
            Err(ConfigError::Validation(ValidationError::MalformedVersion { .. }))
        ));
    }

    #[test]
    fn test_missing_solidity_block() {
        let kdl = r#"
            named-accounts {
                deployer 0
            }
        "#;

        let result = parse_toolchain_config(kdl);
        assert!(matches!(result, Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_non_integer_role_index() {
        let kdl = r#"
            solidity {
                compiler "0.8.19"
            }
            named-accounts {
                deployer "first"
            }
        "#;

        let result = parse_toolchain_config(kdl);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_negative_role_index() {
        let kdl = r#"
            solidity {
                compiler "0.8.19"
            }
            named-accounts {
                deployer -1
            }
        "#;

        let result = parse_toolchain_config(kdl);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_string_enabled_flag_rejected() {
        let kdl = r#"
            solidity {
                compiler "0.8.19" {
                    optimizer enabled="true" runs=2000
                }
            }
        "#;

        match parse_toolchain_config(kdl) {
            Err(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "enabled for compiler 0.8.19")
            }
            other => panic!("expected invalid enabled flag, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_enabled_flag_defaults_off() {
        let kdl = r#"
            solidity {
                compiler "0.8.19" {
                    optimizer runs=500
                }
            }
        "#;

        let config = parse_toolchain_config(kdl).unwrap();
        let optimizer = config.solidity.compilers[0].optimizer();
        assert!(!optimizer.enabled);
        assert_eq!(optimizer.runs, 500);
    }

    #[test]
    fn test_misspelled_setting_is_skipped() {
        let kdl = r#"
            solidity {
                compiler "0.8.19" {
                    optimiser enabled=#true runs=2000
                }
            }
        "#;

        let config = parse_toolchain_config(kdl).unwrap();
        assert_eq!(
            *config.solidity.compilers[0].optimizer(),
            OptimizerSettings::default()
        );
    }

    #[test]
    fn test_syntax_error() {
        let result = parse_toolchain_config("solidity {");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_KDL.as_bytes()).unwrap();

        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config, literal_defaults());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_path(dir.path().join("contractkit.kdl"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
