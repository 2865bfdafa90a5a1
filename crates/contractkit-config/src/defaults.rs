//! Built-in configuration.

use contractkit_core::{
    CompilerSettings, CompilerVersion, Configuration, NamedAccounts, OptimizerSettings,
    SolidityConfig,
};

/// The configuration used when no file is supplied.
pub fn literal_defaults() -> Configuration {
    let named_accounts: NamedAccounts = [("deployer", 0), ("simpleERC20Beneficiary", 1)]
        .into_iter()
        .collect();

    Configuration {
        solidity: SolidityConfig {
            compilers: vec![CompilerSettings::new(
                CompilerVersion::new(0, 8, 19),
                OptimizerSettings {
                    enabled: true,
                    runs: 2000,
                },
            )],
        },
        named_accounts,
    }
}
