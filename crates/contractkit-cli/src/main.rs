//! contractkit CLI tool.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "contractkit")]
#[command(about = "Smart-contract toolchain configuration", long_about = None)]
struct Cli {
    /// Path to a toolchain configuration file (built-in defaults when omitted)
    #[arg(long, env = "CONTRACTKIT_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the toolchain configuration
    Validate,
    /// Print the toolchain configuration
    Show {
        /// Print the JSON handed to the toolchain runner
        #[arg(long)]
        json: bool,
    },
    /// Look up a named account role
    Account {
        /// Role name (e.g. deployer)
        role: String,
        /// Account list to resolve the role against
        #[arg(long, value_delimiter = ',')]
        accounts: Option<Vec<String>>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `show --json` stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate => {
            commands::validate(cli.config.as_deref())?;
        }
        Commands::Show { json } => {
            let config = commands::startup(cli.config.as_deref())?;
            commands::show(config, json)?;
        }
        Commands::Account { role, accounts } => {
            let config = commands::startup(cli.config.as_deref())?;
            commands::account(config, &role, accounts.as_deref())?;
        }
    }

    Ok(())
}
