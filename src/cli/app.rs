//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use arnlint::config::Config;
use arnlint::output::OutputMode;

/// arnlint - Match IAM policy resource ARNs against service ARN shapes
#[derive(Parser, Debug)]
#[command(
    name = "arnlint",
    version,
    about = "Match IAM policy resource ARNs against service ARN shapes",
    long_about = "Decide whether ARN globs can refer to the same resource.\n\n\
                  Policy resources are compared with the ARN templates of an IAM\n\
                  definition catalog to find the resource types they can name."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.arnlint/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether two ARN patterns can match a common ARN
    Match {
        /// Resource type name; bucket types reject ARNs containing '/'
        #[arg(short, long, default_value = "")]
        resource_type: String,

        /// First ARN pattern (the policy resource)
        first: String,

        /// Second ARN pattern (the catalog template)
        second: String,
    },

    /// List the catalog resource types each ARN can refer to
    Resolve {
        /// IAM definition JSON catalog
        #[arg(short, long, value_name = "PATH")]
        catalog: Option<PathBuf>,

        /// ARNs to resolve
        #[arg(required = true)]
        arns: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = cli.config.as_deref().map_or_else(Config::load, Config::load_from);

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        config.output.format
    };

    match cli.command {
        Some(Command::Match {
            resource_type,
            first,
            second,
        }) => commands::match_arns(&resource_type, &first, &second, output_mode),
        Some(Command::Resolve { catalog, arns }) => {
            commands::resolve(&arns, catalog.as_deref(), &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("arnlint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("arnlint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'arnlint --help' for usage");
                println!("Run 'arnlint resolve --catalog <PATH> <ARN>' to get started");
            }
            Ok(())
        },
    }
}
