//! lint-layers CLI tool.
//!
//! Usage:
//! ```bash
//! lint-layers print [OPTIONS] [PATH]
//! lint-layers resolve [OPTIONS] <PATH>
//! lint-layers list-rules [--typescript]
//! lint-layers init [--force] [--typescript]
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use lint_layers_core::{ChainError, ConfigError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::TypedSelection;

/// Builds and inspects layered lint configurations
#[derive(Parser)]
#[command(name = "lint-layers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LINT_LAYERS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the configuration chain and print it
    Print {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        #[command(flatten)]
        typed: TypedSelection,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Resolve plugins and parsers from the node_modules directory under DIR
        #[arg(long, value_name = "DIR")]
        node_modules: Option<PathBuf>,
    },

    /// Show the effective configuration for a file, or layer membership for
    /// every source file under a directory
    Resolve {
        /// File or directory to resolve
        path: PathBuf,

        /// Project directory patterns are matched against
        #[arg(long, default_value = ".")]
        project: PathBuf,

        #[command(flatten)]
        typed: TypedSelection,

        /// Output format
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,
    },

    /// List built-in rules
    ListRules {
        /// Show the typed-language overrides instead of the base rules
        #[arg(long)]
        typescript: bool,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,

        /// Enable the typed-language layer in the generated config
        #[arg(long)]
        typescript: bool,
    },
}

/// Output format for chains and resolved configurations.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON, loadable by the analysis tool.
    #[default]
    Json,
    /// Human-readable summary.
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Print {
            path,
            typed,
            format,
            node_modules,
        } => commands::print::run(&path, &typed, format, node_modules.as_deref(), config),
        Commands::Resolve {
            path,
            project,
            typed,
            format,
        } => commands::resolve::run(&path, &project, &typed, format, config),
        Commands::ListRules { typescript } => {
            commands::list_rules::run(typescript);
            Ok(())
        }
        Commands::Init { force, typescript } => commands::init::run(force, typescript),
    };

    if let Err(err) = &result {
        if let Some(chain_err) = chain_error(err) {
            eprintln!("{:?}", miette::Report::new(chain_err.clone()));
            std::process::exit(2);
        }
    }
    result
}

/// Finds the chain construction error behind `err`, looking through added
/// context and config loading errors.
fn chain_error(err: &anyhow::Error) -> Option<&ChainError> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<ChainError>()
            .or_else(|| match cause.downcast_ref::<ConfigError>() {
                Some(ConfigError::Chain(inner)) => Some(inner),
                _ => None,
            })
    })
}
