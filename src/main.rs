//! Graph View Config CLI
//!
//! Entry point for the `graph-view-config` command-line tool.

use clap::{Parser, Subcommand};
use graph_view_config::config::{parse_overrides, LayeredConfig};
use graph_view_config::{get_defaults, ConfigError};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graph-view-config")]
#[command(about = "Resolve graph view configuration", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in defaults as JSON
    Defaults {
        /// Print credentials instead of redacting them
        #[arg(long)]
        reveal: bool,
    },

    /// Resolve config files and overrides against the defaults
    Resolve {
        /// Config file (TOML, or JSON with a .json extension); repeatable, later wins
        #[arg(long = "file", short = 'f')]
        files: Vec<PathBuf>,

        /// Override a single field, e.g. --set render.edge.length=300
        #[arg(long = "set", short = 's', value_name = "PATH=VALUE")]
        overrides: Vec<String>,

        /// Print the layout engine options instead of the full config
        #[arg(long, conflicts_with = "report")]
        engine: bool,

        /// Print the provenance report (sources, digests, redactions)
        #[arg(long)]
        report: bool,

        /// Print credentials instead of redacting them
        #[arg(long, conflicts_with = "report")]
        reveal: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Defaults { reveal } => run_defaults(reveal),
        Commands::Resolve {
            files,
            overrides,
            engine,
            report,
            reveal,
        } => run_resolve(files, overrides, engine, report, reveal),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_defaults(reveal: bool) -> Result<String, ConfigError> {
    get_defaults().to_json(reveal).map_err(serialization_error)
}

fn run_resolve(
    files: Vec<PathBuf>,
    overrides: Vec<String>,
    engine: bool,
    report: bool,
    reveal: bool,
) -> Result<String, ConfigError> {
    let cli_overrides = parse_overrides(&overrides)?;
    let layered = LayeredConfig::load(&files, cli_overrides)?;

    if report {
        serde_json::to_string_pretty(&layered.report()).map_err(serialization_error)
    } else if engine {
        serde_json::to_string_pretty(&layered.effective.engine_options())
            .map_err(serialization_error)
    } else {
        layered.effective.to_json(reveal).map_err(serialization_error)
    }
}

fn serialization_error(e: serde_json::Error) -> ConfigError {
    ConfigError::Parse(format!("JSON serialization failed: {}", e))
}
