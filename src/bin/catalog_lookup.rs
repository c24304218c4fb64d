//! Command-line front end for the catalog registry.
//!
//! Loads a bundled catalog directory (from `--catalog-dir`, `--config`, or
//! `FLOW_CATALOG_DIR`) and answers lookups against it. Results are JSON on
//! stdout; logs go to stderr. A lookup that finds nothing exits with status 1.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flow_catalog::{CatalogKind, CatalogRegistry, RegistryConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "catalog-lookup",
    about = "Browse integration catalogs and resolve building-block identifiers",
    version
)]
struct Cli {
    /// Registry config file (JSON)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Directory holding components.json, kamelets.json, ...
    #[clap(long)]
    catalog_dir: Option<PathBuf>,

    /// Log level; defaults to RUST_LOG, then warn
    #[clap(long, value_enum)]
    log_level: Option<LogLevel>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve an identifier such as `timer` or `kamelet:chuck-norris-source`
    Resolve { identifier: String },

    /// Print one definition from a kind's catalog
    Show { kind: CatalogKind, name: String },

    /// List the names in a kind's catalog
    List { kind: CatalogKind },

    /// List populated kinds with their entry counts
    Kinds,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn initialize_tracing(log_level: Option<LogLevel>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level.to_filter_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Serialize)]
struct KindSummary {
    kind: CatalogKind,
    entries: usize,
}

fn run(cli: Cli) -> Result<bool> {
    let registry = load_registry(&cli)?;

    match cli.command {
        Command::Resolve { identifier } => match registry.resolve(&identifier) {
            Some(lookup) => print_json(&lookup),
            None => {
                eprintln!("catalog-lookup: no definition for '{identifier}'");
                Ok(false)
            }
        },
        Command::Show { kind, name } => match registry.definition(kind, Some(name.as_str())) {
            Some(definition) => print_json(definition),
            None => {
                eprintln!("catalog-lookup: no {kind} named '{name}'");
                Ok(false)
            }
        },
        Command::List { kind } => {
            for name in registry.kind_map(kind).keys() {
                println!("{name}");
            }
            Ok(true)
        }
        Command::Kinds => {
            let summary: Vec<KindSummary> = registry
                .kinds()
                .map(|kind| KindSummary {
                    kind,
                    entries: registry.kind_map(kind).len(),
                })
                .collect();
            print_json(&summary)
        }
    }
}

/// Config file first, then the environment override, then the explicit flag.
fn load_registry(cli: &Cli) -> Result<CatalogRegistry> {
    let mut config = match &cli.config {
        Some(path) => RegistryConfig::from_path(path)?,
        None => RegistryConfig::default(),
    }
    .with_env_override();

    if let Some(dir) = &cli.catalog_dir {
        config.catalog_dir = Some(dir.clone());
    }

    config.load_registry()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<bool> {
    let rendered = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{rendered}");
    Ok(true)
}
