//! lumi-catalog CLI - Inspect and edit Lumi project catalogs
//!
//! ## Example Usage
//!
//! ```bash
//! # List every asset in a project
//! lumi-catalog list game.lumi
//!
//! # List only rooms, as JSON
//! lumi-catalog list game.lumi --kind room --json
//!
//! # Rename an asset and write the result elsewhere
//! lumi-catalog rename game.lumi Player Hero -o renamed.lumi
//!
//! # Show project summary
//! lumi-catalog info game.lumi
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use lumi_catalog::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// lumi-catalog: Asset catalog tool for Lumi game projects
#[derive(Parser)]
#[command(name = "lumi-catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and edit Lumi project asset catalogs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List assets in a project
    List {
        /// Project file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only list assets of this kind (object, sound, sprite, ...)
        #[arg(short, long)]
        kind: Option<AssetKind>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one asset and its source element
    Show {
        /// Project file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Asset name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Rename an asset and save the project
    Rename {
        /// Project file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "OLD")]
        old_name: String,

        #[arg(value_name = "NEW")]
        new_name: String,

        /// Write to this file instead of overwriting FILE
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show project summary
    Info {
        /// Project file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Serialize)]
struct RecordRow<'a> {
    id: AssetId,
    name: &'a str,
    kind: AssetKind,
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lumi-catalog")
}

/// Read a TOML catalog configuration
fn read_config(path: &Path) -> Result<CatalogConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CatalogError::ConfigError(format!("failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&contents).map_err(|e| {
        CatalogError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
    })
}

/// Resolve the configuration for this run
///
/// An explicit `--config` path must exist and parse. The default location
/// is optional; problems there only produce a warning.
fn load_config(path: Option<&Path>) -> Result<CatalogConfig> {
    if let Some(path) = path {
        return read_config(path);
    }

    let default_path = config_dir().join("config.toml");
    if !default_path.exists() {
        return Ok(CatalogConfig::default());
    }
    match read_config(&default_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow(), e);
            Ok(CatalogConfig::default())
        }
    }
}

fn open(file: &Path, config: &CatalogConfig, verbose: bool) -> Result<AssetCatalog> {
    let mut catalog = AssetCatalog::with_config(config.clone());
    let count = catalog.load(file)?;
    if verbose {
        println!(
            "Loaded {} ({} assets)",
            file.display().to_string().dimmed(),
            count
        );
    }
    Ok(catalog)
}

fn list_assets(catalog: &AssetCatalog, kind: Option<AssetKind>, json: bool) -> Result<()> {
    let mut records: Vec<&AssetRecord> = match kind {
        Some(kind) => catalog.records_of_kind(kind),
        None => catalog.records().values().collect(),
    };
    records.sort_by_key(|r| r.id);

    if json {
        let rows: Vec<_> = records
            .iter()
            .map(|r| RecordRow {
                id: r.id,
                name: &r.name,
                kind: r.kind,
            })
            .collect();
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| CatalogError::Unsupported(format!("JSON output failed: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{:>6}  {:<12} {}", "ID".bold(), "KIND".bold(), "NAME".bold());
    for record in records {
        println!("{:>6}  {:<12} {}", record.id, record.kind.to_string(), record.name.cyan());
    }
    Ok(())
}

fn show_asset(catalog: &AssetCatalog, name: &str) -> Result<()> {
    let record = catalog
        .record_by_name(name)
        .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
    println!("{} {}", "Asset:".bold(), record.name.cyan());
    println!("  id:   {}", record.id);
    println!("  kind: {}", record.kind);
    if let Some(node) = catalog.source_node(record.id) {
        println!("  element: <{}> at byte {}", node.tag(), node.offset());
        for (key, value) in node.attributes() {
            println!("    {} = {}", key, value.dimmed());
        }
    }
    Ok(())
}

fn show_info(catalog: &AssetCatalog) {
    let name = if catalog.project_name().is_empty() {
        "(unnamed)".to_string()
    } else {
        catalog.project_name().to_string()
    };
    println!("{} {}", "Project:".bold(), name.cyan().bold());
    for kind in AssetKind::ALL {
        println!("  {:<12} {}", kind.section(), catalog.records_of_kind(kind).len());
    }
    match catalog.config_node() {
        Some(window) => {
            let attrs: Vec<_> = window
                .attributes()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            println!("  {:<12} {}", "window", attrs.join(" "));
        }
        None => println!("  {:<12} {}", "window", "(none)".dimmed()),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List { file, kind, json } => {
            open(&file, &config, cli.verbose).and_then(|catalog| list_assets(&catalog, kind, json))
        }
        Commands::Show { file, name } => {
            open(&file, &config, cli.verbose).and_then(|catalog| show_asset(&catalog, &name))
        }
        Commands::Rename {
            file,
            old_name,
            new_name,
            output,
        } => open(&file, &config, cli.verbose).and_then(|mut catalog| {
            catalog.rename(&old_name, &new_name)?;
            let target = output.unwrap_or(file);
            catalog.save(&target)?;
            println!(
                "{} {} -> {} ({})",
                "Renamed".green().bold(),
                old_name,
                new_name,
                target.display()
            );
            Ok(())
        }),
        Commands::Info { file } => open(&file, &config, cli.verbose).map(|catalog| show_info(&catalog)),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_config_is_parsed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "root_tag = \"game\"\ningest_policy = \"abort\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.root_tag, "game");
        assert_eq!(config.ingest_policy, IngestPolicy::Abort);
    }

    #[test]
    fn test_invalid_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ingest_policy = \"sometimes\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigError(_)));
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigError(_)));
    }
}
