//! Command-line front end for the entity export library.

use anyhow::{Context, Result};
use clap::Parser;
use entity_export::exporter::{export_entities_in, ExportConfiguration};
use entity_export::EntityCollection;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "entity-export")]
#[command(about = "Exports entity definitions to per-entity JSON files")]
#[command(version)]
struct Cli {
    /// JSON file mapping entity names to their definitions
    entities_file: PathBuf,

    /// Rewrite every entity file even when its content is unchanged
    #[arg(long)]
    force_no_filtering: bool,

    /// Working directory (defaults to current directory)
    #[arg(long)]
    working_dir: Option<PathBuf>,

    /// Stamp a changelog date on entities that arrive without one
    #[arg(long)]
    stamp_missing_dates: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.entities_file).with_context(|| {
        format!("Failed to read entities file: {}", cli.entities_file.display())
    })?;
    let mut entities: EntityCollection = serde_json::from_str(&content).with_context(|| {
        format!("Failed to parse entities file: {}", cli.entities_file.display())
    })?;

    if cli.stamp_missing_dates {
        for entity in entities.values_mut() {
            entity.stamp_changelog_date();
        }
    }

    let working_dir = cli.working_dir.unwrap_or_else(|| PathBuf::from("."));
    let configuration = ExportConfiguration {
        entities: Some(entities),
        force_no_filtering: cli.force_no_filtering,
    };

    let exported = export_entities_in(&working_dir, &configuration)
        .context("Entity export failed")?;

    for name in exported.keys() {
        println!("{}", name);
    }

    Ok(())
}
