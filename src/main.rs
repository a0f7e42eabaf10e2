//! Command line front-end running the resolver outside of a bundler.
//!
//! Useful for inspecting what a build would see for a given import.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solid_svg::{Outcome, PluginConfig, SvgPlugin};

/// Resolve and load SVG imports the way the build plugin does.
#[derive(Parser, Debug)]
#[command(name = "solid-svg")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root canonical identifiers are relative to (defaults to the current directory).
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  /// Configuration file (defaults to `solid-svg.config.json` in the project root).
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Print the canonical identifier for an import.
  Resolve {
    /// Raw import specifier, e.g. `./logo.svg?component`.
    id: String,
    /// File containing the import.
    #[arg(long)]
    importer: Option<PathBuf>,
  },
  /// Print the module source for a canonical identifier.
  Load {
    /// Canonical identifier as printed by `resolve`.
    id: String,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  let root = match cli.root {
    Some(root) => root,
    None => std::env::current_dir().context("failed to determine the current directory")?,
  };
  let config = match &cli.config {
    Some(path) => PluginConfig::load(path)
      .with_context(|| format!("failed to load {}", path.display()))?,
    None => PluginConfig::discover(&root),
  };
  let plugin = SvgPlugin::new(root, config);

  let outcome = match &cli.command {
    Commands::Resolve { id, importer } => plugin.resolve_id(id, importer.as_deref()),
    Commands::Load { id } => plugin
      .load(id)
      .await
      .with_context(|| format!("failed to load {id}"))?,
  };

  match outcome {
    Outcome::Component(text) | Outcome::Collection(text) => println!("{text}"),
    Outcome::NoOpinion => println!("no opinion"),
  }

  Ok(())
}
