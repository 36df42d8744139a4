mod catalog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wallgroup_core::{load_vocabulary, AppConfig, Vocabulary};
use wallgroup_normalizer::Normalizer;

#[derive(Debug, Parser)]
#[command(name = "wallgroup")]
#[command(about = "Group wallpaper catalog items into design variants")]
struct Cli {
    /// Vocabulary YAML file (overrides `WALLGROUP_VOCABULARY_PATH`)
    #[arg(long, global = true)]
    vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the base name and group slug for each product name
    Normalize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Attach a `group` to every item of a JSON catalog
    Enrich {
        /// JSON array of catalog items
        #[arg(long)]
        input: PathBuf,
        /// Write the enriched catalog here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Recompute groups even where the catalog already has one
        #[arg(long)]
        recompute: bool,
    },
    /// List the variant groups of a catalog
    Groups {
        #[arg(long)]
        input: PathBuf,
        /// Only show groups with at least this many members
        #[arg(long, default_value = "1")]
        min_size: usize,
    },
    /// Report neighbouring groups that look like a split design
    Audit {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = wallgroup_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let normalizer = build_normalizer(&config, cli.vocabulary.as_deref())?;

    match cli.command {
        Commands::Normalize { names } => {
            catalog::run_normalize(&normalizer, &names, &mut std::io::stdout().lock())?;
        }
        Commands::Enrich {
            input,
            output,
            recompute,
        } => catalog::run_enrich(&normalizer, &input, output.as_deref(), recompute)?,
        Commands::Groups { input, min_size } => {
            catalog::run_groups(&normalizer, &input, min_size, &mut std::io::stdout().lock())?;
        }
        Commands::Audit { input, output } => catalog::run_audit(
            &normalizer,
            &input,
            output.as_deref(),
            config.audit_max_distance,
        )?,
    }

    Ok(())
}

/// Build the normalizer from the CLI override, else the configured vocabulary
/// path, else the built-in tables.
fn build_normalizer(
    config: &AppConfig,
    vocabulary_override: Option<&std::path::Path>,
) -> anyhow::Result<Normalizer> {
    let vocabulary = match vocabulary_override.or(config.vocabulary_path.as_deref()) {
        Some(path) => load_vocabulary(path)?,
        None => Vocabulary::builtin(),
    };
    tracing::debug!(
        env = %config.env,
        max_strip_passes = config.max_strip_passes,
        "building normalizer"
    );
    Ok(Normalizer::new(&vocabulary, config.max_strip_passes)?)
}

#[cfg(test)]
mod tests;
