//! Persona CLI
//!
//! `persona --catalog champion.json --role Jungle j4 lee kha`

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "persona")]
#[command(about = "Score a playstyle persona from a role and three champion mains", long_about = None)]
struct Cli {
    /// Data Dragon champion.json file
    #[arg(long)]
    catalog: PathBuf,

    /// Role (Top, Jungle, Mid, Bot, Support); unknown roles use the configured default
    #[arg(long, default_value = "")]
    role: String,

    /// Three champion names
    #[arg(num_args = 3, required = true)]
    mains: Vec<String>,

    /// Print the full result as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// JSON config file (overrides PERSONA_CONFIG_PATH)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the cache record of this run to a file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, default_value = "false")]
    debug: bool,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use persona_core::{PersonaEngine, PersonaRequest};
    use std::sync::Arc;

    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = persona_cli::load_catalog(&cli.catalog)?;
    let config = persona_cli::load_config(cli.config.as_deref())?;

    let mains: [String; 3] = cli
        .mains
        .try_into()
        .map_err(|v: Vec<String>| anyhow::anyhow!("expected 3 champions, got {}", v.len()))?;
    let request = PersonaRequest { role: cli.role, mains };

    let mut engine = PersonaEngine::new(Arc::new(catalog), config);
    let result = engine.compute(&request);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", persona_cli::render_report(&result));
    }

    if let (Some(path), Some(record)) = (cli.save, engine.last_record()) {
        persona_cli::save_record(&path, record)?;
        eprintln!("Saved persona record to {}", path.display());
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("persona CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
