//! ontoport - ontology export CLI
//!
//! Fetches an ontology root and its members from a remote resource store and
//! writes them as one portable JSON document.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ontoport::{export, HttpStore};

/// Environment variable supplying the agent secret for authenticated fetches.
/// Absent or empty means anonymous/public fetches only.
const AGENT_SECRET_VAR: &str = "ONTOPORT_AGENT_SECRET";

#[derive(Parser)]
#[command(name = "ontoport")]
#[command(version = ontoport::VERSION)]
#[command(about = "Export a portable ontology from a remote resource store", long_about = None)]
struct Cli {
    /// Subject URL of the ontology root to export
    #[arg(long = "in", value_name = "URL")]
    input: String,

    /// Output file path for the exported JSON document
    #[arg(long = "out", value_name = "PATH")]
    out: PathBuf,

    /// Maximum number of concurrent fetches
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Help and version exit 0; a missing or malformed flag exits 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    let mut store = HttpStore::new();
    if let Ok(secret) = std::env::var(AGENT_SECRET_VAR) {
        if !secret.is_empty() {
            store = store.with_agent(secret);
        }
    }
    if let Some(limit) = cli.limit {
        store = store.with_concurrency_limit(limit);
    }

    let objects = match export::export_ontology(&cli.input, &store).await {
        Ok(objects) => objects,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = export::write_export(&cli.out, &objects) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("✓ Exported {} object(s) to {}", objects.len(), cli.out.display());
}
