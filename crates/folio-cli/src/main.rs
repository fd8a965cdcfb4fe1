//! Folio batch driver entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_cli::run_lines;
use folio_ledger::LedgerEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,folio_ledger=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Folio batch driver v{}", env!("CARGO_PKG_VERSION"));

    let input_path = std::env::args()
        .nth(1)
        .ok_or("Usage: folio <command-file>")?;

    info!("Processing commands from {}", input_path);
    let input = std::fs::read_to_string(&input_path)?;

    let mut engine = LedgerEngine::new();
    for output in run_lines(&mut engine, input.lines()) {
        println!("{output}");
    }

    Ok(())
}
