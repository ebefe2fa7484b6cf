//! fndoc: list the documented public functions of Rust source files.
//!
//! Prints each `pub fn` signature with the text of its `///` comments.
//! Functions whose name starts with the excluded prefix (default `pre`)
//! are treated as internal helpers and left out.
//!
//! - **default**: `fndoc` reads `src/server/func_man/functions.rs`
//! - **explicit inputs**: `fndoc -f markdown src/*.rs`

mod error;
mod extract;
mod model;
mod render;
mod source;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fndoc",
    about = "List documented public functions of Rust source files"
)]
struct Cli {
    /// Input files, directories or glob patterns
    #[arg(default_value = source::DEFAULT_INPUT)]
    files: Vec<String>,

    /// Output format: listing (default), blocks, headers, markdown, json
    #[arg(short = 'f', long, default_value = "listing")]
    format: String,

    /// Function names starting with this are excluded. Empty disables.
    #[arg(
        short = 'x',
        long,
        env = "FNDOC_EXCLUDE_PREFIX",
        default_value = extract::DEFAULT_EXCLUDE_PREFIX
    )]
    exclude_prefix: String,

    /// Also report excluded (prefixed) functions, labelled private
    #[arg(long)]
    show_private: bool,

    /// Skip public functions without doc comments
    #[arg(long)]
    documented_only: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let renderer = render::create_renderer(&cli.format)?;
    let inputs = source::expand_inputs(&cli.files)?;

    // Collect everything first so a bad input aborts before any output.
    let mut docs = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let content = source::read_source(path)
            .with_context(|| format!("cannot extract from {}", path.display()))?;
        let functions = extract_records(&content, &cli);
        info!(path = %path.display(), functions = functions.len(), "extracted");
        docs.push(model::Document {
            source: path.to_string_lossy().to_string(),
            functions,
        });
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for doc in &docs {
        out.write_all(renderer.render(doc).as_bytes())
            .context("failed to write output")?;
    }
    debug!(files = docs.len(), "done");
    Ok(())
}

/// Extract one buffer, applying the classification switches.
fn extract_records(content: &str, cli: &Cli) -> Vec<model::FunctionRecord> {
    let records: Vec<_> = if cli.show_private {
        extract::Extractor::new(content, &cli.exclude_prefix).collect()
    } else {
        extract::exported(content, &cli.exclude_prefix).collect()
    };
    records
        .into_iter()
        .filter(|f| !(cli.documented_only && f.class == model::Classification::Undocumented))
        .collect()
}

/// Logs go to stderr; `FNDOC_LOG` takes an `EnvFilter` directive.
fn init_logging() {
    let filter = EnvFilter::try_from_env("FNDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
