//! `rdfdoc` — Converts RDF files into a browsable HTML document set.
//!
//! **Outputs, per input file:**
//! - `<out>/<input-base-name>.<language>.html` — one document per language
//!   observed in the input (or requested via `--languages`)
//! - `<out>/index.html` — a single English document when `--index` is given
//! - `<out>/style.css`, `<out>/rdfconv.js` — static assets, written once
//!
//! **Usage:**
//! ```text
//! rdfdoc catalog.ttl [more.ttl ...] [--out <dir>] [--languages en,sv] [--index]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rdfdoc_render::{ConvertError, Converter, PredicateResolver, RenderOptions};

/// Convert RDF files into a more human readable HTML representation.
#[derive(Parser)]
#[command(
    name = "rdfdoc",
    about = "Convert RDF files into a more human readable HTML representation"
)]
struct Args {
    /// Input RDF file(s) in Turtle format.
    #[arg(value_name = "RDF_FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for the generated documents.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Languages (ISO-639 codes) to generate, comma separated. The default
    /// renders every language encountered in the input.
    #[arg(long, value_delimiter = ',', default_value = "all")]
    languages: Vec<String>,

    /// Namespaces considered local: references into them are rendered as
    /// in-document fragments.
    #[arg(long = "local-ns", value_name = "NAMESPACE")]
    local_ns: Vec<String>,

    /// Write a single index.html instead of one file per language.
    #[arg(long)]
    index: bool,

    /// Log at debug level instead of warnings only.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = RenderOptions {
        local_namespaces: args.local_ns.clone(),
        ..RenderOptions::default()
    };
    let resolver = PredicateResolver::with_http()?;
    // One converter for the whole run: later files reuse the vocabulary
    // label cache built up by earlier ones.
    let mut converter = Converter::new(args.languages.clone(), options, resolver);

    for input in &args.inputs {
        tracing::info!("converting {}", input.display());
        match converter.load_file(input) {
            Ok(()) => {
                converter.output_html(&args.out, args.index)?;
                tracing::info!("finished converting {}", input.display());
            }
            Err(err @ ConvertError::LanguageMismatch { .. }) => {
                tracing::error!("skipped {}: {err}", input.display());
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
