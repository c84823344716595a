//! PDF Fusion CLI tool
//!
//! Merges the PDFs under `incoming/` into one timestamped file in `docs/`
//! (ordered by `manifest.txt` when present) and rebuilds `docs/index.html`.
//! Intended to run unattended; a run with nothing to merge still succeeds.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use pdf_fusion::config::Config;
use pdf_fusion::pipeline;

/// PDF Fusion - merge a folder of PDFs and rebuild the HTML index
#[derive(Parser)]
#[command(name = "pdf-fusion")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Run over the current directory (incoming/, docs/, manifest.txt)
    pdf-fusion

    # Run over another project root
    pdf-fusion --root /srv/reports

    # Override individual paths
    pdf-fusion --incoming /data/inbox --docs /var/www/pdfs")]
struct Cli {
    /// Project root containing incoming/, docs/ and manifest.txt
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Input directory (defaults to <root>/incoming)
    #[arg(long)]
    incoming: Option<PathBuf>,

    /// Output directory (defaults to <root>/docs)
    #[arg(long)]
    docs: Option<PathBuf>,

    /// Ordering manifest, one filename per line (defaults to <root>/manifest.txt)
    #[arg(long)]
    manifest: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::from_root(self.root);
        if let Some(incoming) = self.incoming {
            config.incoming_dir = incoming;
        }
        if let Some(docs) = self.docs {
            config.docs_dir = docs;
        }
        if let Some(manifest) = self.manifest {
            config.manifest_path = manifest;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.into_config();

    let result = pipeline::run(&config)
        .with_context(|| format!("Run failed for root {}", config.root.display()));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
