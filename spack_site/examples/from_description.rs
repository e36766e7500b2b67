//! Build a site from a TOML description instead of code.
//!
//! ```text
//! cargo run --example from_description -- \
//!     --description spack_site/demos/site.toml --out-dir /tmp/sites
//! ```

mod common;

use camino::Utf8PathBuf;
use clap::Parser;
use spack_site::{Site, load_description};

#[derive(Debug, Parser)]
struct Args {
    /// TOML site description to load.
    #[arg(long, default_value = "spack_site/demos/site.toml")]
    description: Utf8PathBuf,
    #[command(flatten)]
    output: common::OutputArgs,
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let args = Args::parse();

    let description = load_description(&args.description)?;
    let site = Site::from_description(&description);
    let written = site.write(&args.output.out_dir)?;
    tracing::info!(site = site.name(), files = written.len(), "site generated");
    Ok(())
}
