//! Command-line and logging setup shared by the demos.

use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Flags accepted by every demo.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Directory the site directory is created in.
    #[arg(long, default_value = ".")]
    pub out_dir: Utf8PathBuf,
}

/// Install a formatting subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
