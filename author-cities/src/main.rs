//! Author cities CLI
//!
//! ```bash
//! author-cities    # reads public/docs/EiP.csv, writes ./out/authors_and_cities.csv
//! ```
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see stage progress.

use author_cities::{run, PipelineConfig, TracingSink};
use tracing::error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&PipelineConfig::default(), &TracingSink) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
