use std::error::Error;

use tracing_subscriber::EnvFilter;
use utercare::app::{resolve_store_uri, run_dashboard};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("utercare=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run_dashboard(std::env::args().skip(1), resolve_store_uri)
}
