use anyhow::{anyhow, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Log level defaults to INFO, `RUST_LOG` overrides it.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("birthday v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
