//! Folio Server Library
//!
//! Serves the folio site: an HTML shell for each page route, the compiled
//! wasm bundle, static assets, and crawler files.
//!
//! # Modules
//!
//! - [`config`] - Layered server configuration
//! - [`server`] - Router construction
//! - [`shell`], [`robots`], [`sitemap`] - Generated responses
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio_server::config::ServerConfig;
//!
//! # async fn serve() -> folio_server::Result<()> {
//! let config = ServerConfig::load(Path::new("folio.toml"))?;
//! folio_server::run(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod robots;
pub mod server;
pub mod shell;
pub mod sitemap;

use std::sync::Arc;

use tracing::info;

pub use crate::{
    config::ServerConfig,
    error::{Result, ServerError},
};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Bind the configured address and serve until the process is stopped.
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    info!(
        %addr,
        site_root = %config.site_root.display(),
        "serving folio"
    );

    let router = server::create_router(Arc::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
