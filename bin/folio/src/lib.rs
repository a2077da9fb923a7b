//! Folio CLI Library
//!
//! Command implementations for the `folio` binary: content checks, listings
//! and JSON exports over the built-in portfolio content.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, list, show, export)

use std::path::Path;

use color_eyre::eyre::Result;
use folio_core::{Config, ContentStore, build_content_store_with};

pub mod cmd;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

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
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Resolve configuration: an explicit path must exist; otherwise
/// `folio.toml` is used when present and defaults apply when it is not.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_with_env(path)?,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                Config::load_with_env(fallback)?
            } else {
                tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                Config::default()
            }
        }
    };
    Ok(config)
}

/// Build the content store under the loaded configuration.
pub fn open_store(config: &Config) -> ContentStore {
    build_content_store_with(&config.content)
}
