//! Server configuration module

use clap::Parser;

use crate::config::{
    catalog::CatalogConfig, observability::LoggingConfig, server::ServerRuntimeConfig,
    sessions::SessionConfig,
};

pub(crate) mod catalog;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod sessions;

/// Trolley JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "trolley-json", about = "Trolley JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog fixture settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Session cookie and store settings.
    #[command(flatten)]
    pub sessions: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
