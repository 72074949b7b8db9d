//! Runtime settings, read from flags or the environment.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Deployment mode. Production hides internal error messages from clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Pizza store API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "pizza-store", version, about)]
pub struct Settings {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Deployment mode.
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Environment::Development)]
    pub environment: Environment,

    /// JSON file with the product catalog. The built-in menu is used when unset.
    #[arg(long, env = "MENU_PATH")]
    pub menu: Option<PathBuf>,

    /// Capacity of the order store's request queue.
    #[arg(long, env = "STORE_BUFFER", default_value_t = 32)]
    pub store_buffer: usize,
}

impl Settings {
    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
