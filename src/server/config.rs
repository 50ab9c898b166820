//! Command-line and environment configuration for the HTTP server.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;

/// Circle of Life game server
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "circle-of-life-server")]
#[command(about = "HTTP front end for the Circle of Life card game engine", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "COL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "COL_PORT", default_value = "3000")]
    pub port: u16,

    /// Base seed; new games without their own seed draw one from it
    #[arg(long, env = "COL_SEED")]
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Socket address to listen on.
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
