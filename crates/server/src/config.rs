//! # Server Configuration
//!
//! Settings shared by every subcommand. Each one can come from a flag, an
//! environment variable, or a `.env` file loaded before parsing.

use clap::Args;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    #[arg(long, global = true, env = "ALMANAC_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, global = true, env = "ALMANAC_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "almanac_core=trace")
    #[arg(long, global = true, env = "ALMANAC_LOG", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// `RUST_LOG` wins over the configured level; an unparsable level falls
    /// back to "info".
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Install the global tracing subscriber. Logs go to stderr so `--json`
/// output on stdout stays machine-readable.
pub fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
