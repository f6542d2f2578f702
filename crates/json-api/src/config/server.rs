//! Listener Config

use clap::Args;

/// Port the storefront has always listened on.
const DEFAULT_PORT: u16 = 3030;

/// Where the storefront API accepts connections.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind the storefront API to
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port serving /api/productos and /api/carrito
    #[arg(short, long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port`, as accepted by the TCP listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
