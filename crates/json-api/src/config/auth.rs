//! Auth Config

use std::fmt;

use clap::Args;

/// Shared-secret authentication settings.
#[derive(Args)]
pub struct AuthConfig {
    /// Secret expected in the `Authorization` header of product mutations
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}
