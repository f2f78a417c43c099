//! ORDS REST API configuration.

use serde::{Deserialize, Serialize};

/// Default ORDS base URL for a local XE install.
fn default_base_url() -> String {
    String::from("https://localhost:8443/ords/hcc_advisor")
}

/// Default ORDS basic-auth user.
fn default_username() -> String {
    String::from("hcc_advisor")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the analysis service, including the ORDS schema path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP Basic username.
    #[serde(default = "default_username")]
    pub username: String,

    /// HTTP Basic password.
    #[serde(default)]
    pub password: String,

    /// Per-request timeout in seconds. A call that exceeds this fails
    /// rather than hanging the interaction.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Whether to verify the service TLS certificate. ORDS is commonly
    /// fronted by a self-signed certificate, so this defaults to off.
    #[serde(default)]
    pub verify_tls: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: default_username(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
            verify_tls: false,
        }
    }
}

impl ApiConfig {
    /// Check if the API config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.password.is_empty()
    }
}
