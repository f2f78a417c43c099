//! Dashboard TLS artifact configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default certificate path, relative to the working directory.
fn default_cert_file() -> String {
    String::from("ssl/cert.pem")
}

/// Default private key path, relative to the working directory.
fn default_key_file() -> String {
    String::from("ssl/key.pem")
}

/// TLS is on by default.
const fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Whether the dashboard serves over TLS.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// PEM certificate path.
    #[serde(default = "default_cert_file")]
    pub cert_file: String,

    /// PEM private key path.
    #[serde(default = "default_key_file")]
    pub key_file: String,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            cert_file: default_cert_file(),
            key_file: default_key_file(),
        }
    }
}

impl TlsConfig {
    /// Report missing TLS artifacts.
    ///
    /// Only checked when TLS is enabled. Both the certificate and the key
    /// are checked so a single pass reports every missing file.
    #[must_use]
    pub fn missing_artifacts(&self) -> Vec<String> {
        if !self.enabled {
            return Vec::new();
        }

        let mut problems = Vec::new();
        if !Path::new(&self.cert_file).exists() {
            problems.push(format!("TLS certificate not found: {}", self.cert_file));
        }
        if !Path::new(&self.key_file).exists() {
            problems.push(format!("TLS key not found: {}", self.key_file));
        }
        problems
    }
}
