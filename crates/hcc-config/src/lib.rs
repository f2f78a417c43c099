//! # hcc-config
//!
//! Layered configuration loading for the HCC Compression Advisor using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HCC_*` prefix, `__` as separator)
//! 2. Project-level `hcc.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HCC_DATABASE__HOST` -> `database.host`,
//! `HCC_API__BASE_URL` -> `api.base_url`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! All settings are read once at startup; the resolved [`HccConfig`] is
//! immutable for the process lifetime.
//!
//! # Usage
//!
//! ```no_run
//! use hcc_config::HccConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = HccConfig::load_with_dotenv().expect("config");
//!
//! for problem in config.validate() {
//!     eprintln!("config problem: {problem}");
//! }
//! ```

mod api;
mod dashboard;
mod database;
mod error;
mod tls;

pub use api::ApiConfig;
pub use dashboard::DashboardConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use tls::TlsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local configuration file.
const CONFIG_FILE: &str = "hcc.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HccConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl HccConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`HccConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`HCC_*` prefix)
    /// 2. `hcc.toml` (project-local)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a field has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment, so secrets kept in a
    /// local `.env` file become visible as environment variables. This is
    /// the typical entry point for the connectivity check and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a field has
    /// the wrong type.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local_path = PathBuf::from(CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("HCC_").split("__"))
    }

    /// Validate the resolved configuration, returning every problem found.
    ///
    /// Problems are collected rather than failing on the first: missing
    /// secrets (database, API, dashboard passwords), invalid pool sizing,
    /// and missing TLS artifacts when TLS is enabled all appear together in
    /// the returned list. An empty list means the configuration is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.database.password.is_empty() {
            problems.push("database password not set (HCC_DATABASE__PASSWORD)".to_string());
        }
        if self.api.password.is_empty() {
            problems.push("API password not set (HCC_API__PASSWORD)".to_string());
        }
        if self.dashboard.password.is_empty() {
            problems.push("dashboard password not set (HCC_DASHBOARD__PASSWORD)".to_string());
        }

        problems.extend(self.database.pool_problems());
        problems.extend(self.tls.missing_artifacts());

        problems
    }
}
