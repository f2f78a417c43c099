//! Oracle catalog connection configuration.

use serde::{Deserialize, Serialize};

/// Default catalog host.
fn default_host() -> String {
    String::from("localhost")
}

/// Default Oracle listener port.
const fn default_port() -> u16 {
    1521
}

/// Default pluggable database service name.
fn default_service() -> String {
    String::from("XEPDB1")
}

/// Default catalog schema user.
fn default_user() -> String {
    String::from("hcc_advisor")
}

/// Default minimum pool size.
const fn default_pool_min() -> u32 {
    2
}

/// Default maximum pool size.
const fn default_pool_max() -> u32 {
    10
}

/// Default pool growth step.
const fn default_pool_increment() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Catalog database host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Oracle listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Service name of the pluggable database.
    #[serde(default = "default_service")]
    pub service: String,

    /// Schema user owning the advisor catalog.
    #[serde(default = "default_user")]
    pub user: String,

    /// Schema user password.
    #[serde(default)]
    pub password: String,

    /// Minimum number of pooled connections kept open.
    #[serde(default = "default_pool_min")]
    pub pool_min: u32,

    /// Upper bound on concurrently checked-out connections.
    #[serde(default = "default_pool_max")]
    pub pool_max: u32,

    /// Pool growth step. Kept for parity with the catalog's connect-string
    /// tuning triple; the r2d2 pool grows one connection at a time, so this
    /// knob only participates in validation.
    #[serde(default = "default_pool_increment")]
    pub pool_increment: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service: default_service(),
            user: default_user(),
            password: String::new(),
            pool_min: default_pool_min(),
            pool_max: default_pool_max(),
            pool_increment: default_pool_increment(),
        }
    }
}

impl DatabaseConfig {
    /// Check if the database config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.password.is_empty()
    }

    /// Build the Oracle easy-connect descriptor, `host:port/service`.
    #[must_use]
    pub fn connect_descriptor(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.service)
    }

    /// Validate pool sizing, returning every problem found.
    ///
    /// The pool bounds concurrent catalog load; `pool_min` must be at least 1
    /// and `pool_max` must not be below `pool_min`.
    #[must_use]
    pub fn pool_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.pool_min == 0 {
            problems.push("database pool_min must be at least 1".to_string());
        }
        if self.pool_max < self.pool_min {
            problems.push(format!(
                "database pool_max ({}) must not be below pool_min ({})",
                self.pool_max, self.pool_min
            ));
        }
        if self.pool_increment == 0 {
            problems.push("database pool_increment must be at least 1".to_string());
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.pool_min, 2);
        assert_eq!(config.pool_max, 10);
        assert_eq!(config.pool_increment, 1);
    }

    #[test]
    fn connect_descriptor_format() {
        let config = DatabaseConfig::default();
        assert_eq!(config.connect_descriptor(), "localhost:1521/XEPDB1");
    }

    #[test]
    fn pool_sizing_accepts_defaults() {
        assert_eq!(DatabaseConfig::default().pool_problems(), Vec::<String>::new());
    }

    #[test]
    fn pool_sizing_rejects_zero_min() {
        let config = DatabaseConfig {
            pool_min: 0,
            ..Default::default()
        };
        let problems = config.pool_problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("pool_min"));
    }

    #[test]
    fn pool_sizing_rejects_max_below_min() {
        let config = DatabaseConfig {
            pool_min: 5,
            pool_max: 2,
            ..Default::default()
        };
        let problems = config.pool_problems();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("pool_max"));
    }

    #[test]
    fn pool_sizing_collects_multiple_problems() {
        let config = DatabaseConfig {
            pool_min: 0,
            pool_max: 0,
            pool_increment: 0,
            ..Default::default()
        };
        // min == max == 0 trips the min check and the increment check but
        // not the max-below-min check.
        assert_eq!(config.pool_problems().len(), 2);
    }
}
