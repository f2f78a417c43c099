//! Dashboard session and authentication configuration.

use serde::{Deserialize, Serialize};

/// Default idle timeout before a session is logged out, in minutes.
const fn default_session_timeout_minutes() -> u64 {
    30
}

/// Default login attempt budget per session.
const fn default_max_login_attempts() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Shared dashboard password. There is a single credential; the guard
    /// never distinguishes "wrong password" from "unknown user".
    #[serde(default)]
    pub password: String,

    /// Idle minutes before a session is forcibly logged out.
    #[serde(default = "default_session_timeout_minutes")]
    pub session_timeout_minutes: u64,

    /// Failed login attempts allowed before lockout.
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            password: String::new(),
            session_timeout_minutes: default_session_timeout_minutes(),
            max_login_attempts: default_max_login_attempts(),
        }
    }
}

impl DashboardConfig {
    /// Check if the dashboard config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.password.is_empty()
    }
}
