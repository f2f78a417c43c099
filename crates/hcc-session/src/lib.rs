//! # hcc-session
//!
//! Session guard for the HCC Compression Advisor dashboard.
//!
//! Every dashboard action passes through [`SessionGuard::require_authentication`]
//! before touching either gateway. The guard owns the configured secret (as a
//! SHA-256 digest), the login attempt budget, and the idle-timeout window;
//! the per-user login state lives in an explicit [`Session`] value owned by
//! whatever drives the interaction and passed in by mutable reference.
//!
//! Lockout has no unlock timer: once the attempt budget is spent, the
//! [`Session`] stays locked until it is dropped (in practice, until the
//! process or the user's session ends).

mod error;

pub use error::SessionError;

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Login state for one dashboard user interaction.
///
/// Created unauthenticated; mutated only by [`SessionGuard`] operations.
#[derive(Debug, Clone)]
pub struct Session {
    authenticated: bool,
    username: Option<String>,
    failed_attempts: u32,
    last_activity: DateTime<Utc>,
}

impl Session {
    /// Create a fresh, unauthenticated session stamped with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            authenticated: false,
            username: None,
            failed_attempts: 0,
            last_activity: Utc::now(),
        }
    }

    /// Whether the session is currently authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The logged-in username, if any. There is a single shared credential,
    /// so this is always `"admin"` while authenticated.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Failed login attempts since the last successful login.
    #[must_use]
    pub const fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Timestamp of the last guarded activity.
    #[must_use]
    pub const fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate in front of both gateways: password login, attempt budget, idle
/// timeout.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    secret_digest: [u8; 32],
    max_attempts: u32,
    idle_timeout: Duration,
}

impl SessionGuard {
    /// Build a guard from the raw secret and limits.
    #[must_use]
    pub fn new(secret: &str, max_attempts: u32, idle_timeout: Duration) -> Self {
        Self {
            secret_digest: Sha256::digest(secret.as_bytes()).into(),
            max_attempts,
            idle_timeout,
        }
    }

    /// Build a guard from the dashboard configuration section.
    #[must_use]
    pub fn from_config(config: &hcc_config::DashboardConfig) -> Self {
        let idle_timeout = i64::try_from(config.session_timeout_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX);
        Self::new(&config.password, config.max_login_attempts, idle_timeout)
    }

    /// Attempt a login.
    ///
    /// A session whose attempt budget is spent is rejected before the
    /// password is even inspected. Otherwise the password is compared
    /// against the configured secret in constant time (both sides are
    /// SHA-256 digests, so the comparison length never depends on the
    /// input).
    ///
    /// # Errors
    ///
    /// [`SessionError::LockedOut`] once `max_attempts` failures have
    /// accumulated, [`SessionError::InvalidPassword`] (carrying the
    /// remaining budget) on a mismatch.
    pub fn login(&self, session: &mut Session, password: &str) -> Result<(), SessionError> {
        if session.failed_attempts >= self.max_attempts {
            tracing::warn!(
                attempts = session.failed_attempts,
                "login rejected: attempt budget exhausted"
            );
            return Err(SessionError::LockedOut {
                max_attempts: self.max_attempts,
            });
        }

        let digest: [u8; 32] = Sha256::digest(password.as_bytes()).into();
        if bool::from(digest[..].ct_eq(&self.secret_digest[..])) {
            session.authenticated = true;
            session.username = Some("admin".to_string());
            session.failed_attempts = 0;
            session.last_activity = Utc::now();
            tracing::info!("login successful");
            Ok(())
        } else {
            session.failed_attempts += 1;
            let remaining = self.max_attempts.saturating_sub(session.failed_attempts);
            tracing::warn!(remaining, "login failed: invalid password");
            Err(SessionError::InvalidPassword { remaining })
        }
    }

    /// Check the idle timeout, forcing a logout when the window has elapsed.
    ///
    /// Returns `true` if the session timed out on this call.
    pub fn check_timeout(&self, session: &mut Session) -> bool {
        self.check_timeout_at(session, Utc::now())
    }

    /// Timeout check against an explicit clock reading.
    pub fn check_timeout_at(&self, session: &mut Session, now: DateTime<Utc>) -> bool {
        if now - session.last_activity > self.idle_timeout {
            self.logout(session);
            return true;
        }
        false
    }

    /// Unconditionally clear the login state and stamp activity.
    pub fn logout(&self, session: &mut Session) {
        session.authenticated = false;
        session.username = None;
        session.last_activity = Utc::now();
    }

    /// Composite gate run before every dashboard action.
    ///
    /// Runs the timeout check first, then verifies authentication, then
    /// stamps fresh activity. When this returns `Err` the caller must not
    /// proceed; no downstream side effects have occurred.
    ///
    /// # Errors
    ///
    /// [`SessionError::TimedOut`] if the idle window elapsed on this call
    /// (the session has been logged out), [`SessionError::NotAuthenticated`]
    /// if there is no active login.
    pub fn require_authentication(&self, session: &mut Session) -> Result<(), SessionError> {
        if self.check_timeout(session) {
            return Err(SessionError::TimedOut);
        }
        if !session.authenticated {
            return Err(SessionError::NotAuthenticated);
        }
        session.last_activity = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECRET: &str = "correct horse battery staple";

    fn guard() -> SessionGuard {
        SessionGuard::new(SECRET, 3, Duration::minutes(30))
    }

    #[test]
    fn fresh_session_is_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
        assert_eq!(session.failed_attempts(), 0);
    }

    #[test]
    fn login_success_sets_state_and_resets_attempts() {
        let guard = guard();
        let mut session = Session::new();

        assert!(guard.login(&mut session, "wrong").is_err());
        assert_eq!(session.failed_attempts(), 1);

        guard.login(&mut session, SECRET).expect("correct password");
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("admin"));
        assert_eq!(session.failed_attempts(), 0);
    }

    #[test]
    fn each_failure_increments_by_exactly_one() {
        let guard = guard();
        let mut session = Session::new();

        for expected in 1..=3u32 {
            let err = guard.login(&mut session, "nope").unwrap_err();
            assert_eq!(session.failed_attempts(), expected);
            assert_eq!(
                err,
                SessionError::InvalidPassword {
                    remaining: 3 - expected
                }
            );
        }
    }

    #[test]
    fn two_failures_then_correct_password_succeeds() {
        let guard = guard();
        let mut session = Session::new();

        assert!(guard.login(&mut session, "a").is_err());
        assert!(guard.login(&mut session, "b").is_err());
        guard
            .login(&mut session, SECRET)
            .expect("third attempt with correct password");
        assert!(session.is_authenticated());
    }

    #[test]
    fn lockout_rejects_without_incrementing_even_for_correct_password() {
        let guard = guard();
        let mut session = Session::new();

        for _ in 0..3 {
            let _ = guard.login(&mut session, "nope");
        }
        assert_eq!(session.failed_attempts(), 3);

        let err = guard.login(&mut session, SECRET).unwrap_err();
        assert_eq!(err, SessionError::LockedOut { max_attempts: 3 });
        assert_eq!(session.failed_attempts(), 3);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_clears_state() {
        let guard = guard();
        let mut session = Session::new();
        guard.login(&mut session, SECRET).expect("login");

        guard.logout(&mut session);
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn timeout_fires_only_past_the_window() {
        let guard = guard();
        let mut session = Session::new();
        guard.login(&mut session, SECRET).expect("login");

        let within = session.last_activity() + Duration::minutes(29);
        assert!(!guard.check_timeout_at(&mut session, within));
        assert!(session.is_authenticated());

        let beyond = session.last_activity() + Duration::minutes(31);
        assert!(guard.check_timeout_at(&mut session, beyond));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn timeout_is_false_immediately_after_login() {
        let guard = guard();
        let mut session = Session::new();
        guard.login(&mut session, SECRET).expect("login");
        assert!(!guard.check_timeout(&mut session));
    }

    #[test]
    fn require_authentication_stamps_activity() {
        let guard = guard();
        let mut session = Session::new();
        guard.login(&mut session, SECRET).expect("login");

        let before = session.last_activity();
        guard
            .require_authentication(&mut session)
            .expect("authenticated");
        assert!(session.last_activity() >= before);
        assert!(!guard.check_timeout(&mut session));
    }

    #[test]
    fn require_authentication_rejects_anonymous_sessions() {
        let guard = guard();
        let mut session = Session::new();
        assert_eq!(
            guard.require_authentication(&mut session),
            Err(SessionError::NotAuthenticated)
        );
    }

    #[test]
    fn require_authentication_reports_timeout_distinctly() {
        let guard = SessionGuard::new(SECRET, 3, Duration::zero());
        let mut session = Session::new();
        guard.login(&mut session, SECRET).expect("login");

        // A zero-length idle window times out on the next guarded call.
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(
            guard.require_authentication(&mut session),
            Err(SessionError::TimedOut)
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn guard_from_config_uses_dashboard_limits() {
        let config = hcc_config::DashboardConfig {
            password: SECRET.into(),
            session_timeout_minutes: 1,
            max_login_attempts: 1,
        };
        let guard = SessionGuard::from_config(&config);
        let mut session = Session::new();

        assert!(guard.login(&mut session, "wrong").is_err());
        let err = guard.login(&mut session, SECRET).unwrap_err();
        assert_eq!(err, SessionError::LockedOut { max_attempts: 1 });
    }
}
