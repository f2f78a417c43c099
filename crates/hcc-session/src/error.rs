//! Session guard error types.

use thiserror::Error;

/// Errors reported by the session guard. Authentication failures are always
/// surfaced to the caller, never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The attempt budget is spent; the password was not inspected.
    #[error("maximum login attempts ({max_attempts}) exceeded, please try again later")]
    LockedOut { max_attempts: u32 },

    /// Wrong password. The single shared credential means this never
    /// distinguishes an unknown user from a bad password.
    #[error("invalid password, {remaining} attempt(s) remaining")]
    InvalidPassword { remaining: u32 },

    /// The idle window elapsed; the session has been logged out.
    #[error("session timed out, please log in again")]
    TimedOut,

    /// No active login.
    #[error("not authenticated")]
    NotAuthenticated,
}
