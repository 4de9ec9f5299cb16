//! Error types for the dashgate access flow.
//!
//! All fallible operations in the portal return `DashgateResult<T>`.
//! The taxonomy is deliberately small: a login attempt either hits a broken
//! credential source, fails to match, or trips over the session ledger.

use thiserror::Error;

/// The unified error type for the dashgate crates.
#[derive(Debug, Error)]
pub enum DashgateError {
    /// The credential source is missing, malformed, or produced no usable
    /// records. Blocks every login until the source is fixed.
    #[error("credential configuration error: {reason}")]
    ConfigError { reason: String },

    /// Submitted credentials matched no record.
    ///
    /// Carries no detail about which field mismatched, so a caller cannot
    /// distinguish an unknown email from a wrong password.
    #[error("access denied")]
    AccessDenied,

    /// The session ledger could not persist a row.
    ///
    /// Non-fatal on login: the portal reports it and proceeds. On logout the
    /// ledger swallows it entirely.
    #[error("session ledger write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

/// Convenience alias used throughout the dashgate crates.
pub type DashgateResult<T> = Result<T, DashgateError>;
