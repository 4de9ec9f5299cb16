//! Per-session authentication state.
//!
//! `SessionContext` is the explicit replacement for framework-held session
//! storage: one object per user session, passed into every handler. It is
//! created empty, populated once at login, and fully cleared at logout.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::credential::CredentialRecord;

/// Unique identifier for one session ledger row.
///
/// Generated at `open()` time and used by `close()` to locate the row,
/// regardless of where the row sits in the file by then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerHandle(pub uuid::Uuid);

impl LedgerHandle {
    /// Create a new, unique handle.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for LedgerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LedgerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// All state one user session carries between requests.
///
/// Lifecycle: `SessionContext::default()` at session start → populated by a
/// successful login → `clear()` at logout. `ledger_handle` is `None` when
/// the ledger write failed at login; logout then has nothing to close.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    /// True between a successful login and the matching logout.
    pub authenticated: bool,

    /// The matched credential record, present while authenticated.
    pub user: Option<CredentialRecord>,

    /// Handle to the open ledger row for this session, if one was written.
    pub ledger_handle: Option<LedgerHandle>,

    /// Wall-clock login time, used to compute the session duration at logout.
    pub login_time: Option<DateTime<Local>>,
}

impl SessionContext {
    /// Reset every field to the unauthenticated state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
