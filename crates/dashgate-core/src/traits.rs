//! Trait seams for the dashgate login flow.
//!
//! Two traits define the portal's external surface:
//!
//! - `CredentialSource` — where authorized users come from (CSV file or
//!   TOML secrets list; anything that can produce a `CredentialTable`)
//! - `SessionLedger`   — where login/logout timestamps go
//!
//! The portal wires them together; neither implementation knows about the
//! other.

use chrono::{DateTime, Local};

use dashgate_contracts::{
    credential::CredentialTable,
    error::DashgateResult,
    session::LedgerHandle,
};

/// A source of authorized users.
///
/// Implementations re-read their backing store on every call — the portal
/// never caches a table, so edits to the source take effect on the next
/// login attempt.
pub trait CredentialSource: Send + Sync {
    /// Produce a fresh snapshot of the credential table.
    ///
    /// This never fails from the caller's perspective: any read or parse
    /// error is logged by the implementation and surfaces as an empty
    /// table, which the portal reports as a configuration error.
    fn load(&self) -> CredentialTable;
}

/// The session ledger: one row per login, closed at most once at logout.
pub trait SessionLedger: Send + Sync {
    /// Append an open row recording a login that starts now.
    ///
    /// Returns the generated row handle and the wall-clock start time the
    /// caller must hold onto for `close()`. An `Err` means the row was not
    /// persisted; the login itself still proceeds.
    fn open(&self, display_name: &str, email: &str)
        -> DashgateResult<(LedgerHandle, DateTime<Local>)>;

    /// Fill the logout fields of the row identified by `handle`.
    ///
    /// Infallible by contract: implementations swallow every error so a
    /// logout always completes from the user's perspective. Closing a
    /// handle that is unknown, or already closed, is a no-op.
    fn close(&self, handle: LedgerHandle, start: DateTime<Local>);
}
