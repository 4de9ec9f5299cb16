//! CSV-file implementation of `SessionLedger`.
//!
//! The ledger is a small CSV file, read and fully rewritten on every open
//! and close. Rows are located by the generated `id_sessao` identifier, so
//! a close lands on the right row no matter how many logins interleaved
//! since the open. There is no locking: concurrent rewrites can still lose
//! each other's updates, an accepted limitation for a low-traffic internal
//! tool.
//!
//! Error handling is asymmetric on purpose: a failed `open` is reported to
//! the caller (the login proceeds unaudited), a failed `close` is swallowed
//! entirely so logout always completes.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use dashgate_contracts::{
    audit::AuditRow,
    error::{DashgateError, DashgateResult},
    session::LedgerHandle,
};
use dashgate_core::traits::SessionLedger;

/// A session ledger persisted as one CSV file.
#[derive(Debug)]
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    /// Build a ledger writing to the file at `path`.
    ///
    /// The file is created on the first `open()`; a missing file reads as
    /// an empty ledger.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this ledger writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row currently in the ledger, open and closed alike.
    pub fn rows(&self) -> DashgateResult<Vec<AuditRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|e| DashgateError::AuditWriteFailed {
                reason: format!("failed to open ledger '{}': {}", self.path.display(), e),
            })?;

        reader
            .deserialize()
            .collect::<Result<Vec<AuditRow>, csv::Error>>()
            .map_err(|e| DashgateError::AuditWriteFailed {
                reason: format!("failed to parse ledger '{}': {}", self.path.display(), e),
            })
    }

    fn persist(&self, rows: &[AuditRow]) -> DashgateResult<()> {
        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|e| DashgateError::AuditWriteFailed {
                reason: format!("failed to create ledger '{}': {}", self.path.display(), e),
            })?;

        for row in rows {
            writer.serialize(row).map_err(|e| DashgateError::AuditWriteFailed {
                reason: format!("failed to write ledger row: {}", e),
            })?;
        }

        writer.flush().map_err(|e| DashgateError::AuditWriteFailed {
            reason: format!("failed to flush ledger '{}': {}", self.path.display(), e),
        })
    }

    fn try_close(&self, handle: LedgerHandle, start: DateTime<Local>) -> DashgateResult<()> {
        let mut rows = self.rows()?;

        let Some(row) = rows.iter_mut().find(|r| r.id_sessao == handle && r.is_open()) else {
            // Unknown handle, or the row was already closed: nothing to do.
            debug!(handle = %handle, "no open ledger row for handle; close is a no-op");
            return Ok(());
        };

        let now = Local::now();
        row.close(now, now.signed_duration_since(start));

        self.persist(&rows)?;
        info!(handle = %handle, "ledger row closed");
        Ok(())
    }
}

impl SessionLedger for CsvLedger {
    /// Append an open row and rewrite the file.
    ///
    /// A missing ledger file starts as an empty table, so the first login
    /// creates the file with the fixed column schema. Any I/O failure comes
    /// back as `AuditWriteFailed`; the caller decides whether that blocks
    /// anything (the portal does not).
    fn open(
        &self,
        display_name: &str,
        email: &str,
    ) -> DashgateResult<(LedgerHandle, DateTime<Local>)> {
        let mut rows = self.rows()?;

        let handle = LedgerHandle::new();
        let start = Local::now();
        rows.push(AuditRow::open(handle, start, display_name, email));

        self.persist(&rows)?;
        info!(handle = %handle, email = %email, "ledger row opened");
        Ok((handle, start))
    }

    /// Fill the logout fields of the row identified by `handle`.
    ///
    /// Every failure is swallowed: reload errors, a vanished file, a
    /// rewrite that cannot complete. The user's logout is never held up by
    /// the ledger.
    fn close(&self, handle: LedgerHandle, start: DateTime<Local>) {
        if let Err(e) = self.try_close(handle, start) {
            warn!(handle = %handle, error = %e, "ledger close failed; suppressed");
        }
    }
}
