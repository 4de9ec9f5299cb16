//! Session ledger row types.
//!
//! `AuditRow` is one session's login/logout timestamp record. Rows are
//! created "open" (logout fields empty) at login, closed at most once at
//! logout, and never deleted. The serialized column names match the ledger
//! file's fixed schema, with `id_sessao` — a generated row identifier —
//! prepended so rows are addressed by identity rather than by position.

use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::session::LedgerHandle;

/// Date format used for `data_login` / `data_logout`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used for `hora_login` / `hora_logout`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One row of the session ledger.
///
/// Field order matches the persisted column order. The three logout fields
/// are `None` while the row is open; an empty cell in the file deserializes
/// back to `None`, so open rows survive a reload unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRow {
    /// Generated identifier assigned when the row is opened.
    pub id_sessao: LedgerHandle,

    /// Login date, `%Y-%m-%d`.
    pub data_login: String,

    /// Login time, `%H:%M:%S`.
    pub hora_login: String,

    /// The user's display name at login time.
    pub usuario: String,

    /// The user's login email.
    pub email: String,

    /// Logout date, empty until the row is closed.
    pub data_logout: Option<String>,

    /// Logout time, empty until the row is closed.
    pub hora_logout: Option<String>,

    /// Session duration `h:mm:ss`, empty until the row is closed.
    pub tempo_sessao: Option<String>,
}

impl AuditRow {
    /// Build a new open row for a session starting at `start`.
    pub fn open(handle: LedgerHandle, start: DateTime<Local>, usuario: &str, email: &str) -> Self {
        Self {
            id_sessao: handle,
            data_login: start.format(DATE_FORMAT).to_string(),
            hora_login: start.format(TIME_FORMAT).to_string(),
            usuario: usuario.to_string(),
            email: email.to_string(),
            data_logout: None,
            hora_logout: None,
            tempo_sessao: None,
        }
    }

    /// True while the logout fields have not been filled in.
    pub fn is_open(&self) -> bool {
        self.data_logout.is_none() && self.hora_logout.is_none() && self.tempo_sessao.is_none()
    }

    /// Fill the logout fields. The row is considered closed afterwards.
    pub fn close(&mut self, end: DateTime<Local>, elapsed: TimeDelta) {
        self.data_logout = Some(end.format(DATE_FORMAT).to_string());
        self.hora_logout = Some(end.format(TIME_FORMAT).to_string());
        self.tempo_sessao = Some(format_duration(elapsed));
    }
}

/// Format an elapsed duration as `h:mm:ss`.
///
/// Sub-second precision is discarded; negative deltas (clock drift between
/// the in-memory start time and the ledger's wall clock) clamp to `0:00:00`.
/// Hours are unpadded and keep counting past 24.
pub fn format_duration(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
