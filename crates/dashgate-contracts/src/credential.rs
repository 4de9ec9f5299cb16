//! Credential record and table types.
//!
//! A `CredentialRecord` is one authorized user's login tuple plus their
//! assigned dashboard URL. Records come from an external source (CSV file or
//! TOML secrets list) that is re-read wholesale on every login attempt, so
//! edits take effect immediately.

use serde::{Deserialize, Serialize};

/// One authorized user.
///
/// `email` is the unique key, stored trimmed and lowercased by every source
/// so that lookup is a plain equality check. `password` is plaintext and
/// compared verbatim — every field is carried as raw text, never coerced,
/// so a purely numeric password survives intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Display name shown in the portal and written to the session ledger.
    pub display_name: Option<String>,

    /// Login email, trimmed and lowercased at load time.
    pub email: String,

    /// Plaintext password, trimmed at load time, compared case-sensitively.
    pub password: String,

    /// The external dashboard this user is assigned to. `None` (or blank in
    /// the source) means no panel is linked.
    pub dashboard_url: Option<String>,
}

impl CredentialRecord {
    /// Resolve what the post-login surface should show for this user.
    pub fn dashboard_view(&self) -> DashboardView {
        match self.dashboard_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => DashboardView::Embedded { url: url.to_string() },
            _ => DashboardView::NoPanelLinked,
        }
    }
}

/// What the authenticated surface renders: the user's dashboard, or a
/// "no panel linked" notice when the record carries no usable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardView {
    /// Embed the external dashboard at this URL.
    Embedded { url: String },
    /// The record has no dashboard assigned; show a notice instead.
    NoPanelLinked,
}

/// An ordered, in-memory snapshot of the credential source.
///
/// Produced fresh by `CredentialSource::load()` on every authentication
/// attempt — there is no caching layer. An empty table means the source is
/// missing, malformed, or genuinely has no users; the portal treats all
/// three as a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialTable {
    records: Vec<CredentialRecord>,
}

impl CredentialTable {
    /// Build a table from already-normalized records.
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    /// True when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CredentialRecord> {
        self.records.iter()
    }
}
