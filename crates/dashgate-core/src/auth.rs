//! Credential matching.
//!
//! A pure first-match scan over the loaded table. All I/O (loading the
//! table, writing the ledger) happens elsewhere; this module only compares
//! normalized strings, so it stays trivially testable.

use dashgate_contracts::credential::{CredentialRecord, CredentialTable};

/// Normalize a submitted email: surrounding whitespace dropped, lowercased.
///
/// Sources store emails in the same shape, so matching is plain equality.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Look up the record matching the submitted credentials.
///
/// The email comparison is case-insensitive (both sides are lowercased);
/// the password comparison is case-sensitive and exact after trimming.
/// Returns the first matching record, or `None` — never an error, and no
/// hint about which field mismatched.
pub fn authenticate(
    table: &CredentialTable,
    email: &str,
    password: &str,
) -> Option<CredentialRecord> {
    let email = normalize_email(email);
    let password = password.trim();

    table
        .iter()
        .find(|record| record.email == email && record.password == password)
        .cloned()
}
