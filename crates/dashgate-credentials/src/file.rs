//! CSV-file credential source.
//!
//! Reads the whole file on every `load()` call, so edits to the credential
//! file take effect on the very next login attempt. Header names are folded
//! through the alias table; every cell is carried as raw text so that a
//! numeric-looking password is never coerced.
//!
//! The `load()` contract is silent failure: a missing, unreadable, or
//! structurally unusable file logs a warning and yields an empty table,
//! which the portal reports as a configuration error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use dashgate_contracts::credential::{CredentialRecord, CredentialTable};
use dashgate_core::auth::normalize_email;
use dashgate_core::traits::CredentialSource;

use crate::alias::canonical_header;

/// A credential source backed by a CSV file with a flexible header row.
///
/// The file must carry (after alias folding) an `email` and a `senha`
/// column; `nome` and `link` are optional.
#[derive(Debug)]
pub struct CsvCredentialSource {
    path: PathBuf,
}

impl CsvCredentialSource {
    /// Build a source reading from the file at `path`.
    ///
    /// The file is not touched here; existence is only checked on `load()`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<CredentialTable, csv::Error> {
        // flexible: short rows read as missing cells, not as a hard error —
        // spreadsheet exports routinely drop trailing empty columns.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        // Fold every header once; the first occurrence of a canonical name
        // wins if an editor managed to produce duplicates.
        let mut columns: HashMap<String, usize> = HashMap::new();
        for (idx, raw) in reader.headers()?.iter().enumerate() {
            columns.entry(canonical_header(raw)).or_insert(idx);
        }

        let (Some(&email_col), Some(&senha_col)) = (columns.get("email"), columns.get("senha"))
        else {
            warn!(
                path = %self.path.display(),
                "credential file lacks an email or senha column after alias folding"
            );
            return Ok(CredentialTable::default());
        };

        let nome_col = columns.get("nome").copied();
        let link_col = columns.get("link").copied();

        let cell = |row: &csv::StringRecord, col: usize| -> String {
            row.get(col).unwrap_or("").trim().to_string()
        };
        let optional_cell = |row: &csv::StringRecord, col: Option<usize>| -> Option<String> {
            col.map(|c| cell(row, c)).filter(|v| !v.is_empty())
        };

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(CredentialRecord {
                display_name: optional_cell(&row, nome_col),
                email: normalize_email(&cell(&row, email_col)),
                password: cell(&row, senha_col),
                dashboard_url: optional_cell(&row, link_col),
            });
        }

        debug!(path = %self.path.display(), records = records.len(), "credential file read");
        Ok(CredentialTable::new(records))
    }
}

impl CredentialSource for CsvCredentialSource {
    /// Read the file fresh. Any error collapses to an empty table.
    fn load(&self) -> CredentialTable {
        match self.read() {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "credential file unreadable");
                CredentialTable::default()
            }
        }
    }
}
