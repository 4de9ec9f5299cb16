//! TOML secrets credential source.
//!
//! The secret-store variant of the credential source: a deploy-managed TOML
//! document holding a `[[usuarios]]` list with the fixed keys `email`,
//! `senha`, and optional `nome` / `link`. Unlike the CSV variant there is
//! no header folding to do — the schema is fixed — so normalization is just
//! lowercasing/trimming the email and trimming the other fields.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use dashgate_contracts::credential::{CredentialRecord, CredentialTable};
use dashgate_contracts::error::{DashgateError, DashgateResult};
use dashgate_core::auth::normalize_email;
use dashgate_core::traits::CredentialSource;

/// One `[[usuarios]]` entry as it appears in the secrets document.
#[derive(Debug, Deserialize)]
struct SecretEntry {
    email: String,
    senha: String,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

/// The secrets document root.
#[derive(Debug, Deserialize)]
struct SecretDocument {
    #[serde(default)]
    usuarios: Vec<SecretEntry>,
}

/// A credential source backed by a TOML secrets file.
///
/// Like every source, the document is re-read on each `load()` so a
/// redeployed secret takes effect on the next login attempt.
#[derive(Debug)]
pub struct TomlSecretSource {
    path: PathBuf,
}

impl TomlSecretSource {
    /// Build a source reading from the secrets file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse `s` as a secrets document and normalize its entries.
    ///
    /// Returns `DashgateError::ConfigError` when the TOML is malformed or
    /// does not match the fixed `[[usuarios]]` schema.
    pub fn table_from_toml_str(s: &str) -> DashgateResult<CredentialTable> {
        let document: SecretDocument =
            toml::from_str(s).map_err(|e| DashgateError::ConfigError {
                reason: format!("failed to parse credential secrets: {}", e),
            })?;

        let blank_to_none =
            |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let records = document
            .usuarios
            .into_iter()
            .map(|entry| CredentialRecord {
                display_name: blank_to_none(entry.nome),
                email: normalize_email(&entry.email),
                password: entry.senha.trim().to_string(),
                dashboard_url: blank_to_none(entry.link),
            })
            .collect();

        Ok(CredentialTable::new(records))
    }

    fn read(&self) -> DashgateResult<CredentialTable> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| DashgateError::ConfigError {
                reason: format!("failed to read secrets file '{}': {}", self.path.display(), e),
            })?;
        Self::table_from_toml_str(&contents)
    }
}

impl CredentialSource for TomlSecretSource {
    /// Read the secrets file fresh. Any error collapses to an empty table.
    fn load(&self) -> CredentialTable {
        match self.read() {
            Ok(table) => {
                debug!(path = %self.path.display(), records = table.len(), "secrets read");
                table
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "secrets unusable");
                CredentialTable::default()
            }
        }
    }
}
