//! # dashgate-credentials
//!
//! Credential sources for the dashgate access portal.
//!
//! Two `CredentialSource` implementations behind one interface:
//!
//! - `CsvCredentialSource` — a spreadsheet-maintained CSV file with a
//!   flexible header row, folded through a declarative alias table
//! - `TomlSecretSource`   — a deploy-managed TOML secrets list with a
//!   fixed schema
//!
//! Both re-read their backing store on every `load()` and collapse any
//! failure into an empty table; the portal turns that into a configuration
//! error.

pub mod alias;
pub mod file;
pub mod secrets;

pub use file::CsvCredentialSource;
pub use secrets::TomlSecretSource;
