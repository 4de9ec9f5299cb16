//! # dashgate-audit
//!
//! File-backed session ledger for the dashgate access portal.
//!
//! ## Overview
//!
//! Every successful login appends one open row (login date/time, user,
//! email) to a CSV ledger; the matching logout fills the row's logout
//! date/time and session duration. Rows are addressed by a generated
//! identifier rather than by file position, and are never deleted — a
//! session that ends without a logout leaves its row open permanently.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dashgate_audit::CsvLedger;
//! use dashgate_core::traits::SessionLedger;
//!
//! let ledger = CsvLedger::new("logs_acesso.csv");
//! let (handle, start) = ledger.open("Ana Souza", "ana@x.com")?;
//! // ... session runs ...
//! ledger.close(handle, start);
//! ```

pub mod ledger;

pub use ledger::CsvLedger;
