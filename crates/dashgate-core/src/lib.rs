//! # dashgate-core
//!
//! The login/logout flow for the dashgate access portal.
//!
//! This crate provides:
//! - The two trait seams (`CredentialSource`, `SessionLedger`)
//! - The pure credential matcher (`auth::authenticate`)
//! - The `Portal` that wires source, matcher, and ledger together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dashgate_core::{Portal, traits::{CredentialSource, SessionLedger}};
//!
//! let portal = Portal::new(Box::new(source), Box::new(ledger));
//! let outcome = portal.login("ana@x.com", "123")?;
//! ```

pub mod auth;
pub mod portal;
pub mod traits;

pub use portal::{LoginOutcome, Portal};
