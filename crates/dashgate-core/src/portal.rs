//! The portal: the login/logout flow driver.
//!
//! The portal enforces the access flow:
//!
//!   Load credentials → Authenticate → Open ledger row → Populated session
//!
//! and on logout:
//!
//!   Close ledger row → Cleared session
//!
//! Failure handling is deliberately asymmetric. A broken credential source
//! blocks every login; a failed ledger write at login is reported but does
//! not block access; a failed ledger write at logout is swallowed inside
//! the ledger so the user always reaches the logged-out state.

use tracing::{debug, info, warn};

use dashgate_contracts::{
    error::{DashgateError, DashgateResult},
    session::SessionContext,
};

use crate::auth::authenticate;
use crate::traits::{CredentialSource, SessionLedger};

/// Display name written to the ledger when a record carries no `nome`.
const UNKNOWN_USER: &str = "unknown";

/// The result of a successful login.
///
/// `audit_warning` is populated when the ledger row could not be written;
/// the session is still fully authenticated in that case, just without a
/// handle for logout to close.
#[derive(Debug)]
pub struct LoginOutcome {
    /// The populated session state to hand back to the caller.
    pub session: SessionContext,

    /// Human-readable ledger failure, if the open row was not persisted.
    pub audit_warning: Option<String>,
}

/// The access portal: owns the credential source and the session ledger
/// and drives one login or logout at a time.
///
/// Every call is synchronous and re-reads the credential source — there is
/// no cache, no retry, and no background work.
pub struct Portal {
    source: Box<dyn CredentialSource>,
    ledger: Box<dyn SessionLedger>,
}

impl Portal {
    /// Build a portal from a credential source and a session ledger.
    pub fn new(source: Box<dyn CredentialSource>, ledger: Box<dyn SessionLedger>) -> Self {
        Self { source, ledger }
    }

    /// Attempt a login with the submitted credentials.
    ///
    /// # Pipeline
    ///
    /// 1. `source.load()` — a fresh table on every attempt. An empty table
    ///    means the source is missing, malformed, or has no users; this is
    ///    a `ConfigError`, distinct from a credential mismatch.
    /// 2. `authenticate()` — first exact match wins; no match is a generic
    ///    `AccessDenied` with no field detail.
    /// 3. `ledger.open()` — append the open row. A failure here is carried
    ///    in `LoginOutcome::audit_warning`; the login still succeeds.
    ///
    /// # Errors
    ///
    /// `ConfigError` and `AccessDenied` only. Ledger failures never abort
    /// a login.
    pub fn login(&self, email: &str, password: &str) -> DashgateResult<LoginOutcome> {
        // ── Step 1: Load the credential table ────────────────────────────
        let table = self.source.load();

        if table.is_empty() {
            warn!("credential table is empty; refusing all logins");
            return Err(DashgateError::ConfigError {
                reason: "credential source produced no usable records".to_string(),
            });
        }

        debug!(records = table.len(), "credential table loaded");

        // ── Step 2: Match the submitted credentials ──────────────────────
        let Some(user) = authenticate(&table, email, password) else {
            info!("login attempt did not match any record");
            return Err(DashgateError::AccessDenied);
        };

        let display_name = user.display_name.as_deref().unwrap_or(UNKNOWN_USER);

        // ── Step 3: Record the login in the session ledger ───────────────
        //
        // Non-fatal: an unauditable login is still a login.
        let (ledger_handle, login_time, audit_warning) =
            match self.ledger.open(display_name, &user.email) {
                Ok((handle, start)) => {
                    info!(
                        handle = %handle,
                        email = %user.email,
                        "session opened"
                    );
                    (Some(handle), Some(start), None)
                }
                Err(e) => {
                    warn!(error = %e, "ledger row not written; login proceeds unaudited");
                    (None, None, Some(e.to_string()))
                }
            };

        let session = SessionContext {
            authenticated: true,
            user: Some(user),
            ledger_handle,
            login_time,
        };

        Ok(LoginOutcome { session, audit_warning })
    }

    /// Log the session out.
    ///
    /// Closes the ledger row when a handle exists (the ledger swallows its
    /// own errors), then clears the session to its empty state. Calling
    /// this on an unauthenticated or already-cleared session just clears it
    /// again.
    pub fn logout(&self, session: &mut SessionContext) {
        if let (Some(handle), Some(start)) = (session.ledger_handle, session.login_time) {
            debug!(handle = %handle, "closing session ledger row");
            self.ledger.close(handle, start);
        }

        session.clear();
        info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{DateTime, Local};

    use dashgate_contracts::{
        credential::{CredentialRecord, CredentialTable},
        error::{DashgateError, DashgateResult},
        session::LedgerHandle,
    };

    use super::*;
    use crate::traits::{CredentialSource, SessionLedger};

    // ── Test doubles ─────────────────────────────────────────────────────────

    /// A source returning a fixed table.
    struct StaticSource(CredentialTable);

    impl CredentialSource for StaticSource {
        fn load(&self) -> CredentialTable {
            self.0.clone()
        }
    }

    /// A ledger that records open/close calls in memory.
    #[derive(Default)]
    struct RecordingLedger {
        opened: Mutex<Vec<(String, String)>>,
        closed: Mutex<Vec<LedgerHandle>>,
    }

    impl SessionLedger for RecordingLedger {
        fn open(
            &self,
            display_name: &str,
            email: &str,
        ) -> DashgateResult<(LedgerHandle, DateTime<Local>)> {
            self.opened
                .lock()
                .unwrap()
                .push((display_name.to_string(), email.to_string()));
            Ok((LedgerHandle::new(), Local::now()))
        }

        fn close(&self, handle: LedgerHandle, _start: DateTime<Local>) {
            self.closed.lock().unwrap().push(handle);
        }
    }

    /// Forwards to a leaked `RecordingLedger` so a test can inspect the
    /// calls after the portal has taken ownership of its own box.
    struct SharedLedger(&'static RecordingLedger);

    impl SessionLedger for SharedLedger {
        fn open(
            &self,
            display_name: &str,
            email: &str,
        ) -> DashgateResult<(LedgerHandle, DateTime<Local>)> {
            self.0.open(display_name, email)
        }

        fn close(&self, handle: LedgerHandle, start: DateTime<Local>) {
            self.0.close(handle, start)
        }
    }

    fn shared_ledger() -> &'static RecordingLedger {
        Box::leak(Box::new(RecordingLedger::default()))
    }

    /// A ledger whose open always fails.
    struct FailingLedger;

    impl SessionLedger for FailingLedger {
        fn open(
            &self,
            _display_name: &str,
            _email: &str,
        ) -> DashgateResult<(LedgerHandle, DateTime<Local>)> {
            Err(DashgateError::AuditWriteFailed { reason: "disk full".to_string() })
        }

        fn close(&self, _handle: LedgerHandle, _start: DateTime<Local>) {}
    }

    fn one_user() -> CredentialTable {
        CredentialTable::new(vec![CredentialRecord {
            display_name: Some("Ana Souza".to_string()),
            email: "ana@x.com".to_string(),
            password: "123".to_string(),
            dashboard_url: Some("https://bi.example/ana".to_string()),
        }])
    }

    fn portal_with(table: CredentialTable) -> Portal {
        Portal::new(Box::new(StaticSource(table)), Box::new(RecordingLedger::default()))
    }

    // ── Login ────────────────────────────────────────────────────────────────

    /// A matching login populates every session field.
    #[test]
    fn login_populates_session() {
        let portal = portal_with(one_user());
        let outcome = portal.login("ana@x.com", "123").unwrap();

        assert!(outcome.session.authenticated);
        assert!(outcome.session.ledger_handle.is_some());
        assert!(outcome.session.login_time.is_some());
        assert!(outcome.audit_warning.is_none());
        assert_eq!(outcome.session.user.unwrap().email, "ana@x.com");
    }

    /// An empty table is a configuration error, not a generic denial.
    #[test]
    fn empty_table_is_config_error_not_denial() {
        let portal = portal_with(CredentialTable::default());
        match portal.login("ana@x.com", "123") {
            Err(DashgateError::ConfigError { .. }) => {}
            other => panic!("expected ConfigError, got {:?}", other.map(|o| o.session)),
        }
    }

    /// A non-matching pair is denied with no detail.
    #[test]
    fn wrong_password_is_access_denied() {
        let portal = portal_with(one_user());
        assert!(matches!(portal.login("ana@x.com", "wrong"), Err(DashgateError::AccessDenied)));
        assert!(matches!(portal.login("nobody@x.com", "123"), Err(DashgateError::AccessDenied)));
    }

    /// A ledger failure at login is reported but does not block access.
    #[test]
    fn ledger_failure_still_logs_in() {
        let portal = Portal::new(Box::new(StaticSource(one_user())), Box::new(FailingLedger));
        let outcome = portal.login("ana@x.com", "123").unwrap();

        assert!(outcome.session.authenticated);
        assert!(outcome.session.ledger_handle.is_none());
        assert!(outcome.session.login_time.is_none());
        assert!(outcome.audit_warning.unwrap().contains("disk full"));
    }

    /// The ledger receives the record's display name, or a fallback when
    /// the record has none.
    #[test]
    fn ledger_row_uses_display_name_with_fallback() {
        let ledger = shared_ledger();
        let table = CredentialTable::new(vec![CredentialRecord {
            display_name: None,
            email: "bruno@x.com".to_string(),
            password: "pw".to_string(),
            dashboard_url: None,
        }]);

        let portal = Portal::new(Box::new(StaticSource(table)), Box::new(SharedLedger(ledger)));
        portal.login("bruno@x.com", "pw").unwrap();

        let opened = ledger.opened.lock().unwrap();
        assert_eq!(opened.as_slice(), &[("unknown".to_string(), "bruno@x.com".to_string())]);
    }

    // ── Logout ───────────────────────────────────────────────────────────────

    /// Logout closes the ledger row exactly once and clears the session.
    #[test]
    fn logout_closes_row_and_clears_session() {
        let ledger = shared_ledger();
        let portal =
            Portal::new(Box::new(StaticSource(one_user())), Box::new(SharedLedger(ledger)));
        let mut session = portal.login("ana@x.com", "123").unwrap().session;
        let handle = session.ledger_handle.unwrap();

        portal.logout(&mut session);

        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert_eq!(ledger.closed.lock().unwrap().as_slice(), &[handle]);

        // A second logout on the cleared session is a no-op on the ledger.
        portal.logout(&mut session);
        assert_eq!(ledger.closed.lock().unwrap().len(), 1);
    }

    /// Logout with no ledger handle (open failed at login) only clears.
    #[test]
    fn logout_without_handle_only_clears() {
        let portal = Portal::new(Box::new(StaticSource(one_user())), Box::new(FailingLedger));
        let mut session = portal.login("ana@x.com", "123").unwrap().session;

        portal.logout(&mut session);
        assert!(!session.authenticated);
    }
}
