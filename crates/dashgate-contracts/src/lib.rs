//! # dashgate-contracts
//!
//! Shared types and error contracts for the dashgate access portal.
//!
//! All crates in the workspace import from here. No I/O lives in this crate
//! — only data definitions, the error taxonomy, and small formatting helpers.

pub mod audit;
pub mod credential;
pub mod error;
pub mod session;

pub use audit::{format_duration, AuditRow};
pub use credential::{CredentialRecord, CredentialTable, DashboardView};
pub use error::{DashgateError, DashgateResult};
pub use session::{LedgerHandle, SessionContext};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeDelta};

    fn record(email: &str, link: Option<&str>) -> CredentialRecord {
        CredentialRecord {
            display_name: Some("Ana Souza".to_string()),
            email: email.to_string(),
            password: "123".to_string(),
            dashboard_url: link.map(str::to_string),
        }
    }

    // ── DashboardView ────────────────────────────────────────────────────────

    #[test]
    fn dashboard_view_with_url_embeds() {
        let r = record("ana@x.com", Some("https://bi.example/panel/1"));
        assert_eq!(
            r.dashboard_view(),
            DashboardView::Embedded { url: "https://bi.example/panel/1".to_string() }
        );
    }

    #[test]
    fn dashboard_view_blank_url_shows_notice() {
        // A record with an empty link still authenticates, but the surface
        // must fall back to the "no panel linked" notice.
        assert_eq!(record("ana@x.com", Some("")).dashboard_view(), DashboardView::NoPanelLinked);
        assert_eq!(record("ana@x.com", Some("   ")).dashboard_view(), DashboardView::NoPanelLinked);
        assert_eq!(record("ana@x.com", None).dashboard_view(), DashboardView::NoPanelLinked);
    }

    #[test]
    fn dashboard_view_trims_surrounding_whitespace() {
        let r = record("ana@x.com", Some("  https://bi.example/p  "));
        assert_eq!(
            r.dashboard_view(),
            DashboardView::Embedded { url: "https://bi.example/p".to_string() }
        );
    }

    // ── SessionContext lifecycle ─────────────────────────────────────────────

    #[test]
    fn session_context_starts_empty() {
        let ctx = SessionContext::default();
        assert!(!ctx.authenticated);
        assert!(ctx.user.is_none());
        assert!(ctx.ledger_handle.is_none());
        assert!(ctx.login_time.is_none());
    }

    #[test]
    fn session_context_clear_resets_all_fields() {
        let mut ctx = SessionContext {
            authenticated: true,
            user: Some(record("ana@x.com", None)),
            ledger_handle: Some(LedgerHandle::new()),
            login_time: Some(Local::now()),
        };

        ctx.clear();

        assert!(!ctx.authenticated);
        assert!(ctx.user.is_none());
        assert!(ctx.ledger_handle.is_none());
        assert!(ctx.login_time.is_none());
    }

    // ── LedgerHandle ─────────────────────────────────────────────────────────

    #[test]
    fn ledger_handle_new_produces_unique_values() {
        let handles: std::collections::HashSet<String> =
            (0..100).map(|_| LedgerHandle::new().to_string()).collect();
        assert_eq!(handles.len(), 100);
    }

    // ── Duration formatting ──────────────────────────────────────────────────

    #[test]
    fn format_duration_drops_subsecond_precision() {
        let elapsed = TimeDelta::seconds(307) + TimeDelta::milliseconds(891);
        assert_eq!(format_duration(elapsed), "0:05:07");
    }

    #[test]
    fn format_duration_zero_and_negative_clamp() {
        assert_eq!(format_duration(TimeDelta::zero()), "0:00:00");
        assert_eq!(format_duration(TimeDelta::seconds(-5)), "0:00:00");
    }

    #[test]
    fn format_duration_hours_are_unpadded() {
        assert_eq!(format_duration(TimeDelta::seconds(3_661)), "1:01:01");
        assert_eq!(format_duration(TimeDelta::seconds(26 * 3600 + 62)), "26:01:02");
    }

    // ── AuditRow ─────────────────────────────────────────────────────────────

    #[test]
    fn audit_row_opens_open_and_closes_once() {
        let start = Local::now();
        let mut row = AuditRow::open(LedgerHandle::new(), start, "Ana Souza", "ana@x.com");

        assert!(row.is_open());
        assert_eq!(row.usuario, "Ana Souza");
        assert_eq!(row.email, "ana@x.com");
        assert_eq!(row.data_login, start.format(audit::DATE_FORMAT).to_string());

        row.close(start + TimeDelta::seconds(90), TimeDelta::seconds(90));
        assert!(!row.is_open());
        assert_eq!(row.tempo_sessao.as_deref(), Some("0:01:30"));
    }

    // ── DashgateError display messages ───────────────────────────────────────

    #[test]
    fn error_access_denied_carries_no_field_detail() {
        // Generic by design: callers must not learn which field was wrong.
        assert_eq!(DashgateError::AccessDenied.to_string(), "access denied");
    }

    #[test]
    fn error_config_error_display() {
        let err = DashgateError::ConfigError { reason: "usuarios.csv not found".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("usuarios.csv"));
    }

    #[test]
    fn error_audit_write_failed_display() {
        let err = DashgateError::AuditWriteFailed { reason: "disk full".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("ledger write failed"));
        assert!(msg.contains("disk full"));
    }
}
