//! dashgate — Demo CLI
//!
//! A text stand-in for the portal's login page and dashboard screen. Wires
//! real dashgate components (credential source, authenticator, session
//! ledger) into a full login → dashboard → logout cycle against local files.
//!
//! Usage:
//!   cargo run -p demo -- seed
//!   cargo run -p demo -- login --email ana@x.com --password 123
//!   cargo run -p demo -- login --secrets secrets.toml --email ana@x.com --password 123
//!   cargo run -p demo -- sessions

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dashgate_audit::CsvLedger;
use dashgate_contracts::{DashboardView, DashgateError};
use dashgate_core::{traits::CredentialSource, Portal};
use dashgate_credentials::{CsvCredentialSource, TomlSecretSource};

/// Pause after a successful login, matching the portal's UI feedback beat.
const LOGIN_FEEDBACK_DELAY: Duration = Duration::from_millis(500);

// ── CLI definition ────────────────────────────────────────────────────────────

/// dashgate — internal dashboard access portal demo.
///
/// Authenticates against a local credential file (CSV or TOML secrets),
/// records the session in the CSV ledger, and prints the dashboard the
/// matched user would see.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "dashgate access portal demo",
    long_about = "Runs the dashgate login flow against local files: credential lookup,\n\
                  session ledger bookkeeping, and dashboard URL resolution."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a sample usuarios.csv credential file.
    Seed {
        /// Where to write the sample credential file.
        #[arg(long, default_value = "usuarios.csv")]
        credentials: PathBuf,
    },
    /// Run one full login → dashboard → logout cycle.
    Login {
        /// Login email (matched case-insensitively).
        #[arg(long, short)]
        email: String,
        /// Login password (matched case-sensitively).
        #[arg(long, short)]
        password: String,
        /// CSV credential file to authenticate against.
        #[arg(long, default_value = "usuarios.csv")]
        credentials: PathBuf,
        /// Use a TOML secrets file instead of the CSV credential file.
        #[arg(long)]
        secrets: Option<PathBuf>,
        /// Session ledger file.
        #[arg(long, default_value = "logs_acesso.csv")]
        ledger: PathBuf,
    },
    /// List every session ledger row, open and closed.
    Sessions {
        /// Session ledger file.
        #[arg(long, default_value = "logs_acesso.csv")]
        ledger: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Seed { credentials } => seed(&credentials),
        Command::Login { email, password, credentials, secrets, ledger } => {
            run_login(&email, &password, credentials, secrets, ledger)
        }
        Command::Sessions { ledger } => list_sessions(ledger),
    };

    if let Err(message) = result {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn seed(path: &PathBuf) -> Result<(), String> {
    let sample = "nome,email,senha,link\n\
                  Ana Souza,ana@x.com,123,https://bi.example/panels/ana\n\
                  Bruno Lima,bruno@x.com,Secret1,\n";
    std::fs::write(path, sample)
        .map_err(|e| format!("could not write '{}': {}", path.display(), e))?;
    println!("sample credential file written to {}", path.display());
    Ok(())
}

fn run_login(
    email: &str,
    password: &str,
    credentials: PathBuf,
    secrets: Option<PathBuf>,
    ledger: PathBuf,
) -> Result<(), String> {
    let source: Box<dyn CredentialSource> = match secrets {
        Some(path) => Box::new(TomlSecretSource::new(path)),
        None => Box::new(CsvCredentialSource::new(credentials)),
    };
    let portal = Portal::new(source, Box::new(CsvLedger::new(ledger)));

    let outcome = portal.login(email, password).map_err(|e| match e {
        DashgateError::AccessDenied => "access denied; check email and password".to_string(),
        other => other.to_string(),
    })?;

    if let Some(warning) = &outcome.audit_warning {
        eprintln!("warning: session not recorded: {}", warning);
    }

    let mut session = outcome.session;
    let user = session.user.clone().ok_or("session missing user record")?;

    println!("authenticated");
    println!("  user:  {}", user.display_name.as_deref().unwrap_or("unknown"));
    println!("  email: {}", user.email);
    match user.dashboard_view() {
        DashboardView::Embedded { url } => println!("  dashboard: {}", url),
        DashboardView::NoPanelLinked => println!("  dashboard: no panel linked to this user"),
    }

    // The portal shows a brief confirmation before switching screens.
    std::thread::sleep(LOGIN_FEEDBACK_DELAY);

    portal.logout(&mut session);
    println!("logged out");
    Ok(())
}

fn list_sessions(ledger: PathBuf) -> Result<(), String> {
    let ledger = CsvLedger::new(ledger);
    let rows = ledger.rows().map_err(|e| e.to_string())?;

    if rows.is_empty() {
        println!("no sessions recorded");
        return Ok(());
    }

    for row in rows {
        let status = if row.is_open() {
            "open".to_string()
        } else {
            format!(
                "closed {} {} ({})",
                row.data_logout.as_deref().unwrap_or(""),
                row.hora_logout.as_deref().unwrap_or(""),
                row.tempo_sessao.as_deref().unwrap_or(""),
            )
        };
        println!(
            "{} {} {:<20} {:<24} {}",
            row.data_login, row.hora_login, row.usuario, row.email, status
        );
    }
    Ok(())
}
