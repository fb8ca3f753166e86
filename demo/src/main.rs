//! SATYA Banking Reference Runtime — Demo CLI
//!
//! Runs one or all of the four banking demo scenarios.  Each scenario uses
//! real SATYA components (requirement rules, verification pipeline, audit
//! trail) wired together with a mock vision classifier.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- account-opening
//!   cargo run -p demo -- missing-documents
//!   cargo run -p demo -- tampered-document
//!   cargo run -p demo -- identity-mismatch

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use satya_ref_banking::scenarios::{
    account_opening, identity_mismatch, missing_documents, tampered_document,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// SATYA — Document verification runtime banking demo.
///
/// Each subcommand runs one or all of the four verification scenarios,
/// demonstrating requirement resolution, cross-checking, and decisioning.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "SATYA banking reference runtime demo",
    long_about = "Runs SATYA banking demo scenarios showing requirement resolution,\n\
                  concurrent classification, cross-document consistency checks,\n\
                  and the priority-ordered decision engine."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four banking scenarios in sequence.
    RunAll,
    /// Scenario 1: Savings Account Opening (APPROVED + consent redaction).
    AccountOpening,
    /// Scenario 2: Missing Documents (REJECTED + unknown-purpose fallback).
    MissingDocuments,
    /// Scenario 3: Tampered Document (REJECTED despite complete slots).
    TamperedDocument,
    /// Scenario 4: Identity Mismatch (REVIEW_REQUIRED + degradation).
    IdentityMismatch,
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

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::AccountOpening => account_opening::run_scenario(),
        Command::MissingDocuments => missing_documents::run_scenario(),
        Command::TamperedDocument => tampered_document::run_scenario(),
        Command::IdentityMismatch => identity_mismatch::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> satya_contracts::error::SatyaResult<()> {
    account_opening::run_scenario()?;
    missing_documents::run_scenario()?;
    tampered_document::run_scenario()?;
    identity_mismatch::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("SATYA — Document Verification Runtime");
    println!("Banking Reference Demo");
    println!("=====================================");
    println!();
    println!("SATYA pipeline per verification request:");
    println!("  [1] Requirement rules resolve the purpose to slots (OR-groups included)");
    println!("  [2] All uploads classify concurrently; failures degrade, never abort");
    println!("  [3] Barrier — cross-checks run only after every classification joins");
    println!("  [4] Decision engine: missing > tamper > identity mismatch > quality");
    println!("  [5] Assembly: consent-gated redaction + hash-chained audit trail");
    println!();
}
