//! doseguard — Medication Safety Demo CLI
//!
//! Runs one or all of the three medication safety scenarios. Each
//! scenario uses real doseguard components (formulary, rule engine,
//! governance logger, hash-chained sink) wired together with mock
//! clinical data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- renal-cutoff
//!   cargo run -p demo -- stale-labs
//!   cargo run -p demo -- override-flow

mod mock_data;
mod scenarios;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scenarios::{override_flow, renal_cutoff, stale_labs};

// ── CLI definition ────────────────────────────────────────────────────────────

/// doseguard — DOAC safety evaluation and governance demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "doseguard medication safety demo",
    long_about = "Runs doseguard demo scenarios showing the attestation gate,\n\
                  the DOAC rule engine, the override workflow, and governance\n\
                  chain integrity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: Renal cutoff block (rivaroxaban at CrCl 12).
    RenalCutoff,
    /// Scenario 2: Stale renal labs trigger the attestation gate.
    StaleLabs,
    /// Scenario 3: Override workflow against a blocked verdict.
    OverrideFlow,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
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
        Command::RenalCutoff => renal_cutoff::run_scenario(),
        Command::StaleLabs => stale_labs::run_scenario(),
        Command::OverrideFlow => override_flow::run_scenario(),
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

fn run_all() -> doseguard_contracts::error::SafetyResult<()> {
    renal_cutoff::run_scenario()?;
    stale_labs::run_scenario()?;
    override_flow::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("doseguard — Medication Safety Evaluation & Governance");
    println!("=====================================================");
    println!();
    println!("Pipeline per evaluation:");
    println!("  [1] Attestation gate: critical fields present and renal labs fresh");
    println!("  [2] DOAC rule engine: formulary cutoff + secondary cautions");
    println!("  [3] Override workflow: reason-coded, documented, auditable");
    println!("  [4] Every decision appended to the SHA-256 governance chain");
    println!();
}
