use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use roi_core::ReportKind;
use rust_decimal::Decimal;
use tracing::debug;

use roi_cli::app::{self, RunOptions};
use roi_cli::render::{CashFlowTable, SessionSummary};
use roi_cli::scenario::Scenario;
use roi_cli::logging::{self, LogOptions};
use roi_cli::{config, csv_loader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Return-on-investment calculator for leased commercial property.
///
/// Runs calculator scenarios through the same wizard steps as the app:
/// property, lease, expenses and financials, then prints the result.
#[derive(Debug, Parser)]
#[command(name = "roi", version, about)]
struct Cli {
    /// Engine configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `roi_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate one scenario file.
    Run {
        /// Scenario file (TOML).
        scenario: PathBuf,

        /// Print the year-by-year cash-flow projection.
        #[arg(long, default_value_t = false)]
        cash_flow: bool,

        /// Solve a counter-offer price for this ROI percentage.
        #[arg(long, value_name = "ROI")]
        counter_offer: Option<Decimal>,

        /// Write a CSV report to this path.
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,

        /// Which report to export.
        #[arg(long, value_enum, default_value_t = ReportArg::Standard)]
        report: ReportArg,
    },

    /// Calculate every scenario in a CSV file and print one line each.
    Batch {
        /// Scenario CSV file.
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportArg {
    Standard,
    CounterOffer,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Standard => ReportKind::Standard,
            ReportArg::CounterOffer => ReportKind::CounterOffer,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogOptions {
        filter: cli.log_level.as_deref(),
        file: cli.log_file.as_deref(),
    })?;

    let engine_config = config::load_engine_config(cli.config.as_deref())?;
    debug!(?engine_config, "starting");

    match cli.command {
        Command::Run {
            scenario,
            cash_flow,
            counter_offer,
            export,
            report,
        } => {
            let loaded = Scenario::load(&scenario)
                .with_context(|| format!("Failed to load scenario: {}", scenario.display()))?;
            let options = RunOptions {
                cash_flow,
                counter_offer_roi: counter_offer,
                export: export.as_deref(),
                report_kind: report.into(),
            };

            let wizard = app::run_scenario(&loaded, engine_config, &options)?;

            println!("{}", loaded.display_name());
            println!();
            println!("{}", SessionSummary(wizard.session()));
            if cash_flow {
                println!();
                println!("{}", CashFlowTable(wizard.session()));
            }
            if let Some(path) = &export {
                println!();
                println!("Report written to {}", path.display());
            }
        }
        Command::Batch { file } => {
            let scenarios = csv_loader::load_from_file(&file)
                .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;
            println!("Loaded {} scenarios", scenarios.len());

            for outcome in app::run_batch(&scenarios, &engine_config) {
                println!("{outcome}");
            }
        }
    }

    Ok(())
}
