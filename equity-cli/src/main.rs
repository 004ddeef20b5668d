use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use equity_cli::config::{AppConfig, DEFAULT_CONFIG_PATH};
use equity_cli::inquiry::ContactForm;
use equity_cli::session::CalculatorSession;
use equity_cli::sweep::{SliderRange, SweepField};
use equity_cli::utils::{apply_assignments, parse_assignment};
use equity_cli::{app, logging};
use equity_core::FormField;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Equity to Opportunity calculator.
///
/// Shows how the equity in your current home, after paying off some of your
/// other debts, turns into a down payment and a new monthly payment.
#[derive(Debug, Parser)]
#[command(name = "equity-calc", version)]
struct Cli {
    /// Configuration file. Defaults to `equity-calc.toml` when it exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides one form field, e.g. `--set newHomePrice=650000`.
    /// May be repeated.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, global = true)]
    set: Vec<(FormField, String)>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validates the form and prints the full breakdown.
    Calc {
        /// Print JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Recomputes the scenario for each position of one slider (CSV).
    Sweep {
        #[arg(long, value_enum)]
        field: SweepField,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
        #[arg(long)]
        step: Option<f64>,
    },

    /// Evaluates every row of a scenarios CSV file (CSV).
    Batch {
        file: PathBuf,
    },

    /// Asks the market advisor what the current home is worth.
    EstimateValue {
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        /// Use the estimate as the current home value and print the report.
        #[arg(long)]
        apply: bool,
    },

    /// Market commentary and an illustrative image for the new home.
    Insight,

    /// Composes an inquiry email with a summary of the calculation.
    Inquiry {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let (path, required) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    debug!(path = %path.display(), required, "loading config");
    AppConfig::load(&path, required)
        .with_context(|| format!("failed to load '{}'", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init_default_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    app::configure_logging(&config.logging)?;

    let mut inputs = config.initial_inputs()?;
    apply_assignments(&mut inputs, &cli.set);
    let mut session = CalculatorSession::new(inputs);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Calc { json } => {
            if !app::run_calc(&session, json, &mut out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Sweep {
            field,
            min,
            max,
            step,
        } => {
            let defaults = field.default_range();
            let range = SliderRange {
                min: min.unwrap_or(defaults.min),
                max: max.unwrap_or(defaults.max),
                step: step.unwrap_or(defaults.step),
            };
            app::run_sweep(session.inputs(), field, range, &mut out)?;
        }
        Command::Batch { file } => {
            app::run_batch(&file, &mut out)?;
        }
        Command::EstimateValue {
            street,
            city,
            state,
            zip,
            apply,
        } => {
            let address = config.address.resolve(
                &street,
                city.as_deref(),
                state.as_deref(),
                zip.as_deref(),
            );
            let advisor = app::create_advisor(&config).await?;
            app::run_estimate(&advisor, &address, &mut session, apply, &mut out).await?;
        }
        Command::Insight => {
            let advisor = app::create_advisor(&config).await?;
            app::run_insight(&advisor, &session, &mut out).await?;
        }
        Command::Inquiry {
            name,
            email,
            phone,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                phone,
                message,
            };
            app::run_inquiry(&form, &session, &config.inquiry.recipient, &mut out)?;
        }
    }

    out.flush()?;
    debug!("done");
    Ok(ExitCode::SUCCESS)
}
