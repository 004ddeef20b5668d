//! Command handlers shared by the binary and the tests.
//!
//! Each handler writes its user-facing output to the supplied writer and
//! returns errors through `anyhow`, leaving process concerns (exit status,
//! stdout locking) to `main`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info, warn};

use equity_core::advisor::StubAdvisorFactory;
use equity_core::{AdvisorRegistry, MarketAdvisor, PropertyAddress, RawInputs, RetryingAdvisor};
use equity_gemini::GeminiAdvisorFactory;

use crate::config::{AppConfig, LoggingSettings};
use crate::inquiry::{CalculatorSummary, ContactForm, Inquiry};
use crate::report::{Report, share_summary};
use crate::session::CalculatorSession;
use crate::sweep::{SliderRange, SweepField, sweep};
use crate::{csv_loader, export, logging};

/// Registry with every advisor backend this build knows about.
pub fn build_registry() -> AdvisorRegistry {
    let mut registry = AdvisorRegistry::new();
    registry.register(Box::new(StubAdvisorFactory));
    registry.register(Box::new(GeminiAdvisorFactory));
    registry
}

/// Applies the `[logging]` section. `RUST_LOG`, when set, wins over the
/// configured level.
pub fn configure_logging(settings: &LoggingSettings) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        logging::set_log_level(&settings.level)?;
    }
    logging::set_console_enabled(settings.console)?;
    match &settings.file {
        Some(path) => logging::enable_file_logging(path)?,
        None => logging::disable_file_logging(),
    }
    Ok(())
}

/// Builds the configured advisor, wrapped so value estimates are retried.
pub async fn create_advisor(config: &AppConfig) -> Result<RetryingAdvisor> {
    let registry = build_registry();
    debug!(backend = %config.advisor.backend, "creating market advisor");
    let inner = registry
        .create(&config.advisor)
        .await
        .with_context(|| format!("cannot start the '{}' advisor", config.advisor.backend))?;
    Ok(RetryingAdvisor::new(inner, config.retry.policy()))
}

/// Prints the report (or the validation errors). Returns whether the
/// inputs were valid.
pub fn run_calc(
    session: &CalculatorSession,
    as_json: bool,
    out: &mut impl Write,
) -> Result<bool> {
    match session.outcome() {
        Ok(results) => {
            let report = Report::new(session.parsed(), results);
            if as_json {
                writeln!(out, "{}", report.to_json()?)?;
            } else {
                write!(out, "{report}")?;
                writeln!(out)?;
                writeln!(out, "{}", share_summary(results))?;
            }
            Ok(true)
        }
        Err(errors) => {
            if as_json {
                let body = json!({ "errors": errors });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                write!(out, "{errors}")?;
            }
            Ok(false)
        }
    }
}

/// Emits one CSV row per slider position.
pub fn run_sweep(
    base: &RawInputs,
    field: SweepField,
    range: SliderRange,
    out: &mut impl Write,
) -> Result<()> {
    let points = sweep(base, field, range)?;
    export::write_outcomes(
        out,
        field.field().as_str(),
        points.iter().map(|p| (p.value.to_string(), &p.outcome)),
    )
    .context("failed to write sweep CSV")?;
    Ok(())
}

/// Evaluates every scenario in a CSV file and emits the outcomes as CSV.
pub fn run_batch(
    path: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let scenarios = csv_loader::load_from_file(path)
        .with_context(|| format!("failed to load scenarios from '{}'", path.display()))?;
    info!(rows = scenarios.len(), "evaluating batch");

    let outcomes: Vec<_> = scenarios.iter().map(equity_core::evaluate).collect();
    let invalid = outcomes.iter().filter(|o| o.is_err()).count();
    if invalid > 0 {
        warn!(invalid, "some scenarios failed validation");
    }

    export::write_outcomes(
        out,
        "row",
        outcomes
            .iter()
            .enumerate()
            .map(|(idx, outcome)| ((idx + 1).to_string(), outcome)),
    )
    .context("failed to write batch CSV")?;
    Ok(())
}

/// Estimates the home value at `address`; with `apply` the estimate becomes
/// the current home value and the report is recomputed.
pub async fn run_estimate(
    advisor: &dyn MarketAdvisor,
    address: &PropertyAddress,
    session: &mut CalculatorSession,
    apply: bool,
    out: &mut impl Write,
) -> Result<()> {
    let value = advisor
        .estimate_value(address)
        .await
        .context("Could not retrieve an estimate. Please try again or enter a value manually.")?;

    writeln!(
        out,
        "Estimated value of {address}: {}",
        equity_core::calculations::common::format_currency(value)
    )?;

    if apply {
        session.apply_estimate(value);
        writeln!(out)?;
        run_calc(session, false, out)?;
    }
    Ok(())
}

/// Fetches market commentary and an illustrative image at the same time.
pub async fn run_insight(
    advisor: &dyn MarketAdvisor,
    session: &CalculatorSession,
    out: &mut impl Write,
) -> Result<()> {
    let Some(results) = session.results().filter(|_| session.can_get_insight()) else {
        bail!("enter a valid scenario with a new home price before asking for insights");
    };
    let price = session.parsed().new_home_price;

    let (insight, image) = tokio::try_join!(
        advisor.get_insight(price, results.new_monthly_payment),
        advisor.get_image(price),
    )
    .context("Failed to get AI insights. Please check your API key and try again.")?;

    writeln!(out, "{}", insight.trim_end())?;
    writeln!(out)?;
    writeln!(out, "Image: {}", image.to_data_url())?;
    Ok(())
}

/// Validates the contact form and prints the composed email and link.
pub fn run_inquiry(
    form: &ContactForm,
    session: &CalculatorSession,
    recipient: &str,
    out: &mut impl Write,
) -> Result<()> {
    let raw = session.inputs();
    let summary = session.results().map(|results| CalculatorSummary {
        raw,
        parsed: session.parsed(),
        results,
    });

    let inquiry = Inquiry::compose(form, summary)?;
    writeln!(out, "Subject: {}", inquiry.subject)?;
    writeln!(out)?;
    write!(out, "{}", inquiry.body)?;
    writeln!(out)?;
    writeln!(out, "{}", inquiry.mailto(recipient))?;
    Ok(())
}
