use crate::core::calculator::round_to;
use crate::domain::model::{CalculationOutcome, OutcomeStatus, OutputFormat};
use crate::domain::ports::DisplaySettings;
use crate::utils::error::{AppError, ErrorSeverity, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedOutcome {
    pub status: OutcomeStatus,
    pub value: Option<f64>,
    pub message: String,
}

/// One-line message for an outcome, with values shown at `precision` decimals.
pub fn message(outcome: &CalculationOutcome, precision: usize) -> String {
    match outcome {
        CalculationOutcome::RequiredGpa(v) => format!(
            "You need to maintain a GPA of at least: {:.*} in each of the remaining semesters.",
            precision, v
        ),
        CalculationOutcome::AlreadyAchieved => {
            "Congratulations! You have already surpassed your target CGPA.".to_string()
        }
        CalculationOutcome::Impossible(v) => format!(
            "It's mathematically impossible to reach your target. You would need a GPA of {:.*} in the remaining semesters.",
            precision, v
        ),
        CalculationOutcome::InvalidInput(e) => e.reason(),
    }
}

impl RenderedOutcome {
    pub fn new(outcome: &CalculationOutcome, precision: usize) -> Self {
        Self {
            status: outcome.status(),
            value: outcome.value().map(|v| round_to(v, precision)),
            message: message(outcome, precision),
        }
    }
}

pub fn render_text(outcome: &CalculationOutcome, precision: usize) -> String {
    match outcome {
        CalculationOutcome::RequiredGpa(v) => format!(
            "You need to maintain a GPA of at least:\n{:.*}\nin each of the remaining semesters.",
            precision, v
        ),
        other => message(other, precision),
    }
}

pub fn render_json(outcome: &CalculationOutcome, precision: usize) -> Result<String> {
    Ok(serde_json::to_string_pretty(&RenderedOutcome::new(outcome, precision))?)
}

pub fn render<D: DisplaySettings>(outcome: &CalculationOutcome, settings: &D) -> Result<String> {
    match settings.output_format() {
        OutputFormat::Text => Ok(render_text(outcome, settings.precision())),
        OutputFormat::Json => render_json(outcome, settings.precision()),
    }
}

/// Exit status for a rendered outcome. `Impossible` and `InvalidInput`
/// get different codes so scripts can tell them apart.
pub fn outcome_exit_code(outcome: &CalculationOutcome) -> u8 {
    match outcome {
        CalculationOutcome::RequiredGpa(_) | CalculationOutcome::AlreadyAchieved => 0,
        CalculationOutcome::InvalidInput(_) => 1,
        CalculationOutcome::Impossible(_) => 2,
    }
}

/// Exit status when a run fails before an outcome can be shown. Never zero.
pub fn failure_exit_code(error: &AppError) -> u8 {
    match error.severity() {
        ErrorSeverity::Medium | ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    }
}
