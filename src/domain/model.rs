use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the degree programme the formula assumes.
pub const TOTAL_SEMESTERS: i64 = 8;
pub const MIN_GPA: f64 = 1.0;
pub const MAX_GPA: f64 = 10.0;

/// Raw numbers taken from one submission. Not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub current_semester: i64,
    pub current_cgpa: f64,
    pub target_cgpa: f64,
}

/// Why a submission was rejected. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Please fill in all fields with valid numbers.")]
    NotANumber,

    #[error("CGPA values must be between 1 and 10.")]
    CgpaOutOfRange,

    #[error("Target CGPA cannot be lower than your current CGPA.")]
    TargetBelowCurrent,

    #[error("Current semester must be between 1 and 7.")]
    SemesterOutOfRange,
}

impl InputError {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationOutcome {
    /// Minimum GPA needed in each remaining semester, unrounded.
    RequiredGpa(f64),
    AlreadyAchieved,
    /// The requirement exceeds `MAX_GPA`; carries the unattainable value.
    Impossible(f64),
    InvalidInput(InputError),
}

impl CalculationOutcome {
    /// Only `InvalidInput` counts as an error. `Impossible` is a valid result.
    pub fn is_error(&self) -> bool {
        matches!(self, CalculationOutcome::InvalidInput(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            CalculationOutcome::RequiredGpa(v) | CalculationOutcome::Impossible(v) => Some(*v),
            _ => None,
        }
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            CalculationOutcome::RequiredGpa(_) => OutcomeStatus::Required,
            CalculationOutcome::AlreadyAchieved => OutcomeStatus::AlreadyAchieved,
            CalculationOutcome::Impossible(_) => OutcomeStatus::Impossible,
            CalculationOutcome::InvalidInput(_) => OutcomeStatus::InvalidInput,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Required,
    AlreadyAchieved,
    Impossible,
    InvalidInput,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Required => "required",
            OutcomeStatus::AlreadyAchieved => "already_achieved",
            OutcomeStatus::Impossible => "impossible",
            OutcomeStatus::InvalidInput => "invalid_input",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unsupported format: {}. Valid formats: text, json", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impossible_is_not_an_error() {
        assert!(!CalculationOutcome::Impossible(11.0).is_error());
        assert!(CalculationOutcome::InvalidInput(InputError::NotANumber).is_error());
    }

    #[test]
    fn test_value_only_for_numeric_outcomes() {
        assert_eq!(CalculationOutcome::RequiredGpa(8.5).value(), Some(8.5));
        assert_eq!(CalculationOutcome::AlreadyAchieved.value(), None);
        assert_eq!(
            CalculationOutcome::InvalidInput(InputError::CgpaOutOfRange).value(),
            None
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
