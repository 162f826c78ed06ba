use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;

use super::toml_config::MAX_PRECISION;

/// Fields are kept as raw text so unparseable input is reported the same
/// way the calculator reports any other invalid submission.
#[derive(Debug, Clone, Parser)]
#[command(name = "cgpa-target")]
#[command(about = "Find the minimum GPA needed in your remaining semesters")]
pub struct CliConfig {
    /// Your current semester (1-7)
    #[arg(short, long, allow_hyphen_values = true)]
    pub semester: String,

    /// Current CGPA (out of 10)
    #[arg(short, long, allow_hyphen_values = true)]
    pub current: String,

    /// Target CGPA (out of 10)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: String,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Decimal places shown in the result
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "cgpa-batch")]
#[command(about = "Compute required GPAs for every row of a CSV file")]
pub struct BatchArgs {
    /// CSV with columns: semester,current_cgpa,target_cgpa
    #[arg(short, long)]
    pub input: String,

    /// Report path; `{timestamp}` is replaced with the current UTC time
    #[arg(short, long, default_value = "gpa_report_{timestamp}.csv")]
    pub output: String,

    /// Decimal places written for required GPAs
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Parse and compute without writing the report
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for BatchArgs {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        if let Some(precision) = self.precision {
            validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        Ok(())
    }
}
