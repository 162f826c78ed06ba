pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BatchArgs, CliConfig};

pub use config::{Settings, TomlConfig};
pub use core::calculator::{compute, evaluate, parse_submission};
pub use domain::model::{
    CalculationInput, CalculationOutcome, InputError, OutcomeStatus, OutputFormat,
    TOTAL_SEMESTERS,
};
pub use utils::error::{AppError, Result};
