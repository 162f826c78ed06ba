pub mod batch;
pub mod calculator;
pub mod render;

pub use crate::domain::model::{CalculationInput, CalculationOutcome, InputError};
pub use crate::domain::ports::DisplaySettings;
pub use crate::utils::error::Result;
