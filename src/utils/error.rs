use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::CsvError(_) | AppError::SerializationError(_) => ErrorCategory::Data,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::SerializationError(_) => ErrorSeverity::Critical,
            AppError::IoError(_) | AppError::CsvError(_) => ErrorSeverity::High,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::IoError(_) => {
                "Check that the file exists and that you have permission to read or write it".to_string()
            }
            AppError::CsvError(_) => {
                "Make sure every row has the columns: semester,current_cgpa,target_cgpa".to_string()
            }
            AppError::SerializationError(_) => "Please report this issue".to_string(),
            AppError::ConfigValidationError { field, .. } => {
                format!("Check the '{}' section of your configuration file", field)
            }
            AppError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Could not access a file: {}", e),
            AppError::CsvError(e) => format!("The CSV file could not be processed: {}", e),
            AppError::SerializationError(_) => "Could not format the result".to_string(),
            AppError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = AppError::InvalidConfigValueError {
            field: "display.precision".to_string(),
            value: "9".to_string(),
            reason: "Value must be between 0 and 6".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("display.precision"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: AppError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
