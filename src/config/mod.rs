#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{BatchArgs, CliConfig};
pub use toml_config::TomlConfig;

use crate::domain::model::OutputFormat;
use crate::domain::ports::DisplaySettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

pub const DEFAULT_PRECISION: usize = 2;

/// Effective display settings after merging file values with command-line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    /// Command-line values win over the file; the file wins over defaults.
    pub fn resolve(
        file: Option<&TomlConfig>,
        format: Option<OutputFormat>,
        precision: Option<usize>,
    ) -> Self {
        let defaults = Settings::default();
        Self {
            format: format
                .or_else(|| file.and_then(|f| f.output_format()))
                .unwrap_or(defaults.format),
            precision: precision
                .or_else(|| file.and_then(|f| f.precision()))
                .unwrap_or(defaults.precision),
        }
    }
}

impl DisplaySettings for Settings {
    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn precision(&self) -> usize {
        self.precision
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "precision",
            self.precision,
            0,
            toml_config::MAX_PRECISION,
        )
    }
}

/// Loads and validates an optional config file.
pub fn load_optional(path: Option<&str>) -> Result<Option<TomlConfig>> {
    match path {
        Some(path) => {
            crate::utils::validation::validate_path("config", path)?;
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let settings = Settings::resolve(None, None, None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.precision(), 2);
        assert_eq!(settings.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str("[display]\nformat = \"json\"\nprecision = 4\n").unwrap();

        let from_file = Settings::resolve(Some(&file), None, None);
        assert_eq!(from_file.format, OutputFormat::Json);
        assert_eq!(from_file.precision, 4);

        let overridden = Settings::resolve(Some(&file), Some(OutputFormat::Text), Some(1));
        assert_eq!(overridden.format, OutputFormat::Text);
        assert_eq!(overridden.precision, 1);
    }

    #[test]
    fn test_settings_validation() {
        assert!(Settings::resolve(None, None, Some(6)).validate().is_ok());
        assert!(Settings::resolve(None, None, Some(7)).validate().is_err());
    }

    #[test]
    fn test_load_optional_missing_file() {
        assert!(load_optional(None).unwrap().is_none());
        assert!(load_optional(Some("does/not/exist.toml")).is_err());
    }
}
