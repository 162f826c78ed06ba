use crate::domain::model::OutputFormat;

/// Display preferences a presentation layer needs, whatever their source.
pub trait DisplaySettings {
    fn output_format(&self) -> OutputFormat;
    fn precision(&self) -> usize;
}
