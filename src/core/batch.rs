use crate::core::calculator::evaluate;
use crate::core::render::message;
use crate::domain::model::OutcomeStatus;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One submission as it appears in the input file. Values stay as text so
/// unparseable cells become `InvalidInput` rows instead of aborting the batch.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    pub semester: String,
    pub current_cgpa: String,
    pub target_cgpa: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub semester: String,
    pub current_cgpa: String,
    pub target_cgpa: String,
    pub status: OutcomeStatus,
    pub required_gpa: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub by_status: BTreeMap<OutcomeStatus, usize>,
}

impl BatchSummary {
    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    fn record(&mut self, status: OutcomeStatus) {
        self.total += 1;
        *self.by_status.entry(status).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    /// `None` for dry runs.
    pub output_path: Option<String>,
    pub summary: BatchSummary,
}

pub fn evaluate_row(row: &BatchRow, precision: usize) -> BatchResult {
    let outcome = evaluate(&row.semester, &row.current_cgpa, &row.target_cgpa);

    BatchResult {
        semester: row.semester.clone(),
        current_cgpa: row.current_cgpa.clone(),
        target_cgpa: row.target_cgpa.clone(),
        status: outcome.status(),
        required_gpa: outcome.value().map(|v| format!("{:.*}", precision, v)),
        message: message(&outcome, precision),
    }
}

/// Streams rows from `input` to `output`, one calculation per row.
pub fn process_records<R: Read, W: Write>(
    input: R,
    output: W,
    precision: usize,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for (index, row) in reader.deserialize::<BatchRow>().enumerate() {
        let row = row?;
        let result = evaluate_row(&row, precision);
        tracing::debug!(
            "Row {}: {} ({})",
            index + 1,
            result.status.as_str(),
            result.message
        );

        summary.record(result.status);
        writer.serialize(&result)?;
    }

    writer.flush()?;
    Ok(summary)
}

/// Expands `{timestamp}` in an output path template.
pub fn resolve_output_path(template: &str) -> String {
    template.replace(
        "{timestamp}",
        &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
    )
}

pub fn run_batch(
    input_path: &str,
    output_template: &str,
    precision: usize,
    dry_run: bool,
) -> Result<BatchReport> {
    tracing::info!("📥 Reading submissions from: {}", input_path);
    let input = File::open(input_path)?;

    if dry_run {
        let summary = process_records(input, std::io::sink(), precision)?;
        log_summary(&summary);
        return Ok(BatchReport {
            output_path: None,
            summary,
        });
    }

    // rows are buffered so a malformed one cannot leave a partial report behind
    let mut buffer = Vec::new();
    let summary = process_records(input, &mut buffer, precision)?;

    let output_path = resolve_output_path(output_template);
    if let Some(parent) = Path::new(&output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&output_path, buffer)?;
    log_summary(&summary);
    tracing::info!("📁 Report saved to: {}", output_path);

    Ok(BatchReport {
        output_path: Some(output_path),
        summary,
    })
}

fn log_summary(summary: &BatchSummary) {
    tracing::info!(
        "📊 {} rows - required: {}, already achieved: {}, impossible: {}, invalid: {}",
        summary.total,
        summary.count(OutcomeStatus::Required),
        summary.count(OutcomeStatus::AlreadyAchieved),
        summary.count(OutcomeStatus::Impossible),
        summary.count(OutcomeStatus::InvalidInput),
    );
}
