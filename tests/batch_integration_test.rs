use anyhow::Result;
use cgpa_target::core::batch::run_batch;
use cgpa_target::OutcomeStatus;
use std::fs;
use tempfile::TempDir;

const SUBMISSIONS: &str = "semester,current_cgpa,target_cgpa
4,8.0,9.0
6,9.0,9.0
1,1.0,10.0
2,9.0,8.5
3,,9.0
";

#[test]
fn test_batch_writes_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("submissions.csv");
    fs::write(&input_path, SUBMISSIONS)?;

    let output_template = temp_dir.path().join("reports/gpa_{timestamp}.csv");
    let report = run_batch(
        input_path.to_str().unwrap(),
        output_template.to_str().unwrap(),
        2,
        false,
    )?;

    assert_eq!(report.summary.total, 5);
    assert_eq!(report.summary.count(OutcomeStatus::Required), 2);
    assert_eq!(report.summary.count(OutcomeStatus::Impossible), 1);
    assert_eq!(report.summary.count(OutcomeStatus::InvalidInput), 2);

    let output_path = report.output_path.expect("report path");
    assert!(!output_path.contains("{timestamp}"));

    let content = fs::read_to_string(&output_path)?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;

    assert_eq!(rows.len(), 5);
    assert_eq!(&rows[0][3], "required");
    assert_eq!(&rows[0][4], "10.00");
    assert_eq!(&rows[1][4], "9.00");
    assert_eq!(&rows[2][3], "impossible");
    assert_eq!(&rows[2][4], "11.29");
    assert_eq!(&rows[3][5], "Target CGPA cannot be lower than your current CGPA.");
    assert_eq!(&rows[4][5], "Please fill in all fields with valid numbers.");
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("submissions.csv");
    fs::write(&input_path, SUBMISSIONS)?;

    let output_path = temp_dir.path().join("report.csv");
    let report = run_batch(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
        2,
        true,
    )?;

    assert!(report.output_path.is_none());
    assert_eq!(report.summary.total, 5);
    assert!(!output_path.exists());
    Ok(())
}

#[test]
fn test_missing_input_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.csv");
    let output = temp_dir.path().join("out.csv");

    let err = run_batch(missing.to_str().unwrap(), output.to_str().unwrap(), 2, false)
        .unwrap_err();
    assert_eq!(
        err.category(),
        cgpa_target::utils::error::ErrorCategory::Io
    );
}

#[test]
fn test_malformed_row_leaves_no_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("submissions.csv");
    fs::write(
        &input_path,
        "semester,current_cgpa,target_cgpa\n4,8.0,9.0\n6,9.0,9.0\n4,8.0\n",
    )?;

    let output_path = temp_dir.path().join("report.csv");
    let result = run_batch(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
        2,
        false,
    );

    let err = result.unwrap_err();
    assert_eq!(
        err.category(),
        cgpa_target::utils::error::ErrorCategory::Data
    );
    assert_eq!(cgpa_target::core::render::failure_exit_code(&err), 3);
    assert!(!output_path.exists());
    Ok(())
}
