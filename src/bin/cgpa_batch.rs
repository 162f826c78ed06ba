use cgpa_target::core::batch::run_batch;
use cgpa_target::core::render::failure_exit_code;
use cgpa_target::utils::{logger, validation::Validate};
use cgpa_target::{config, AppError, BatchArgs, OutcomeStatus, Settings};
use clap::Parser;
use std::process::ExitCode;

fn report_failure(context: &str, e: &AppError) -> ExitCode {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    ExitCode::from(failure_exit_code(e))
}

fn main() -> ExitCode {
    let args = BatchArgs::parse();

    let file = match config::load_optional(args.config.as_deref()) {
        Ok(file) => file,
        Err(e) => return report_failure("Failed to load config", &e),
    };

    let level = file.as_ref().and_then(|f| f.log_level()).or(Some("info"));
    if file.as_ref().is_some_and(|f| f.json_logs()) {
        logger::init_json_logger(args.verbose, level);
    } else {
        logger::init_cli_logger(args.verbose, level);
    }

    tracing::info!("🚀 Starting batch GPA calculation");
    tracing::debug!("Batch args: {:?}", args);

    if let Err(e) = args.validate() {
        return report_failure("Configuration validation failed", &e);
    }

    let settings = Settings::resolve(file.as_ref(), None, args.precision);
    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no report will be written");
    }

    match run_batch(&args.input, &args.output, settings.precision, args.dry_run) {
        Ok(report) => {
            let summary = &report.summary;
            println!(
                "✅ Processed {} rows ({} required, {} already achieved, {} impossible, {} invalid)",
                summary.total,
                summary.count(OutcomeStatus::Required),
                summary.count(OutcomeStatus::AlreadyAchieved),
                summary.count(OutcomeStatus::Impossible),
                summary.count(OutcomeStatus::InvalidInput),
            );
            if let Some(path) = report.output_path {
                println!("📁 Report saved to: {}", path);
            }
            ExitCode::SUCCESS
        }
        Err(e) => report_failure("Batch failed", &e),
    }
}
