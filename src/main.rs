use cgpa_target::core::render::{failure_exit_code, outcome_exit_code, render};
use cgpa_target::utils::{logger, validation::Validate};
use cgpa_target::{config, evaluate, AppError, CliConfig, OutputFormat, Settings};
use clap::Parser;
use std::process::ExitCode;

fn report_failure(e: &AppError) -> ExitCode {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    ExitCode::from(failure_exit_code(e))
}

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // Read the file before the logger exists so its logging section applies.
    // Failures here still reach stderr through report_failure.
    let file = match config::load_optional(cli.config.as_deref()) {
        Ok(file) => file,
        Err(e) => return report_failure(&e),
    };

    let level = file.as_ref().and_then(|f| f.log_level());
    if file.as_ref().is_some_and(|f| f.json_logs()) {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        return report_failure(&e);
    }

    let settings = Settings::resolve(file.as_ref(), cli.format, cli.precision);
    if let Err(e) = settings.validate() {
        return report_failure(&e);
    }

    let outcome = evaluate(&cli.semester, &cli.current, &cli.target);
    tracing::info!("Outcome: {:?}", outcome);

    match render(&outcome, &settings) {
        Ok(rendered) => {
            if outcome.is_error() && settings.format == OutputFormat::Text {
                eprintln!("❌ {}", rendered);
            } else {
                println!("{}", rendered);
            }
            ExitCode::from(outcome_exit_code(&outcome))
        }
        Err(e) => report_failure(&e),
    }
}
