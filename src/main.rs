//! AHP Sherpa command-line entry point.
//!
//! Loads configuration from the environment, solves the configured variant
//! (or the built-in sample) and prints the outcome as JSON on stdout.

use std::process::ExitCode;
use std::sync::Arc;

use ahp_sherpa::adapters::{BuiltinVariantSource, FileVariantSource};
use ahp_sherpa::application::{SolveVariantHandler, SolveVariantQuery};
use ahp_sherpa::config::AppConfig;
use ahp_sherpa::domain::foundation::{DomainError, ErrorCode};
use ahp_sherpa::ports::VariantSource;
use ahp_sherpa::telemetry::init_tracing;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    init_tracing(&config.logging);

    match run(&config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = %e.code, "{}", e.message);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<String, DomainError> {
    let source: Arc<dyn VariantSource> = match config.dataset.variant_path() {
        Some(path) => Arc::new(FileVariantSource::new(path)?),
        None => Arc::new(BuiltinVariantSource::new()),
    };

    let handler = SolveVariantHandler::new(source, config.solver.build_solver());
    let result = handler.handle(SolveVariantQuery::default())?;

    tracing::info!(
        best_alternative_index = result.outcome.best_alternative_index,
        "Best alternative selected"
    );

    serde_json::to_string_pretty(&result).map_err(|e| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to serialize result: {e}"),
        )
    })
}
