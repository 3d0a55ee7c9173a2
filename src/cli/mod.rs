//! The chandas command-line interface.
//!
//! Resolves configuration and input, runs the [`Analyzer`] and hands the
//! results to [`output`] for printing.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{ChandasArgs, Command, GlobalArgs, InputArgs};
use crate::config::AnalyzerConfig;
use crate::engine::{Analyzer, DEMO_VERSE};
use crate::errors::{print_error, ChandasError, ErrorCategory};
use crate::result::IdentifyRequest;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = ChandasArgs::parse();
    init_logging(args.global.verbose);

    match dispatch(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.category() {
                ErrorCategory::User => 2,
                ErrorCategory::Internal | ErrorCategory::Setup => 1,
            };
            print_error(err);
            ExitCode::from(code)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "chandas=debug" } else { "chandas=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when run in-process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch(args: &ChandasArgs) -> Result<(), ChandasError> {
    let analyzer = Analyzer::new(resolve_config(&args.global)?)?;

    match &args.command {
        Command::Identify { input, json, all } => {
            let text = read_input(input)?;
            let results = if *all {
                analyzer.identify_all(&text)?
            } else {
                vec![analyzer.identify(&text)?]
            };
            if *json {
                output::print_json(&results)
            } else {
                output::print_results(&results);
                Ok(())
            }
        }
        Command::Scan { input } => {
            let text = read_input(input)?;
            output::print_scan(&analyzer.scan(&text)?);
            Ok(())
        }
        Command::Meters => {
            output::print_meters(analyzer.catalogue());
            Ok(())
        }
    }
}

fn resolve_config(global: &GlobalArgs) -> Result<AnalyzerConfig, ChandasError> {
    let mut config = match &global.config {
        Some(path) => AnalyzerConfig::from_path(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(policy) = global.final_syllable {
        config.final_syllable = policy;
    }
    if let Some(min_score) = global.min_score {
        config.min_score = min_score;
    }
    if global.no_half_split {
        config.split_half_verses = false;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(input: &InputArgs) -> Result<String, ChandasError> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return read_source(path);
    }
    if let Some(path) = &input.request {
        let body = read_source(path)?;
        return Ok(IdentifyRequest::from_json(&body)?.text);
    }
    Ok(DEMO_VERSE.to_string())
}

fn read_source(path: &Path) -> Result<String, ChandasError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ChandasError::io("<stdin>", e))?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| ChandasError::io(path.display().to_string(), e))
}
