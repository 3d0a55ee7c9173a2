//! Handles all user-facing output for the CLI.
//!
//! Summaries go to stdout with colour when the terminal supports it; JSON is
//! written uncoloured so it can be piped.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalogue::Catalogue;
use crate::engine::ScannedVerse;
use crate::errors::ChandasError;
use crate::matcher::format_counts;
use crate::result::{IdentificationResult, IdentifyResponse};
use crate::weight::Weight;

// ============================================================================
// JSON
// ============================================================================

/// Prints one response object, or an array when several verses were
/// identified.
pub fn print_json(results: &[IdentificationResult]) -> Result<(), ChandasError> {
    let responses: Vec<IdentifyResponse> = results.iter().map(IdentificationResult::to_response).collect();
    let json = match responses.as_slice() {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    println!("{json}");
    Ok(())
}

// ============================================================================
// TERMINAL SUMMARIES
// ============================================================================

pub fn print_results(results: &[IdentificationResult]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(stdout);
        }
        print_result(&mut stdout, result);
    }
}

fn print_result(stdout: &mut StandardStream, result: &IdentificationResult) {
    let colour = if result.is_identified() { Color::Green } else { Color::Yellow };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(colour)).set_bold(true));
    let _ = write!(stdout, "{}", result.chandas_name());
    let _ = stdout.reset();
    let _ = writeln!(stdout, "  (confidence {:.2})", result.confidence());

    for (i, pada) in result.padas().iter().enumerate() {
        let _ = write!(stdout, "  {}. {:>2}  ", i + 1, pada.syllable_count);
        write_pattern(stdout, pada.weights());
        let gana = result.gana_pattern().get(i).map(String::as_str).unwrap_or("");
        let _ = writeln!(stdout, "  {}  [{}]", pada.text, gana);
    }
    let _ = writeln!(stdout, "{}", result.explanation());

    for step in result.process() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
        let _ = write!(stdout, "  {}. {}", step.step_number, step.step_name);
        let _ = stdout.reset();
        let _ = writeln!(stdout, ": {}", step.result);
    }
}

pub fn print_scan(verses: &[ScannedVerse]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for verse in verses {
        let _ = stdout.set_color(ColorSpec::new().set_bold(true));
        let _ = writeln!(stdout, "--- Verse {} ---", verse.index + 1);
        let _ = stdout.reset();
        for (p, pada) in verse.padas.iter().enumerate() {
            let _ = write!(stdout, "pāda {} ({} syllables): ", p + 1, pada.aksharas.len());
            write_pattern(&mut stdout, pada.weights());
            let _ = writeln!(stdout);
            for (akshara, scansion) in pada.aksharas.iter().zip(&pada.scansion) {
                let _ = write!(stdout, "  {:>2}  {:<8}", akshara.position() + 1, akshara.text());
                write_pattern(&mut stdout, [scansion.weight]);
                let _ = writeln!(
                    stdout,
                    "  {}..{}  {}",
                    akshara.span().start,
                    akshara.span().end,
                    scansion.rule.describe()
                );
            }
        }
    }
}

pub fn print_meters(catalogue: &Catalogue) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for meter in catalogue.iter() {
        let _ = stdout.set_color(ColorSpec::new().set_bold(true));
        let _ = write!(stdout, "{}", meter.name());
        let _ = stdout.reset();
        let _ = writeln!(
            stdout,
            "  {}{}",
            format_counts(&meter.syllable_counts()),
            if meter.tolerant() { "" } else { "  strict" }
        );
        let _ = writeln!(stdout, "    {}", meter.pattern_strings().join(" / "));
        if !meter.description().is_empty() {
            let _ = writeln!(stdout, "    {}", meter.description());
        }
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_pattern(stdout: &mut StandardStream, weights: impl IntoIterator<Item = Weight>) {
    for weight in weights {
        let colour = match weight {
            Weight::Guru => Color::Red,
            Weight::Laghu => Color::Blue,
        };
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(colour)));
        let _ = write!(stdout, "{}", weight.symbol());
    }
    let _ = stdout.reset();
}
