//! Rendering of validation outcomes for stdout.

use std::fmt::{self, Write as _};

use anyhow::Result;
use clap::ValueEnum;
use formcheck_validator::{FormOutcome, ValidationResult};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `valid` / `invalid` followed by one line per broken rule
    Text,
    /// Pretty-printed JSON
    Json,
}

fn verdict(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}

fn write_broken(out: &mut String, result: &ValidationResult) -> fmt::Result {
    for rule in &result.broken_rules {
        writeln!(out, "  - {rule}")?;
    }
    Ok(())
}

fn result_text(result: &ValidationResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", verdict(result.is_valid))?;
    write_broken(&mut out, result)?;
    Ok(out)
}

fn form_text(outcome: &FormOutcome) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{}", verdict(outcome.can_submit))?;
    for (label, result) in [("email", &outcome.email), ("password", &outcome.password)] {
        writeln!(out, "{label}: {}", verdict(result.is_valid))?;
        write_broken(&mut out, result)?;
    }
    Ok(out)
}

/// Renders a single rule-set result.
pub fn render_result(format: OutputFormat, result: &ValidationResult) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
        OutputFormat::Text => Ok(result_text(result)?),
    }
}

/// Renders a form outcome; the first text line is the submit verdict.
pub fn render_form(format: OutputFormat, outcome: &FormOutcome) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)? + "\n"),
        OutputFormat::Text => Ok(form_text(outcome)?),
    }
}
