//! `formcheck` command-line front end.

mod cli;
mod config;
mod output;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use formcheck_validator::validate_form;

use crate::cli::{Candidate, Cli, Commands};
use crate::config::Settings;
use crate::output::{render_form, render_result};

/// Exit status for a candidate that broke at least one rule.
const EXIT_INVALID: u8 = 1;
/// Exit status for usage and configuration errors (matches clap's).
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Runs one command, returning whether the checked input passed.
fn run(cli: Cli) -> Result<bool> {
    let (settings, file) = Settings::load(&cli.global)?;
    formcheck_log::init_with(settings.log.clone()).context("cannot initialize logging")?;
    tracing::debug!(
        config_file = ?file,
        min_length = settings.password.min_length,
        max_length = settings.password.max_length,
        max_local_part = settings.email.max_local_part_length,
        "configuration resolved"
    );

    let format = cli.global.format;
    let (rendered, passed) = match cli.command {
        Commands::Password(candidate) => {
            let result = settings.password.validate(&read_candidate(candidate)?);
            (render_result(format, &result)?, result.is_valid)
        }
        Commands::Email(candidate) => {
            let result = settings.email.validate(&read_candidate(candidate)?);
            (render_result(format, &result)?, result.is_valid)
        }
        Commands::Form {
            email,
            password,
            password_stdin,
        } => {
            let password = match password {
                Some(password) if !password_stdin => password,
                _ => read_stdin_line()?,
            };
            let outcome = validate_form(&settings.policies(), &email, &password);
            (render_form(format, &outcome)?, outcome.can_submit)
        }
        Commands::Policy => {
            let toml = toml::to_string(&settings.policies()).context("cannot render policies")?;
            (toml, true)
        }
    };

    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("cannot write to stdout")?;
    Ok(passed)
}

fn read_candidate(candidate: Candidate) -> Result<String> {
    match candidate.candidate {
        Some(value) if !candidate.stdin => Ok(value),
        _ => read_stdin_line(),
    }
}

/// Reads the first line of stdin without its line terminator.
fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("cannot read stdin")?;
    Ok(trim_line_end(&line).to_owned())
}

fn trim_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
