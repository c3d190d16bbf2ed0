//! CLI argument definitions for formcheck.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "formcheck")]
#[command(version)]
#[command(about = "Check passwords and email addresses against sign-up rules", long_about = None)]
#[command(
    after_help = "EXIT STATUS:\n    0  the candidate passed every rule\n    1  one or more rules were broken\n    2  usage or configuration error"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Configuration file (defaults to ./formcheck.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Override the minimum password length
    #[arg(long, global = true, value_name = "N")]
    pub min_length: Option<usize>,

    /// Override the maximum password length
    #[arg(long, global = true, value_name = "N")]
    pub max_length: Option<usize>,

    /// Override the maximum email local-part length
    #[arg(long, global = true, value_name = "N")]
    pub max_local_part: Option<usize>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a password against the password rules
    Password(Candidate),
    /// Check an email address against the email rules
    Email(Candidate),
    /// Check an email/password pair; valid only if both pass
    Form {
        /// Email address to check
        #[arg(long)]
        email: String,
        /// Password to check
        #[arg(long, required_unless_present = "password_stdin")]
        password: Option<String>,
        /// Read the password from the first line of stdin
        #[arg(long, conflicts_with = "password")]
        password_stdin: bool,
    },
    /// Print the effective policies as TOML
    Policy,
}

/// A single candidate, given inline or on stdin.
#[derive(Debug, Args)]
pub struct Candidate {
    /// Value to check
    #[arg(required_unless_present = "stdin")]
    pub candidate: Option<String>,
    /// Read the value from the first line of stdin
    #[arg(long, conflicts_with = "candidate")]
    pub stdin: bool,
}
