//! Defines the command-line arguments and subcommands for the chandas CLI.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::weight::FinalSyllable;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "chandas",
    version,
    about = "Identify the meter of Sanskrit verse written in Devanagari."
)]
pub struct ChandasArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand. Flags override the config file.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// YAML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treatment of a light pāda-final syllable: `guru` or `as-scanned`.
    #[arg(long, global = true, value_name = "POLICY")]
    pub final_syllable: Option<FinalSyllable>,

    /// Acceptance floor for partial matches, between 0 and 1.
    #[arg(long, global = true, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Do not read two-line input as four pādas.
    #[arg(long, global = true)]
    pub no_half_split: bool,

    /// Log pipeline stages to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where the verse text comes from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Verse text. The demo verse is used when no input is given.
    pub text: Option<String>,

    /// Read the verse from a file (`-` for stdin).
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Read a JSON request body `{"text": ...}` from a file.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["text", "file"])]
    pub request: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Identify the meter of a verse.
    Identify {
        #[command(flatten)]
        input: InputArgs,

        /// Print the JSON response instead of a summary.
        #[arg(long)]
        json: bool,

        /// Identify every verse instead of only the first.
        #[arg(long)]
        all: bool,
    },
    /// Show the akṣaras and weights of each pāda.
    Scan {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the meter catalogue.
    Meters,
}
