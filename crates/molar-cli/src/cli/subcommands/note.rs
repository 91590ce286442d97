use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Clinical note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// Correct and extract fields from one note.
    Parse(ParseArgs),
    /// Merge a note's fields into a procedure form.
    Fill(FillArgs),
    /// Listen once on stdin, then parse what was heard.
    Capture {
        /// Give up after this many seconds (defaults to notes.capture_timeout_secs)
        #[arg(long)]
        timeout: Option<u64>,
        /// Reference data file (defaults to notes.reference_path)
        #[arg(long)]
        reference: Option<PathBuf>,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

/// Where the note text and reference data come from.
#[derive(Clone, Debug, Args)]
pub struct NoteInput {
    /// Note text (reads stdin when omitted)
    pub text: Option<String>,
    /// Reference data file (defaults to notes.reference_path)
    #[arg(long)]
    pub reference: Option<PathBuf>,
}

/// Per-run toggles for the remote steps.
#[derive(Clone, Copy, Debug, Args)]
pub struct PipelineArgs {
    /// Skip transcript correction
    #[arg(long)]
    pub no_correct: bool,
    /// Use only the keyword matcher for extraction
    #[arg(long)]
    pub no_remote_extract: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: NoteInput,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Clone, Debug, Args)]
pub struct FillArgs {
    #[command(flatten)]
    pub input: NoteInput,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
    /// Department chosen by hand
    #[arg(long)]
    pub department: Option<String>,
    /// Task chosen by hand
    #[arg(long)]
    pub task: Option<String>,
    /// Supervisor typed by hand
    #[arg(long)]
    pub supervisor: Option<String>,
    /// Free-text notes to keep with the entry (defaults to the note itself)
    #[arg(long)]
    pub notes: Option<String>,
    /// Date performed, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Validate and produce the submission draft
    #[arg(long)]
    pub submit: bool,
}
