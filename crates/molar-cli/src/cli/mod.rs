use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `molar` binary.
#[derive(Debug, Parser)]
#[command(
    name = "molar",
    version,
    about = "Molar - clinical logbook tools for dental training"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the nearest directory holding .molar)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Skip the hosted correction and extraction functions
    #[arg(long, global = true)]
    pub offline: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            project: self.project.clone(),
            offline: self.offline,
        }
    }
}
