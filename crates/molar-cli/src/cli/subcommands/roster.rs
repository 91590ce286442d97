use std::path::PathBuf;

use clap::Subcommand;

/// Student roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RosterCommands {
    /// Parse a pasted roster into invite rows.
    Import {
        /// Roster file, or `-` for stdin
        file: PathBuf,
        /// Name for rows without one (defaults to roster.default_name)
        #[arg(long)]
        default_name: Option<String>,
        /// Batch for rows without one (defaults to roster.default_batch)
        #[arg(long)]
        default_batch: Option<String>,
    },
}
