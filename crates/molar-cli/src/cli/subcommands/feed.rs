use std::path::PathBuf;

use clap::Subcommand;

/// Realtime change feed commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedCommands {
    /// Apply a JSONL file of procedure change events to a list.
    Replay {
        /// Change events, one JSON object per line
        events: PathBuf,
        /// Starting rows as a JSON array (empty when omitted)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}
