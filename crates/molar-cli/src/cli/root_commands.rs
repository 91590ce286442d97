use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{FeedCommands, NoteCommands, RosterCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Turn clinical notes into procedure fields.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Student roster tools.
    Roster {
        #[command(subcommand)]
        action: RosterCommands,
    },
    /// Realtime change feed tools.
    Feed {
        #[command(subcommand)]
        action: FeedCommands,
    },
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

/// Record types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Procedure,
    Department,
    QuotaTask,
    Batch,
    Reference,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
