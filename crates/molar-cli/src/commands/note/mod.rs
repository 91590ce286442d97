pub mod capture;
pub mod fill;
pub mod parse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::context::AppContext;

/// Handle `molar note`.
pub async fn handle(
    action: &NoteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NoteCommands::Parse(args) => parse::run(args, ctx, flags).await,
        NoteCommands::Fill(args) => fill::run(args, ctx, flags).await,
        NoteCommands::Capture {
            timeout,
            reference,
            pipeline,
        } => capture::run(*timeout, reference.as_deref(), *pipeline, ctx, flags).await,
    }
}
