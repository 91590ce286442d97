use molar_roster::RosterDefaults;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RosterCommands;
use crate::commands::shared::input::file_or_stdin;
use crate::context::AppContext;
use crate::output::output;

/// Handle `molar roster`.
pub fn handle(action: &RosterCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RosterCommands::Import {
            file,
            default_name,
            default_batch,
        } => {
            let defaults = RosterDefaults {
                name: default_name
                    .clone()
                    .unwrap_or_else(|| ctx.config.roster.default_name.clone()),
                batch: default_batch
                    .clone()
                    .unwrap_or_else(|| ctx.config.roster.default_batch.clone()),
            };
            let import = molar_roster::parse(&file_or_stdin(file)?, &defaults)?;

            for rejected in &import.rejected {
                tracing::warn!(
                    line = rejected.line,
                    reason = ?rejected.reason,
                    "skipped roster line"
                );
            }

            output(&import, flags.format)
        }
    }
}
