use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Note { action } => commands::note::handle(&action, ctx, flags).await,
        Commands::Roster { action } => commands::roster::handle(&action, ctx, flags),
        Commands::Feed { action } => commands::feed::handle(&action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
