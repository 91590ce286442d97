use crate::cli::GlobalFlags;
use crate::cli::subcommands::ParseArgs;
use crate::commands::shared::input::text_or_stdin;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ParseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reference = ctx.reference(args.input.reference.as_deref())?;
    let raw = text_or_stdin(args.input.text.as_deref())?;

    let outcome = ctx
        .pipeline(args.pipeline, flags.offline)
        .parse(&raw, &reference)
        .await;

    output(&outcome, flags.format)
}
