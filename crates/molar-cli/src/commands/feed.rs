use std::path::Path;

use anyhow::Context;
use molar_core::entities::Procedure;
use molar_core::feed::{ChangeEvent, LiveList, Patch};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{Cell, Table, Tabular, output, status_cell};

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct ReplaySummary {
    inserted: usize,
    replaced: usize,
    removed: usize,
    ignored: usize,
    /// Changes that would trigger a background refetch of aggregates.
    refetches: usize,
}

impl ReplaySummary {
    const fn record(&mut self, patch: Patch) {
        match patch {
            Patch::Inserted => self.inserted += 1,
            Patch::Replaced => self.replaced += 1,
            Patch::Removed => self.removed += 1,
            Patch::Ignored => self.ignored += 1,
        }
        if patch.needs_refetch() {
            self.refetches += 1;
        }
    }
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    summary: ReplaySummary,
    total: usize,
    items: Vec<Procedure>,
}

impl Tabular for ReplayReport {
    fn table(&self) -> Table {
        let mut table = Table::new(&[
            "id",
            "performed_on",
            "status",
            "department",
            "task",
            "supervisor",
        ]);
        for procedure in &self.items {
            table.push([
                Cell::from(procedure.id.as_str()),
                Cell::from(procedure.performed_on.to_string()),
                status_cell(procedure.status),
                Cell::from(procedure.department_id.as_str()),
                Cell::from(procedure.task_id.as_str()),
                Cell::maybe(procedure.supervisor_name.as_deref()),
            ]);
        }
        let ReplaySummary {
            inserted,
            replaced,
            removed,
            ignored,
            refetches,
        } = self.summary;
        table.footer(format!(
            "{} of {} rows; {inserted} inserted, {replaced} replaced, {removed} removed, \
             {ignored} ignored, {refetches} refetches",
            self.items.len(),
            self.total,
        ))
    }
}

/// Handle `molar feed`.
pub fn handle(action: &FeedCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FeedCommands::Replay { events, snapshot } => {
            let (list, summary) = replay(events, snapshot.as_deref())?;
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let total = list.len();
            let mut items = list.into_items();
            items.truncate(limit);

            output(
                &ReplayReport {
                    summary,
                    total,
                    items,
                },
                flags.format,
            )
        }
    }
}

fn replay(
    events: &Path,
    snapshot: Option<&Path>,
) -> anyhow::Result<(LiveList<Procedure>, ReplaySummary)> {
    let rows: Vec<Procedure> = match snapshot {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid snapshot {}", path.display()))?
        }
        None => Vec::new(),
    };

    let mut list = LiveList::new(rows);
    let mut summary = ReplaySummary::default();
    let lines = serde_jsonlines::json_lines::<ChangeEvent<Procedure>, _>(events)
        .with_context(|| format!("failed to open events {}", events.display()))?;
    for (idx, event) in lines.enumerate() {
        let event = event.with_context(|| format!("invalid event on line {}", idx + 1))?;
        summary.record(list.apply(event));
    }

    tracing::debug!(?summary, rows = list.len(), "replayed change feed");
    Ok((list, summary))
}
