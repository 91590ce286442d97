use molar_notes::{
    ApplyReport, ExtractedFields, FormError, FormField, ProcedureDraft, ProcedureForm,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FillArgs;
use crate::commands::shared::input::text_or_stdin;
use crate::context::AppContext;
use crate::output::{Cell, Table, Tabular, Tone, extracted_cells, output};

#[derive(Debug, Serialize)]
struct FillReport {
    text: String,
    corrected: bool,
    extracted: ExtractedFields,
    merge: ApplyReport,
    form: ProcedureForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    draft: Option<ProcedureDraft>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FormError>,
}

impl Tabular for FillReport {
    fn table(&self) -> Table {
        let mut table = Table::new(&["field", "extracted", "source", "form", "merge"]);
        for (field, extracted, form) in [
            (
                FormField::Department,
                &self.extracted.department_id,
                self.form.department_id(),
            ),
            (FormField::Task, &self.extracted.task_id, self.form.task_id()),
            (
                FormField::Supervisor,
                &self.extracted.supervisor_name,
                self.form.supervisor_name(),
            ),
        ] {
            let [value, source] = extracted_cells(extracted.as_ref());
            let merge = if self.merge.applied.contains(&field) {
                Cell::toned("applied", Tone::Good)
            } else if self.merge.skipped.contains(&field) {
                Cell::toned("kept", Tone::Warn)
            } else {
                Cell::from("-")
            };
            table.push([
                Cell::from(field_label(field)),
                value,
                source,
                Cell::maybe(form),
                merge,
            ]);
        }

        let footer = match (&self.draft, self.errors.as_slice()) {
            (Some(_), _) => "ready to submit".to_string(),
            (None, []) => "not submitted".to_string(),
            (None, errors) => errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        };
        table.footer(footer)
    }
}

const fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Department => "department",
        FormField::Task => "task",
        FormField::Supervisor => "supervisor",
    }
}

pub async fn run(args: &FillArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reference = ctx.reference(args.input.reference.as_deref())?;
    let raw = text_or_stdin(args.input.text.as_deref())?;

    let mut form = manual_form(args);
    let outcome = ctx
        .pipeline(args.pipeline, flags.offline)
        .parse(&raw, &reference)
        .await;
    let merge = form.apply_extraction(&outcome.fields);
    if args.notes.is_none() {
        form.set_notes(outcome.text.clone());
    }

    let mut report = FillReport {
        text: outcome.text,
        corrected: outcome.corrected,
        extracted: outcome.fields,
        merge,
        form: form.clone(),
        draft: None,
        errors: Vec::new(),
    };

    if !args.submit {
        return output(&report, flags.format);
    }

    match form.submit(&reference, chrono::Local::now().date_naive()) {
        Ok(draft) => {
            report.draft = Some(draft);
            output(&report, flags.format)
        }
        Err(errors) => {
            let count = errors.len();
            report.errors = errors;
            output(&report, flags.format)?;
            anyhow::bail!("procedure form has {count} validation error(s)")
        }
    }
}

/// Edits the user made by hand, applied before extraction so they are never
/// overwritten.
fn manual_form(args: &FillArgs) -> ProcedureForm {
    let mut form = ProcedureForm::new();
    if let Some(department) = &args.department {
        form.set_department_manually(Some(department.clone()));
    }
    if let Some(task) = &args.task {
        form.set_task_manually(Some(task.clone()));
    }
    if let Some(supervisor) = &args.supervisor {
        form.set_supervisor_manually(Some(supervisor.clone()));
    }
    if let Some(notes) = &args.notes {
        form.set_notes(notes.clone());
    }
    if let Some(date) = args.date {
        form.set_performed_on(date);
    }
    form
}
