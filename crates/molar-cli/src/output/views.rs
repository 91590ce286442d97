use molar_core::enums::{FieldSource, ProcedureStatus};
use molar_notes::{Extracted, ParseOutcome};
use molar_roster::{RejectReason, RosterImport};
use schemars::Schema;
use serde_json::Value;

use super::{Cell, Table, Tabular, Tone};

pub fn source_cell(source: FieldSource) -> Cell {
    let tone = match source {
        FieldSource::Remote => Tone::Good,
        FieldSource::Fallback => Tone::Warn,
    };
    Cell::toned(source.as_str(), tone)
}

pub fn status_cell(status: ProcedureStatus) -> Cell {
    let tone = match status {
        ProcedureStatus::Approved => Tone::Good,
        ProcedureStatus::Pending => Tone::Warn,
        ProcedureStatus::Rejected => Tone::Bad,
    };
    Cell::toned(status.as_str(), tone)
}

/// Value and source cells for one extracted field, `-` when nothing was found.
pub fn extracted_cells(field: Option<&Extracted>) -> [Cell; 2] {
    field.map_or_else(
        || [Cell::from("-"), Cell::from("-")],
        |found| [Cell::from(found.value.as_str()), source_cell(found.source)],
    )
}

impl Tabular for ParseOutcome {
    fn table(&self) -> Table {
        let mut table = Table::new(&["field", "value", "source"]);
        for (name, field) in [
            ("department", &self.fields.department_id),
            ("task", &self.fields.task_id),
            ("supervisor", &self.fields.supervisor_name),
        ] {
            let [value, source] = extracted_cells(field.as_ref());
            table.push([Cell::from(name), value, source]);
        }
        let origin = if self.corrected {
            Cell::toned("corrected", Tone::Good)
        } else {
            Cell::from("as heard")
        };
        table.push([Cell::from("text"), Cell::from(self.text.as_str()), origin]);
        table
    }
}

const fn reason_label(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::MissingEmail => "no email",
        RejectReason::DuplicateEmail => "duplicate email",
        RejectReason::TooManyColumns => "too many columns",
    }
}

impl Tabular for RosterImport {
    fn table(&self) -> Table {
        let mut table = Table::new(&["line", "status", "email", "name", "batch"]);
        for entry in &self.rows {
            table.push([
                Cell::from(""),
                Cell::toned("invite", Tone::Good),
                Cell::from(entry.email.as_str()),
                Cell::from(entry.name.as_str()),
                Cell::from(entry.batch.as_str()),
            ]);
        }
        for rejected in &self.rejected {
            table.push([
                Cell::from(rejected.line.to_string()),
                Cell::toned(reason_label(rejected.reason), Tone::Bad),
                Cell::from(rejected.content.as_str()),
            ]);
        }
        let header = if self.header_skipped {
            ", header row skipped"
        } else {
            ""
        };
        table.footer(format!(
            "{} to invite, {} rejected{header}",
            self.rows.len(),
            self.rejected.len()
        ))
    }
}

/// One row per top-level property of the schema.
impl Tabular for Schema {
    fn table(&self) -> Table {
        let value = self.as_value();
        let required: Vec<&str> = value["required"]
            .as_array()
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut table = Table::new(&["property", "type", "required"]);
        if let Some(properties) = value["properties"].as_object() {
            for (name, property) in properties {
                let required = if required.contains(&name.as_str()) {
                    "yes"
                } else {
                    "no"
                };
                table.push([name.clone(), type_label(property), required.to_string()]);
            }
        }
        match value["title"].as_str() {
            Some(title) => table.footer(title),
            None => table,
        }
    }
}

fn type_label(property: &Value) -> String {
    if let Some(kind) = property["type"].as_str() {
        return kind.to_string();
    }
    if let Some(kinds) = property["type"].as_array() {
        return kinds
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("|");
    }
    if let Some(target) = property["$ref"].as_str() {
        return target.rsplit('/').next().unwrap_or(target).to_string();
    }
    if property["enum"].is_array() || property["oneOf"].is_array() {
        return "enum".to_string();
    }
    "-".to_string()
}

#[cfg(test)]
mod tests {
    use molar_core::entities::Department;
    use molar_notes::ExtractedFields;
    use molar_roster::{RejectedLine, RosterEntry};
    use pretty_assertions::assert_eq;

    use super::*;

    fn lines(table: &Table) -> Vec<String> {
        table
            .render(None, false)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn parse_outcome_lists_fields_with_sources() {
        let outcome = ParseOutcome {
            raw_text: "rct 36 dr rao".into(),
            text: "RCT on 36 with Dr. Rao".into(),
            corrected: true,
            fields: ExtractedFields {
                department_id: Some(Extracted::remote("d-endo")),
                task_id: None,
                supervisor_name: Some(Extracted::fallback("Dr. Rao")),
            },
        };
        assert_eq!(
            lines(&outcome.table()),
            vec![
                "field       value                   source",
                "---------------------------------------------",
                "department  d-endo                  remote",
                "task        -                       -",
                "supervisor  Dr. Rao                 fallback",
                "text        RCT on 36 with Dr. Rao  corrected",
            ]
        );
    }

    #[test]
    fn roster_import_shows_invites_then_rejects() {
        let import = RosterImport {
            rows: vec![RosterEntry {
                email: "a@x.com".into(),
                name: "Asha".into(),
                batch: "Batch A".into(),
            }],
            rejected: vec![RejectedLine {
                line: 3,
                content: "a@x.com,Asha again".into(),
                reason: RejectReason::DuplicateEmail,
            }],
            header_skipped: true,
        };
        let rendered = lines(&import.table());
        assert_eq!(rendered[2], "      invite           a@x.com             Asha  Batch A");
        assert_eq!(rendered[3], "3     duplicate email  a@x.com,Asha again  -     -");
        assert_eq!(
            rendered.last().map(String::as_str),
            Some("1 to invite, 1 rejected, header row skipped")
        );
    }

    #[test]
    fn schema_table_marks_required_properties() {
        let schema = schemars::schema_for!(Department);
        let rendered = lines(&schema.table());
        assert!(rendered.iter().any(|line| line.starts_with("id ") && line.ends_with("yes")));
        assert!(rendered.iter().any(|line| line.starts_with("name") && line.contains("string")));
        assert_eq!(rendered.last().map(String::as_str), Some("Department"));
    }
}
