use molar_core::entities::{Batch, Department, Procedure, QuotaTask};
use molar_core::reference::ReferenceData;
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `molar schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.type_name), flags.format)
}

fn schema(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Procedure => schema_for!(Procedure),
        SchemaType::Department => schema_for!(Department),
        SchemaType::QuotaTask => schema_for!(QuotaTask),
        SchemaType::Batch => schema_for!(Batch),
        SchemaType::Reference => schema_for!(ReferenceData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedure_schema_lists_statuses() {
        let value = schema(SchemaType::Procedure).to_value();
        let rendered = value.to_string();
        for status in ["pending", "approved", "rejected"] {
            assert!(rendered.contains(status), "missing {status}");
        }
        assert_eq!(value["title"], "Procedure");
    }

    #[test]
    fn reference_schema_describes_both_lists() {
        let value = schema(SchemaType::Reference).to_value();
        assert!(value["properties"]["departments"].is_object());
        assert!(value["properties"]["tasks"].is_object());
        assert!(value["$defs"]["QuotaTask"].is_object());
    }
}
