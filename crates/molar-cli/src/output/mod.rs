//! Command results as JSON, or as a table laid out per result type.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
mod views;

pub use table::{Cell, Table, Tone};
pub use views::{extracted_cells, status_cell};

/// A command result with its own table layout.
pub trait Tabular {
    fn table(&self) -> Table;
}

pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            Ok(value.table().render(prefs.term_width, prefs.table_color))
        }
    }
}

pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Quota {
        task: &'static str,
        done: u32,
        target: u32,
    }

    impl Tabular for Quota {
        fn table(&self) -> Table {
            let mut table = Table::new(&["task", "progress"]);
            table.push([self.task.to_string(), format!("{}/{}", self.done, self.target)]);
            table
        }
    }

    const EXO: Quota = Quota {
        task: "Simple Exo",
        done: 12,
        target: 20,
    };

    #[test]
    fn json_is_pretty_and_raw_is_one_line() {
        let pretty = render(&EXO, OutputFormat::Json).expect("json render");
        let raw = render(&EXO, OutputFormat::Raw).expect("raw render");
        assert!(pretty.contains('\n'));
        assert_eq!(raw, r#"{"task":"Simple Exo","done":12,"target":20}"#);
    }

    #[test]
    fn table_uses_the_type_layout() {
        let rendered = render(&EXO, OutputFormat::Table).expect("table render");
        assert_eq!(rendered.lines().last(), Some("Simple Exo  12/20"));
    }
}
