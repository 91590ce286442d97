//! # molar-roster
//!
//! Parses a pasted student roster for bulk import.
//!
//! Input is newline-delimited. Rows are tab-separated when the first line has a
//! tab, comma-separated otherwise. Each row has one to three cells: the cell
//! containing `@` is the email, and the other cells, in order, are name and
//! batch. Missing names and batches take configurable placeholders.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

/// Words that mark the first line as a header.
const HEADER_KEYWORDS: &[&str] = &["email", "mail", "name", "batch"];

const MAX_COLUMNS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Nothing but whitespace was pasted.
    #[error("roster is empty")]
    Empty,
}

/// Placeholders for cells a row leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterDefaults {
    pub name: String,
    pub batch: String,
}

impl Default for RosterDefaults {
    fn default() -> Self {
        Self {
            name: "Student".to_string(),
            batch: "Batch A".to_string(),
        }
    }
}

/// One student to invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub email: String,
    pub name: String,
    pub batch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MissingEmail,
    DuplicateEmail,
    TooManyColumns,
}

/// A line that could not become an entry. `line` is 1-based in the paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: usize,
    pub content: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterImport {
    pub rows: Vec<RosterEntry>,
    pub rejected: Vec<RejectedLine>,
    pub header_skipped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    fn detect(first_line: &str) -> Self {
        if first_line.contains('\t') {
            Self::Tab
        } else {
            Self::Comma
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Tab => '\t',
            Self::Comma => ',',
        }
    }
}

/// Parse a pasted roster.
///
/// # Errors
///
/// Returns [`RosterError::Empty`] when the paste has no non-blank lines.
pub fn parse(input: &str, defaults: &RosterDefaults) -> Result<RosterImport, RosterError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    let Some(&(_, first)) = lines.peek() else {
        return Err(RosterError::Empty);
    };

    let delimiter = Delimiter::detect(first);
    let mut import = RosterImport::default();
    if is_header(first) {
        lines.next();
        import.header_skipped = true;
    }

    let mut seen = HashSet::new();
    for (line_no, line) in lines {
        match parse_row(line, delimiter, defaults) {
            Ok(entry) if !seen.insert(entry.email.clone()) => {
                import.rejected.push(reject(line_no, line, RejectReason::DuplicateEmail));
            }
            Ok(entry) => import.rows.push(entry),
            Err(reason) => import.rejected.push(reject(line_no, line, reason)),
        }
    }

    tracing::debug!(
        ?delimiter,
        rows = import.rows.len(),
        rejected = import.rejected.len(),
        header = import.header_skipped,
        "parsed roster"
    );
    Ok(import)
}

/// A header names its columns and never carries an email address.
fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    !lower.contains('@') && HEADER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn parse_row(
    line: &str,
    delimiter: Delimiter,
    defaults: &RosterDefaults,
) -> Result<RosterEntry, RejectReason> {
    let mut cells: Vec<&str> = line.split(delimiter.as_char()).map(str::trim).collect();
    while cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    if cells.len() > MAX_COLUMNS {
        return Err(RejectReason::TooManyColumns);
    }

    let email_idx = cells
        .iter()
        .position(|cell| cell.contains('@'))
        .ok_or(RejectReason::MissingEmail)?;
    let email = cells.remove(email_idx).to_lowercase();

    let pick = |idx: usize, fallback: &str| {
        cells
            .get(idx)
            .filter(|cell| !cell.is_empty())
            .map_or_else(|| fallback.to_string(), |cell| (*cell).to_string())
    };

    Ok(RosterEntry {
        email,
        name: pick(0, &defaults.name),
        batch: pick(1, &defaults.batch),
    })
}

fn reject(line: usize, content: &str, reason: RejectReason) -> RejectedLine {
    RejectedLine {
        line,
        content: content.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn entry(email: &str, name: &str, batch: &str) -> RosterEntry {
        RosterEntry {
            email: email.into(),
            name: name.into(),
            batch: batch.into(),
        }
    }

    fn parse_default(input: &str) -> RosterImport {
        parse(input, &RosterDefaults::default()).unwrap()
    }

    #[test]
    fn missing_cells_take_defaults() {
        let import = parse_default("a@x.com,Alice,Batch A\nb@x.com");
        assert_eq!(
            import.rows,
            vec![
                entry("a@x.com", "Alice", "Batch A"),
                entry("b@x.com", "Student", "Batch A"),
            ]
        );
        assert!(!import.header_skipped);
    }

    #[test]
    fn header_row_is_excluded() {
        let import = parse_default("email,name,batch\na@x.com,Alice,2026 Intake");
        assert!(import.header_skipped);
        assert_eq!(import.rows, vec![entry("a@x.com", "Alice", "2026 Intake")]);
        assert!(import.rejected.is_empty());
    }

    #[rstest]
    #[case("Email Address\tFull Name", true)]
    #[case("mail,batch", true)]
    #[case("Student Name", true)]
    #[case("a@x.com,Alice,Batch A", false)]
    #[case("alice,bob", false)]
    fn header_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_header(line), expected);
    }

    #[test]
    fn tab_delimited_from_spreadsheet() {
        let import = parse_default("Name\tEmail\tBatch\nAlice Smith\tALICE@Uni.edu\tBDS 2027\nBob, Jr.\tbob@uni.edu");
        assert_eq!(
            import.rows,
            vec![
                entry("alice@uni.edu", "Alice Smith", "BDS 2027"),
                entry("bob@uni.edu", "Bob, Jr.", "Batch A"),
            ]
        );
    }

    #[test]
    fn email_can_be_in_any_column() {
        let import = parse_default("Carol,carol@x.com,Batch C\nDan,dan@x.com");
        assert_eq!(
            import.rows,
            vec![
                entry("carol@x.com", "Carol", "Batch C"),
                entry("dan@x.com", "Dan", "Batch A"),
            ]
        );
    }

    #[test]
    fn blank_name_cell_uses_default() {
        let import = parse_default("e@x.com,,Batch E");
        assert_eq!(import.rows, vec![entry("e@x.com", "Student", "Batch E")]);
    }

    #[test]
    fn bad_lines_are_reported_with_line_numbers() {
        let import = parse_default("a@x.com\n\nno email here\nA@X.com,Again\nb@x.com,B,C,D");
        assert_eq!(import.rows, vec![entry("a@x.com", "Student", "Batch A")]);
        assert_eq!(
            import.rejected,
            vec![
                reject(3, "no email here", RejectReason::MissingEmail),
                reject(4, "A@X.com,Again", RejectReason::DuplicateEmail),
                reject(5, "b@x.com,B,C,D", RejectReason::TooManyColumns),
            ]
        );
    }

    #[test]
    fn trailing_delimiters_are_tolerated() {
        let import = parse_default("f@x.com,Fay,,\r\n");
        assert_eq!(import.rows, vec![entry("f@x.com", "Fay", "Batch A")]);
    }

    #[test]
    fn custom_defaults() {
        let defaults = RosterDefaults {
            name: "New Student".into(),
            batch: "Unassigned".into(),
        };
        let import = parse("g@x.com", &defaults).unwrap();
        assert_eq!(import.rows, vec![entry("g@x.com", "New Student", "Unassigned")]);
    }

    #[rstest]
    #[case("")]
    #[case("  \n\t\n")]
    fn blank_paste_is_an_error(#[case] input: &str) {
        assert_eq!(
            parse(input, &RosterDefaults::default()),
            Err(RosterError::Empty)
        );
    }
}
