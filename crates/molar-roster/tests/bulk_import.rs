use molar_roster::{RejectReason, RosterDefaults, parse};
use pretty_assertions::assert_eq;

const SPREADSHEET_PASTE: &str = "\
Email\tStudent Name\tBatch
priya@dental.edu\tPriya Menon\tBDS 2026
\t\t
ARJUN@Dental.edu\tArjun K
meera@dental.edu
priya@dental.edu\tPriya Again\tBDS 2027
Guest Lecturer\tBDS 2026
";

#[test]
fn spreadsheet_paste_imports_valid_rows_and_reports_the_rest() {
    let import = parse(SPREADSHEET_PASTE, &RosterDefaults::default()).unwrap();

    assert!(import.header_skipped);
    let summary: Vec<_> = import
        .rows
        .iter()
        .map(|row| (row.email.as_str(), row.name.as_str(), row.batch.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("priya@dental.edu", "Priya Menon", "BDS 2026"),
            ("arjun@dental.edu", "Arjun K", "Batch A"),
            ("meera@dental.edu", "Student", "Batch A"),
        ]
    );

    let rejected: Vec<_> = import.rejected.iter().map(|r| (r.line, r.reason)).collect();
    assert_eq!(
        rejected,
        vec![
            (6, RejectReason::DuplicateEmail),
            (7, RejectReason::MissingEmail),
        ]
    );
}

#[test]
fn import_report_serializes_for_the_admin_view() {
    let import = parse("x@y.z,,\nnope", &RosterDefaults::default()).unwrap();
    let json = serde_json::to_value(&import).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "rows": [{ "email": "x@y.z", "name": "Student", "batch": "Batch A" }],
            "rejected": [{ "line": 2, "content": "nope", "reason": "missing_email" }],
            "header_skipped": false,
        })
    );
}
