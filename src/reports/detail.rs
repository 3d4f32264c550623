//! Labeled detail block for single-package lookups.

use super::fill_exact;
use crate::model::DEFAULT_BUCKET;
use crate::query::SupportRecord;

const LABEL_WIDTH: usize = 20;

/// `Label : value` line; labels occupy a fixed 20-column field.
fn field(key: &str, value: &str) -> String {
    format!("{} : {}", fill_exact(key, LABEL_WIDTH), value)
}

/// Render the full detail block for one joined record.
///
/// The Package Note line appears only for packages whose identifier differs
/// from the generic bucket.
#[must_use]
pub fn render_detail(record: &SupportRecord) -> String {
    let stmt = &record.statement;
    let mut lines = vec![
        field("Name", &record.name),
        field("Version", &record.version),
        field("State", record.state.as_str()),
        field("Support Status", stmt.status.as_str()),
        field(
            "Support Periods",
            &field(&format!("from {}", stmt.start_date), "supported"),
        ),
        field("", &field(&format!("from {}", stmt.end_date), "unsupported")),
        field("Support Statement", &stmt.summary),
        field("Link", &stmt.link),
        field("Other Info", &stmt.text),
    ];
    if record.eol_id != DEFAULT_BUCKET {
        lines.push(field("Package Note", record.note.as_deref().unwrap_or("")));
    }
    lines.push(String::new());
    lines.join("\n")
}
