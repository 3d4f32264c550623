//! Fixed-width table rows for the bulk listing.

use super::pad;
use crate::query::SupportRecord;

const NAME_WIDTH: usize = 42;
const VERSION_WIDTH: usize = 36;
const FIELD_WIDTH: usize = 18;

/// One listing row: name, version, state, status, end date, summary.
#[must_use]
pub fn render_table_row(record: &SupportRecord) -> String {
    let row = format!(
        "{} {} {} {} {} {}",
        pad(&record.name, NAME_WIDTH),
        pad(&record.version, VERSION_WIDTH),
        pad(record.state.as_str(), FIELD_WIDTH),
        pad(record.statement.status.as_str(), FIELD_WIDTH),
        pad(&record.statement.end_date, FIELD_WIDTH),
        pad(&record.statement.summary, FIELD_WIDTH),
    );
    row.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InstallState, SupportStatement, SupportStatus};

    fn record() -> SupportRecord {
        SupportRecord {
            name: "foo".to_string(),
            eol_id: "eol".to_string(),
            state: InstallState::Installed,
            version: "1.2-3.amzn2".to_string(),
            statement: SupportStatement {
                start_date: "2020-01-01".to_string(),
                end_date: "2030-01-01".to_string(),
                status: SupportStatus::Supported,
                summary: "Core packages".to_string(),
                link: String::new(),
                text: String::new(),
            },
            note: None,
        }
    }

    #[test]
    fn test_row_column_order() {
        let row = render_table_row(&record());
        let name_pos = row.find("foo").unwrap();
        let version_pos = row.find("1.2-3.amzn2").unwrap();
        let state_pos = row.find("installed").unwrap();
        let status_pos = row.find("supported").unwrap();
        let date_pos = row.find("2030-01-01").unwrap();
        let summary_pos = row.find("Core packages").unwrap();
        assert!(name_pos < version_pos);
        assert!(version_pos < state_pos);
        assert!(state_pos < status_pos);
        assert!(status_pos < date_pos);
        assert!(date_pos < summary_pos);
    }

    #[test]
    fn test_row_column_offsets() {
        let row = render_table_row(&record());
        assert_eq!(row.find("1.2-3.amzn2"), Some(43));
        assert_eq!(row.find("installed"), Some(80));
    }
}
