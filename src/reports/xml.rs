//! XML export of one support statement.
//!
//! Synthesizes a document shaped like the bundled metadata file, rooted at
//! `package_support` with a `current_as` attribute carrying the current
//! date, and pretty-prints it with two-space indentation.

use super::ReportError;
use crate::query::SupportRecord;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Render the XML document for one joined record, stamped with today's date.
pub fn render_xml(record: &SupportRecord) -> Result<String, ReportError> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    render_xml_at(record, &today)
}

/// Render the XML document with an explicit `current_as` date.
pub fn render_xml_at(record: &SupportRecord, current_as: &str) -> Result<String, ReportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("package_support");
    root.push_attribute(("current_as", current_as));
    writer.write_event(Event::Start(root))?;

    writer.write_event(Event::Start(BytesStart::new("statements")))?;

    let mut statement = BytesStart::new("statement");
    statement.push_attribute(("id", record.eol_id.as_str()));
    statement.push_attribute(("marker", record.statement.status.as_str()));
    statement.push_attribute(("start_date", record.statement.start_date.as_str()));
    statement.push_attribute(("end_date", record.statement.end_date.as_str()));
    writer.write_event(Event::Start(statement))?;

    write_text_element(&mut writer, "summary", &record.statement.summary)?;
    write_text_element(&mut writer, "text", &record.statement.text)?;
    write_text_element(&mut writer, "link", &record.statement.link)?;

    writer.write_event(Event::Start(BytesStart::new("packages")))?;
    let mut package = BytesStart::new("package");
    package.push_attribute(("name", record.name.as_str()));
    package.push_attribute(("nevra", record.version.as_str()));
    writer.write_event(Event::Empty(package))?;
    writer.write_event(Event::End(BytesEnd::new("packages")))?;

    writer.write_event(Event::End(BytesEnd::new("statement")))?;
    writer.write_event(Event::End(BytesEnd::new("statements")))?;
    writer.write_event(Event::End(BytesEnd::new("package_support")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    content: &str,
) -> Result<(), ReportError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InstallState, SupportStatement, SupportStatus};

    fn record() -> SupportRecord {
        SupportRecord {
            name: "foo".to_string(),
            eol_id: "X1".to_string(),
            state: InstallState::Installed,
            version: "1.2-3.amzn2".to_string(),
            statement: SupportStatement {
                start_date: "2020-01-01".to_string(),
                end_date: "2030-01-01".to_string(),
                status: SupportStatus::Supported,
                summary: "Summary & more".to_string(),
                link: "https://example.com".to_string(),
                text: "Other".to_string(),
            },
            note: None,
        }
    }

    #[test]
    fn test_document_shape() {
        let doc = render_xml_at(&record(), "2026-08-06").unwrap();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(doc.contains("<package_support current_as=\"2026-08-06\">"));
        assert!(doc.contains(
            "<statement id=\"X1\" marker=\"supported\" start_date=\"2020-01-01\" end_date=\"2030-01-01\">"
        ));
        assert!(doc.contains("<link>https://example.com</link>"));
        assert!(doc.contains("<package name=\"foo\" nevra=\"1.2-3.amzn2\"/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = render_xml_at(&record(), "2026-08-06").unwrap();
        assert!(doc.contains("<summary>Summary &amp; more</summary>"));
    }

    #[test]
    fn test_output_is_indented() {
        let doc = render_xml_at(&record(), "2026-08-06").unwrap();
        assert!(doc.contains("\n  <statements>"));
        assert!(doc.contains("\n    <statement"));
    }

    #[test]
    fn test_round_trips_through_parser() {
        let doc = render_xml_at(&record(), "2026-08-06").unwrap();
        let meta = crate::metadata::SupportMetadata::parse_str(&doc).unwrap();
        let stmt = meta.statements.get("X1").unwrap();
        assert_eq!(stmt.summary, "Summary & more");
        assert_eq!(stmt.status, SupportStatus::Supported);
        // The exported package carries no note, so it parses back into the
        // generic bucket.
        assert_eq!(
            meta.packages.get(crate::model::DEFAULT_BUCKET).unwrap(),
            &vec!["foo".to_string()]
        );
    }
}
