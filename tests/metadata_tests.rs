//! Metadata document loading integration tests.
//!
//! Exercises the on-disk entry point: reading, parsing, and the fatal
//! failure modes for missing or malformed documents.

use std::io::Write as _;
use supportinfo::metadata::SupportMetadata;
use supportinfo::model::{SupportStatus, DEFAULT_BUCKET};
use supportinfo::SupportInfoError;
use tempfile::NamedTempFile;

fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn test_load_full_document() {
    let file = write_fixture(
        r#"<?xml version="1.0" encoding="utf-8"?>
<package_support current_as="2026-01-01">
  <packages>
    <package name="bash"/>
    <package name="coreutils"/>
    <package name="ruby2.6" note="ruby2.6"/>
  </packages>
  <statements>
    <statement id="eol" marker="supported" start_date="2023-03-15" end_date="2028-03-15">
      <summary>Amazon Linux core support</summary>
      <link>https://aws.amazon.com/linux</link>
      <text>Core packages follow the distribution lifetime.</text>
    </statement>
    <statement id="ruby2.6" marker="unsupported" start_date="2019-01-01" end_date="2022-03-31">
      <summary>Ruby 2.6 support window</summary>
      <link>https://www.ruby-lang.org</link>
      <text>Upgrade to a newer Ruby stream.</text>
    </statement>
  </statements>
  <notes>
    <note id="ruby2.6">Ruby 2.6 reached upstream end of life.</note>
  </notes>
</package_support>
"#,
    );

    let metadata = SupportMetadata::from_path(file.path()).unwrap();

    assert_eq!(
        metadata.packages.get(DEFAULT_BUCKET).unwrap(),
        &vec!["bash".to_string(), "coreutils".to_string()]
    );
    assert_eq!(
        metadata.packages.get("ruby2.6").unwrap(),
        &vec!["ruby2.6".to_string()]
    );

    let core = metadata.statements.get("eol").unwrap();
    assert_eq!(core.status, SupportStatus::Supported);
    assert_eq!(core.end_date, "2028-03-15");
    assert_eq!(core.summary, "Amazon Linux core support");

    let ruby = metadata.statements.get("ruby2.6").unwrap();
    assert_eq!(ruby.status, SupportStatus::Unsupported);

    assert_eq!(
        metadata.note_for("ruby2.6"),
        Some("Ruby 2.6 reached upstream end of life.")
    );
}

#[test]
fn test_missing_file_is_fatal() {
    let err = SupportMetadata::from_path(std::path::Path::new("/nonexistent/support_info.xml"))
        .unwrap_err();
    assert!(matches!(err, SupportInfoError::Io { .. }));
}

#[test]
fn test_malformed_document_is_fatal() {
    let file = write_fixture("<package_support><statement id=");
    let err = SupportMetadata::from_path(file.path()).unwrap_err();
    assert!(matches!(err, SupportInfoError::Metadata { .. }));
    // The error names the offending file.
    assert!(err.to_string().contains("support metadata"));
}

#[test]
fn test_statement_missing_dates_is_fatal() {
    let file = write_fixture(
        r#"<package_support>
<statement id="eol" marker="supported"><summary>s</summary></statement>
</package_support>"#,
    );
    assert!(SupportMetadata::from_path(file.path()).is_err());
}

#[test]
fn test_document_order_preserved() {
    let file = write_fixture(
        r#"<package_support>
<packages>
  <package name="zeta" note="z"/>
  <package name="alpha" note="a"/>
</packages>
<statement id="z" marker="supported" start_date="1" end_date="2"/>
<statement id="a" marker="supported" start_date="1" end_date="2"/>
</package_support>"#,
    );
    let metadata = SupportMetadata::from_path(file.path()).unwrap();
    let buckets: Vec<&String> = metadata.packages.keys().collect();
    assert_eq!(buckets, vec!["z", "a"]);
}
