//! Single-package lookup handler (`--pkg <name>`).

use crate::db::PackageStates;
use crate::metadata::SupportMetadata;
use crate::query::lookup_package;
use crate::reports::{render_detail, render_xml};
use anyhow::Result;
use std::io::Write;

/// Print a detail block — or an XML document when `show_xml` is set — for
/// every bucket the package is recorded under.
///
/// A package found in no bucket produces no output and no error.
pub fn run_lookup(
    pkg: &str,
    show_xml: bool,
    metadata: &SupportMetadata,
    states: &PackageStates,
    out: &mut dyn Write,
) -> Result<()> {
    let records = lookup_package(pkg, metadata, states);
    if records.is_empty() {
        tracing::debug!("package {pkg} not covered by any support statement");
        return Ok(());
    }
    for record in &records {
        if show_xml {
            writeln!(out, "{}", render_xml(record)?)?;
        } else {
            writeln!(out, "{}", render_detail(record))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (SupportMetadata, PackageStates) {
        let metadata = SupportMetadata::parse_str(
            r#"<support_info>
<packages><package name="foo"/></packages>
<statement id="eol" start_date="2020-01-01" end_date="2030-01-01" marker="supported">
<summary>s</summary>
</statement>
</support_info>"#,
        )
        .unwrap();
        let states = PackageStates::from_specs(&["foo-1.2-3.amzn2.x86_64"], &[]);
        (metadata, states)
    }

    #[test]
    fn test_lookup_detail_output() {
        let (metadata, states) = fixtures();
        let mut out = Vec::new();
        run_lookup("foo", false, &metadata, &states, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Name"));
        assert!(text.contains("foo"));
        assert!(!text.contains("<package_support"));
    }

    #[test]
    fn test_lookup_xml_output() {
        let (metadata, states) = fixtures();
        let mut out = Vec::new();
        run_lookup("foo", true, &metadata, &states, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<package_support"));
        assert!(text.contains("nevra=\"1.2-3.amzn2\""));
    }

    #[test]
    fn test_lookup_unknown_package_silent() {
        let (metadata, states) = fixtures();
        let mut out = Vec::new();
        run_lookup("ghost", false, &metadata, &states, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
