//! Bulk listing handler (`--show <filter>`).

use crate::db::PackageStates;
use crate::metadata::SupportMetadata;
use crate::query::{list_statements, ShowFilter};
use crate::reports::render_table_row;
use anyhow::Result;
use std::io::Write;

/// Print one table row per package matching the filter.
///
/// An empty result is not an error; the command exits cleanly with no
/// output.
pub fn run_show(
    filter: ShowFilter,
    metadata: &SupportMetadata,
    states: &PackageStates,
    out: &mut dyn Write,
) -> Result<()> {
    let records = list_statements(filter, metadata, states);
    tracing::debug!(rows = records.len(), "listing support statements ({filter})");
    for record in &records {
        writeln!(out, "{}", render_table_row(record))?;
    }
    Ok(())
}
