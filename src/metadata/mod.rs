//! Support metadata extraction.
//!
//! Streams the bundled `support_info.xml` document once and produces the
//! three tables everything else joins against: identifier → package names,
//! identifier → support statement, identifier → note text.
//!
//! The document is never validated against a schema; malformed input is a
//! fatal parse error, and elements outside the recognized shapes are simply
//! ignored.

mod parser;

use crate::error::{Result, SupportInfoError};
use crate::model::SupportStatement;
use indexmap::IndexMap;
use std::path::Path;

/// The three in-memory tables extracted from one metadata document.
///
/// All tables preserve document order, so listings are deterministic for a
/// given input file.
#[derive(Debug, Clone, Default)]
pub struct SupportMetadata {
    /// Identifier bucket → package names declared under it.
    pub packages: IndexMap<String, Vec<String>>,
    /// Identifier → committed support statement. Later re-declarations of the
    /// same identifier overwrite earlier ones.
    pub statements: IndexMap<String, SupportStatement>,
    /// Identifier → free-form note text for namespaced buckets.
    pub notes: IndexMap<String, String>,
}

impl SupportMetadata {
    /// Load and parse a metadata document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SupportInfoError::io(
                Some(path.to_path_buf()),
                "failed to read support metadata",
                e,
            )
        })?;
        let metadata = Self::parse_str(&content)
            .map_err(|e| match e {
                SupportInfoError::Metadata { source, .. } => {
                    SupportInfoError::metadata(path.display().to_string(), source)
                }
                other => other,
            })?;
        tracing::debug!(
            buckets = metadata.packages.len(),
            statements = metadata.statements.len(),
            notes = metadata.notes.len(),
            "loaded support metadata from {}",
            path.display()
        );
        Ok(metadata)
    }

    /// Parse a metadata document held in memory.
    pub fn parse_str(content: &str) -> Result<Self> {
        parser::parse_document(content)
            .map_err(|kind| SupportInfoError::metadata("support metadata document", kind))
    }

    /// Note text for a bucket identifier, if any.
    #[must_use]
    pub fn note_for(&self, eol_id: &str) -> Option<&str> {
        self.notes.get(eol_id).map(String::as_str)
    }
}
