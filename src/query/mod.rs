//! Lookup & join engine.
//!
//! Joins the metadata tables against the resolved package states to produce
//! denormalized records the presenters can render directly.

use crate::db::PackageStates;
use crate::error::{Result, SupportInfoError};
use crate::metadata::SupportMetadata;
use crate::model::{InstallState, SupportStatement, SupportStatus, DEFAULT_BUCKET};
use std::fmt;
use std::str::FromStr;

/// One fully joined row: a package, its bucket, its host state, and the
/// statement covering it.
#[derive(Debug, Clone)]
pub struct SupportRecord {
    pub name: String,
    pub eol_id: String,
    pub state: InstallState,
    /// `version-release` of the installed or available instance; empty for
    /// unavailable packages.
    pub version: String,
    pub statement: SupportStatement,
    /// Note text for namespaced buckets; the generic bucket carries none.
    pub note: Option<String>,
}

/// Filter classes accepted by the bulk listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShowFilter {
    All,
    Supported,
    Unsupported,
    Installed,
    Available,
}

impl ShowFilter {
    fn matches(self, state: InstallState, status: &SupportStatus) -> bool {
        match self {
            Self::All => true,
            Self::Supported => *status == SupportStatus::Supported,
            Self::Unsupported => *status == SupportStatus::Unsupported,
            Self::Installed => state == InstallState::Installed,
            Self::Available => state == InstallState::Available,
        }
    }
}

impl FromStr for ShowFilter {
    type Err = SupportInfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            "supported" => Ok(Self::Supported),
            "unsupported" => Ok(Self::Unsupported),
            "installed" => Ok(Self::Installed),
            "available" => Ok(Self::Available),
            other => Err(SupportInfoError::UnknownFilter(other.to_string())),
        }
    }
}

impl fmt::Display for ShowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Supported => "supported",
            Self::Unsupported => "unsupported",
            Self::Installed => "installed",
            Self::Available => "available",
        })
    }
}

/// Build the joined record for one (bucket, package) pair. `None` when the
/// bucket has no committed statement — such packages are silently skipped,
/// never an error.
fn join(
    eol_id: &str,
    pkg: &str,
    metadata: &SupportMetadata,
    states: &PackageStates,
) -> Option<SupportRecord> {
    let statement = metadata.statements.get(eol_id)?;
    let (state, version) = states.resolve(pkg);
    let note = if eol_id == DEFAULT_BUCKET {
        None
    } else {
        metadata.note_for(eol_id).map(String::from)
    };
    Some(SupportRecord {
        name: pkg.to_string(),
        eol_id: eol_id.to_string(),
        state,
        version,
        statement: statement.clone(),
        note,
    })
}

/// Single-package lookup: scan every bucket for membership.
///
/// A package recorded under several identifiers (via note overrides) yields
/// one record per bucket, in table order. Unavailable packages are included.
/// An unknown package yields an empty list.
#[must_use]
pub fn lookup_package(
    pkg: &str,
    metadata: &SupportMetadata,
    states: &PackageStates,
) -> Vec<SupportRecord> {
    metadata
        .packages
        .iter()
        .filter(|(_, names)| names.iter().any(|n| n == pkg))
        .filter_map(|(eol_id, _)| join(eol_id, pkg, metadata, states))
        .collect()
}

/// Bulk filtered listing over every bucket.
///
/// Buckets are visited in document order and packages within a bucket in
/// sorted name order. Unavailable packages never appear in the listing.
#[must_use]
pub fn list_statements(
    filter: ShowFilter,
    metadata: &SupportMetadata,
    states: &PackageStates,
) -> Vec<SupportRecord> {
    let mut records = Vec::new();
    for (eol_id, names) in &metadata.packages {
        let mut sorted: Vec<&String> = names.iter().collect();
        sorted.sort();
        for pkg in sorted {
            let Some(record) = join(eol_id, pkg, metadata, states) else {
                continue;
            };
            if record.state == InstallState::Unavailable {
                continue;
            }
            if filter.matches(record.state, &record.statement.status) {
                records.push(record);
            }
        }
    }
    records
}
