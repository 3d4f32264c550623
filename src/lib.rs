//! **Support statement lookup for packages on RPM-based hosts.**
//!
//! `supportinfo` cross-references a bundled XML metadata document of
//! end-of-life/support statements with the packages installed or available
//! on the host, and prints or exports the support information for them.
//!
//! The work splits into four stages:
//!
//! - **[`metadata`]**: one streaming pass over the metadata document builds
//!   three tables — identifier → package names, identifier → support
//!   statement, identifier → note text.
//! - **[`db`]**: the host package database (reached through the
//!   [`db::PackageBackend`] trait, with a `dnf repoquery` implementation)
//!   yields the installed and latest-available package sets, normalized into
//!   name-keyed state records.
//! - **[`query`]**: joins the five tables into denormalized
//!   [`query::SupportRecord`]s, either for one package or as a filtered bulk
//!   listing.
//! - **[`reports`]**: renders records as fixed-width table rows, labeled
//!   detail blocks, or a pretty-printed XML document.
//!
//! All tables are rebuilt on every invocation; nothing persists between
//! runs.
//!
//! ## Example
//!
//! ```no_run
//! use supportinfo::db::{DnfBackend, PackageStates};
//! use supportinfo::metadata::SupportMetadata;
//! use supportinfo::query::lookup_package;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let metadata = SupportMetadata::from_path(Path::new("support_info.xml"))?;
//!     let backend = DnfBackend::new("/".into(), None);
//!     let states = PackageStates::collect(&backend)?;
//!
//!     for record in lookup_package("bash", &metadata, &states) {
//!         println!("{} is {} until {}", record.name, record.statement.status,
//!             record.statement.end_date);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod metadata;
pub mod model;
pub mod query;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::AppConfig;
pub use db::{DnfBackend, PackageBackend, PackageStates};
pub use error::{Result, SupportInfoError};
pub use metadata::SupportMetadata;
pub use model::{InstallState, Nevra, PackageState, SupportStatement, SupportStatus};
pub use query::{list_statements, lookup_package, ShowFilter, SupportRecord};
