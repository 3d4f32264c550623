//! Domain records shared across the crate.
//!
//! Everything downstream of the extractor and the resolver works in terms of
//! these types: NEVRA specifiers, support statements, and per-package
//! installation state.

mod nevra;
mod state;
mod statement;

pub use nevra::{Nevra, UNKNOWN};
pub use state::{InstallState, PackageState};
pub use statement::{SupportStatement, SupportStatus};

/// Identifier of the default bucket used when a `<package>` declaration
/// carries no explicit `note` attribute.
pub const DEFAULT_BUCKET: &str = "eol";
