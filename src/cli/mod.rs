//! Command handlers.
//!
//! The binary wires flags into these functions; they consume the loaded
//! tables and write rendered output to the supplied sink so they stay
//! testable without capturing stdout.

mod lookup;
mod show;

pub use lookup::run_lookup;
pub use show::run_show;
