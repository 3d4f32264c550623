//! Per-package installation state.

use std::fmt;

/// Installation state of a package on the host.
///
/// `Installed` and `Available` are mutually exclusive in the resolved tables:
/// a package present in both raw sets is reported as installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Installed,
    Available,
    Unavailable,
}

impl InstallState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Installed => "installed",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized state record for one package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageState {
    pub name: String,
    pub state: InstallState,
    /// `version-release` string of the recorded instance.
    pub version: String,
    pub arch: String,
}
