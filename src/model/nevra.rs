//! NEVRA specifier parsing.
//!
//! A full specifier has the shape `name-[epoch:]version-release.arch`, e.g.
//! `bash-0:5.2.15-1.amzn2023.x86_64`. Name segments may themselves contain
//! dashes, so parsing works right-to-left: arch after the last dot, then
//! release and version after the last two dashes.

use std::fmt;

/// Sentinel value substituted for every field when a specifier cannot be
/// parsed. Matches the placeholder the tool prints for unresolvable packages.
pub const UNKNOWN: &str = "Unknown";

/// A parsed Name-Epoch-Version-Release-Architecture tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nevra {
    pub name: String,
    pub epoch: String,
    pub version: String,
    pub release: String,
    pub arch: String,
}

impl Nevra {
    /// Parse a full NEVRA specifier. Returns `None` when the string does not
    /// decompose into all five fields; there is no partial parse.
    pub fn parse(spec: &str) -> Option<Self> {
        let (rest, arch) = spec.rsplit_once('.')?;
        let (rest, release) = rest.rsplit_once('-')?;
        let (name, evr) = rest.rsplit_once('-')?;
        let (epoch, version) = match evr.split_once(':') {
            Some((epoch, version)) => (epoch, version),
            None => ("0", evr),
        };
        if name.is_empty() || version.is_empty() || release.is_empty() || arch.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            epoch: epoch.to_string(),
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
        })
    }

    /// Parse a specifier, falling back to the all-`"Unknown"` sentinel record
    /// instead of failing. Resolution problems for a single package never
    /// abort the whole run.
    pub fn parse_or_unknown(spec: &str) -> Self {
        Self::parse(spec).unwrap_or_else(|| {
            tracing::debug!("unresolvable package specifier: {spec}");
            Self::unknown()
        })
    }

    /// The sentinel record.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            epoch: UNKNOWN.to_string(),
            version: UNKNOWN.to_string(),
            release: UNKNOWN.to_string(),
            arch: UNKNOWN.to_string(),
        }
    }

    /// The `version-release` string shown in all output modes.
    #[must_use]
    pub fn vr(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }

    /// `epoch:version-release`, the comparison key for latest-version
    /// selection.
    #[must_use]
    pub fn evr(&self) -> String {
        format!("{}:{}", self.epoch, self.vr())
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}:{}-{}.{}",
            self.name, self.epoch, self.version, self.release, self.arch
        )
    }
}
