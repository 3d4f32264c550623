//! Host package database access.
//!
//! The external package manager is reached through the [`PackageBackend`]
//! trait: two queries returning full NEVRA specifier strings for the
//! installed set and the latest-available set. [`PackageStates`] normalizes
//! both into name-keyed state tables and answers the installed/available/
//! unavailable question for the join engine.

mod dnf;

pub use dnf::DnfBackend;

use crate::error::Result;
use crate::model::{InstallState, Nevra, PackageState};
use crate::utils::version::compare_evr;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Interface to the host package database.
///
/// Any failure here is fatal for the whole command; there are no partial
/// results and no retries.
pub trait PackageBackend {
    /// Full NEVRA specifiers of every installed package.
    fn installed(&self) -> Result<Vec<String>>;

    /// Full NEVRA specifiers of the latest available version of every
    /// package known to the enabled repositories.
    fn available_latest(&self) -> Result<Vec<String>>;
}

/// The two name-keyed state tables built from one backend interrogation.
#[derive(Debug, Clone, Default)]
pub struct PackageStates {
    installed: IndexMap<String, PackageState>,
    available: IndexMap<String, PackageState>,
}

impl PackageStates {
    /// Query the backend once and normalize both package collections.
    pub fn collect(backend: &dyn PackageBackend) -> Result<Self> {
        let mut states = Self::default();
        for spec in backend.installed()? {
            states.record(&spec, InstallState::Installed);
        }
        for spec in backend.available_latest()? {
            states.record(&spec, InstallState::Available);
        }
        tracing::debug!(
            installed = states.installed.len(),
            available = states.available.len(),
            "collected package states"
        );
        Ok(states)
    }

    /// Build state tables directly from specifier lists. Used by tests and
    /// by callers that already hold the package sets.
    pub fn from_specs(installed: &[&str], available: &[&str]) -> Self {
        let mut states = Self::default();
        for spec in installed {
            states.record(spec, InstallState::Installed);
        }
        for spec in available {
            states.record(spec, InstallState::Available);
        }
        states
    }

    fn record(&mut self, spec: &str, state: InstallState) {
        let nevra = Nevra::parse_or_unknown(spec);
        let entry = PackageState {
            name: nevra.name.clone(),
            state,
            version: nevra.vr(),
            arch: nevra.arch.clone(),
        };
        let table = match state {
            InstallState::Installed => &mut self.installed,
            InstallState::Available => &mut self.available,
            InstallState::Unavailable => return,
        };
        // Multi-arch repositories can report one name several times; keep
        // the highest epoch:version-release.
        match table.get(&nevra.name) {
            Some(existing)
                if compare_evr(&nevra.evr(), &existing_evr(existing)) == Ordering::Less => {}
            _ => {
                table.insert(nevra.name, entry);
            }
        }
    }

    /// Resolved state and version-release string for a package name.
    ///
    /// Installed membership is checked first: a package present in both raw
    /// sets is always reported as installed.
    #[must_use]
    pub fn resolve(&self, name: &str) -> (InstallState, String) {
        if let Some(pkg) = self.installed.get(name) {
            (InstallState::Installed, pkg.version.clone())
        } else if let Some(pkg) = self.available.get(name) {
            (InstallState::Available, pkg.version.clone())
        } else {
            (InstallState::Unavailable, String::new())
        }
    }

    /// Installed-state record for a name, if present.
    #[must_use]
    pub fn installed_package(&self, name: &str) -> Option<&PackageState> {
        self.installed.get(name)
    }

    /// Available-state record for a name, if present.
    #[must_use]
    pub fn available_package(&self, name: &str) -> Option<&PackageState> {
        self.available.get(name)
    }
}

/// Rebuild the comparison key for an already-normalized record. The epoch is
/// not retained in [`PackageState`], so recorded entries compare at epoch 0;
/// incoming entries with a real epoch still win.
fn existing_evr(state: &PackageState) -> String {
    format!("0:{}", state.version)
}
