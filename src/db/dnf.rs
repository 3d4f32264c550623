//! `dnf repoquery` backend.
//!
//! Interrogates the host package database by running `dnf repoquery` twice:
//! once for the installed set, once for the latest available version of each
//! package in the enabled repositories. Both queries print full NEVRA
//! specifiers, one per line.

use super::PackageBackend;
use crate::error::{DatabaseErrorKind, Result, SupportInfoError};
use std::path::PathBuf;
use std::process::Command;

/// Query format producing one full NEVRA specifier per package.
const NEVRA_FORMAT: &str = "%{name}-%{epoch}:%{version}-%{release}.%{arch}";

/// Backend that shells out to `dnf repoquery`.
#[derive(Debug, Clone)]
pub struct DnfBackend {
    installroot: PathBuf,
    releasever: Option<String>,
}

impl DnfBackend {
    #[must_use]
    pub fn new(installroot: PathBuf, releasever: Option<String>) -> Self {
        Self {
            installroot,
            releasever,
        }
    }

    fn repoquery(&self, selector: &[&str]) -> Result<Vec<String>> {
        let mut cmd = Command::new("dnf");
        cmd.arg("repoquery")
            .arg("-q")
            .arg("-y")
            .arg("--qf")
            .arg(NEVRA_FORMAT)
            .arg("--installroot")
            .arg(&self.installroot);
        if let Some(releasever) = &self.releasever {
            cmd.arg("--releasever").arg(releasever);
        }
        cmd.args(selector);

        let rendered = format!("dnf repoquery {}", selector.join(" "));
        tracing::debug!("running {rendered}");

        let output = cmd.output().map_err(|e| {
            SupportInfoError::database(
                rendered.clone(),
                DatabaseErrorKind::Spawn {
                    command: "dnf".to_string(),
                    source: e,
                },
            )
        })?;

        if !output.status.success() {
            return Err(SupportInfoError::database(
                rendered,
                DatabaseErrorKind::CommandFailed {
                    command: "dnf repoquery".to_string(),
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                },
            ));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| SupportInfoError::database(rendered, DatabaseErrorKind::InvalidOutput))?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

impl PackageBackend for DnfBackend {
    fn installed(&self) -> Result<Vec<String>> {
        self.repoquery(&["--installed"])
    }

    fn available_latest(&self) -> Result<Vec<String>> {
        self.repoquery(&["--available", "--latest-limit", "1"])
    }
}
