//! supportinfo: support statement lookup for packages on RPM-based hosts.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use supportinfo::cli;
use supportinfo::config::AppConfig;
use supportinfo::db::{DnfBackend, PackageStates};
use supportinfo::metadata::SupportMetadata;
use supportinfo::query::ShowFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "supportinfo")]
#[command(version)]
#[command(about = "Get support statements for packages", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Support details for one package
    supportinfo --pkg bash

    # The same statement as XML
    supportinfo --pkg bash --showxml

    # All installed packages with support statements
    supportinfo --show installed")]
struct Cli {
    /// Display support statements for a package
    #[arg(long, value_name = "NAME")]
    pkg: Option<String>,

    /// Generate support info XML for a package
    #[arg(long, requires = "pkg")]
    showxml: bool,

    /// Display support statements for packages matching a filter
    #[arg(long, value_name = "FILTER", value_enum)]
    show: Option<ShowFilter>,

    /// Path to the support metadata document
    #[arg(long, value_name = "PATH", env = "SUPPORTINFO_METADATA")]
    metadata: Option<PathBuf>,

    /// Package database root
    #[arg(long, value_name = "PATH")]
    installroot: Option<PathBuf>,

    /// Release version forwarded to the package manager
    #[arg(long, value_name = "VERSION")]
    releasever: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "supportinfo", &mut io::stdout());
        return Ok(());
    }

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if cli.pkg.is_none() && cli.show.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref())?;

    let metadata_path = cli.metadata.unwrap_or_else(|| config.metadata_path());
    let metadata = SupportMetadata::from_path(&metadata_path).with_context(|| {
        format!(
            "cannot load support metadata from {}",
            metadata_path.display()
        )
    })?;

    let installroot = cli.installroot.unwrap_or_else(|| config.installroot_path());
    let releasever = cli.releasever.or(config.releasever);
    let backend = DnfBackend::new(installroot, releasever);
    let states =
        PackageStates::collect(&backend).context("cannot query the host package database")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Bulk listing first, then the single-package lookup, mirroring the
    // order the flags are documented in.
    if let Some(filter) = cli.show {
        cli::run_show(filter, &metadata, &states, &mut out)?;
    }

    if let Some(pkg) = &cli.pkg {
        cli::run_lookup(pkg, cli.showxml, &metadata, &states, &mut out)?;
    }

    Ok(())
}
