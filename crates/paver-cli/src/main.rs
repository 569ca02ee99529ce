//! Paver - role-ordered package deployment
//!
//! Usage:
//!   paver deploy                      # deploy all installed packages
//!   paver deploy --uninstalled a=b    # also retire packages the engine dropped

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use semver::Version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paver_core::config::ConfigStore;
use paver_core::deploy::DeployManager;
use paver_core::package::{ManifestProvider, Package};
use paver_core::strategy::StrategyResolver;

#[derive(Parser)]
#[command(name = "paver")]
#[command(about = "Deploys platform packages from the vendor cache into the app root", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy core, modules, and themes into the application root
    Deploy {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Path to paver.toml (defaults to <project-root>/paver.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Package the engine already uninstalled, as NAME=TYPE[@VERSION].
        /// Its cache directory must still exist when deploy runs.
        #[arg(long = "uninstalled", value_name = "NAME=TYPE")]
        uninstalled: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paver=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            project_root,
            config,
            uninstalled,
        } => run_deploy(project_root, config, uninstalled),
    }
}

fn run_deploy(
    project_root: Option<PathBuf>,
    config_path: Option<PathBuf>,
    uninstalled: Vec<String>,
) -> Result<()> {
    let project_root = match project_root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let store = match config_path {
        Some(path) => ConfigStore::from_paths(path, project_root),
        None => ConfigStore::from_project_root(project_root),
    };
    let config = store.load()?;

    let resolver = StrategyResolver::from_config(&store, &config);
    let provider = ManifestProvider::from_vendor_dir(&store.resolve_vendor_dir(&config));
    let mut manager = DeployManager::new(Box::new(provider), resolver);

    for spec in &uninstalled {
        let package = parse_uninstalled_spec(spec)?;
        manager.on_package_uninstalled(&package)?;
    }

    let report = manager.deploy_all()?;

    if report.dispatched.is_empty() {
        println!("Nothing to deploy");
    } else {
        for record in &report.dispatched {
            println!(
                "{:<9} {:<7} {}",
                record.action.as_str(),
                record.role.as_str(),
                record.name
            );
        }
    }
    Ok(())
}

/// Parse `NAME=TYPE[@VERSION]` into a package descriptor.
///
/// The version is informational for uninstalls; it defaults to 0.0.0 when
/// the engine no longer reports one.
fn parse_uninstalled_spec(spec: &str) -> Result<Package> {
    let (name, rest) = spec
        .split_once('=')
        .with_context(|| format!("Invalid --uninstalled spec '{spec}': expected NAME=TYPE"))?;
    let (package_type, version) = match rest.split_once('@') {
        Some((ty, version)) => (
            ty,
            Version::parse(version)
                .with_context(|| format!("Invalid version in --uninstalled spec '{spec}'"))?,
        ),
        None => (rest, Version::new(0, 0, 0)),
    };
    if name.is_empty() || package_type.is_empty() {
        anyhow::bail!("Invalid --uninstalled spec '{spec}': expected NAME=TYPE");
    }
    Ok(Package::new(name, version, package_type))
}
