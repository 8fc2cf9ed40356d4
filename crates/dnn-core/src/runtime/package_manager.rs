//! JS package manager detection and dependency installation

use crate::runtime::command::{ExternalCommand, StepOutcome};
use colored::Colorize;
use std::path::Path;

/// Supported JS package managers, yarn preferred when present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Npm,
}

impl PackageManager {
    /// Pick yarn when it is on PATH, fall back to npm otherwise.
    pub fn detect() -> Self {
        if which::which("yarn").is_ok() {
            PackageManager::Yarn
        } else {
            PackageManager::Npm
        }
    }

    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }
}

/// Install the generated project's JS dependencies inside `module_dir`.
/// No-op when `skip` is set (`--noinstall`).
pub async fn install(module_dir: &Path, skip: bool) -> StepOutcome {
    if skip {
        return StepOutcome::skipped("InstallDependencies", String::new());
    }

    let manager = PackageManager::detect();
    let command = ExternalCommand::new(manager.binary(), vec!["install".to_string()])
        .in_dir(module_dir);

    println!(
        "{}",
        format!(
            "Installing npm dependencies in {}",
            module_dir.display()
        )
        .white()
    );

    let status = command.run().await;
    StepOutcome {
        label: "InstallDependencies",
        command: command.rendered(),
        status,
    }
}
