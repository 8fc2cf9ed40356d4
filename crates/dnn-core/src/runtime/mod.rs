//! Build-tool detection and external command execution
//!
//! This module provides:
//! - MSBuild version detection by filesystem probing
//! - Solution integration through the dotnet CLI
//! - JS dependency installation through yarn or npm

pub mod command;
pub mod dotnet;
pub mod msbuild;
pub mod package_manager;

pub use command::{ExternalCommand, StepOutcome, StepStatus};
pub use package_manager::PackageManager;
