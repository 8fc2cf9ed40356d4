//! DNN Core - Library for scaffolding DNN SPA modules
//!
//! This library implements the full generation workflow: collecting answers,
//! resolving the framework-specific template operation list, materializing
//! the module directory, wiring the project into a solution with the dotnet
//! CLI, and installing JS dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for name derivation,
//!   template resolution, token rendering, JSON merging
//! - **Layer 2: Workflow Operations** - Materialization and external-tool
//!   integration returning explicit per-step outcomes
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod answers;
pub mod error;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{AnswerSet, FrameworkChoice, RawAnswers, ScriptLanguage, SpaFramework};
pub use error::ScaffoldError;
pub use runtime::{StepOutcome, StepStatus};
pub use templates::{CopyMode, CopyOperation, TemplateContext};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
