//! Solution wiring through the dotnet CLI
//!
//! State machine: CheckSolutionExists -> [CreateSolution] ->
//! RestoreDependencies -> AddProjectToSolution. Steps run strictly in order
//! and a failing step does not short-circuit the rest; the caller gets every
//! outcome back and the user can re-run fix-up commands manually.

use crate::answers::AnswerSet;
use crate::runtime::command::{ExternalCommand, StepOutcome};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// One planned integration step; `command` is `None` when the step's
/// precondition made it unnecessary.
#[derive(Debug, Clone)]
pub struct PlannedStep {
    pub label: &'static str,
    pub command: Option<ExternalCommand>,
}

/// The solution container file the integration checks for
pub fn solution_path(answers: &AnswerSet, destination_root: &Path) -> PathBuf {
    destination_root.join(format!("{}.sln", answers.full_namespace()))
}

/// Plan the integration command sequence. Pure: `solution_exists` is passed
/// in so tests can exercise both branches without touching a real solution.
pub fn plan(
    answers: &AnswerSet,
    destination_root: &Path,
    module_dir: &Path,
    solution_exists: bool,
) -> Vec<PlannedStep> {
    let full_namespace = answers.full_namespace();

    let create = PlannedStep {
        label: "CreateSolution",
        command: (!solution_exists).then(|| {
            ExternalCommand::new(
                "dotnet",
                vec![
                    "new".to_string(),
                    "sln".to_string(),
                    "-n".to_string(),
                    full_namespace.clone(),
                    "-o".to_string(),
                    destination_root.display().to_string(),
                ],
            )
        }),
    };

    let restore = PlannedStep {
        label: "RestoreDependencies",
        command: Some(
            ExternalCommand::new(
                "dotnet",
                vec!["restore".to_string(), format!("{full_namespace}.csproj")],
            )
            .in_dir(module_dir),
        ),
    };

    let add = PlannedStep {
        label: "AddProjectToSolution",
        command: Some(ExternalCommand::new(
            "dotnet",
            vec![
                "sln".to_string(),
                destination_root.display().to_string(),
                "add".to_string(),
                module_dir
                    .join(format!("{full_namespace}.csproj"))
                    .display()
                    .to_string(),
            ],
        )),
    };

    vec![create, restore, add]
}

/// Execute the planned steps, collecting one outcome per step.
pub async fn integrate(
    answers: &AnswerSet,
    destination_root: &Path,
    module_dir: &Path,
) -> Vec<StepOutcome> {
    let solution = solution_path(answers, destination_root);
    let exists = solution.exists();
    println!(
        "{}",
        format!("Looking for sln [{}]. Result: {}", solution.display(), exists).white()
    );

    let mut outcomes = Vec::new();
    for step in plan(answers, destination_root, module_dir, exists) {
        match step.command {
            Some(command) => {
                println!("{}", format!("Running {}.", command.rendered()).white());
                let status = command.run().await;
                outcomes.push(StepOutcome {
                    label: step.label,
                    command: command.rendered(),
                    status,
                });
            }
            None => outcomes.push(StepOutcome::skipped(step.label, String::new())),
        }
    }
    outcomes
}
