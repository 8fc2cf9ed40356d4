//! Charm-style CLI prompts using cliclack

use crate::answers::{AnswerSet, FrameworkChoice, RawAnswers, ScriptLanguage, SpaFramework};
use crate::runtime::{dotnet, msbuild, package_manager, StepOutcome, StepStatus};
use crate::templates::{self, launch_config, TemplateContext};
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create command; every `Some` value pre-seeds its
/// answer and bypasses the matching prompt
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// SPA framework (react, vue, angular)
    pub framework: Option<String>,

    /// Script language for the React path (tsx, jsx)
    pub lang: Option<String>,

    /// Company / namespace answer
    pub company: Option<String>,

    /// Module name answer
    pub name: Option<String>,

    /// Module description answer
    pub description: Option<String>,

    /// Author name substituted into generated files
    pub your_name: Option<String>,

    /// Company URL substituted into generated files
    pub company_url: Option<String>,

    /// Contact email substituted into generated files
    pub email: Option<String>,

    /// DNN site host substituted into generated files
    pub dnn_host: Option<String>,

    /// DNN site root path substituted into generated files
    pub dnn_root: Option<String>,

    /// Generation root (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Template tree location (defaults to DNN_TEMPLATE_DIR, then ./templates)
    pub template_dir: Option<PathBuf>,

    /// Skip the JS dependency install
    pub noinstall: bool,
}

/// Run the generator with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("DNN SPA Module")?;

    let msbuild_version = msbuild::detect_version();
    if msbuild_version.is_empty() {
        cliclack::log::warning(
            "A valid version of MSBuild was not found! Generated projects may not build.",
        )?;
    } else {
        cliclack::log::success(format!("MSBuild {msbuild_version} detected"))?;
    }

    let raw = collect_answers(&args)?;
    let answers = AnswerSet::from_raw(raw, msbuild_version)?;

    let lang_label = answers
        .framework
        .script_language()
        .map(|l| format!(" {}", l.value()))
        .unwrap_or_default();
    cliclack::log::info(format!(
        "Creating {}{} SPA Module.",
        answers.framework.framework(),
        lang_label
    ))?;

    let destination_root = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let module_dir = destination_root.join("Modules").join(&answers.module_name);
    let template_root = templates::template_root(&args.template_dir);

    // Materialize the module tree
    let context = TemplateContext::from_answers(&answers);
    let operations = templates::resolve(&answers);

    let spinner = cliclack::spinner();
    spinner.start("Scaffolding module files...");
    let written =
        match templates::materialize(&template_root, &module_dir, &operations, &context).await {
            Ok(written) => written,
            Err(e) => {
                spinner.stop("Scaffolding failed");
                return Err(e.into());
            }
        };
    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        module_dir.display()
    ));

    // The debugger config lives at the generation root and is shared by
    // every module generated against it
    if answers.framework.framework() == SpaFramework::React {
        let entry = launch_config::chrome_launch_entry(&answers.module_name);
        let path = launch_config::append_entry(&destination_root, &entry).await?;
        cliclack::log::success(format!("Updated {}", path.display()))?;
    }

    // Solution wiring and dependency install are best-effort: failures are
    // reported, the run carries on
    let mut outcomes = dotnet::integrate(&answers, &destination_root, &module_dir).await;
    outcomes.push(package_manager::install(&module_dir, args.noinstall).await);
    report_outcomes(&outcomes)?;

    print_next_steps(&module_dir, args.noinstall);

    cliclack::outro("All Ready!")?;
    Ok(())
}

fn print_next_steps(module_dir: &std::path::Path, skipped_install: bool) {
    println!();
    println!("  Next steps");
    println!();

    let mut step = 1;
    println!("  {}.  cd {}", step, module_dir.display());
    step += 1;

    if skipped_install {
        println!("  {}.  npm install", step);
        step += 1;
    }

    println!("  {}.  npm run build", step);
    println!();
}

/// Gather raw answers, prompting only where no override was supplied.
fn collect_answers(args: &CreateArgs) -> Result<RawAnswers> {
    let framework = match &args.framework {
        Some(value) => SpaFramework::parse(value)
            .ok_or_else(|| anyhow::anyhow!("Unknown framework: {value}"))?,
        None => cliclack::select("What language do you want your SPA Module to use?")
            .item(SpaFramework::React, SpaFramework::React.display_name(), "")
            .item(SpaFramework::Vue, SpaFramework::Vue.display_name(), "")
            .item(
                SpaFramework::Angular,
                SpaFramework::Angular.display_name(),
                "",
            )
            .interact()?,
    };

    let lang = if framework == SpaFramework::React {
        let lang = match &args.lang {
            Some(value) => ScriptLanguage::parse(value)
                .ok_or_else(|| anyhow::anyhow!("Unknown script language: {value}"))?,
            None => cliclack::select("What Script Language do you want to use?")
                .item(
                    ScriptLanguage::Tsx,
                    ScriptLanguage::Tsx.display_name(),
                    "",
                )
                .item(
                    ScriptLanguage::Jsx,
                    ScriptLanguage::Jsx.display_name(),
                    "",
                )
                .interact()?,
        };
        Some(lang)
    } else {
        None
    };

    let company = prompt_required(
        &args.company,
        "Namespace for your SPA module (Usually a company name)?",
        None,
    )?;

    let default_name = std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()));
    let name = prompt_required(
        &args.name,
        "What is the name of your SPA Module?",
        default_name.as_deref(),
    )?;

    let description = prompt_required(&args.description, "Describe your SPA module:", None)?;

    Ok(RawAnswers {
        framework: FrameworkChoice::new(framework, lang),
        company,
        module_name: name,
        description,
        author: args.your_name.clone().unwrap_or_default(),
        company_url: args.company_url.clone().unwrap_or_default(),
        email: args.email.clone().unwrap_or_default(),
        dnn_host: args.dnn_host.clone().unwrap_or_default(),
        dnn_root: args.dnn_root.clone().unwrap_or_default(),
    })
}

/// Free-text prompt with non-empty validation, skipped when overridden.
fn prompt_required(
    override_value: &Option<String>,
    message: &str,
    default: Option<&str>,
) -> Result<String> {
    if let Some(value) = override_value {
        return Ok(value.clone());
    }

    let mut input = cliclack::input(message).validate(|value: &String| {
        if value.trim().is_empty() {
            Err("A value is required")
        } else {
            Ok(())
        }
    });
    if let Some(default) = default {
        input = input.default_input(default);
    }
    Ok(input.interact()?)
}

/// Echo every step result; list the failed commands so the user can re-run
/// them manually.
fn report_outcomes(outcomes: &[StepOutcome]) -> Result<()> {
    for outcome in outcomes {
        match &outcome.status {
            StepStatus::Skipped => {
                cliclack::log::info(format!("{}: skipped", outcome.label))?;
            }
            StepStatus::Exited(0) => {
                cliclack::log::success(format!("{}: done", outcome.label))?;
            }
            StepStatus::Exited(code) => {
                cliclack::log::error(format!(
                    "{}: `{}` exited with code {}",
                    outcome.label, outcome.command, code
                ))?;
            }
            StepStatus::SpawnFailed(reason) => {
                cliclack::log::error(format!(
                    "{}: could not run `{}`: {}",
                    outcome.label, outcome.command, reason
                ))?;
            }
        }
    }

    let failed: Vec<&StepOutcome> = outcomes.iter().filter(|o| !o.success()).collect();
    if !failed.is_empty() {
        cliclack::log::warning(format!(
            "{} step(s) failed; re-run the command(s) above manually once the cause is fixed.",
            failed.len()
        ))?;
    }
    Ok(())
}
