//! DNN CLI - Scaffolding for DNN SPA modules

use anyhow::Result;
use clap::{Parser, Subcommand};
use dnn_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dnn-create")]
#[command(about = "CLI for scaffolding DNN SPA modules")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new SPA module
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// SPA framework to generate (react, vue, angular)
    #[arg(long)]
    pub framework: Option<String>,

    /// Script language for the React path (tsx, jsx)
    #[arg(long)]
    pub lang: Option<String>,

    /// Namespace for the module (usually a company name)
    #[arg(long)]
    pub company: Option<String>,

    /// Name of the module
    #[arg(short, long)]
    pub name: Option<String>,

    /// Module description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author name embedded in generated files
    #[arg(long = "your-name")]
    pub your_name: Option<String>,

    /// Company URL embedded in generated files
    #[arg(long = "company-url")]
    pub company_url: Option<String>,

    /// Contact email embedded in generated files
    #[arg(long)]
    pub email: Option<String>,

    /// DNN site host embedded in generated files
    #[arg(long = "dnn-host")]
    pub dnn_host: Option<String>,

    /// DNN site root path embedded in generated files
    #[arg(long = "dnn-root")]
    pub dnn_root: Option<String>,

    /// Generation root (defaults to the current directory)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Local template tree to generate from
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip the JS dependency install
    #[arg(long)]
    pub noinstall: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            framework: args.framework,
            lang: args.lang,
            company: args.company,
            name: args.name,
            description: args.description,
            your_name: args.your_name,
            company_url: args.company_url,
            email: args.email,
            dnn_host: args.dnn_host,
            dnn_root: args.dnn_root,
            directory: args.directory,
            template_dir: args.template_dir,
            noinstall: args.noinstall,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // Handle subcommands
    match args.command {
        Some(Command::Create(create_args)) => {
            let result = dnn_core::run(create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = dnn_core::run(CreateArgs::default()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
