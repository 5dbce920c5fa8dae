pub mod args;
pub mod commands;

pub use args::{AddArgs, InspectArgs, RemoveArgs};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
MODEL STEP COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "policy-wizard")]
#[command(version = crate::VERSION)]
#[command(about = "Edit the transformation step of a policy document")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: inspect a policy, add a model, remove a model and the cubes that read its outputs."
)]
pub struct Args {
    /// Directory holding policy-wizard.toml and .policy-wizard/ (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn workspace_root(&self) -> PathBuf {
        self.workspace
            .clone()
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "List transformations and the cubes depending on each",
        after_help = "Example:\n    policy-wizard inspect policy.json"
    )]
    Inspect(InspectArgs),
    #[command(
        about = "Append a transformation to the policy",
        long_about = "Add validates the candidate model and appends it with its order set to the current number of transformations. Invalid candidates leave the policy untouched and exit non-zero.",
        after_help = "Example:\n    policy-wizard add policy.json --model split.json > updated.json"
    )]
    Add(AddArgs),
    #[command(
        about = "Remove a transformation and the cubes using its outputs",
        long_about = "Remove lists the cubes that read the model's output fields, asks for confirmation, then removes the model and those cubes together. Cancelling leaves the policy unchanged.",
        after_help = "Example:\n    policy-wizard remove policy.json --position 0 --yes"
    )]
    Remove(RemoveArgs),
}

pub async fn run(args: Args) -> crate::Result<()> {
    let workspace = args.workspace_root();
    match args.command {
        Command::Inspect(inspect_args) => commands::inspect(inspect_args, &workspace).await,
        Command::Add(add_args) => commands::add(add_args, &workspace).await,
        Command::Remove(remove_args) => commands::remove(remove_args, &workspace).await,
    }
}
