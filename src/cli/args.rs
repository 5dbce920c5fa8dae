use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Policy document (JSON) to inspect
    #[arg(value_name = "POLICY")]
    pub policy: PathBuf,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Policy document (JSON) to extend
    #[arg(value_name = "POLICY")]
    pub policy: PathBuf,

    /// Transformation document (JSON) offered as the candidate model
    #[arg(long, value_name = "FILE")]
    pub model: PathBuf,

    /// Write the resulting policy here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Policy document (JSON) to edit
    #[arg(value_name = "POLICY")]
    pub policy: PathBuf,

    /// Index of the transformation to remove (default: 0)
    #[arg(long, default_value = "0")]
    pub position: usize,

    /// Confirm the removal without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Write the resulting policy here instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
