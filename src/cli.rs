use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "trichoice",
    version,
    about = "Tricuspid repair vs replacement educational calculator (GLIDE scoring)"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a case file and print the rendered assessment
    Assess(AssessCommand),
    /// Print (or write) a sample case file
    Template(TemplateCommand),
}

#[derive(Args)]
pub struct AssessCommand {
    /// Path to a TOML case file
    pub case_file: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct TemplateCommand {
    /// Write the template to this path instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Fail instead of replacing an existing file
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
}
