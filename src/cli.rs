use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wsr")]
#[command(about = "Generate a weekly status report from git commit activity")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(help = "Week start date, a Monday (MM/DD/YYYY or YYYY-MM-DD)")]
    pub date: String,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Workspace directory to scan for repositories (defaults to ~/Workspaces)")]
    pub workspace: Option<PathBuf>,

    #[arg(long, help = "Write the plain-text report to this path")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print the report as JSON to stdout instead of writing a file")]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self.common, &self.date)
    }
}
