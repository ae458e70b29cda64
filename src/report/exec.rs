use crate::calendar;
use crate::cli::CommonArgs;
use crate::model::WeekStart;
use crate::report::{build_report, output_json, write_text};
use anyhow::Context;
use std::path::PathBuf;

pub fn exec(common: CommonArgs, date: &str) -> anyhow::Result<()> {
    let start_date = calendar::parse_start_date(date)?;
    let start_week = WeekStart::new(start_date)?;

    let workspace_root = match common.workspace {
        Some(path) => path,
        None => default_workspace()?,
    };

    let report = build_report(&workspace_root, start_week)
        .context("Failed to build weekly report")?;

    if common.json {
        output_json(&report, &workspace_root, start_week)?;
    } else {
        let output_path = common.output.unwrap_or_else(|| {
            PathBuf::from(format!(
                "status_report_{}.txt",
                start_week.date().format("%Y%m%d")
            ))
        });
        write_text(&report, &output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        println!("Status report generated: {}", output_path.display());
    }

    Ok(())
}

fn default_workspace() -> anyhow::Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("Workspaces"))
        .context("Could not determine the home directory; pass --workspace")
}
