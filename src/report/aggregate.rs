use crate::calendar;
use crate::error::Result;
use crate::git::GitRepo;
use crate::model::{WeekStart, WeeklyReport};
use crate::util::commits_on_day;
use crate::workspace;
use chrono::{Local, NaiveDate};
use console::style;
use std::path::Path;

/// Fold every repository under `workspace_root` into one report covering
/// `start_week` through the week containing `today`.
///
/// Every week in the span is present in the result, all five days seeded
/// with the placeholder, even when no repository has a commit in it. A day's
/// message becomes the first qualifying commit's trimmed subject line;
/// repositories are visited in directory-name order, so when several have
/// commits on the same day the lexicographically last one wins.
///
/// Directories that are not repositories are skipped; they show up in the
/// scan listing on stderr and nowhere else.
pub fn build_report_as_of(
    workspace_root: &Path,
    start_week: WeekStart,
    today: NaiveDate,
) -> Result<WeeklyReport> {
    let weeks = calendar::week_starts_until(start_week, today);

    let mut report = WeeklyReport::new();
    for &week in &weeks {
        report.ensure_week(week);
    }

    for path in workspace::list_candidates(workspace_root)? {
        let dir_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let Some(repo) = GitRepo::try_open(&path)? else {
            eprintln!(
                "{} {}",
                style("✗").dim(),
                style(format!("not a git repository: {dir_name}")).dim()
            );
            continue;
        };
        eprintln!("{} found git repository: {dir_name}", style("✓").green());

        let identity = repo.resolve_identity();
        if let Some(label) = identity.label() {
            eprintln!("  filtering commits for: {label}");
        }

        let commits = repo.collect_commits()?;
        for &week in &weeks {
            for day in calendar::week_days(week) {
                if let Some(commit) = commits_on_day(&commits, day, &identity).next() {
                    report.set_message(week, day, commit.message.trim());
                }
            }
        }
    }

    Ok(report)
}

/// `build_report_as_of` anchored at the current local date. Running on a
/// later day can include more weeks; that is the point of the tool.
pub fn build_report(workspace_root: &Path, start_week: WeekStart) -> Result<WeeklyReport> {
    build_report_as_of(workspace_root, start_week, Local::now().date_naive())
}
