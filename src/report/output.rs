use crate::error::Result;
use crate::model::{WeekStart, WeeklyReport, SCHEMA_VERSION};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week_start: NaiveDate,
    pub days: Vec<DayEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub workspace_path: String,
    pub start_week: NaiveDate,
    pub weeks: Vec<WeekEntry>,
}

/// Serialize the report into the historical plain-text layout: one banner
/// and dashed rule per week, one `MM/DD/YYYY - message` line per weekday,
/// and a trailing `END of Report`.
pub fn render_text(report: &WeeklyReport) -> String {
    let mut out = String::new();
    let rule = "-".repeat(50);

    for (week, days) in report.iter() {
        out.push('\n');
        out.push_str(&format!(
            "Report for week starting at {}\n",
            week.date().format("%m/%d/%Y")
        ));
        out.push_str(&rule);
        out.push('\n');
        for (date, message) in days {
            out.push_str(&format!("{} - {message}\n", date.format("%m/%d/%Y")));
        }
        out.push_str(&rule);
        out.push('\n');
    }

    out.push_str("\nEND of Report\n");
    out
}

pub fn write_text(report: &WeeklyReport, path: &Path) -> Result<()> {
    fs::write(path, render_text(report))?;
    Ok(())
}

/// Pretty-print the report as a versioned JSON envelope on stdout.
pub fn output_json(
    report: &WeeklyReport,
    workspace_root: &Path,
    start_week: WeekStart,
) -> Result<()> {
    let output = ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        workspace_path: workspace_root.to_string_lossy().to_string(),
        start_week: start_week.date(),
        weeks: report
            .iter()
            .map(|(week, days)| WeekEntry {
                week_start: week.date(),
                days: days
                    .iter()
                    .map(|(date, message)| DayEntry {
                        date: *date,
                        message: message.clone(),
                    })
                    .collect(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PLACEHOLDER_MESSAGE;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_single_week_layout() {
        let week = WeekStart::new(date(2024, 3, 18)).unwrap();
        let mut report = WeeklyReport::new();
        report.ensure_week(week);
        report.set_message(week, date(2024, 3, 20), "fix bug #42");

        let rule = "-".repeat(50);
        let expected = format!(
            "\nReport for week starting at 03/18/2024\n{rule}\n\
             03/18/2024 - {p}\n\
             03/19/2024 - {p}\n\
             03/20/2024 - fix bug #42\n\
             03/21/2024 - {p}\n\
             03/22/2024 - {p}\n\
             {rule}\n\nEND of Report\n",
            p = PLACEHOLDER_MESSAGE
        );
        assert_eq!(render_text(&report), expected);
    }

    #[test]
    fn renders_weeks_in_date_order() {
        let later = WeekStart::new(date(2024, 3, 25)).unwrap();
        let earlier = WeekStart::new(date(2024, 3, 18)).unwrap();
        let mut report = WeeklyReport::new();
        report.ensure_week(later);
        report.ensure_week(earlier);

        let text = render_text(&report);
        let first = text.find("03/18/2024").unwrap();
        let second = text.find("03/25/2024").unwrap();
        assert!(first < second);
        assert!(text.ends_with("\nEND of Report\n"));
    }

    #[test]
    fn empty_report_is_just_the_trailer() {
        let report = WeeklyReport::new();
        assert_eq!(render_text(&report), "\nEND of Report\n");
    }
}
