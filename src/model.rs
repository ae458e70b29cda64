use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, WsrError};

pub const SCHEMA_VERSION: u32 = 1;

/// Day status used until a commit-derived message overwrites it.
pub const PLACEHOLDER_MESSAGE: &str = "continuing previous day's work";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    /// Subject (title) line of the commit message.
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// The user identity configured for one repository. Resolved per repository,
/// never globally: the same person may commit under different identities in
/// different projects.
#[derive(Debug, Clone, Default)]
pub struct AuthorIdentity {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl AuthorIdentity {
    /// Whether `commit` is attributable to this identity.
    ///
    /// The filter engages only when both fields are present, and then a
    /// commit qualifies when its author email OR its author name matches.
    /// A commit by a different person who happens to share the configured
    /// name therefore matches too; that looseness is kept on purpose.
    /// With either field missing the identity matches everything.
    pub fn matches(&self, commit: &CommitInfo) -> bool {
        match (&self.email, &self.name) {
            (Some(email), Some(name)) => {
                commit.author_email == *email || commit.author_name == *name
            }
            _ => true,
        }
    }

    /// Human-readable tag for diagnostics, preferring the display name.
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}

/// A calendar date validated to be a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    pub fn new(date: NaiveDate) -> Result<Self> {
        if crate::calendar::is_week_start(date) {
            Ok(Self(date))
        } else {
            Err(WsrError::InvalidWeekStart(date))
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The following week's Monday. Stays a Monday by construction.
    pub fn succ(self) -> Self {
        Self(self.0 + Duration::days(7))
    }
}

/// Per-day status messages for a single week. Once a week is initialized it
/// holds exactly its five weekdays as keys.
pub type DayReport = BTreeMap<NaiveDate, String>;

/// The finished report: week start -> day -> status message, ordered by date
/// on both levels.
#[derive(Debug, Clone, Default)]
pub struct WeeklyReport {
    weeks: BTreeMap<WeekStart, DayReport>,
}

impl WeeklyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize `week` with all five days at the placeholder, if absent.
    pub fn ensure_week(&mut self, week: WeekStart) {
        self.weeks.entry(week).or_insert_with(|| fresh_week(week));
    }

    /// Overwrite one day's message. Days outside the week's Monday-Friday
    /// window are ignored so the five-key invariant holds.
    pub fn set_message(&mut self, week: WeekStart, day: NaiveDate, message: impl Into<String>) {
        let days = self.weeks.entry(week).or_insert_with(|| fresh_week(week));
        if let Some(slot) = days.get_mut(&day) {
            *slot = message.into();
        }
    }

    pub fn week(&self, week: WeekStart) -> Option<&DayReport> {
        self.weeks.get(&week)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeekStart, &DayReport)> {
        self.weeks.iter().map(|(week, days)| (*week, days))
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

fn fresh_week(week: WeekStart) -> DayReport {
    crate::calendar::week_days(week)
        .into_iter()
        .map(|day| (day, PLACEHOLDER_MESSAGE.to_string()))
        .collect()
}
