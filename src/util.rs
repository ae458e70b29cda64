use crate::model::{AuthorIdentity, CommitInfo};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// The calendar day a timestamp falls on, interpreted in local time.
pub fn local_day(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Commits from `commits` that land on `day` and are attributable to
/// `identity`. Order-preserving: the underlying history order is kept, and
/// callers take the first element as the day's representative commit.
pub fn commits_on_day<'a>(
    commits: &'a [CommitInfo],
    day: NaiveDate,
    identity: &'a AuthorIdentity,
) -> impl Iterator<Item = &'a CommitInfo> + 'a {
    commits
        .iter()
        .filter(move |commit| local_day(&commit.timestamp) == day && identity.matches(commit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn commit(email: &str, name: &str, message: &str, day: NaiveDate, hour: u32) -> CommitInfo {
        let timestamp = Local
            .from_local_datetime(&day.and_hms_opt(hour, 0, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);
        CommitInfo {
            id: format!("{message:0<40}"),
            author_name: name.into(),
            author_email: email.into(),
            message: message.into(),
            timestamp,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn filters_to_the_requested_day() {
        let commits = vec![
            commit("me@example.com", "Me", "tuesday work", day(19), 23),
            commit("me@example.com", "Me", "wednesday work", day(20), 0),
        ];
        let identity = AuthorIdentity::default();

        let hits: Vec<&str> = commits_on_day(&commits, day(20), &identity)
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(hits, vec!["wednesday work"]);
    }

    #[test]
    fn keeps_history_order_within_a_day() {
        let commits = vec![
            commit("me@example.com", "Me", "second", day(20), 15),
            commit("me@example.com", "Me", "first", day(20), 9),
        ];
        let identity = AuthorIdentity::default();

        let hits: Vec<&str> = commits_on_day(&commits, day(20), &identity)
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(hits, vec!["second", "first"]);
    }

    #[test]
    fn identity_filter_excludes_other_authors() {
        let commits = vec![
            commit("other@example.com", "Someone Else", "their work", day(20), 9),
            commit("me@example.com", "Me", "my work", day(20), 15),
        ];
        let identity = AuthorIdentity {
            email: Some("me@example.com".into()),
            name: Some("Me".into()),
        };

        let hits: Vec<&str> = commits_on_day(&commits, day(20), &identity)
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(hits, vec!["my work"]);

        let default_identity = AuthorIdentity::default();
        let unfiltered: Vec<&str> = commits_on_day(&commits, day(20), &default_identity)
            .map(|c| c.message.as_str())
            .collect();
        assert_eq!(unfiltered, vec!["their work", "my work"]);
    }
}
