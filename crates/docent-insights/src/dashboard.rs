//! Guardian dashboard headline numbers.

use chrono::{DateTime, Utc};
use docent_core::entities::{DesignerQuestion, QuestionCluster};
use docent_core::responses::DashboardResponse;

/// Open escalations. There is no escalation tracker yet, so this is fixed.
pub const ESCALATIONS: u32 = 11;

#[must_use]
pub fn dashboard_stats(
    questions: &[DesignerQuestion],
    clusters: &[QuestionCluster],
) -> DashboardResponse {
    DashboardResponse {
        total_questions: questions.len(),
        active_clusters: clusters.len(),
        increasing_topics: clusters.iter().filter(|c| c.trend.is_rising()).count(),
        escalations: ESCALATIONS,
    }
}

/// Short label for how long ago `date` was, relative to `now`.
///
/// Under a day is "Today", under two days "Yesterday", under a week
/// "{n} days ago"; older dates print as "Feb 7". Future dates read "Today".
#[must_use]
pub fn relative_date_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - date).num_hours();
    match hours {
        ..24 => "Today".to_string(),
        24..48 => "Yesterday".to_string(),
        48..168 => format!("{} days ago", hours / 24),
        _ => date.format("%b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 20, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(TimeDelta::minutes(5), "Today")]
    #[case(TimeDelta::hours(-3), "Today")]
    #[case(TimeDelta::hours(23), "Today")]
    #[case(TimeDelta::hours(24), "Yesterday")]
    #[case(TimeDelta::hours(47), "Yesterday")]
    #[case(TimeDelta::hours(48), "2 days ago")]
    #[case(TimeDelta::hours(167), "6 days ago")]
    #[case(TimeDelta::days(13), "Feb 7")]
    fn relative_labels(#[case] age: TimeDelta, #[case] expected: &str) {
        assert_eq!(relative_date_label(now() - age, now()), expected);
    }
}
