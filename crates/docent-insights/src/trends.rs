//! Pattern insights and the weekly question series.

use docent_core::entities::{PatternInsight, TrendPoint};
use docent_core::enums::Impact;
use docent_core::responses::TrendsResponse;

fn insight(
    id: &str,
    pattern: &str,
    impact: Impact,
    description: &str,
    recommendation: &str,
    affected_teams: &[&str],
    related_components: &[&str],
) -> PatternInsight {
    PatternInsight {
        id: id.to_string(),
        pattern: pattern.to_string(),
        description: description.to_string(),
        impact,
        recommendation: recommendation.to_string(),
        affected_teams: affected_teams.iter().map(ToString::to_string).collect(),
        related_components: related_components.iter().map(ToString::to_string).collect(),
    }
}

/// Curated patterns observed across the question log.
#[must_use]
pub fn pattern_insights() -> Vec<PatternInsight> {
    vec![
        insight(
            "i1",
            "Drawer component confusion",
            Impact::High,
            "Multiple teams are uncertain about when to use Drawer vs Modal for multi-step workflows. 8 questions in the last 7 days across 4 teams.",
            "Create a decision tree or usage guidance document that clearly differentiates Drawer and Modal use cases. Consider adding examples for multi-step flows, settings panels, and data filtering.",
            &["Growth", "Platform", "Analytics", "Enterprise"],
            &["Drawer", "Modal"],
        ),
        insight(
            "i2",
            "DataTable customization requests",
            Impact::Medium,
            "Designers are asking about advanced DataTable features like validation, drag-and-drop, and custom pagination.",
            "Document DataTable extension patterns or create compound components for common customizations. May indicate need for DataTable v2 with built-in extensibility.",
            &["Platform", "Analytics"],
            &["DataTable"],
        ),
        insight(
            "i3",
            "Form button spacing inconsistency",
            Impact::Medium,
            "Questions about button spacing and destructive action styling suggest unclear form patterns.",
            "Add form layout templates to Figma library with pre-defined button groups. Document spacing tokens for form actions.",
            &["Core", "Platform"],
            &["Button", "Form"],
        ),
        insight(
            "i4",
            "Mobile adaptation uncertainty",
            Impact::High,
            "Designers asking how desktop components translate to mobile experiences, particularly for Drawer.",
            "Create mobile-specific guidance or responsive behavior documentation. Consider mobile-first component variants.",
            &["Mobile", "Growth"],
            &["Drawer", "Modal", "Navigation"],
        ),
        insight(
            "i5",
            "Toggle vs Checkbox confusion",
            Impact::Low,
            "Recurring questions about when to use Toggle vs Checkbox for binary choices.",
            "Update component documentation with clear use cases. Toggle for immediate state changes, Checkbox for form selections.",
            &["Core"],
            &["Toggle", "Checkbox"],
        ),
    ]
}

/// Questions per day for the tracked week.
#[must_use]
pub fn weekly_trend() -> Vec<TrendPoint> {
    const DAYS: [(&str, u32); 7] = [
        ("Feb 1", 2),
        ("Feb 2", 1),
        ("Feb 3", 3),
        ("Feb 4", 2),
        ("Feb 5", 3),
        ("Feb 6", 4),
        ("Feb 7", 3),
    ];
    DAYS.iter()
        .map(|(date, count)| TrendPoint {
            date: (*date).to_string(),
            count: *count,
        })
        .collect()
}

/// Average per day with one decimal; `"0.0"` for an empty series.
#[must_use]
pub fn average_per_day(series: &[TrendPoint]) -> String {
    if series.is_empty() {
        return "0.0".to_string();
    }
    let total: u32 = series.iter().map(|p| p.count).sum();
    let days = u32::try_from(series.len()).unwrap_or(u32::MAX);
    format!("{:.1}", f64::from(total) / f64::from(days))
}

#[must_use]
pub fn trends_report() -> TrendsResponse {
    let weekly = weekly_trend();
    TrendsResponse {
        insights: pattern_insights(),
        total_questions: weekly.iter().map(|p| p.count).sum(),
        average_per_day: average_per_day(&weekly),
        weekly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_totals() {
        let report = trends_report();
        assert_eq!(report.insights.len(), 5);
        assert_eq!(report.weekly.len(), 7);
        assert_eq!(report.total_questions, 18);
        assert_eq!(report.average_per_day, "2.6");
    }

    #[test]
    fn high_impact_insights() {
        let high: Vec<_> = pattern_insights()
            .into_iter()
            .filter(|i| i.impact == Impact::High)
            .map(|i| i.id)
            .collect();
        assert_eq!(high, ["i1", "i4"]);
    }

    #[test]
    fn average_of_empty_series() {
        assert_eq!(average_per_day(&[]), "0.0");
    }
}
