use docent_core::entities::{MockResponse, Source};
use docent_core::enums::{SourceType, TrustBadge};

use crate::matcher::ResponseTable;

pub(super) fn table() -> ResponseTable {
    ResponseTable::new(fallback())
        .entry(
            ["compliance", "issues", "audit", "health", "adoption"],
            compliance(),
        )
        .entry(["token", "changes", "design token"], token_changes())
}

fn compliance() -> MockResponse {
    MockResponse::new(
        r"Here's a summary of current design system compliance across your product teams.

**System Health Overview:**
- ✅ Compliant components: 142
- ⚠️ Warnings: 8
- 🔍 Pending audits: 23
- 👥 Active contributors: 47

**Top Issues:** [Official Rule]
1. **Button variants** — 3 teams using custom button styles instead of Carbon `<Button>`
2. **Spacing inconsistency** — Marketing pages using hardcoded px values instead of spacing tokens
3. **Color tokens** — 2 products using hex values instead of Carbon color tokens

**Recommendation:**
Schedule a Token Validation workshop with the 3 teams showing the most drift. The Component Audit tool can generate a detailed report.",
    )
    .with_sources(vec![
        Source::new(
            SourceType::Documentation,
            "Carbon Design System",
            "https://carbondesignsystem.com",
        ),
        Source::new(
            SourceType::Github,
            "Carbon — GitHub",
            "https://github.com/carbon-design-system/carbon",
        ),
    ])
    .with_badges(&[TrustBadge::Official])
}

fn token_changes() -> MockResponse {
    MockResponse::new(
        r"**Latest design token changes:** [Best Practice]

- `v11` spacing scale unchanged; ensure all new work uses `$spacing-*` tokens.
- Color tokens: `$focus` and `$focus-inset` updated for accessibility.
- Typography: IBM Plex Sans remains the primary typeface; token names unchanged.

Check the Carbon changelog on GitHub for version-specific token diffs. Guardians should run the token audit script quarterly.",
    )
    .with_sources(vec![
        Source::new(
            SourceType::Github,
            "Carbon Changelog — GitHub",
            "https://github.com/carbon-design-system/carbon/blob/main/CHANGELOG.md",
        ),
        Source::new(
            SourceType::Documentation,
            "Design tokens — Carbon Design System",
            "https://carbondesignsystem.com/elements/design-tokens/overview/",
        ),
    ])
    .with_badges(&[TrustBadge::BestPractice])
}

fn fallback() -> MockResponse {
    MockResponse::new(
        r#"I can help with compliance metrics, system health, component adoption, and audit recommendations. Try: "Which components have the most compliance issues?" or "Show me the latest design token changes." [Flexible]"#,
    )
    .with_sources(vec![Source::new(
        SourceType::Documentation,
        "Carbon Design System",
        "https://carbondesignsystem.com",
    )])
    .with_badges(&[TrustBadge::Flexible])
}
