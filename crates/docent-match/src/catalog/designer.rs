use docent_core::entities::{MockResponse, Source};
use docent_core::enums::{SourceType, TrustBadge};

use crate::matcher::ResponseTable;

pub(super) fn table() -> ResponseTable {
    ResponseTable::new(fallback())
        .entry(["spacing", "padding", "token", "margin", "gap"], spacing())
        .entry(["color", "palette", "token", "notification"], color())
        .entry(["modal", "panel", "side panel", "dialog"], modal_vs_panel())
}

fn spacing() -> MockResponse {
    MockResponse::new(
        r#"Carbon uses a geometric spacing scale based on multiples of 2px.

**Common spacing tokens:** [Official Rule]
| Token | Value | Common use |
|-------|-------|-----------|
| $spacing-03 | 8px | Inline padding, icon gaps |
| $spacing-05 | 16px | Card padding, form gaps |
| $spacing-06 | 24px | Section padding |
| $spacing-07 | 32px | Layout margins |
| $spacing-09 | 48px | Page margins |

**Spacing in cards:** [Best Practice]
Use `$spacing-05` (16px) for internal card padding and `$spacing-05` between stacked cards.

**Figma usage:**
In the Carbon Figma kit, spacing is built into auto-layout frames. Use the "Spacing" component set for visual reference."#,
    )
    .with_sources(vec![
        Source::new(
            SourceType::Documentation,
            "Spacing — Carbon Design System",
            "https://carbondesignsystem.com/elements/spacing/overview/",
        ),
        Source::new(
            SourceType::Figma,
            "Carbon Design Kit — Figma Community",
            "https://www.figma.com/community/file/874592104192380079",
        ),
    ])
    .with_badges(&[TrustBadge::Official, TrustBadge::BestPractice])
}

fn color() -> MockResponse {
    MockResponse::new(
        r"Carbon provides semantic color tokens for UI states.

**Notification and status colors:** [Official Rule]
- Success: `$support-success` (green)
- Warning: `$support-warning` (yellow)
- Error: `$support-error` (red)
- Info: `$support-info` (blue)

**Gray scale:** Use `$layer-01`, `$layer-02`, `$text-primary`, `$text-secondary` for backgrounds and text. Never use raw hex in designs — always use tokens. [Best Practice]",
    )
    .with_sources(vec![Source::new(
        SourceType::Documentation,
        "Color — Carbon Design System",
        "https://carbondesignsystem.com/elements/color/overview/",
    )])
    .with_badges(&[TrustBadge::Official, TrustBadge::BestPractice])
}

fn modal_vs_panel() -> MockResponse {
    MockResponse::new(
        r"**Modal vs. side panel:** [Best Practice]

- **Modal:** Use for critical, focused tasks that must be completed or dismissed (e.g., confirm delete, short forms). Blocks the whole view.
- **Side panel:** Use for supplementary workflows that don’t require full attention (e.g., filters, details, multi-step flows). Keeps context visible.

Carbon provides `Modal` and `ComposedModal` for dialogs, and side panels can be built with `Layer` + `Panel`-style layout. See the pattern guidelines for decision trees.",
    )
    .with_sources(vec![Source::new(
        SourceType::Documentation,
        "Modal — Carbon Design System",
        "https://carbondesignsystem.com/components/modal/usage/",
    )])
    .with_badges(&[TrustBadge::BestPractice])
}

fn fallback() -> MockResponse {
    MockResponse::new(
        r#"I can help with spacing tokens, color palettes, typography, component usage guidelines, and Figma resources. Try asking: "What spacing token for card padding?" or "Show me color tokens for notifications." [Flexible]"#,
    )
    .with_sources(vec![Source::new(
        SourceType::Documentation,
        "Carbon Design System",
        "https://carbondesignsystem.com",
    )])
    .with_badges(&[TrustBadge::Flexible])
}
