//! Component-keyed answers for the hub chat.
//!
//! Each entry is guarded by a single key (`datatable`, `button`, ...) that must
//! appear in the lower-cased query. Guardians share the developer entries so
//! component previews stay available to them. Queries that match nothing get
//! a templated answer echoing the question.

use std::sync::OnceLock;

use docent_core::entities::{MockResponse, Source};
use docent_core::enums::{ComponentPreview, Role, SourceType, TrustBadge};

const FIGMA_URL: &str = "https://www.figma.com/@carbon";
const CHROMATIC_URL: &str = "https://www.chromatic.com/library?appId=carbon";
const GITHUB_URL: &str = "https://github.com/carbon-design-system/carbon";

/// A hub answer guarded by one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubEntry {
    pub key: &'static str,
    pub response: MockResponse,
}

static DEVELOPER: OnceLock<Vec<HubEntry>> = OnceLock::new();
static DESIGNER: OnceLock<Vec<HubEntry>> = OnceLock::new();

/// Entries consulted for `role`, in match order.
#[must_use]
pub fn entries_for(role: Role) -> &'static [HubEntry] {
    match role {
        Role::Designer => DESIGNER.get_or_init(designer_entries),
        Role::Developer | Role::Guardian => DEVELOPER.get_or_init(developer_entries),
    }
}

/// Answer a hub question. Guardians get `suggest_video_answer` set whenever
/// the answer has a component preview or cites any source.
#[must_use]
pub fn hub_respond(query: &str, role: Role) -> MockResponse {
    let lowered = query.to_lowercase();
    let mut response = entries_for(role)
        .iter()
        .find(|entry| lowered.contains(entry.key))
        .map_or_else(
            || {
                tracing::debug!(%role, "no hub entry matched; using templated answer");
                default_response(query, role)
            },
            |entry| {
                tracing::debug!(%role, key = entry.key, "matched hub entry");
                entry.response.clone()
            },
        );

    if role == Role::Guardian
        && (response.component_preview.is_some() || !response.sources.is_empty())
    {
        response.suggest_video_answer = true;
    }
    response
}

/// Templated answer for an unmatched hub question.
#[must_use]
pub fn default_response(query: &str, role: Role) -> MockResponse {
    let focus = match role {
        Role::Developer => "code examples, props, and implementation details",
        Role::Designer => "spacing tokens, color values, and visual specifications",
        Role::Guardian => "component examples, props, and implementation details",
    };
    let topics = match role {
        Role::Developer => {
            "\n- Component props and APIs\n- React implementation examples\n- TypeScript definitions\n- Testing strategies\n"
        }
        Role::Designer => {
            "\n- Spacing and layout tokens\n- Color palettes and contrast ratios\n- Typography scales\n- Component anatomy\n"
        }
        Role::Guardian => "",
    };

    let content = format!(
        "I understand you're asking about: \"{query}\"\n\n\
         As a {role}, I can help you with {focus}.\n\n\
         **Available Resources:**\n\
         - Component specifications and guidelines\n\
         - Implementation examples\n\
         - Best practices and patterns\n\
         - Accessibility requirements\n\
         - Design tokens and styling\n\n\
         **Common Topics:**\n{topics}\n\n\
         Could you provide more details about what you'd like to know? Try searching for specific component names (e.g., \"Button\", \"DataTable\") or topics (e.g., \"spacing\", \"governance\", \"roadmap\")."
    );

    MockResponse::new(content)
        .with_sources(vec![
            Source::new(SourceType::Figma, "Open in Figma", FIGMA_URL),
            Source::new(
                SourceType::Storybook,
                "View in Storybook",
                "https://carbondesignsystem.com/",
            ),
            Source::new(SourceType::Github, "GitHub Source", GITHUB_URL),
        ])
        .with_badges(&[TrustBadge::BestPractice])
}

fn developer_entries() -> Vec<HubEntry> {
    vec![
        HubEntry {
            key: "datatable",
            response: MockResponse::new(
                r#"The DataTable component is a core Carbon component for displaying tabular data.

**Key Props:**
```typescript
interface DataTableProps {
  rows: Array<Record<string, any>>;
  headers: Array<{ key: string; header: string }>;
  size?: 'xs' | 'sm' | 'md' | 'lg' | 'xl';
  isSortable?: boolean;
  useZebraStyles?: boolean;
}
```

**Basic Usage:**
```jsx
import { DataTable } from '@carbon/react';

<DataTable
  rows={rows}
  headers={headers}
  size="md"
/>
```

**Accessibility:**
- Built-in keyboard navigation
- ARIA labels for sortable columns
- Screen reader support for row selection"#,
            )
            .with_sources(vec![
                Source::new(SourceType::Figma, "Open in Figma", FIGMA_URL),
                Source::new(
                    SourceType::Storybook,
                    "View in Storybook",
                    "https://react.carbondesignsystem.com/?path=/story/components-datatable",
                ),
                Source::new(
                    SourceType::Github,
                    "GitHub Source",
                    "https://github.com/carbon-design-system/carbon/tree/main/packages/react/src/components/DataTable",
                ),
                Source::new(SourceType::Chromatic, "Chromatic Diff", CHROMATIC_URL),
            ])
            .with_badges(&[TrustBadge::Official])
            .with_preview(ComponentPreview::Datatable),
        },
        HubEntry {
            key: "button",
            response: MockResponse::new(
                r#"The Button component is one of the most frequently used Carbon components.

**Available Props:**
```typescript
interface ButtonProps {
  kind?: 'primary' | 'secondary' | 'tertiary' | 'ghost' | 'danger';
  size?: 'sm' | 'md' | 'lg' | 'xl' | '2xl';
  disabled?: boolean;
  onClick?: () => void;
  renderIcon?: React.ComponentType;
  iconDescription?: string;
}
```

**React Implementation:**
```jsx
import { Button } from '@carbon/react';
import { Add } from '@carbon/icons-react';

<Button
  kind="primary"
  size="md"
  renderIcon={Add}
  onClick={handleClick}
>
  Add item
</Button>
```"#,
            )
            .with_sources(vec![
                Source::new(SourceType::Figma, "Open in Figma", FIGMA_URL),
                Source::new(
                    SourceType::Storybook,
                    "View in Storybook",
                    "https://react.carbondesignsystem.com/?path=/story/components-button",
                ),
                Source::new(
                    SourceType::Github,
                    "GitHub Source",
                    "https://github.com/carbon-design-system/carbon/tree/main/packages/react/src/components/Button",
                ),
                Source::new(SourceType::Chromatic, "Chromatic Diff", CHROMATIC_URL),
            ])
            .with_badges(&[TrustBadge::Official])
            .with_preview(ComponentPreview::Button),
        },
    ]
}

fn designer_entries() -> Vec<HubEntry> {
    vec![
        HubEntry {
            key: "datatable",
            response: MockResponse::new(
                r"DataTable specifications for designers:

**Spacing Tokens:**
- Cell padding: $spacing-05 (16px) vertical, $spacing-05 (16px) horizontal
- Row height: varies by size (xs: 24px, sm: 32px, md: 40px, lg: 48px, xl: 64px)
- Header padding: $spacing-05 (16px)
- Column gap: $spacing-05 (16px)

**Colors (Light Theme):**
- Header background: $layer-01 (#f4f4f4)
- Row background (zebra): alternating $layer-01 and $layer-02
- Border: $border-subtle-01 (#e0e0e0)
- Hover state: $layer-hover-01 (#e8e8e8)

**Typography:**
- Header: IBM Plex Sans, 14px, Semi-Bold
- Body: IBM Plex Sans, 14px, Regular
- Line height: 18px

**Accessibility:**
- Minimum contrast ratio: 4.5:1 for text
- Interactive elements: 3:1 contrast
- Focus indicator: 2px solid $focus (#0f62fe)",
            )
            .with_sources(vec![
                Source::new(SourceType::Figma, "Open in Figma", FIGMA_URL),
                Source::new(
                    SourceType::Storybook,
                    "View in Storybook",
                    "https://react.carbondesignsystem.com/?path=/story/components-datatable",
                ),
                Source::new(SourceType::Github, "GitHub Source", GITHUB_URL),
                Source::new(SourceType::Chromatic, "Chromatic Diff", CHROMATIC_URL),
            ])
            .with_badges(&[TrustBadge::Official])
            .with_preview(ComponentPreview::Datatable),
        },
        HubEntry {
            key: "button",
            response: MockResponse::new(
                r"Button specifications for designers:

**Carbon Button Kinds:**
- Primary: High emphasis, one per section
- Secondary: Medium emphasis, supporting actions
- Tertiary: Low emphasis, less prominent
- Ghost: Minimal emphasis, inline or overlay
- Danger: Destructive or irreversible actions

**Spacing & Sizing:**
- Height: sm 32px, md 40px, lg 48px, xl 48px, 2xl 64px
- Padding: $spacing-05 (16px) horizontal for md
- Icon + text gap: $spacing-03 (8px)
- Min width: 48px for touch targets

**Colors (Light Theme):**
- Primary bg: $interactive-01 (#0f62fe)
- Secondary border: $interactive-01
- Ghost/danger: $interactive-01 text only
- Hover: $hover-primary, $hover-secondary, etc.

**Accessibility:**
- Minimum 44×44px touch target
- Focus: 2px solid $focus
- Contrast: 4.5:1 for text",
            )
            .with_sources(vec![
                Source::new(SourceType::Figma, "Open in Figma", FIGMA_URL),
                Source::new(
                    SourceType::Storybook,
                    "View in Storybook",
                    "https://react.carbondesignsystem.com/?path=/story/components-button",
                ),
                Source::new(SourceType::Github, "GitHub Source", GITHUB_URL),
            ])
            .with_badges(&[TrustBadge::Official])
            .with_preview(ComponentPreview::Button),
        },
        HubEntry {
            key: "spacing",
            response: MockResponse::new(
                r"Carbon spacing tokens follow an 8px base grid system (mini-unit):

**Available Spacing Tokens:**
- $spacing-01: 2px (0.125rem)
- $spacing-02: 4px (0.25rem)
- $spacing-03: 8px (0.5rem) - Mini unit
- $spacing-04: 12px (0.75rem)
- $spacing-05: 16px (1rem) - Recommended for medium gaps
- $spacing-06: 24px (1.5rem)
- $spacing-07: 32px (2rem)
- $spacing-08: 40px (2.5rem)
- $spacing-09: 48px (3rem)
- $spacing-10: 64px (4rem)
- $spacing-11: 80px (5rem)
- $spacing-12: 96px (6rem)

**Usage Guidelines:**
- Use $spacing-05 for general component padding
- Use $spacing-06 for section spacing
- Use $spacing-07+ for page-level margins
- Maintain 8px grid alignment

**In Figma:**
Use Auto Layout with multiples of 8px for spacing between elements.",
            )
            .with_sources(vec![
                Source::new(SourceType::Figma, "Open in Figma", FIGMA_URL),
                Source::new(
                    SourceType::Storybook,
                    "View in Storybook",
                    "https://carbondesignsystem.com/guidelines/spacing",
                ),
                Source::new(SourceType::Github, "GitHub Source", GITHUB_URL),
            ])
            .with_badges(&[TrustBadge::Official]),
        },
        HubEntry {
            key: "contained",
            response: MockResponse::new(
                r"**Short answer:** Use a **Contained List** for simple, single-column content inside smaller containers. Use a **Data Table** when you need multi-column data with sorting, filtering, or batch actions.

**Here's how to decide:**

| Criteria | Contained List | Data Table |
|----------|----------------|------------|
| Columns | Single column only | Multiple columns |
| Best context | Cards, sidebars, popovers | Full-width page areas |
| Interactivity | Inline actions (toggles, links) | Sorting, filtering, batch actions, expandable rows |
| Data volume | Short lists (5–25 items) | Large datasets with pagination |
| Content type | Homogeneous items | Heterogeneous data (text, numbers, statuses) |

**Use a Contained List when:**
- Displaying grouped items inside a card or sidebar
- Items have a single header and uniform row structure
- You need optional inline actions but not sorting

**Use a Data Table when:**
- You need multiple column headers
- Users need to sort, filter, or search the data
- You need row selection or batch actions
- Data requires pagination or expandable rows

💡 **Tip:** If you're tempted to add a second column to a Contained List, that's your signal to switch to a Data Table.",
            )
            .with_sources(vec![
                Source::new(
                    SourceType::Storybook,
                    "Carbon Contained List",
                    "https://carbondesignsystem.com/components/contained-list/usage",
                ),
                Source::new(
                    SourceType::Storybook,
                    "Carbon Data Table",
                    "https://carbondesignsystem.com/components/data-table/usage",
                ),
            ])
            .with_badges(&[TrustBadge::BestPractice]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_key_in_declaration_order_wins() {
        let response = hub_respond("Button inside a DataTable row?", Role::Developer);
        assert_eq!(response.component_preview, Some(ComponentPreview::Datatable));
    }

    #[test]
    fn guardian_uses_developer_entries_and_gets_video_hint() {
        let guardian = hub_respond("Show me the Button component props", Role::Guardian);
        let developer = hub_respond("Show me the Button component props", Role::Developer);
        assert!(guardian.suggest_video_answer);
        assert!(!developer.suggest_video_answer);
        assert_eq!(guardian.content, developer.content);
    }

    #[test]
    fn designer_spacing_entry() {
        let response = hub_respond("What's the spacing token for medium gaps?", Role::Designer);
        assert!(response.content.contains("8px base grid"));
        assert_eq!(response.component_preview, None);
    }

    #[test]
    fn data_table_with_space_is_not_the_datatable_key() {
        let response = hub_respond("data table density", Role::Developer);
        assert!(response.content.starts_with("I understand you're asking about"));
    }

    #[test]
    fn unmatched_query_is_echoed() {
        let response = hub_respond("How do I implement accessible modals?", Role::Designer);
        assert!(response.content.contains("\"How do I implement accessible modals?\""));
        assert!(response.content.contains("As a designer,"));
        assert!(response.content.contains("- Typography scales"));
        assert_eq!(response.trust_badges, vec![TrustBadge::BestPractice]);
        assert_eq!(response.sources.len(), 3);
    }

    #[test]
    fn guardian_default_lists_no_topics() {
        let response = default_response("maturity?", Role::Guardian);
        assert!(response.content.contains("**Common Topics:**\n\n\n"));
    }
}
