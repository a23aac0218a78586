//! The four documentation sources answers are allowed to cite.

use std::sync::OnceLock;

use docent_core::entities::KnowledgeSource;
use docent_core::enums::{Role, SourceType};

pub const SOURCE_DOCS: &str = "carbon-docs";
pub const SOURCE_STORYBOOK: &str = "carbon-storybook";
pub const SOURCE_GITHUB: &str = "carbon-github";
pub const SOURCE_FIGMA: &str = "carbon-figma";

static SOURCES: OnceLock<Vec<KnowledgeSource>> = OnceLock::new();

fn source(
    id: &str,
    label: &str,
    kind: SourceType,
    base_url: &str,
    description: &str,
) -> KnowledgeSource {
    KnowledgeSource {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        base_url: base_url.to_string(),
        description: description.to_string(),
    }
}

#[must_use]
pub fn knowledge_sources() -> &'static [KnowledgeSource] {
    SOURCES.get_or_init(|| {
        vec![
            source(
                SOURCE_DOCS,
                "Carbon Design System",
                SourceType::Documentation,
                "https://carbondesignsystem.com",
                "Official documentation for components, guidelines, tokens, and patterns",
            ),
            source(
                SOURCE_STORYBOOK,
                "Carbon React Storybook",
                SourceType::Storybook,
                "https://react.carbondesignsystem.com",
                "Interactive component demos, props documentation, and code examples",
            ),
            source(
                SOURCE_GITHUB,
                "Carbon GitHub",
                SourceType::Github,
                "https://github.com/carbon-design-system/carbon",
                "Source code, issues, changelogs, and implementation details",
            ),
            source(
                SOURCE_FIGMA,
                "Carbon Figma Kit",
                SourceType::Figma,
                "https://www.figma.com/community/file/874592104192380079",
                "Official Figma design kit with components, tokens, and templates",
            ),
        ]
    })
}

#[must_use]
pub fn find_source(id: &str) -> Option<&'static KnowledgeSource> {
    knowledge_sources().iter().find(|s| s.id == id)
}

/// Full URL for a resource under a known source. `path` is appended verbatim.
///
/// Returns `None` for an unknown source id.
#[must_use]
pub fn build_source_url(id: &str, path: Option<&str>) -> Option<String> {
    let source = find_source(id)?;
    Some(match path {
        Some(path) if !path.is_empty() => format!("{}{path}", source.base_url),
        _ => source.base_url.clone(),
    })
}

/// Source ids most relevant to `role`, most relevant first.
#[must_use]
pub const fn role_source_priority(role: Role) -> [&'static str; 3] {
    match role {
        Role::Designer => [SOURCE_DOCS, SOURCE_FIGMA, SOURCE_STORYBOOK],
        Role::Developer => [SOURCE_STORYBOOK, SOURCE_GITHUB, SOURCE_DOCS],
        Role::Guardian => [SOURCE_DOCS, SOURCE_GITHUB, SOURCE_STORYBOOK],
    }
}

/// The role's sources resolved in priority order.
#[must_use]
pub fn sources_for(role: Role) -> Vec<&'static KnowledgeSource> {
    role_source_priority(role)
        .iter()
        .filter_map(|id| find_source(id))
        .collect()
}
