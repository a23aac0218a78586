use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ComponentPreview, SourceType, TrustBadge};

/// A citation attached to an answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: SourceType,
    pub title: String,
    pub url: String,
}

impl Source {
    #[must_use]
    pub fn new(kind: SourceType, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A pre-authored answer. Selected by the matcher, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MockResponse {
    /// Markdown body. May contain inline badge placeholders like `[Official Rule]`.
    pub content: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub trust_badges: Vec<TrustBadge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_preview: Option<ComponentPreview>,
    #[serde(default)]
    pub suggest_video_answer: bool,
}

impl MockResponse {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sources: Vec::new(),
            trust_badges: Vec::new(),
            component_preview: None,
            suggest_video_answer: false,
        }
    }

    #[must_use]
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    #[must_use]
    pub fn with_badges(mut self, badges: &[TrustBadge]) -> Self {
        self.trust_badges = badges.to_vec();
        self
    }

    #[must_use]
    pub fn with_preview(mut self, preview: ComponentPreview) -> Self {
        self.component_preview = Some(preview);
        self
    }
}
