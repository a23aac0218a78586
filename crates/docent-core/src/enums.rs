//! Roles, badges, trends, statuses and flow states for Docent.
//!
//! Enums serialize with the wire names used by the question dataset:
//! `snake_case` for most, `kebab-case` where the dataset uses hyphens
//! (`best-practice`, `needs-attention`). Enums backing a flow provide
//! `allowed_next_states()` to enforce valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The audience the assistant is tailored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Designer,
    Developer,
    Guardian,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Guardian, Self::Developer, Self::Designer];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Designer => "designer",
            Self::Developer => "developer",
            Self::Guardian => "guardian",
        }
    }

    /// Human-facing name of the role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Designer => "Designer",
            Self::Developer => "Developer",
            Self::Guardian => "Design System Guardian",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Designer => "Explore spacing tokens, color values, and Figma-ready specs",
            Self::Developer => {
                "Access code snippets, prop tables, and React implementation details"
            }
            Self::Guardian => {
                "Monitor designer uncertainty, detect patterns, and guide system evolution"
            }
        }
    }

    #[must_use]
    pub const fn tag_label(self) -> &'static str {
        match self {
            Self::Designer => "Visual specifications",
            Self::Developer => "Technical implementation",
            Self::Guardian => "System governance",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MessageRole
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrustBadge
// ---------------------------------------------------------------------------

/// Normative weight of a canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TrustBadge {
    Official,
    BestPractice,
    Flexible,
}

impl TrustBadge {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::BestPractice => "best-practice",
            Self::Flexible => "flexible",
        }
    }

    /// Label shown next to an answer, also used as the inline placeholder
    /// text (`[Official Rule]`) inside canned content.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Official => "Official Rule",
            Self::BestPractice => "Best Practice",
            Self::Flexible => "Flexible",
        }
    }

    /// Inverse of [`TrustBadge::label`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Official, Self::BestPractice, Self::Flexible]
            .into_iter()
            .find(|badge| badge.label() == label)
    }
}

impl fmt::Display for TrustBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SourceType
// ---------------------------------------------------------------------------

/// Kind of documentation a citation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Documentation,
    Storybook,
    Github,
    Figma,
    Chromatic,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Storybook => "storybook",
            Self::Github => "github",
            Self::Figma => "figma",
            Self::Chromatic => "chromatic",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Platform a designer question targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Desktop,
    Mobile,
    Both,
}

impl Platform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Recency/frequency classification of a question cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    New,
    Recurring,
    Increasing,
    Decreasing,
}

impl Trend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Recurring => "recurring",
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }

    /// Whether the dashboard counts this trend as a rising topic.
    #[must_use]
    pub const fn is_rising(self) -> bool {
        matches!(self, Self::New | Self::Increasing)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HealthStatus / HealthTrend
// ---------------------------------------------------------------------------

/// Health of a component judged by designer uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    Warning,
    NeedsAttention,
}

impl HealthStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::NeedsAttention => "needs-attention",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthTrend {
    Stable,
    Increasing,
    Decreasing,
}

impl HealthTrend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for HealthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Impact / IssueSeverity
// ---------------------------------------------------------------------------

/// Impact of a detected pattern insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a UI audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ComponentPreview
// ---------------------------------------------------------------------------

/// Interactive example attached to a hub answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentPreview {
    Datatable,
    Button,
}

impl ComponentPreview {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Datatable => "datatable",
            Self::Button => "button",
        }
    }
}

impl fmt::Display for ComponentPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BookingState
// ---------------------------------------------------------------------------

/// Office-hours booking offered on an assistant answer.
///
/// ```text
/// available → requested
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    Available,
    Requested,
}

impl BookingState {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Available => &[Self::Requested],
            Self::Requested => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Requested => "requested",
        }
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordingStep
// ---------------------------------------------------------------------------

/// Step of a guardian's recorded video answer.
///
/// ```text
/// ready → recording → review → sent
///                            → documented
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordingStep {
    Ready,
    Recording,
    Review,
    Sent,
    Documented,
}

impl RecordingStep {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Ready => &[Self::Recording],
            Self::Recording => &[Self::Review],
            Self::Review => &[Self::Sent, Self::Documented],
            Self::Sent | Self::Documented => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Confirmation shown once the flow closes.
    #[must_use]
    pub const fn toast_message(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("Answer sent!"),
            Self::Documented => Some("Added to documentation!"),
            Self::Ready | Self::Recording | Self::Review => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Recording => "recording",
            Self::Review => "review",
            Self::Sent => "sent",
            Self::Documented => "documented",
        }
    }
}

impl fmt::Display for RecordingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
