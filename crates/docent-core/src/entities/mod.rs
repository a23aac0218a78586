//! Entity structs for Docent domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output, session persistence and schema validation.

mod audit;
mod health;
mod insight;
mod knowledge;
mod message;
mod question;
mod response;

pub use audit::{AuditIssue, AuditReport};
pub use health::{ComponentStats, HealthSummary};
pub use insight::{PatternInsight, TrendPoint};
pub use knowledge::{KnowledgeSource, WelcomeMessage};
pub use message::{ChatMessage, MessageMeta};
pub use question::{DesignerQuestion, QuestionCluster};
pub use response::{MockResponse, Source};
