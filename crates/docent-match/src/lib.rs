//! # docent-match
//!
//! Selects pre-authored answers for a question and a role.
//!
//! - [`matcher`]: first-match keyword containment over an ordered table with
//!   an explicit fallback
//! - [`catalog`]: the per-role answer tables used by the chat
//! - [`hub`]: the component-keyed answers used by the hub chat
//! - [`welcome`]: greetings and starter prompts
//! - [`sources`]: official knowledge sources and citation URLs
//! - [`prompt`]: the role-aware system prompt
//! - [`content`]: badge placeholder stripping and code block segmentation

pub mod catalog;
pub mod content;
pub mod hub;
pub mod matcher;
pub mod prompt;
pub mod sources;
pub mod welcome;

pub use catalog::{respond, table_for};
pub use hub::hub_respond;
pub use matcher::{ResponseEntry, ResponseTable, match_response};
