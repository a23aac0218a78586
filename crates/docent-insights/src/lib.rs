//! # docent-insights
//!
//! Guardian-facing analysis over designer questions.
//!
//! - [`seed`]: the bundled question dataset
//! - [`cluster`]: grouping by component list and context, with recency trends
//! - [`health`]: per-component question pressure
//! - [`trends`]: pattern insights and the weekly question series
//! - [`dashboard`]: headline counts and relative date labels
//! - [`audit`]: the mock UI screenshot audit
//!
//! Clustering and health are pure functions of their input (plus an explicit
//! `now` where recency matters); nothing here keeps state between calls.

pub mod audit;
pub mod cluster;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod seed;
pub mod trends;

pub use cluster::{cluster, cluster_at, topic_for, trend_at};
pub use error::{AuditError, InsightsError};
pub use seed::seed_questions;
