//! # docent-core
//!
//! Core types, ID generation, and error types for Docent.
//!
//! This crate provides the foundational types shared across all Docent crates:
//! - Entity structs for domain objects (questions, clusters, responses, messages)
//! - Closed enums for roles, badges, trends and statuses
//! - State machines for booking and guardian recording flows
//! - Message ID generation
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
