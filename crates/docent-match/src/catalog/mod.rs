//! Per-role answer tables used by the chat.
//!
//! Tables are built once on first use and shared for the life of the process.

mod designer;
mod developer;
mod guardian;

use std::sync::OnceLock;

use docent_core::entities::MockResponse;
use docent_core::enums::Role;

use crate::matcher::ResponseTable;

static DESIGNER: OnceLock<ResponseTable> = OnceLock::new();
static DEVELOPER: OnceLock<ResponseTable> = OnceLock::new();
static GUARDIAN: OnceLock<ResponseTable> = OnceLock::new();

/// The answer table for `role`.
#[must_use]
pub fn table_for(role: Role) -> &'static ResponseTable {
    match role {
        Role::Designer => DESIGNER.get_or_init(designer::table),
        Role::Developer => DEVELOPER.get_or_init(developer::table),
        Role::Guardian => GUARDIAN.get_or_init(guardian::table),
    }
}

/// Answer `query` for `role`. Never fails; unmatched queries get the role's
/// flexible fallback.
#[must_use]
pub fn respond(query: &str, role: Role) -> MockResponse {
    tracing::debug!(%role, "resolving chat response");
    table_for(role).resolve(query).clone()
}

#[cfg(test)]
mod tests {
    use docent_core::enums::TrustBadge;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Role::Designer, "What spacing token should I use for card padding?", "geometric spacing scale")]
    #[case(Role::Designer, "Show me the color tokens for notifications", "geometric spacing scale")]
    #[case(Role::Designer, "Which palette for notifications?", "semantic color tokens")]
    #[case(Role::Designer, "When should I use a modal vs. a side panel?", "Modal vs. side panel")]
    #[case(Role::Developer, "What are the button props?", "most used components")]
    #[case(Role::Developer, "How do I implement the DataTable with sorting?", "DataTable with sorting")]
    #[case(Role::Developer, "What are the props for the Modal component?", "Modal component key props")]
    #[case(Role::Guardian, "Which components have the most compliance issues?", "System Health Overview")]
    #[case(Role::Guardian, "Show me the latest design token changes", "Latest design token changes")]
    #[case(Role::Guardian, "What's the adoption rate across teams?", "System Health Overview")]
    fn routes_queries_to_entries(#[case] role: Role, #[case] query: &str, #[case] needle: &str) {
        let response = respond(query, role);
        assert!(
            response.content.contains(needle),
            "{role} / {query:?} did not select the expected entry"
        );
    }

    #[rstest]
    #[case(Role::Designer)]
    #[case(Role::Developer)]
    #[case(Role::Guardian)]
    fn unmatched_queries_get_flexible_fallback(#[case] role: Role) {
        let response = respond("tell me a joke", role);
        assert_eq!(response.trust_badges, vec![TrustBadge::Flexible]);
        assert_eq!(&response, table_for(role).fallback());
    }

    #[test]
    fn tables_are_shared() {
        assert!(std::ptr::eq(table_for(Role::Designer), table_for(Role::Designer)));
    }

    #[test]
    fn fallbacks_are_not_entries() {
        for role in Role::ALL {
            assert!(table_for(role).entries().iter().all(|e| !e.keywords().is_empty()));
        }
    }
}
