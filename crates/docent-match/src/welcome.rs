//! Opening messages for a new chat.

use docent_core::entities::WelcomeMessage;
use docent_core::enums::Role;

/// Fixed prompts offered by the hub chat before the first question.
pub const GUIDED_QUESTIONS: [&str; 5] = [
    "What are the specs for a DataTable?",
    "Show me the Button component props",
    "What's the spacing token for medium gaps?",
    "How do I implement accessible modals?",
    "What's the component maturity status?",
];

/// Options offered after an answer is marked unhelpful.
pub const ESCALATION_OPTIONS: [&str; 3] = [
    "Contact Design System Guardian",
    "Book Office Hours",
    "Submit Feedback",
];

#[must_use]
pub fn welcome_for(role: Role) -> WelcomeMessage {
    let (text, questions): (&str, [&str; 3]) = match role {
        Role::Designer => (
            "Welcome! I'm your Carbon Design System assistant, tailored for designers. I can help you with spacing tokens, color palettes, typography scales, component usage guidelines, and Figma-specific resources. What are you working on today?",
            [
                "What spacing token should I use for card padding?",
                "When should I use a modal vs. a side panel?",
                "Show me the color tokens for notifications",
            ],
        ),
        Role::Developer => (
            "Welcome! I'm your Carbon Design System assistant, tailored for developers. I can help you with component APIs, code snippets, props documentation, and implementation patterns. What are you building?",
            [
                "How do I implement the DataTable with sorting?",
                "What are the props for the Modal component?",
                "Show me the Button component variants",
            ],
        ),
        Role::Guardian => (
            "Welcome! I'm your Carbon Design System assistant for governance and compliance. I can help you audit component usage, review design system health, and ensure standards compliance. What would you like to review?",
            [
                "Which components have the most compliance issues?",
                "Show me the latest design token changes",
                "What's the adoption rate across teams?",
            ],
        ),
    };
    WelcomeMessage {
        text: text.to_string(),
        suggested_questions: questions.iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::table_for;

    #[test]
    fn every_role_gets_three_suggestions() {
        for role in Role::ALL {
            let welcome = welcome_for(role);
            assert_eq!(welcome.suggested_questions.len(), 3);
            assert!(welcome.text.starts_with("Welcome!"));
        }
    }

    #[test]
    fn suggestions_hit_catalog_entries() {
        for role in Role::ALL {
            for question in welcome_for(role).suggested_questions {
                assert!(
                    table_for(role).find(&question).is_some(),
                    "{role}: {question:?} falls through to the fallback"
                );
            }
        }
    }
}
