//! Bundled designer questions used by the guardian views.

use docent_core::entities::DesignerQuestion;

use crate::error::InsightsError;

const SEED_QUESTIONS: &str = include_str!("../seed/questions.json");

/// Parse the bundled question set.
///
/// # Errors
///
/// Returns `InsightsError::Seed` if the bundled JSON does not match
/// [`DesignerQuestion`].
pub fn seed_questions() -> Result<Vec<DesignerQuestion>, InsightsError> {
    Ok(serde_json::from_str(SEED_QUESTIONS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses() {
        let questions = seed_questions().unwrap();
        assert_eq!(questions.len(), 18);
        assert_eq!(questions[0].id, "q1");
        assert_eq!(questions[0].component, ["Drawer", "Modal"]);
    }

    #[test]
    fn seed_ids_are_unique() {
        let questions = seed_questions().unwrap();
        let mut ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }
}
