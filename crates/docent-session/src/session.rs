//! The chat session: role, ordered history and the actions a user can take.
//!
//! Every mutation writes the session through to the optional
//! [`HistoryStore`].

use chrono::Utc;
use docent_core::entities::{ChatMessage, MessageMeta, MockResponse};
use docent_core::enums::{BookingState, MessageRole, Role};
use docent_core::ids::{PREFIX_MESSAGE, generate_id};
use docent_match::welcome::{ESCALATION_OPTIONS, welcome_for};
use tokio_util::sync::CancellationToken;

use crate::error::SessionError;
use crate::store::{HistoryStore, SessionSnapshot};

#[derive(Debug, Default)]
pub struct ChatSession {
    role: Option<Role>,
    history: Vec<ChatMessage>,
    store: Option<HistoryStore>,
    deliveries: CancellationToken,
}

impl ChatSession {
    /// An empty session with no role and no persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session restored from `store`, writing back to it on every change.
    #[must_use]
    pub fn with_store(store: HistoryStore) -> Self {
        let SessionSnapshot { role, messages } = store.load();
        tracing::debug!(?role, messages = messages.len(), "restored chat session");
        Self {
            role,
            history: messages,
            store: Some(store),
            deliveries: CancellationToken::new(),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        self.role
    }

    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Token for one answer delivery. It is cancelled when the role
    /// changes or the session is reset or forgotten.
    #[must_use]
    pub fn delivery_token(&self) -> CancellationToken {
        self.deliveries.child_token()
    }

    /// Switch to `role`. A different role clears the history and opens with
    /// that role's welcome message; re-selecting the current role does
    /// nothing. Returns whether the role changed. Pending deliveries are
    /// cancelled on a change.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` if a message id cannot be generated.
    pub fn select_role(&mut self, role: Role) -> Result<bool, SessionError> {
        if self.role == Some(role) {
            return Ok(false);
        }
        tracing::info!(from = ?self.role, to = %role, "switching role");
        self.cancel_deliveries();
        self.role = Some(role);
        self.history.clear();
        self.seed_welcome()?;
        self.persist();
        Ok(true)
    }

    /// Clear the history. With a role selected the welcome message is
    /// re-seeded; without one the saved session is deleted. Pending
    /// deliveries are cancelled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Core` if a message id cannot be generated.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.cancel_deliveries();
        self.history.clear();
        if self.role.is_some() {
            self.seed_welcome()?;
            self.persist();
        } else if let Some(store) = &self.store {
            store.clear();
        }
        Ok(())
    }

    /// Drop the role and all history, deleting the saved session.
    pub fn forget(&mut self) {
        self.cancel_deliveries();
        self.role = None;
        self.history.clear();
        if let Some(store) = &self.store {
            store.clear();
        }
    }

    /// Append the user's message, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoRole` before a role is selected,
    /// `SessionError::EmptyMessage` for blank input and `SessionError::Core`
    /// if a message id cannot be generated.
    pub fn push_user(&mut self, text: &str) -> Result<&ChatMessage, SessionError> {
        if self.role.is_none() {
            return Err(SessionError::NoRole);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let message = new_message(MessageRole::User, text.to_string(), None)?;
        Ok(self.append(message))
    }

    /// Append an answer with its citations and badges. The answer offers
    /// office-hours booking.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoRole` before a role is selected and
    /// `SessionError::Core` if a message id cannot be generated.
    pub fn push_assistant(&mut self, response: &MockResponse) -> Result<&ChatMessage, SessionError> {
        if self.role.is_none() {
            return Err(SessionError::NoRole);
        }
        let meta = MessageMeta {
            sources: response.sources.clone(),
            trust_badges: response.trust_badges.clone(),
            suggested_questions: Vec::new(),
            booking: Some(BookingState::Available),
            component_preview: response.component_preview,
            suggest_video_answer: response.suggest_video_answer,
        };
        let message = new_message(MessageRole::Assistant, response.content.clone(), Some(meta))?;
        Ok(self.append(message))
    }

    /// Request office hours from the answer `id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` for an unknown id and
    /// `SessionError::InvalidTransition` when the message offers no booking
    /// or it was already requested.
    pub fn request_booking(&mut self, id: &str) -> Result<(), SessionError> {
        let message = self
            .history
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| SessionError::NotFound { id: id.to_string() })?;

        let current = message.meta.as_ref().and_then(|meta| meta.booking);
        let next = BookingState::Requested;
        match (current, message.meta.as_mut()) {
            (Some(state), Some(meta)) if state.can_transition_to(next) => {
                meta.booking = Some(next);
            }
            _ => {
                return Err(SessionError::InvalidTransition {
                    entity: format!("booking {id}"),
                    from: current.map_or_else(|| "none".to_string(), |state| state.to_string()),
                    to: next.to_string(),
                });
            }
        }
        tracing::info!(message = id, "office hours requested");
        self.persist();
        Ok(())
    }

    /// Id of the newest assistant message, if any.
    #[must_use]
    pub fn last_assistant_id(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.id.as_str())
    }

    /// Starter questions, offered only while the welcome message is the
    /// whole history.
    #[must_use]
    pub fn suggestions(&self) -> &[String] {
        match self.history.as_slice() {
            [only] => only
                .meta
                .as_ref()
                .map(|meta| meta.suggested_questions.as_slice())
                .unwrap_or_default(),
            _ => &[],
        }
    }

    /// Follow-ups offered when an answer did not help.
    #[must_use]
    pub const fn escalation_options(&self) -> &'static [&'static str] {
        &ESCALATION_OPTIONS
    }

    fn cancel_deliveries(&mut self) {
        std::mem::take(&mut self.deliveries).cancel();
    }

    fn seed_welcome(&mut self) -> Result<(), SessionError> {
        let Some(role) = self.role else {
            return Ok(());
        };
        let welcome = welcome_for(role);
        let meta = MessageMeta {
            suggested_questions: welcome.suggested_questions,
            ..MessageMeta::default()
        };
        let message = new_message(MessageRole::Assistant, welcome.text, Some(meta))?;
        self.history.push(message);
        Ok(())
    }

    fn append(&mut self, message: ChatMessage) -> &ChatMessage {
        self.history.push(message);
        self.persist();
        let index = self.history.len() - 1;
        &self.history[index]
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            store.save(&SessionSnapshot {
                role: self.role,
                messages: self.history.clone(),
            });
        }
    }
}

fn new_message(
    role: MessageRole,
    content: String,
    meta: Option<MessageMeta>,
) -> Result<ChatMessage, SessionError> {
    Ok(ChatMessage {
        id: generate_id(PREFIX_MESSAGE)?,
        role,
        content,
        timestamp: Utc::now(),
        meta,
    })
}

#[cfg(test)]
mod tests {
    use docent_core::enums::TrustBadge;
    use docent_match::respond;
    use pretty_assertions::assert_eq;

    use super::*;

    fn developer_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.select_role(Role::Developer).unwrap();
        session
    }

    #[test]
    fn selecting_a_role_seeds_welcome() {
        let session = developer_session();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, MessageRole::Assistant);
        assert_eq!(session.suggestions().len(), 3);
    }

    #[test]
    fn reselecting_same_role_keeps_history() {
        let mut session = developer_session();
        session.push_user("hi").unwrap();
        assert!(!session.select_role(Role::Developer).unwrap());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn changing_role_clears_history() {
        let mut session = developer_session();
        session.push_user("hi").unwrap();
        assert!(session.select_role(Role::Designer).unwrap());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.role(), Some(Role::Designer));
    }

    #[test]
    fn suggestions_disappear_after_first_question() {
        let mut session = developer_session();
        session.push_user("What are the button props?").unwrap();
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn user_messages_are_trimmed_and_validated() {
        let mut session = ChatSession::new();
        assert!(matches!(session.push_user("hi"), Err(SessionError::NoRole)));

        let mut session = developer_session();
        assert!(matches!(session.push_user("   "), Err(SessionError::EmptyMessage)));
        let message = session.push_user("  button?  ").unwrap();
        assert_eq!(message.content, "button?");
        assert!(message.id.starts_with("msg-"));
    }

    #[test]
    fn assistant_messages_carry_metadata() {
        let mut session = developer_session();
        let response = respond("What are the button props?", Role::Developer);
        let message = session.push_assistant(&response).unwrap();
        let meta = message.meta.as_ref().unwrap();
        assert_eq!(meta.booking, Some(BookingState::Available));
        assert_eq!(
            meta.trust_badges,
            vec![TrustBadge::Official, TrustBadge::BestPractice]
        );
        assert_eq!(meta.sources.len(), 2);
    }

    #[test]
    fn booking_moves_forward_once() {
        let mut session = developer_session();
        let response = respond("btn", Role::Developer);
        let id = session.push_assistant(&response).unwrap().id.clone();

        session.request_booking(&id).unwrap();
        assert!(matches!(
            session.request_booking(&id),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            session.request_booking("msg-missing"),
            Err(SessionError::NotFound { .. })
        ));
    }

    #[test]
    fn welcome_message_offers_no_booking() {
        let mut session = developer_session();
        let id = session.history()[0].id.clone();
        assert!(matches!(
            session.request_booking(&id),
            Err(SessionError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn rejected_booking_names_current_state() {
        let mut session = developer_session();
        let welcome = session.history()[0].id.clone();
        let Err(SessionError::InvalidTransition { from, to, .. }) =
            session.request_booking(&welcome)
        else {
            panic!("welcome message must not be bookable");
        };
        assert_eq!(from, "none");
        assert_eq!(to, BookingState::Requested.to_string());

        let response = respond("btn", Role::Developer);
        let id = session.push_assistant(&response).unwrap().id.clone();
        session.request_booking(&id).unwrap();
        let Err(SessionError::InvalidTransition { from, .. }) = session.request_booking(&id)
        else {
            panic!("second booking must be rejected");
        };
        assert_eq!(from, BookingState::Requested.to_string());
    }

    #[test]
    fn role_switch_cancels_outstanding_deliveries() {
        let mut session = developer_session();
        let before = session.delivery_token();
        assert!(!session.select_role(Role::Developer).unwrap());
        assert!(!before.is_cancelled());

        session.select_role(Role::Designer).unwrap();
        assert!(before.is_cancelled());
        assert!(!session.delivery_token().is_cancelled());
    }

    #[test]
    fn reset_and_forget_cancel_outstanding_deliveries() {
        let mut session = developer_session();
        let token = session.delivery_token();
        session.reset().unwrap();
        assert!(token.is_cancelled());

        let token = session.delivery_token();
        session.forget();
        assert!(token.is_cancelled());
        assert!(!session.delivery_token().is_cancelled());
    }

    #[test]
    fn reset_reseeds_welcome() {
        let mut session = developer_session();
        session.push_user("hi").unwrap();
        session.reset().unwrap();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.suggestions().len(), 3);
    }

    #[test]
    fn escalation_has_three_options() {
        assert_eq!(ChatSession::new().escalation_options().len(), 3);
    }
}
