//! # docent-session
//!
//! State for one interactive chat: the selected role, the ordered message
//! history and its best-effort persistence, plus the timed delivery of answers
//! and the guardian's recorded-answer flow.
//!
//! There is no process-wide session. Callers own a [`ChatSession`] and pass
//! it where it is needed.

pub mod error;
pub mod recorder;
pub mod responder;
pub mod session;
pub mod store;

pub use error::SessionError;
pub use recorder::{Recorder, format_time};
pub use responder::{AnswerSet, Delivery, Responder};
pub use session::ChatSession;
pub use store::HistoryStore;
