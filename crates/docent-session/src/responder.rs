//! Timed answer delivery.
//!
//! An answer appears after a short "thinking" delay and is then revealed
//! progressively. Both phases watch a [`CancellationToken`]: a role switch,
//! reset or quit cancels the token and nothing further is delivered.

use std::time::Duration;

use docent_config::ChatConfig;
use docent_core::entities::MockResponse;
use docent_core::enums::Role;
use docent_match::{hub_respond, respond};
use tokio_util::sync::CancellationToken;

/// Outcome of a delayed answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Completed(MockResponse),
    Cancelled,
}

/// Which answer set a responder draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerSet {
    /// Per-role keyword tables.
    #[default]
    Catalog,
    /// Component-keyed hub answers.
    Hub,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responder {
    typing_delay: Duration,
    stream_duration: Duration,
    min_tick: Duration,
    answers: AnswerSet,
}

impl Responder {
    #[must_use]
    pub const fn new(typing_delay: Duration, stream_duration: Duration, min_tick: Duration) -> Self {
        Self {
            typing_delay,
            stream_duration,
            min_tick,
            answers: AnswerSet::Catalog,
        }
    }

    #[must_use]
    pub const fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.typing_delay(), config.stream_duration(), config.min_tick())
    }

    #[must_use]
    pub const fn with_answers(mut self, answers: AnswerSet) -> Self {
        self.answers = answers;
        self
    }

    #[must_use]
    pub const fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    /// Select the answer immediately, without any delay.
    #[must_use]
    pub fn answer(&self, query: &str, role: Role) -> MockResponse {
        match self.answers {
            AnswerSet::Catalog => respond(query, role),
            AnswerSet::Hub => hub_respond(query, role),
        }
    }

    /// Wait out the thinking delay, then select the answer. Cancelling the
    /// token during the wait yields [`Delivery::Cancelled`].
    pub async fn respond(&self, query: &str, role: Role, token: &CancellationToken) -> Delivery {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!(%role, "delivery cancelled while thinking");
                Delivery::Cancelled
            }
            () = tokio::time::sleep(self.typing_delay) => {
                Delivery::Completed(self.answer(query, role))
            }
        }
    }

    /// Per-character reveal interval: the stream duration spread across the
    /// characters, but never shorter than the minimum tick.
    #[must_use]
    pub fn tick_for(&self, char_count: usize) -> Duration {
        let chars = u32::try_from(char_count).unwrap_or(u32::MAX).max(1);
        (self.stream_duration / chars).max(self.min_tick)
    }

    /// Reveal `content` one character per tick, handing each growing prefix
    /// to `on_progress`. Returns `false` if the token was cancelled before
    /// the last character.
    pub async fn stream<F>(&self, content: &str, token: &CancellationToken, mut on_progress: F) -> bool
    where
        F: FnMut(&str),
    {
        let tick = self.tick_for(content.chars().count());
        let ends = content
            .char_indices()
            .map(|(start, c)| start + c.len_utf8());

        for end in ends {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::debug!(revealed = end, "stream cancelled");
                    return false;
                }
                () = tokio::time::sleep(tick) => on_progress(&content[..end]),
            }
        }
        true
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn responder() -> Responder {
        Responder::new(
            Duration::from_millis(1200),
            Duration::from_millis(1500),
            Duration::from_millis(20),
        )
    }

    #[test]
    fn tick_spreads_duration_with_floor() {
        let r = responder();
        assert_eq!(r.tick_for(15), Duration::from_millis(100));
        assert_eq!(r.tick_for(1000), Duration::from_millis(20));
        assert_eq!(r.tick_for(0), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_typing_delay() {
        let token = CancellationToken::new();
        let started = tokio::time::Instant::now();
        let delivery = responder()
            .respond("What are the button props?", Role::Developer, &token)
            .await;
        assert!(started.elapsed() >= Duration::from_millis(1200));
        match delivery {
            Delivery::Completed(response) => assert!(response.content.contains("Button")),
            Delivery::Cancelled => panic!("delivery should complete"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_while_thinking() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            canceller.cancel();
        });
        let delivery = responder().respond("btn", Role::Developer, &token).await;
        assert_eq!(delivery, Delivery::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn stream_reveals_every_prefix() {
        let token = CancellationToken::new();
        let mut seen = Vec::new();
        let done = responder()
            .stream("héllo", &token, |prefix| seen.push(prefix.to_string()))
            .await;
        assert!(done);
        assert_eq!(seen, ["h", "hé", "hél", "héll", "héllo"]);
    }

    #[tokio::test(start_paused = true)]
    async fn stream_stops_on_cancel() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        let mut seen = 0;
        // 10 chars over 1500 ms: 150 ms per tick; cancel after the third.
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(475)).await;
            canceller.cancel();
        });
        let done = responder()
            .stream("0123456789", &token, |_| seen += 1)
            .await;
        assert!(!done);
        assert_eq!(seen, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn hub_answers_flag_video_for_guardians() {
        let token = CancellationToken::new();
        let responder = responder().with_answers(AnswerSet::Hub);
        let Delivery::Completed(response) = responder
            .respond("DataTable specs", Role::Guardian, &token)
            .await
        else {
            panic!("delivery should complete");
        };
        assert!(response.suggest_video_answer);
    }
}
