//! Terminal layout for assistant answers.

use std::fmt::Write as _;

use docent_core::entities::{ChatMessage, MockResponse};
use docent_core::enums::{BookingState, MessageRole, TrustBadge};
use docent_match::content::{Segment, segment};

/// Badges, body and footer in one block.
#[must_use]
pub fn render_answer(response: &MockResponse) -> String {
    let mut out = String::new();
    let badges = render_badges(&response.trust_badges);
    if !badges.is_empty() {
        out.push_str(&badges);
        out.push_str("\n\n");
    }
    out.push_str(&render_body(&response.content));
    let footer = render_footer(response);
    if !footer.is_empty() {
        out.push_str("\n\n");
        out.push_str(&footer);
    }
    out
}

/// `[Official Rule] [Best Practice]`, or empty.
#[must_use]
pub fn render_badges(badges: &[TrustBadge]) -> String {
    badges
        .iter()
        .map(|badge| format!("[{}]", badge.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Answer body without badge placeholders. Code blocks are indented under a
/// language rule.
#[must_use]
pub fn render_body(content: &str) -> String {
    let mut out = String::new();
    for part in segment(content) {
        match part {
            Segment::Text(text) => out.push_str(text.trim_matches('\n')),
            Segment::Code { language, code } => {
                if !out.is_empty() {
                    out.push_str("\n\n");
                }
                let _ = writeln!(out, "── {language}");
                for line in code.lines() {
                    let _ = writeln!(out, "    {line}");
                }
                out.push('\n');
            }
        }
    }
    out.trim_end().to_string()
}

/// Preview, recording hint and sources.
#[must_use]
pub fn render_footer(response: &MockResponse) -> String {
    let mut lines = Vec::new();
    if let Some(preview) = response.component_preview {
        lines.push(format!("Preview: {preview}"));
    }
    if response.suggest_video_answer {
        lines.push("Tip: record a short video answer with /record".to_string());
    }
    if !response.sources.is_empty() {
        lines.push("Sources:".to_string());
        lines.extend(
            response
                .sources
                .iter()
                .map(|source| format!("  - {} ({}) {}", source.title, source.kind, source.url)),
        );
    }
    lines.join("\n")
}

/// One history entry: speaker, time, then the answer block for assistants.
#[must_use]
pub fn render_message(message: &ChatMessage) -> String {
    let stamp = message.timestamp.format("%b %-d %H:%M");
    match (message.role, &message.meta) {
        (MessageRole::User, _) => format!("you ({stamp})\n{}", message.content),
        (MessageRole::Assistant, None) => {
            format!("docent ({stamp})\n{}", render_body(&message.content))
        }
        (MessageRole::Assistant, Some(meta)) => {
            let response = MockResponse {
                content: message.content.clone(),
                sources: meta.sources.clone(),
                trust_badges: meta.trust_badges.clone(),
                component_preview: meta.component_preview,
                suggest_video_answer: meta.suggest_video_answer,
            };
            let mut out = format!("docent ({stamp})\n{}", render_answer(&response));
            if meta.booking == Some(BookingState::Requested) {
                out.push_str("\nOffice hours: requested");
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use docent_core::entities::Source;
    use docent_core::enums::{ComponentPreview, SourceType};

    use super::*;

    #[test]
    fn user_message_shows_speaker() {
        let message = ChatMessage {
            id: "msg-00000001".into(),
            role: MessageRole::User,
            content: "What are the button props?".into(),
            timestamp: chrono::Utc::now(),
            meta: None,
        };
        let out = render_message(&message);
        assert!(out.starts_with("you ("));
        assert!(out.ends_with("What are the button props?"));
    }

    #[test]
    fn badges_render_with_labels() {
        assert_eq!(
            render_badges(&[TrustBadge::Official, TrustBadge::Flexible]),
            "[Official Rule] [Flexible]"
        );
        assert_eq!(render_badges(&[]), "");
    }

    #[test]
    fn body_drops_placeholders_and_indents_code() {
        let body = render_body("Use the prop. [Official Rule]\n\n```tsx\n<Button kind=\"primary\" />\n```\nDone.");
        assert!(!body.contains("[Official Rule]"));
        assert!(body.contains("── tsx\n    <Button kind=\"primary\" />"));
        assert!(body.ends_with("Done."));
    }

    #[test]
    fn answer_lists_sources_and_preview() {
        let response = MockResponse::new("Body")
            .with_badges(&[TrustBadge::BestPractice])
            .with_sources(vec![Source::new(
                SourceType::Storybook,
                "Button",
                "https://react.carbondesignsystem.com",
            )])
            .with_preview(ComponentPreview::Button);

        let out = render_answer(&response);
        assert!(out.starts_with("[Best Practice]\n\nBody"));
        assert!(out.contains("Preview: button"));
        assert!(out.contains("  - Button (storybook) https://react.carbondesignsystem.com"));
    }
}
