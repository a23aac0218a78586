//! Presentation prep for answer bodies.
//!
//! Canned content embeds badge placeholders such as `[Best Practice]` inline.
//! Renderers show badges separately, so the placeholders are stripped and the
//! body is split into prose and fenced code segments.

use std::sync::LazyLock;

use docent_core::enums::TrustBadge;
use regex::Regex;

const BADGES: [TrustBadge; 3] = [
    TrustBadge::Official,
    TrustBadge::BestPractice,
    TrustBadge::Flexible,
];

/// One pattern per badge, swallowing the whitespace on both sides.
static PLACEHOLDERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BADGES
        .iter()
        .map(|badge| {
            let pattern = format!(r"\s*\[{}\]\s*", regex::escape(badge.label()));
            Regex::new(&pattern).expect("badge placeholder pattern is valid")
        })
        .collect()
});

static ANY_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(Official Rule|Best Practice|Flexible)\]")
        .expect("badge label pattern is valid")
});

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([0-9A-Za-z_]*)\n(.*?)```").expect("code fence pattern is valid")
});

/// A renderable slice of an answer body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Code { language: String, code: String },
}

/// Remove inline badge placeholders. Each placeholder and the whitespace
/// around it becomes a single space, one badge kind at a time, and the result
/// is trimmed.
#[must_use]
pub fn strip_badges(text: &str) -> String {
    PLACEHOLDERS
        .iter()
        .fold(text.to_string(), |body, placeholder| {
            placeholder.replace_all(&body, " ").into_owned()
        })
        .trim()
        .to_string()
}

/// Badges whose placeholders appear in `text`, in first-seen order.
#[must_use]
pub fn badges_in(text: &str) -> Vec<TrustBadge> {
    let mut found = Vec::new();
    for captures in ANY_PLACEHOLDER.captures_iter(text) {
        if let Some(badge) = TrustBadge::from_label(&captures[1]) {
            if !found.contains(&badge) {
                found.push(badge);
            }
        }
    }
    found
}

/// Strip placeholders and split the body into text and code segments.
///
/// A fence opens with three backticks, an optional word-character language
/// tag, and a newline; it closes at the next three backticks. Code is trimmed
/// and an untagged fence gets the language `text`.
#[must_use]
pub fn segment(content: &str) -> Vec<Segment> {
    let body = strip_badges(content);
    let mut segments = Vec::new();
    let mut last_end = 0;

    for captures in CODE_FENCE.captures_iter(&body) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if whole.start() > last_end {
            segments.push(Segment::Text(body[last_end..whole.start()].to_string()));
        }
        let language = match &captures[1] {
            "" => "text",
            tag => tag,
        };
        segments.push(Segment::Code {
            language: language.to_string(),
            code: captures[2].trim().to_string(),
        });
        last_end = whole.end();
    }

    if last_end < body.len() || segments.is_empty() {
        segments.push(Segment::Text(body[last_end..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_placeholders_and_collapses_whitespace() {
        assert_eq!(
            strip_badges("**Key props:** [Official Rule]\n- `kind`"),
            "**Key props:** - `kind`"
        );
        assert_eq!(strip_badges("Try this. [Flexible]"), "Try this.");
        assert_eq!(strip_badges("[Best Practice] Use tokens"), "Use tokens");
    }

    #[test]
    fn adjacent_placeholders_leave_one_space() {
        assert_eq!(strip_badges("a [Official Rule] [Flexible] b"), "a b");
    }

    #[test]
    fn leaves_unknown_brackets_alone() {
        assert_eq!(strip_badges("see [docs] here"), "see [docs] here");
    }

    #[test]
    fn collects_badges_in_order_without_duplicates() {
        let text = "[Best Practice] a [Official Rule] b [Best Practice]";
        assert_eq!(
            badges_in(text),
            vec![TrustBadge::BestPractice, TrustBadge::Official]
        );
        assert!(badges_in("plain").is_empty());
    }

    #[test]
    fn splits_code_fences() {
        let segments = segment("Import:\n```jsx\nimport { Button } from '@carbon/react';\n```\nDone.");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Import:\n".into()),
                Segment::Code {
                    language: "jsx".into(),
                    code: "import { Button } from '@carbon/react';".into(),
                },
                Segment::Text("\nDone.".into()),
            ]
        );
    }

    #[test]
    fn untagged_fence_defaults_to_text() {
        let segments = segment("```\nplain\n```");
        assert_eq!(
            segments,
            vec![Segment::Code {
                language: "text".into(),
                code: "plain".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_stays_text() {
        let segments = segment("```jsx\nno close");
        assert_eq!(segments, vec![Segment::Text("```jsx\nno close".into())]);
    }

    #[test]
    fn empty_body_is_one_empty_text_segment() {
        assert_eq!(segment("  [Flexible] "), vec![Segment::Text(String::new())]);
    }
}
