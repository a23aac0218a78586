//! End-to-end answer selection across roles.

use docent_core::enums::{ComponentPreview, Role, TrustBadge};
use docent_match::content::{Segment, badges_in, segment};
use docent_match::{hub_respond, match_response, respond, table_for};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn button_props_question_gets_button_entry_for_developers() {
    let table = table_for(Role::Developer);
    let response = match_response("What are the button props?", table);

    assert_eq!(response, table.entries()[0].response());
    assert!(table.entries()[0].keywords().iter().any(|k| k == "button"));
    assert_eq!(
        response.trust_badges,
        vec![TrustBadge::Official, TrustBadge::BestPractice]
    );
}

#[test]
fn overlapping_token_keyword_resolves_to_first_designer_entry() {
    let spacing = table_for(Role::Designer).entries()[0].response();
    assert_eq!(&respond("which token for notification colors", Role::Designer), spacing);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("¿qué?")]
#[case("🙂")]
fn odd_inputs_never_fail(#[case] query: &str) {
    for role in Role::ALL {
        let response = respond(query, role);
        assert!(!response.content.is_empty());
    }
}

#[test]
fn catalog_badges_match_inline_placeholders() {
    for role in Role::ALL {
        let table = table_for(role);
        let responses = table
            .entries()
            .iter()
            .map(|entry| entry.response())
            .chain(std::iter::once(table.fallback()));
        for response in responses {
            let mut inline = badges_in(&response.content);
            let mut declared = response.trust_badges.clone();
            inline.sort_by_key(|b| b.as_str());
            declared.sort_by_key(|b| b.as_str());
            let head: String = response.content.chars().take(40).collect();
            assert_eq!(inline, declared, "{role}: {head}");
        }
    }
}

#[test]
fn developer_button_answer_renders_two_code_blocks() {
    let response = respond("Show me the Button component variants", Role::Developer);
    let code: Vec<_> = segment(&response.content)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Code { language, .. } => Some(language),
            Segment::Text(_) => None,
        })
        .collect();
    assert_eq!(code, ["jsx", "jsx"]);
}

#[test]
fn hub_previews_follow_keys() {
    assert_eq!(
        hub_respond("What are the specs for a DataTable?", Role::Designer).component_preview,
        Some(ComponentPreview::Datatable)
    );
    assert_eq!(
        hub_respond("Show me the Button component props", Role::Developer).component_preview,
        Some(ComponentPreview::Button)
    );
}
