//! Serde roundtrip and JsonSchema validation tests for entity types.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use docent_core::entities::*;
use docent_core::enums::*;
use docent_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn question() -> DesignerQuestion {
    DesignerQuestion {
        id: "q1".into(),
        question: "Should I use a Drawer or Modal for a multi-step onboarding flow?".into(),
        component: vec!["Drawer".into(), "Modal".into()],
        context: "onboarding".into(),
        platform: Platform::Desktop,
        timestamp: Utc.with_ymd_and_hms(2026, 2, 7, 9, 15, 0).unwrap(),
        designer: "Sarah Chen".into(),
        team: "Growth".into(),
    }
}

fn docs_source() -> Source {
    Source::new(
        SourceType::Documentation,
        "Carbon Design System",
        "https://carbondesignsystem.com",
    )
}

roundtrip_and_validate!(designer_question_roundtrip, DesignerQuestion, question());

roundtrip_and_validate!(
    cluster_roundtrip,
    QuestionCluster,
    QuestionCluster {
        id: "cluster-0".into(),
        topic: "Drawer usage for multi-step flows".into(),
        component: vec!["Drawer".into(), "Modal".into()],
        questions: vec![question()],
        frequency: 1,
        trend: Trend::New,
        contexts: vec!["onboarding".into()],
        last_asked: question().timestamp,
        first_asked: question().timestamp,
    }
);

roundtrip_and_validate!(
    mock_response_roundtrip,
    MockResponse,
    MockResponse::new("Use `$spacing-05` for card padding. [Best Practice]")
        .with_sources(vec![docs_source()])
        .with_badges(&[TrustBadge::Official, TrustBadge::BestPractice])
        .with_preview(ComponentPreview::Button)
);

roundtrip_and_validate!(
    chat_message_roundtrip,
    ChatMessage,
    ChatMessage {
        id: "msg-deadbeef".into(),
        role: MessageRole::Assistant,
        content: "Hello".into(),
        timestamp: Utc::now(),
        meta: Some(MessageMeta {
            sources: vec![docs_source()],
            trust_badges: vec![TrustBadge::Flexible],
            suggested_questions: vec!["What spacing token should I use?".into()],
            booking: Some(BookingState::Available),
            component_preview: None,
            suggest_video_answer: false,
        }),
    }
);

roundtrip_and_validate!(
    user_message_roundtrip,
    ChatMessage,
    ChatMessage {
        id: "msg-00000001".into(),
        role: MessageRole::User,
        content: "What are the button props?".into(),
        timestamp: Utc::now(),
        meta: None,
    }
);

roundtrip_and_validate!(
    audit_response_roundtrip,
    AuditResponse,
    AuditResponse {
        file: "screen.png".into(),
        role: Some(Role::Designer),
        report: AuditReport {
            score: 75,
            issues: vec![AuditIssue {
                severity: IssueSeverity::Error,
                message: "Border radius detected: 8px".into(),
                suggestion: "Use square corners.".into(),
            }],
        },
    }
);

roundtrip_and_validate!(
    health_response_roundtrip,
    HealthResponse,
    HealthResponse {
        summary: HealthSummary {
            components_tracked: 1,
            needs_attention: 1,
            warnings: 0,
        },
        components: vec![ComponentStats {
            name: "Drawer".into(),
            question_count: 9,
            unique_designers: 7,
            contexts: vec!["onboarding".into(), "general".into()],
            trend: HealthTrend::Increasing,
            status: HealthStatus::NeedsAttention,
        }],
    }
);

roundtrip_and_validate!(
    trends_response_roundtrip,
    TrendsResponse,
    TrendsResponse {
        insights: vec![PatternInsight {
            id: "i5".into(),
            pattern: "Toggle vs Checkbox confusion".into(),
            description: "Recurring questions.".into(),
            impact: Impact::Low,
            recommendation: "Update component documentation.".into(),
            affected_teams: vec!["Core".into()],
            related_components: vec!["Toggle".into(), "Checkbox".into()],
        }],
        weekly: vec![TrendPoint {
            date: "Feb 1".into(),
            count: 2,
        }],
        total_questions: 2,
        average_per_day: "2.0".into(),
    }
);

#[test]
fn source_serializes_kind_as_type() {
    let json = serde_json::to_value(docs_source()).unwrap();
    assert_eq!(json["type"], "documentation");
    assert!(json.get("kind").is_none());
}

#[test]
fn mock_response_defaults_missing_fields() {
    let response: MockResponse = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
    assert!(response.sources.is_empty());
    assert!(response.trust_badges.is_empty());
    assert!(!response.suggest_video_answer);
}

roundtrip_and_validate!(
    sources_response_roundtrip,
    SourcesResponse,
    SourcesResponse {
        role: Some(Role::Developer),
        sources: vec![KnowledgeSource {
            id: "carbon-storybook".into(),
            label: "Carbon Storybook".into(),
            kind: SourceType::Storybook,
            base_url: "https://react.carbondesignsystem.com".into(),
            description: "Interactive component examples".into(),
        }],
    }
);

roundtrip_and_validate!(
    welcome_response_roundtrip,
    WelcomeResponse,
    WelcomeResponse {
        role: Role::Guardian,
        welcome: WelcomeMessage {
            text: "Welcome back.".into(),
            suggested_questions: vec!["Show me this week's question clusters".into()],
        },
    }
);
