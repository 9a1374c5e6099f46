//! End-to-end behaviour of the built-in catalog and persona chains

use std::sync::Arc;

use deskmate_agent::{
    cs_manager_conversation, ConversationRegistry, DialogueSession, Matcher, PersonaRouter,
    RuleChain, ScoredTriggerMatcher,
};
use deskmate_agent::rules::{contains, contains_any};
use deskmate_core::{ConversationEntry, PersonaId, QueryMatch, WidgetType};

fn scored() -> ScoredTriggerMatcher {
    ScoredTriggerMatcher::new(Arc::new(cs_manager_conversation()))
}

#[test]
fn test_exact_phrase_for_executive() {
    let router = PersonaRouter::builtin();
    let hit = router
        .detect("Show me SLA performance breakdown", PersonaId::CLevel)
        .unwrap();
    assert_eq!(hit.widget_type(), Some(WidgetType::SlaPerformanceChart));
    assert!(hit.response_text.ends_with("[v2]"));
}

#[test]
fn test_yes_check_availability() {
    let m = scored();
    let entry = m.best_match("Yes, check availability").unwrap();
    assert_eq!(entry.id, "q2-check-availability");
    assert_eq!(entry.widget_type(), Some(WidgetType::MeetingScheduler));
}

#[test]
fn test_schedule_one_on_one_beats_booking() {
    let m = scored();
    let query = "Schedule a 1-on-1 coaching session with Marcus";

    let candidates = m.explain(query);
    let ids: Vec<&str> = candidates.iter().map(|c| c.entry.id.as_str()).collect();
    assert_eq!(ids, vec!["q1-schedule-1on1", "q3-book-meeting"]);
    assert!(candidates[0].score > candidates[1].score);
    assert_eq!(candidates[1].score, 18);

    let entry = m.best_match(query).unwrap();
    assert_eq!(entry.id, "q1-schedule-1on1");
    assert!(entry.widget.is_none());
}

#[test]
fn test_weather_has_no_answer() {
    let router = PersonaRouter::builtin();
    assert!(router
        .detect("What's the weather today?", PersonaId::SupportAgent)
        .is_none());
}

#[test]
fn test_team_status_for_manager() {
    let router = PersonaRouter::builtin();
    let hit = router.detect("team status", PersonaId::CsManager).unwrap();
    assert_eq!(hit.widget_type(), Some(WidgetType::TeamWorkloadDashboard));
}

#[test]
fn test_determinism() {
    let router = PersonaRouter::builtin();
    let m = scored();
    for query in [
        "Show me the SLA performance breakdown",
        "Which categories are we failing",
        "critical tickets",
        "team status",
        "nothing here",
    ] {
        for persona in PersonaId::ALL {
            assert_eq!(router.detect(query, persona), router.detect(query, persona));
        }
        assert_eq!(m.find(query), m.find(query));
    }
}

#[test]
fn test_case_and_whitespace() {
    let router = PersonaRouter::builtin();
    let m = scored();
    let messy = "  Show Me SLA Performance Breakdown  ";
    let clean = "show me sla performance breakdown";

    assert_eq!(m.find(messy), m.find(clean));
    assert_eq!(
        m.best_match(clean).map(|e| e.id.as_str()),
        Some("q9-sla-performance")
    );
    for persona in PersonaId::ALL {
        assert_eq!(router.detect(messy, persona), router.detect(clean, persona));
    }
}

#[test]
fn test_superset_entry_dominates() {
    let registry = ConversationRegistry::new(vec![
        ConversationEntry::new("narrow", &["risk"], "", "narrow"),
        ConversationEntry::new("wide", &["risk", "customer risk"], "", "wide"),
    ]);
    let m = ScoredTriggerMatcher::new(Arc::new(registry));
    let scores = m.explain("customer risk");
    assert!(scores[1].score > scores[0].score);
    assert_eq!(m.best_match("customer risk").unwrap().id, "wide");
}

#[test]
fn test_equal_scores_keep_declaration_order() {
    let registry = ConversationRegistry::new(vec![
        ConversationEntry::new("earlier", &["alpha"], "", "earlier"),
        ConversationEntry::new("later", &["gamma"], "", "later"),
    ]);
    let m = ScoredTriggerMatcher::new(Arc::new(registry));
    for _ in 0..10 {
        assert_eq!(m.best_match("gamma alpha").unwrap().id, "earlier");
    }
}

#[test]
fn test_earlier_rule_wins() {
    let chain = RuleChain::new("test")
        .rule("first", contains("tickets"), QueryMatch::text("first"))
        .rule(
            "second",
            contains_any(&["my tickets", "tickets"]),
            QueryMatch::text("second"),
        );
    assert_eq!(chain.fired("my tickets"), vec!["first", "second"]);
    assert_eq!(chain.detect("my tickets").unwrap().response_text, "first");

    // Same overlap in a built-in chain
    let router = PersonaRouter::builtin();
    let manager = router.route(PersonaId::CsManager);
    assert_eq!(
        manager.fired("show me my team tickets"),
        vec!["team-workload", "agent-tickets"]
    );
}

#[test]
fn test_exact_phrase_beats_rules() {
    let router = PersonaRouter::builtin();
    let chain = router.route(PersonaId::CLevel);
    let query = "which categories are we failing";

    // The failing-categories rule fires too, with a different reply
    assert!(chain.fired(query).contains(&"sla-failing-categories"));
    let hit = chain.detect(query).unwrap();
    assert!(hit.response_text.ends_with("[v2]"));
}

#[test]
fn test_personas_are_isolated() {
    let router = PersonaRouter::builtin();
    let query = "Good morning";
    assert_eq!(
        router
            .detect(query, PersonaId::SupportAgent)
            .and_then(|m| m.widget_type()),
        Some(WidgetType::AgentDashboard)
    );
    assert!(router.detect(query, PersonaId::CsManager).is_none());
    assert!(router.detect(query, PersonaId::CLevel).is_none());
}

#[test]
fn test_no_match_is_none() {
    let router = PersonaRouter::builtin();
    let m = scored();
    for query in ["", "   ", "zzz", "What's the weather today?", "🙂"] {
        for persona in PersonaId::ALL {
            assert!(router.detect(query, persona).is_none(), "{query} / {persona}");
        }
    }
    for query in ["", "   ", "zzz", "🙂"] {
        assert!(m.find(query).is_none(), "{query}");
    }
    assert!(router.detect_raw("team status", "unknown").is_none());
}

#[test]
fn test_scripted_booking_flow() {
    let session = DialogueSession::new(Arc::new(cs_manager_conversation()));

    let q1 = session
        .respond("Schedule a 1-on-1 coaching session with Marcus")
        .unwrap();
    assert!(q1.response_text.ends_with("for availability?"));

    let q2 = session.respond("Yes").unwrap();
    assert_eq!(q2.widget_type(), Some(WidgetType::MeetingScheduler));

    let q3 = session.respond("Book the tomorrow at 1pm slot.").unwrap();
    assert_eq!(q3.widget_type(), Some(WidgetType::MeetingConfirmation));
    assert_eq!(q3.widget_payload().unwrap()["meetingTime"], "1:00 PM");
}

#[test]
fn test_matchers_share_one_contract() {
    let router = Arc::new(PersonaRouter::builtin());
    let matchers: Vec<Box<dyn Matcher>> = vec![
        Box::new(scored()),
        Box::new(router.bind(PersonaId::CLevel)),
        Box::new(DialogueSession::new(Arc::new(cs_manager_conversation()))),
    ];
    for matcher in &matchers {
        assert!(matcher.find("What's the weather today?").is_none(), "{}", matcher.name());
    }
}
