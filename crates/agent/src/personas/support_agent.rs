//! Support agent persona

use once_cell::sync::Lazy;
use regex::Regex;

use deskmate_core::widgets::demo;
use deskmate_core::QueryMatch;

use crate::rules::{all, any, contains, contains_any, has_number, not, pattern, RuleChain};

/// Article ids such as "kb-1042" or "kb1042" (ASCII digits only)
static KB_ARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"kb-?[0-9]+").expect("valid article pattern"));

pub fn support_agent() -> RuleChain {
    RuleChain::new("support-agent")
        .rule(
            "daily-overview",
            any([
                contains_any(&["what's on my plate", "my plate today"]),
                all([contains("good morning"), not(contains("summary"))]),
            ]),
            QueryMatch::with_widget(
                "Good morning! Here's what's on your plate today:",
                demo::agent_dashboard(),
            ),
        )
        .rule(
            "ticket-detail",
            any([
                contains_any(&["ticket #", "ticket number"]),
                all([contains("show me ticket"), has_number()]),
                all([contains("details"), has_number()]),
            ]),
            QueryMatch::with_widget(
                "Here are the complete details for this ticket:",
                demo::ticket_detail(),
            ),
        )
        .rule(
            "call-prep",
            any([
                all([contains("prepare for"), contains("call")]),
                contains_any(&["draft prep notes", "call preparation", "help me prepare"]),
            ]),
            QueryMatch::with_widget(
                "I've prepared comprehensive notes for your upcoming call:",
                demo::call_prep_notes(),
            ),
        )
        .rule(
            "response-draft",
            contains_any(&[
                "draft response",
                "draft a response",
                "help me respond",
                "compose response",
            ]),
            QueryMatch::with_widget(
                "I've drafted a response for you to review:",
                demo::response_composer(),
            ),
        )
        .rule(
            "own-tickets",
            any([
                contains_any(&["my tickets", "tickets that need attention"]),
                all([contains("show me"), contains("other tickets")]),
            ]),
            QueryMatch::with_widget("Here are your current tickets:", demo::ticket_list()),
        )
        .rule(
            "similar-tickets",
            any([
                contains_any(&["similar tickets", "learn the patterns"]),
                all([contains("tickets i"), contains("resolved")]),
            ]),
            QueryMatch::with_widget(
                "Here are patterns from similar tickets you've successfully resolved:",
                demo::similar_tickets_analysis(),
            ),
        )
        .rule(
            "performance-stats",
            any([
                contains_any(&["performance stats", "my stats", "my performance"]),
                all([contains("show me"), contains("stats")]),
            ]),
            QueryMatch::with_widget(
                "Here's your performance summary for this week:",
                demo::agent_performance_stats(),
            ),
        )
        .rule(
            "knowledge-search",
            contains_any(&[
                "how do i troubleshoot",
                "how to",
                "how can i",
                "search kb",
                "knowledge base",
            ]),
            QueryMatch::with_widget(
                "I've searched the knowledge base for you:",
                demo::knowledge_base_search(),
            ),
        )
        .rule(
            "knowledge-article",
            any([contains("open kb"), pattern(&KB_ARTICLE)]),
            QueryMatch::with_widget(
                "Here's the knowledge base article:",
                demo::knowledge_article(),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskmate_core::WidgetType;

    fn widget(query: &str) -> Option<WidgetType> {
        support_agent().detect(query).and_then(|m| m.widget_type())
    }

    #[test]
    fn test_good_morning_without_summary() {
        assert_eq!(widget("Good morning!"), Some(WidgetType::AgentDashboard));
        assert!(support_agent().detect("good morning summary").is_none());
    }

    #[test]
    fn test_ticket_detail_needs_number() {
        assert_eq!(widget("Show me ticket 4521"), Some(WidgetType::TicketDetail));
        assert_eq!(widget("details on 4521 please"), Some(WidgetType::TicketDetail));
        assert_eq!(widget("ticket #4521"), Some(WidgetType::TicketDetail));
        assert!(support_agent().detect("ticket details").is_none());
    }

    #[test]
    fn test_call_prep_precedence() {
        // "prepare for" and "call" together, or any single phrase
        assert_eq!(widget("Prepare for my call with Acme"), Some(WidgetType::CallPrepNotes));
        assert_eq!(widget("help me prepare"), Some(WidgetType::CallPrepNotes));
        assert!(support_agent().detect("prepare for lunch").is_none());
    }

    #[test]
    fn test_drafts_and_lists() {
        assert_eq!(widget("Draft a response to Jordan"), Some(WidgetType::ResponseComposer));
        assert_eq!(widget("What are my tickets?"), Some(WidgetType::TicketList));
        assert_eq!(
            widget("Show me similar tickets"),
            Some(WidgetType::SimilarTicketsAnalysis)
        );
        assert_eq!(widget("show me my stats"), Some(WidgetType::AgentPerformanceStats));
    }

    #[test]
    fn test_knowledge_base() {
        assert_eq!(
            widget("How do I troubleshoot SSO?"),
            Some(WidgetType::KnowledgeBaseSearch)
        );
        assert_eq!(widget("Open KB-1042"), Some(WidgetType::KnowledgeArticle));
        assert_eq!(widget("pull up kb1042"), Some(WidgetType::KnowledgeArticle));
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        assert!(support_agent().detect("details ४").is_none());
        assert!(support_agent().detect("kb-٣").is_none());
        assert_eq!(widget("details 4"), Some(WidgetType::TicketDetail));
    }

    #[test]
    fn test_unrelated() {
        assert!(support_agent().detect("What's the weather today?").is_none());
    }
}
