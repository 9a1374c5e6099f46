//! CS manager persona

use deskmate_core::widgets::demo;
use deskmate_core::QueryMatch;

use crate::rules::{all, any, contains, contains_any, RuleChain};

pub fn cs_manager() -> RuleChain {
    RuleChain::new("cs-manager")
        .rule(
            "team-workload",
            any([
                contains_any(&["team's status", "team status", "show me my team"]),
                all([contains("good morning"), contains("team")]),
            ]),
            QueryMatch::with_widget(
                "Here's your team's current workload status:",
                demo::team_workload_dashboard(),
            ),
        )
        .rule(
            "agent-performance",
            any([
                contains_any(&[
                    "top and bottom performers",
                    "performance comparison",
                    "top performers",
                    "bottom performers",
                ]),
                all([contains("show me"), contains("performers")]),
            ]),
            QueryMatch::with_widget(
                "Here's the agent performance comparison for this week:",
                demo::agent_performance_comparison(),
            ),
        )
        .rule(
            "customer-risk-list",
            any([
                contains_any(&["high-risk customers", "at-risk customers"]),
                all([contains("show me all"), contains("risk")]),
            ]),
            QueryMatch::with_widget(
                "Here's the list of all high-risk customers requiring attention:",
                demo::customer_risk_list(),
            ),
        )
        .rule(
            "agent-tickets",
            any([
                all([contains("show me"), contains("tickets")]),
                contains_any(&["his tickets", "her tickets"]),
            ]),
            QueryMatch::with_widget("Here are the agent's current tickets:", demo::ticket_list()),
        )
        .rule(
            "one-on-one",
            all([contains("schedule"), contains_any(&["1-on-1", "coaching"])]),
            QueryMatch::with_widget(
                "Here are available time slots for the 1-on-1 meeting:",
                demo::meeting_scheduler(),
            ),
        )
        .rule(
            "customer-message",
            any([
                contains_any(&["draft message", "compose message", "write email"]),
                all([contains("message"), contains("customer")]),
            ]),
            QueryMatch::with_widget(
                "I've drafted a message for you to review:",
                demo::message_composer(),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskmate_core::WidgetType;

    fn widget(query: &str) -> Option<WidgetType> {
        cs_manager().detect(query).and_then(|m| m.widget_type())
    }

    #[test]
    fn test_team_status() {
        assert_eq!(widget("team status"), Some(WidgetType::TeamWorkloadDashboard));
        assert_eq!(widget("What's my team's status?"), Some(WidgetType::TeamWorkloadDashboard));
        assert_eq!(widget("Good morning! How's the team?"), Some(WidgetType::TeamWorkloadDashboard));
    }

    #[test]
    fn test_show_me_my_team_tickets_is_workload() {
        // Both the workload and the ticket rule fire; workload is declared first
        let chain = cs_manager();
        assert_eq!(
            chain.fired("show me my team tickets"),
            vec!["team-workload", "agent-tickets"]
        );
        assert_eq!(
            widget("show me my team tickets"),
            Some(WidgetType::TeamWorkloadDashboard)
        );
    }

    #[test]
    fn test_performers() {
        assert_eq!(
            widget("Who are my top and bottom performers?"),
            Some(WidgetType::AgentPerformanceComparison)
        );
        assert_eq!(widget("show me performers"), Some(WidgetType::AgentPerformanceComparison));
    }

    #[test]
    fn test_risk_list_and_tickets() {
        assert_eq!(widget("List at-risk customers"), Some(WidgetType::CustomerRiskList));
        assert_eq!(widget("show me all accounts at risk"), Some(WidgetType::CustomerRiskList));
        assert_eq!(widget("Pull up his tickets"), Some(WidgetType::TicketList));
    }

    #[test]
    fn test_one_on_one_needs_schedule() {
        assert_eq!(
            widget("Schedule a coaching session"),
            Some(WidgetType::MeetingScheduler)
        );
        assert!(cs_manager().detect("coaching tips").is_none());
    }

    #[test]
    fn test_message_composer() {
        assert_eq!(
            widget("Send a message to the customer"),
            Some(WidgetType::MessageComposer)
        );
        assert_eq!(widget("write email to acme"), Some(WidgetType::MessageComposer));
    }
}
