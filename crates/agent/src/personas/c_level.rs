//! Executive persona

use deskmate_core::widgets::demo;
use deskmate_core::QueryMatch;

use crate::rules::{all, any, contains, contains_any, RuleChain};

pub fn c_level() -> RuleChain {
    let sla_exact = || {
        QueryMatch::with_widget(
            "Here's the detailed SLA performance breakdown: [v2]",
            demo::sla_performance_chart(),
        )
    };

    RuleChain::new("c-level")
        // Phrasings that must never fall through to a looser rule
        .exact("show me the sla performance breakdown", sla_exact())
        .exact("show me sla performance breakdown", sla_exact())
        .exact(
            "which categories are we failing",
            QueryMatch::with_widget(
                "We're currently failing in these SLA categories: [v2]",
                demo::sla_performance_chart(),
            ),
        )
        .rule(
            "executive-summary",
            any([
                contains_any(&["executive summary", "system health"]),
                all([contains("good morning"), contains("summary")]),
                all([contains("show me"), contains_any(&["dashboard", "summary"])]),
            ]),
            QueryMatch::with_widget(
                "Good morning. Here's your executive summary for today:",
                demo::executive_summary(),
            ),
        )
        .rule(
            "customer-risk-profile",
            any([
                contains_any(&["tell me more about", "risk score", "why did"]),
                all([contains("acme"), contains_any(&["risk", "increase"])]),
            ]),
            QueryMatch::with_widget(
                "Let me pull up the detailed risk profile:",
                demo::customer_risk_profile(),
            ),
        )
        .rule(
            "sla-failing-categories",
            all([contains("which categories"), contains("failing")]),
            QueryMatch::with_widget(
                "We're currently failing in these SLA categories:",
                demo::sla_performance_chart(),
            ),
        )
        .rule(
            "sla-breakdown",
            any([
                contains_any(&["sla performance", "sla breakdown"]),
                all([contains("show me"), contains("sla")]),
            ]),
            QueryMatch::with_widget(
                "Here's the detailed SLA performance breakdown:",
                demo::sla_performance_chart(),
            ),
        )
        .rule(
            "executive-call",
            any([
                contains_any(&["schedule", "book"]),
                all([contains("executive call"), contains("attend")]),
            ]),
            QueryMatch::with_widget(
                "I've found available time slots for the executive call:",
                demo::meeting_scheduler(),
            ),
        )
}
