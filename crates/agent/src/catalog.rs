//! Built-in CS manager conversation catalog
//!
//! A scripted 1-on-1 booking flow (q1 to q3), composer actions (q4 to q6)
//! and one entry per manager dashboard.

use deskmate_core::widgets::demo;
use deskmate_core::{ConversationEntry, FollowUp};

use crate::registry::{ConversationRegistry, AFFIRMATIVES};

pub fn cs_manager_conversation() -> ConversationRegistry {
    ConversationRegistry::new(cs_manager_entries()).with_follow_ups(vec![FollowUp::new(
        "q1-schedule-1on1",
        AFFIRMATIVES,
        "q2-check-availability",
    )])
}

fn cs_manager_entries() -> Vec<ConversationEntry> {
    // q2 keeps the bare affirmatives so a stateless "yes" after q1 still reaches it
    let check_availability_triggers: Vec<&str> = AFFIRMATIVES
        .iter()
        .copied()
        .chain(["find time", "availability", "check calendar"])
        .collect();

    vec![
        ConversationEntry::new(
            "q1-schedule-1on1",
            &["schedule 1-on-1", "schedule a 1-on-1", "coaching session with"],
            "Schedule a 1-on-1 coaching session with Marcus",
            "I can help you schedule a 1-on-1 with Marcus. The session will be 30 minutes.\n\n\
             Would you like me to check both of your calendars for availability?",
        ),
        ConversationEntry::new(
            "q2-check-availability",
            &check_availability_triggers,
            "Yes, check availability",
            "I've checked both calendars. Here are the available time slots:",
        )
        .with_widget(demo::one_on_one_scheduler()),
        ConversationEntry::new(
            "q3-book-meeting",
            &[
                "book", "confirm", "schedule", "tomorrow", "1pm", "13:00", "2pm", "14:00", "10am",
            ],
            "Book the tomorrow at 1pm slot.",
            "Perfect! 1-on-1 session confirmed and calendar invite sent.",
        )
        .with_widget(demo::meeting_confirmation()),
        ConversationEntry::new(
            "q4-send-message",
            &["send the message", "send message", "send it"],
            "Send the message",
            "✓ Message sent to Acme Corp successfully! They should receive it within the next \
             few minutes. I've also added this to your sent items.",
        ),
        ConversationEntry::new(
            "q5-save-draft",
            &["save as draft", "save draft"],
            "Save as draft",
            "✓ Message saved as draft. You can find it in your Drafts folder and continue \
             editing later.",
        ),
        ConversationEntry::new(
            "q6-save-template",
            &["save as template", "save template"],
            "Save as template",
            "✓ Message saved as template \"Customer Outage Response\". You can reuse this \
             template for similar customer communications in the future.",
        ),
        ConversationEntry::new(
            "q7-team-workload",
            &[
                "team workload",
                "team capacity",
                "workload dashboard",
                "team distribution",
                "agent workload",
            ],
            "Show me the current team workload distribution",
            "Here's the real-time team workload dashboard. David Park is currently overloaded \
             at 120% capacity and needs immediate support. I recommend redistributing tickets \
             to Sarah Chen and Aisha Williams who have available capacity:",
        )
        .with_widget(demo::team_workload_dashboard()),
        ConversationEntry::new(
            "q8-agent-performance",
            &[
                "agent performance",
                "compare agents",
                "team performance",
                "top performers",
                "performance comparison",
            ],
            "Compare agent performance for this month",
            "Here's the agent performance comparison for the last 30 days. Sarah Chen leads \
             the team with 95% SLA compliance and 4.8 customer satisfaction. Tom Anderson may \
             need additional support and coaching:",
        )
        .with_widget(demo::agent_performance_comparison()),
        ConversationEntry::new(
            "q9-sla-performance",
            &[
                "sla performance",
                "sla compliance",
                "sla metrics",
                "sla breaches",
                "service level",
            ],
            "Show me SLA performance breakdown",
            "Here's the SLA performance analysis. Overall compliance is at 87%, which is below \
             our 90% target. Critical resolution times are declining at 72% compliance - this \
             needs immediate attention:",
        )
        .with_widget(demo::sla_performance_chart()),
        ConversationEntry::new(
            "q10-performance-trends",
            &[
                "performance trends",
                "trends over time",
                "weekly performance",
                "performance chart",
            ],
            "Show me performance trends for the past week",
            "Here's the performance trends for the last 7 days. Response times are showing \
             some volatility, with spikes on Dec 16 and Dec 19. Customer satisfaction dipped \
             to 82% mid-week but is recovering:",
        )
        .with_widget(demo::performance_trends()),
        ConversationEntry::new(
            "q11-customer-risk-list",
            &[
                "at-risk customers",
                "customer risk",
                "high-risk accounts",
                "customers at risk",
                "risk list",
            ],
            "Show me all at-risk customers",
            "Here are your 8 high-risk customers requiring immediate attention. Acme \
             Corporation tops the list with a risk score of 92 and contract renewal in just \
             45 days:",
        )
        .with_widget(demo::customer_risk_list()),
        ConversationEntry::new(
            "q12-critical-tickets",
            &[
                "critical tickets",
                "urgent tickets",
                "high priority",
                "tickets at risk",
            ],
            "What critical tickets need attention?",
            "Here are all critical and high-priority tickets requiring immediate attention. \
             Two tickets have already breached SLA and need escalation:",
        )
        .with_widget(demo::ticket_list()),
        ConversationEntry::new(
            "q13-sentiment-analysis",
            &[
                "customer sentiment",
                "sentiment trends",
                "how are customers feeling",
                "feedback sentiment",
            ],
            "What is the overall customer sentiment?",
            "Based on recent customer feedback and interactions, the overall sentiment is \
             negative at 45%. The main pain points are authentication issues, data export \
             problems, and API rate limiting:",
        )
        .with_widget(demo::sentiment_analysis()),
        ConversationEntry::new(
            "q14-analytics-dashboard",
            &[
                "show analytics",
                "analytics dashboard",
                "detailed metrics",
                "ticket analytics",
            ],
            "Show me the detailed analytics dashboard",
            "Here's your comprehensive analytics dashboard showing ticket volume trends, \
             response time patterns, and resolution breakdown for the week:",
        )
        .with_widget(demo::analytics_dashboard()),
    ]
}
