//! Demo widget records
//!
//! Static data the demo catalogs point at. The matching engine never looks
//! inside these; it only hands them to the renderer.

use chrono::{Duration, Local, NaiveDate};

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ticket(
    id: &str,
    subject: &str,
    customer: &str,
    priority: Priority,
    status: &str,
    sla_breached: bool,
) -> TicketSummary {
    TicketSummary {
        id: id.to_string(),
        subject: subject.to_string(),
        customer: customer.to_string(),
        priority,
        status: status.to_string(),
        sla_breached,
    }
}

fn share(label: &str, percent: f32) -> Share {
    Share {
        label: label.to_string(),
        percent,
    }
}

fn trend_point(label: &str, avg_response_minutes: f32, csat_percent: f32, tickets: u32) -> TrendPoint {
    TrendPoint {
        label: label.to_string(),
        avg_response_minutes,
        csat_percent,
        tickets,
    }
}

pub fn executive_summary() -> ExecutiveSummary {
    ExecutiveSummary {
        period: "Today".to_string(),
        metrics: vec![
            Metric::new("SLA compliance", "87%", Trend::Down).with_change("-3%"),
            Metric::new("Open critical tickets", "12", Trend::Up).with_change("+4"),
            Metric::new("CSAT", "4.3", Trend::Flat),
            Metric::new("Revenue at risk", "$2.4M", Trend::Up).with_change("+$600K"),
        ],
        alerts: vec![
            Alert {
                severity: Priority::Critical,
                message: "Acme Corp risk score rose from 68 to 92".to_string(),
            },
            Alert {
                severity: Priority::High,
                message: "Critical resolution SLA at 72% compliance".to_string(),
            },
        ],
        highlights: strings(&[
            "First response times improved 8% week over week",
            "Executive call with Acme Corp requested for this week",
        ]),
    }
}

pub fn sla_performance_chart() -> SlaPerformanceChart {
    let category = |name: &str, compliance: f32, status: SlaStatus| SlaCategory {
        name: name.to_string(),
        compliance,
        target: 90.0,
        status,
    };
    SlaPerformanceChart {
        overall_compliance: 87.0,
        target: 90.0,
        categories: vec![
            category("First response", 94.0, SlaStatus::Meeting),
            category("Standard resolution", 89.0, SlaStatus::AtRisk),
            category("Critical resolution", 72.0, SlaStatus::Failing),
            category("Escalation handling", 81.0, SlaStatus::Failing),
        ],
    }
}

pub fn customer_risk_profile() -> CustomerRiskProfile {
    CustomerRiskProfile {
        customer: "Acme Corporation".to_string(),
        risk_score: 92,
        previous_score: 68,
        renewal_in_days: 45,
        annual_value: "$1.2M".to_string(),
        factors: vec![
            RiskFactor {
                factor: "Three SLA breaches on critical tickets this month".to_string(),
                impact: Priority::Critical,
            },
            RiskFactor {
                factor: "Executive sponsor escalated via email".to_string(),
                impact: Priority::High,
            },
            RiskFactor {
                factor: "Product usage down 18% over 30 days".to_string(),
                impact: Priority::Medium,
            },
        ],
        recommended_actions: strings(&[
            "Schedule an executive call this week",
            "Assign a dedicated senior engineer to open critical tickets",
            "Share a remediation plan before renewal talks",
        ]),
    }
}

pub fn meeting_scheduler() -> MeetingScheduler {
    MeetingScheduler {
        title: "Executive call with Acme Corp".to_string(),
        meeting_type: "Executive Call".to_string(),
        duration: "45 minutes".to_string(),
        attendees: vec![
            Attendee {
                name: "You".to_string(),
                status: AttendeeStatus::Organizer,
                required: true,
            },
            Attendee {
                name: "Jordan Lee (Acme Corp CTO)".to_string(),
                status: AttendeeStatus::Available,
                required: true,
            },
            Attendee {
                name: "Account Executive".to_string(),
                status: AttendeeStatus::Tentative,
                required: false,
            },
        ],
        slots: vec![
            TimeSlot {
                day: "Tomorrow".to_string(),
                time: "10:00 AM".to_string(),
                available: true,
            },
            TimeSlot {
                day: "Tomorrow".to_string(),
                time: "1:00 PM".to_string(),
                available: true,
            },
            TimeSlot {
                day: "Tomorrow".to_string(),
                time: "2:00 PM".to_string(),
                available: false,
            },
        ],
    }
}

/// Scheduler record for the 1-on-1 coaching flow: the base scheduler with
/// its title, type, duration and attendees replaced.
pub fn one_on_one_scheduler() -> MeetingScheduler {
    MeetingScheduler {
        title: "Schedule 1-on-1 with Marcus".to_string(),
        meeting_type: "1-on-1 Coaching Session".to_string(),
        duration: "30 minutes".to_string(),
        attendees: vec![
            Attendee {
                name: "You (CS Manager)".to_string(),
                status: AttendeeStatus::Organizer,
                required: true,
            },
            Attendee {
                name: "Marcus Johnson (Support Agent)".to_string(),
                status: AttendeeStatus::Available,
                required: true,
            },
        ],
        ..meeting_scheduler()
    }
}

/// Confirmation for a 1-on-1 booked tomorrow, relative to the local clock
pub fn meeting_confirmation() -> MeetingConfirmation {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    meeting_confirmation_on(tomorrow)
}

pub fn meeting_confirmation_on(date: NaiveDate) -> MeetingConfirmation {
    MeetingConfirmation {
        meeting_date: date.format("%A, %B %-d").to_string(),
        meeting_time: "1:00 PM".to_string(),
        timezone: "PST".to_string(),
        duration: "30 minutes".to_string(),
        location: "Video Conference".to_string(),
        invites_sent: vec![Invitee {
            name: "Marcus Johnson".to_string(),
            email: "marcus.johnson@company.com".to_string(),
            role: "Support Agent".to_string(),
        }],
        briefing_created: true,
        briefing_items: strings(&[
            "Performance metrics for last 30 days",
            "Recent tickets handled",
            "Customer feedback summary",
            "Development goals discussion",
        ]),
        agenda_items: strings(&[
            "Review performance metrics and trends",
            "Discuss recent challenging tickets",
            "Address any blockers or support needs",
            "Set goals for next quarter",
            "Career development discussion",
        ]),
    }
}

pub fn team_workload_dashboard() -> TeamWorkloadDashboard {
    let load = |name: &str, open_tickets: u32, capacity_percent: u32| AgentLoad {
        name: name.to_string(),
        open_tickets,
        capacity_percent,
    };
    TeamWorkloadDashboard {
        agents: vec![
            load("David Park", 24, 120),
            load("Marcus Johnson", 18, 90),
            load("Tom Anderson", 15, 75),
            load("Sarah Chen", 11, 55),
            load("Aisha Williams", 10, 50),
        ],
        recommendation: Some(
            "Move 5 of David Park's tickets to Sarah Chen and Aisha Williams".to_string(),
        ),
    }
}

pub fn agent_performance_comparison() -> AgentPerformanceComparison {
    let score = |name: &str, sla_compliance: f32, csat: f32, tickets_resolved: u32| AgentScore {
        name: name.to_string(),
        sla_compliance,
        csat,
        tickets_resolved,
    };
    AgentPerformanceComparison {
        period: "Last 30 days".to_string(),
        agents: vec![
            score("Sarah Chen", 95.0, 4.8, 142),
            score("Aisha Williams", 92.0, 4.6, 128),
            score("Marcus Johnson", 86.0, 4.2, 117),
            score("David Park", 81.0, 4.0, 131),
            score("Tom Anderson", 74.0, 3.7, 96),
        ],
    }
}

pub fn performance_trends() -> PerformanceTrends {
    PerformanceTrends {
        period: "Last 7 days".to_string(),
        points: vec![
            trend_point("Dec 15", 42.0, 88.0, 156),
            trend_point("Dec 16", 71.0, 84.0, 189),
            trend_point("Dec 17", 48.0, 82.0, 171),
            trend_point("Dec 18", 45.0, 83.0, 164),
            trend_point("Dec 19", 68.0, 85.0, 197),
            trend_point("Dec 20", 40.0, 87.0, 149),
            trend_point("Dec 21", 38.0, 89.0, 121),
        ],
    }
}

pub fn customer_risk_list() -> CustomerRiskList {
    let customer = |name: &str, risk_score: u8, renewal_in_days: u32, primary_issue: &str| {
        AtRiskCustomer {
            name: name.to_string(),
            risk_score,
            renewal_in_days,
            primary_issue: primary_issue.to_string(),
        }
    };
    CustomerRiskList {
        customers: vec![
            customer("Acme Corporation", 92, 45, "Repeated SLA breaches"),
            customer("Globex", 85, 60, "Authentication outages"),
            customer("Initech", 81, 120, "Data export failures"),
            customer("Umbrella Health", 78, 30, "API rate limiting"),
            customer("Stark Logistics", 74, 90, "Slow escalations"),
            customer("Wayne Retail", 71, 150, "Declining usage"),
            customer("Hooli", 68, 75, "Billing disputes"),
            customer("Vandelay Imports", 66, 200, "Onboarding delays"),
        ],
    }
}

pub fn ticket_list() -> TicketList {
    TicketList {
        title: "Tickets requiring attention".to_string(),
        tickets: vec![
            ticket("TKT-4521", "SSO login failing for all users", "Acme Corporation", Priority::Critical, "open", true),
            ticket("TKT-4518", "Nightly export job timing out", "Initech", Priority::Critical, "in progress", true),
            ticket("TKT-4507", "API returning 429 under normal load", "Umbrella Health", Priority::High, "open", false),
            ticket("TKT-4499", "Dashboard widgets not loading", "Globex", Priority::High, "waiting on customer", false),
            ticket("TKT-4488", "Invoice shows wrong seat count", "Hooli", Priority::Medium, "open", false),
        ],
    }
}

pub fn sentiment_analysis() -> SentimentAnalysis {
    SentimentAnalysis {
        overall: "negative".to_string(),
        score_percent: 45.0,
        breakdown: vec![
            share("Positive", 28.0),
            share("Neutral", 27.0),
            share("Negative", 45.0),
        ],
        pain_points: strings(&[
            "Authentication issues",
            "Data export problems",
            "API rate limiting",
        ]),
    }
}

pub fn analytics_dashboard() -> AnalyticsDashboard {
    AnalyticsDashboard {
        period: "This week".to_string(),
        metrics: vec![
            Metric::new("Tickets created", "1,147", Trend::Up).with_change("+12%"),
            Metric::new("Median first response", "38 min", Trend::Down).with_change("-6 min"),
            Metric::new("Resolution rate", "82%", Trend::Flat),
        ],
        volume: vec![
            trend_point("Mon", 41.0, 86.0, 198),
            trend_point("Tue", 44.0, 85.0, 211),
            trend_point("Wed", 52.0, 82.0, 236),
            trend_point("Thu", 39.0, 87.0, 204),
            trend_point("Fri", 36.0, 88.0, 176),
        ],
        resolution_breakdown: vec![
            share("Resolved first contact", 46.0),
            share("Resolved after escalation", 21.0),
            share("Resolved by self-service", 15.0),
            share("Still open", 18.0),
        ],
    }
}

pub fn message_composer() -> MessageComposer {
    MessageComposer {
        recipient: "Acme Corp".to_string(),
        subject: "Update on this week's service disruption".to_string(),
        body: "Hi Jordan,\n\nI want to personally follow up on the login issues your team \
               experienced this week. Our engineers have deployed a fix and we are \
               monitoring closely. I'd welcome a call to walk through the remediation plan.\n\n\
               Best regards"
            .to_string(),
        tone: "empathetic".to_string(),
    }
}

pub fn agent_dashboard() -> AgentDashboard {
    AgentDashboard {
        agent: "Marcus Johnson".to_string(),
        open_tickets: 18,
        due_today: 5,
        upcoming_calls: strings(&["11:00 AM - Acme Corp escalation review"]),
        priorities: vec![
            ticket("TKT-4521", "SSO login failing for all users", "Acme Corporation", Priority::Critical, "open", true),
            ticket("TKT-4507", "API returning 429 under normal load", "Umbrella Health", Priority::High, "open", false),
        ],
    }
}

pub fn ticket_detail() -> TicketDetail {
    TicketDetail {
        id: "TKT-4521".to_string(),
        subject: "SSO login failing for all users".to_string(),
        customer: "Acme Corporation".to_string(),
        priority: Priority::Critical,
        status: "open".to_string(),
        created_at: "2 days ago".to_string(),
        description: "After the identity provider certificate rotation, all SAML logins \
                      return an invalid signature error."
            .to_string(),
        timeline: vec![
            TimelineEvent {
                at: "2 days ago".to_string(),
                event: "Ticket opened by customer".to_string(),
            },
            TimelineEvent {
                at: "1 day ago".to_string(),
                event: "Escalated to tier 2".to_string(),
            },
            TimelineEvent {
                at: "3 hours ago".to_string(),
                event: "SLA breached".to_string(),
            },
        ],
    }
}

pub fn call_prep_notes() -> CallPrepNotes {
    CallPrepNotes {
        customer: "Acme Corporation".to_string(),
        call_time: "Today, 11:00 AM".to_string(),
        objectives: strings(&[
            "Confirm the SSO fix is working for all users",
            "Agree on next steps for the export timeouts",
        ]),
        talking_points: strings(&[
            "Root cause was an expired signing certificate",
            "Monitoring added to catch future rotations",
        ]),
        risks: strings(&["Renewal in 45 days", "Executive sponsor is frustrated"]),
    }
}

pub fn response_composer() -> ResponseComposer {
    ResponseComposer {
        ticket_id: "TKT-4521".to_string(),
        recipient: "Jordan Lee".to_string(),
        draft: "Hi Jordan,\n\nThanks for your patience. We identified an expired signing \
                certificate as the cause of the login failures and have rolled out a fix. \
                Could you confirm your users can sign in again?\n\nThanks"
            .to_string(),
        suggested_tone: "apologetic".to_string(),
    }
}

pub fn similar_tickets_analysis() -> SimilarTicketsAnalysis {
    let similar = |id: &str, subject: &str, similarity_percent: u8, resolution: &str| SimilarTicket {
        id: id.to_string(),
        subject: subject.to_string(),
        similarity_percent,
        resolution: resolution.to_string(),
    };
    SimilarTicketsAnalysis {
        reference_ticket: "TKT-4521".to_string(),
        matches: vec![
            similar("TKT-3877", "SAML signature invalid after IdP update", 94, "Re-imported IdP metadata"),
            similar("TKT-3512", "Users locked out after certificate change", 88, "Rotated SP certificate"),
            similar("TKT-2960", "Intermittent SSO failures", 71, "Fixed clock skew on IdP"),
        ],
        common_patterns: strings(&[
            "Failures follow identity provider certificate rotation",
            "Re-importing metadata resolves most cases within an hour",
        ]),
    }
}

pub fn agent_performance_stats() -> AgentPerformanceStats {
    AgentPerformanceStats {
        agent: "Marcus Johnson".to_string(),
        period: "This week".to_string(),
        metrics: vec![
            Metric::new("Tickets resolved", "27", Trend::Up).with_change("+5"),
            Metric::new("SLA compliance", "86%", Trend::Up).with_change("+2%"),
            Metric::new("CSAT", "4.2", Trend::Flat),
            Metric::new("Avg handle time", "34 min", Trend::Down).with_change("-3 min"),
        ],
    }
}

pub fn knowledge_base_search() -> KnowledgeBaseSearch {
    let article = |id: &str, title: &str, relevance_percent: u8, excerpt: &str| ArticleSummary {
        id: id.to_string(),
        title: title.to_string(),
        relevance_percent,
        excerpt: excerpt.to_string(),
    };
    KnowledgeBaseSearch {
        query: "troubleshoot sso login".to_string(),
        results: vec![
            article("KB-1042", "Troubleshooting SAML SSO failures", 96, "Start by checking the IdP signing certificate..."),
            article("KB-0877", "Rotating identity provider certificates", 83, "Certificates must be re-imported after rotation..."),
            article("KB-0513", "Reading authentication logs", 64, "Authentication events are retained for 30 days..."),
        ],
    }
}

pub fn knowledge_article() -> KnowledgeArticle {
    KnowledgeArticle {
        id: "KB-1042".to_string(),
        title: "Troubleshooting SAML SSO failures".to_string(),
        category: "Authentication".to_string(),
        updated: "2 weeks ago".to_string(),
        steps: strings(&[
            "Check the identity provider signing certificate expiry",
            "Re-import IdP metadata in the admin console",
            "Verify clock skew between IdP and service is under 5 minutes",
            "Ask the customer to retry login in a private window",
        ]),
        related: strings(&["KB-0877", "KB-0513"]),
    }
}

/// Default record for a tag
pub fn widget(widget_type: WidgetType) -> Widget {
    match widget_type {
        WidgetType::ExecutiveSummary => executive_summary().into(),
        WidgetType::SlaPerformanceChart => sla_performance_chart().into(),
        WidgetType::CustomerRiskProfile => customer_risk_profile().into(),
        WidgetType::MeetingScheduler => meeting_scheduler().into(),
        WidgetType::MeetingConfirmation => meeting_confirmation().into(),
        WidgetType::TeamWorkloadDashboard => team_workload_dashboard().into(),
        WidgetType::AgentPerformanceComparison => agent_performance_comparison().into(),
        WidgetType::PerformanceTrends => performance_trends().into(),
        WidgetType::CustomerRiskList => customer_risk_list().into(),
        WidgetType::TicketList => ticket_list().into(),
        WidgetType::SentimentAnalysis => sentiment_analysis().into(),
        WidgetType::AnalyticsDashboard => analytics_dashboard().into(),
        WidgetType::MessageComposer => message_composer().into(),
        WidgetType::AgentDashboard => agent_dashboard().into(),
        WidgetType::TicketDetail => ticket_detail().into(),
        WidgetType::CallPrepNotes => call_prep_notes().into(),
        WidgetType::ResponseComposer => response_composer().into(),
        WidgetType::SimilarTicketsAnalysis => similar_tickets_analysis().into(),
        WidgetType::AgentPerformanceStats => agent_performance_stats().into(),
        WidgetType::KnowledgeBaseSearch => knowledge_base_search().into(),
        WidgetType::KnowledgeArticle => knowledge_article().into(),
    }
}
