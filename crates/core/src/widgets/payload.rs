//! Payload shapes, one per widget tag
//!
//! Field names serialize in camelCase because the rendering layer reads
//! them as-is.

use serde::{Deserialize, Serialize};

/// Direction of a metric relative to the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A labelled headline number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    pub trend: Trend,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, trend: Trend) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            change: None,
            trend,
        }
    }

    pub fn with_change(mut self, change: impl Into<String>) -> Self {
        self.change = Some(change.into());
        self
    }
}

/// A slice of a whole, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub label: String,
    pub percent: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlaStatus {
    Meeting,
    AtRisk,
    Failing,
}

// ---------------------------------------------------------------------------
// Executive
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub severity: Priority,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub period: String,
    pub metrics: Vec<Metric>,
    pub alerts: Vec<Alert>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaCategory {
    pub name: String,
    pub compliance: f32,
    pub target: f32,
    pub status: SlaStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaPerformanceChart {
    pub overall_compliance: f32,
    pub target: f32,
    pub categories: Vec<SlaCategory>,
}

impl SlaPerformanceChart {
    /// Categories currently below target
    pub fn failing(&self) -> impl Iterator<Item = &SlaCategory> {
        self.categories
            .iter()
            .filter(|c| c.status == SlaStatus::Failing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub factor: String,
    pub impact: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRiskProfile {
    pub customer: String,
    pub risk_score: u8,
    pub previous_score: u8,
    pub renewal_in_days: u32,
    pub annual_value: String,
    pub factors: Vec<RiskFactor>,
    pub recommended_actions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Meetings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendeeStatus {
    Organizer,
    Available,
    Busy,
    Tentative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub name: String,
    pub status: AttendeeStatus,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day: String,
    pub time: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingScheduler {
    pub title: String,
    #[serde(rename = "type")]
    pub meeting_type: String,
    pub duration: String,
    pub attendees: Vec<Attendee>,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitee {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingConfirmation {
    pub meeting_date: String,
    pub meeting_time: String,
    pub timezone: String,
    pub duration: String,
    pub location: String,
    pub invites_sent: Vec<Invitee>,
    pub briefing_created: bool,
    pub briefing_items: Vec<String>,
    pub agenda_items: Vec<String>,
}

// ---------------------------------------------------------------------------
// Team management
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentLoad {
    pub name: String,
    pub open_tickets: u32,
    pub capacity_percent: u32,
}

impl AgentLoad {
    pub fn is_overloaded(&self) -> bool {
        self.capacity_percent > 100
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWorkloadDashboard {
    pub agents: Vec<AgentLoad>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentScore {
    pub name: String,
    pub sla_compliance: f32,
    pub csat: f32,
    pub tickets_resolved: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformanceComparison {
    pub period: String,
    pub agents: Vec<AgentScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub label: String,
    pub avg_response_minutes: f32,
    pub csat_percent: f32,
    pub tickets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrends {
    pub period: String,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskCustomer {
    pub name: String,
    pub risk_score: u8,
    pub renewal_in_days: u32,
    pub primary_issue: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRiskList {
    pub customers: Vec<AtRiskCustomer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub id: String,
    pub subject: String,
    pub customer: String,
    pub priority: Priority,
    pub status: String,
    pub sla_breached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketList {
    pub title: String,
    pub tickets: Vec<TicketSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub overall: String,
    pub score_percent: f32,
    pub breakdown: Vec<Share>,
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDashboard {
    pub period: String,
    pub metrics: Vec<Metric>,
    pub volume: Vec<TrendPoint>,
    pub resolution_breakdown: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageComposer {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub tone: String,
}

// ---------------------------------------------------------------------------
// Support agent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDashboard {
    pub agent: String,
    pub open_tickets: u32,
    pub due_today: u32,
    pub upcoming_calls: Vec<String>,
    pub priorities: Vec<TicketSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub at: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    pub id: String,
    pub subject: String,
    pub customer: String,
    pub priority: Priority,
    pub status: String,
    pub created_at: String,
    pub description: String,
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPrepNotes {
    pub customer: String,
    pub call_time: String,
    pub objectives: Vec<String>,
    pub talking_points: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseComposer {
    pub ticket_id: String,
    pub recipient: String,
    pub draft: String,
    pub suggested_tone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarTicket {
    pub id: String,
    pub subject: String,
    pub similarity_percent: u8,
    pub resolution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarTicketsAnalysis {
    pub reference_ticket: String,
    pub matches: Vec<SimilarTicket>,
    pub common_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformanceStats {
    pub agent: String,
    pub period: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub relevance_percent: u8,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseSearch {
    pub query: String,
    pub results: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeArticle {
    pub id: String,
    pub title: String,
    pub category: String,
    pub updated: String,
    pub steps: Vec<String>,
    pub related: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_type_serializes_as_type() {
        let scheduler = MeetingScheduler {
            title: "Sync".to_string(),
            meeting_type: "1-on-1".to_string(),
            duration: "30 minutes".to_string(),
            attendees: vec![],
            slots: vec![],
        };
        let value = serde_json::to_value(&scheduler).unwrap();
        assert_eq!(value["type"], "1-on-1");
        assert!(value.get("meetingType").is_none());
    }

    #[test]
    fn test_failing_categories() {
        let chart = SlaPerformanceChart {
            overall_compliance: 87.0,
            target: 90.0,
            categories: vec![
                SlaCategory {
                    name: "First response".to_string(),
                    compliance: 94.0,
                    target: 90.0,
                    status: SlaStatus::Meeting,
                },
                SlaCategory {
                    name: "Critical resolution".to_string(),
                    compliance: 72.0,
                    target: 90.0,
                    status: SlaStatus::Failing,
                },
            ],
        };
        let failing: Vec<_> = chart.failing().map(|c| c.name.as_str()).collect();
        assert_eq!(failing, vec!["Critical resolution"]);
    }

    #[test]
    fn test_optional_change_omitted() {
        let metric = Metric::new("CSAT", "4.6", Trend::Up);
        let value = serde_json::to_value(&metric).unwrap();
        assert!(value.get("change").is_none());
        assert_eq!(value["trend"], "up");
    }
}
