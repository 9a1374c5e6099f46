//! Widget tags and typed payloads
//!
//! A widget is the structured view shown under a reply. Each tag carries
//! exactly one payload shape, so a widget type without data (or data
//! without a type) cannot be built.
//!
//! On the wire a widget is adjacently tagged:
//!
//! ```text
//! { "widgetType": "sla-performance-chart", "widgetPayload": { ... } }
//! ```

pub mod demo;
pub mod payload;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;
pub use payload::*;

macro_rules! widget_catalog {
    ($( $variant:ident => $tag:literal ),+ $(,)?) => {
        /// Closed set of widget tags understood by the rendering layer
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum WidgetType {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl WidgetType {
            pub const ALL: &'static [WidgetType] = &[ $( WidgetType::$variant, )+ ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( WidgetType::$variant => $tag, )+
                }
            }
        }

        /// A widget tag together with its payload
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "widgetType", content = "widgetPayload")]
        pub enum Widget {
            $(
                #[serde(rename = $tag)]
                $variant($variant),
            )+
        }

        impl Widget {
            pub fn widget_type(&self) -> WidgetType {
                match self {
                    $( Widget::$variant(_) => WidgetType::$variant, )+
                }
            }
        }

        $(
            impl From<$variant> for Widget {
                fn from(payload: $variant) -> Self {
                    Widget::$variant(payload)
                }
            }
        )+
    };
}

widget_catalog! {
    ExecutiveSummary => "executive-summary",
    SlaPerformanceChart => "sla-performance-chart",
    CustomerRiskProfile => "customer-risk-profile",
    MeetingScheduler => "meeting-scheduler",
    MeetingConfirmation => "meeting-confirmation",
    TeamWorkloadDashboard => "team-workload-dashboard",
    AgentPerformanceComparison => "agent-performance-comparison",
    PerformanceTrends => "performance-trends",
    CustomerRiskList => "customer-risk-list",
    TicketList => "ticket-list",
    SentimentAnalysis => "sentiment-analysis",
    AnalyticsDashboard => "analytics-dashboard",
    MessageComposer => "message-composer",
    AgentDashboard => "agent-dashboard",
    TicketDetail => "ticket-detail",
    CallPrepNotes => "call-prep-notes",
    ResponseComposer => "response-composer",
    SimilarTicketsAnalysis => "similar-tickets-analysis",
    AgentPerformanceStats => "agent-performance-stats",
    KnowledgeBaseSearch => "knowledge-base-search",
    KnowledgeArticle => "knowledge-article",
}

impl Widget {
    /// Payload as an untyped JSON value, for renderers that only want data
    pub fn payload(&self) -> serde_json::Value {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(mut map)) => map
                .remove("widgetPayload")
                .unwrap_or(serde_json::Value::Null),
            _ => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownWidgetType(s.to_string()))
    }
}
