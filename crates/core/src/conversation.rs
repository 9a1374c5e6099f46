//! Conversation catalog types
//!
//! A catalog is a fixed list of canned replies. Each entry names the trigger
//! phrases that select it and, optionally, a widget to render under the
//! reply.

use serde::{Deserialize, Serialize};

use crate::widgets::{Widget, WidgetType};

/// One canned reply in a conversation catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Case-insensitive phrases that select this entry
    pub triggers: Vec<String>,
    /// Example query the entry was written for. Documentation only.
    #[serde(default)]
    pub canonical_query: String,
    /// Reply returned verbatim
    pub response_text: String,
    /// Structured view rendered under the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
}

impl ConversationEntry {
    pub fn new(
        id: impl Into<String>,
        triggers: &[&str],
        canonical_query: impl Into<String>,
        response_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            canonical_query: canonical_query.into(),
            response_text: response_text.into(),
            widget: None,
        }
    }

    pub fn with_widget(mut self, widget: impl Into<Widget>) -> Self {
        self.widget = Some(widget.into());
        self
    }

    pub fn widget_type(&self) -> Option<WidgetType> {
        self.widget.as_ref().map(Widget::widget_type)
    }

    /// Reply plus widget, as handed to the rendering layer
    pub fn to_match(&self) -> QueryMatch {
        QueryMatch {
            response_text: self.response_text.clone(),
            widget: self.widget.clone(),
        }
    }
}

/// The engine's answer for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMatch {
    pub response_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
}

impl QueryMatch {
    pub fn text(response_text: impl Into<String>) -> Self {
        Self {
            response_text: response_text.into(),
            widget: None,
        }
    }

    pub fn with_widget(response_text: impl Into<String>, widget: impl Into<Widget>) -> Self {
        Self {
            response_text: response_text.into(),
            widget: Some(widget.into()),
        }
    }

    pub fn widget_type(&self) -> Option<WidgetType> {
        self.widget.as_ref().map(Widget::widget_type)
    }

    pub fn widget_payload(&self) -> Option<serde_json::Value> {
        self.widget.as_ref().map(Widget::payload)
    }
}

impl From<&ConversationEntry> for QueryMatch {
    fn from(entry: &ConversationEntry) -> Self {
        entry.to_match()
    }
}

/// A question an entry's reply asks, and the entry a short affirmative
/// answer to it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    /// Entry whose reply asks the question
    pub offered_by: String,
    /// Whole-word answers that accept the offer
    pub affirmatives: Vec<String>,
    /// Entry returned when the offer is accepted
    pub resolves_to: String,
}

impl FollowUp {
    pub fn new(offered_by: impl Into<String>, affirmatives: &[&str], resolves_to: impl Into<String>) -> Self {
        Self {
            offered_by: offered_by.into(),
            affirmatives: affirmatives.iter().map(|a| a.to_string()).collect(),
            resolves_to: resolves_to.into(),
        }
    }
}
