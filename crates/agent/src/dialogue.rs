//! Per-chat dialogue state
//!
//! The scored matcher is stateless, so on its own a bare "yes" is matched
//! against every affirmative trigger in the catalog. A session remembers
//! which entry last asked a question and resolves the next affirmative
//! reply to that question's answer before falling back to trigger scoring.

use std::sync::Arc;

use parking_lot::Mutex;
use unicode_segmentation::UnicodeSegmentation;

use deskmate_core::{FollowUp, QueryMatch};

use crate::matcher::Matcher;
use crate::registry::ConversationRegistry;
use crate::scored::ScoredTriggerMatcher;

/// How a turn was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Affirmative answer to the pending follow-up
    FollowUp,
    /// Stateless trigger scoring
    Trigger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub entry_id: String,
    pub resolution: Resolution,
    pub reply: QueryMatch,
}

pub struct DialogueSession {
    matcher: ScoredTriggerMatcher,
    last_offered: Mutex<Option<String>>,
}

impl DialogueSession {
    pub fn new(registry: Arc<ConversationRegistry>) -> Self {
        Self {
            matcher: ScoredTriggerMatcher::new(registry),
            last_offered: Mutex::new(None),
        }
    }

    /// Session whose fallback ignores affirmatives that only answer a
    /// follow-up, so "yes" without a pending question matches nothing.
    pub fn gated(registry: Arc<ConversationRegistry>) -> Self {
        Self::new(Arc::new(registry.gated()))
    }

    pub fn registry(&self) -> &Arc<ConversationRegistry> {
        self.matcher.registry()
    }

    /// Entry whose follow-up is waiting for an answer
    pub fn pending(&self) -> Option<String> {
        self.last_offered.lock().clone()
    }

    pub fn reset(&self) {
        *self.last_offered.lock() = None;
    }

    pub fn resolve(&self, query: &str) -> Option<Turn> {
        let registry = self.matcher.registry();
        let mut last_offered = self.last_offered.lock();

        let answered = last_offered
            .take()
            .and_then(|offered_by| registry.follow_up_for(&offered_by))
            .filter(|follow_up| is_affirmative(query, follow_up))
            .and_then(|follow_up| registry.get(&follow_up.resolves_to));

        let (entry, resolution) = match answered {
            Some(entry) => (entry, Resolution::FollowUp),
            None => (self.matcher.best_match(query)?, Resolution::Trigger),
        };

        if registry.follow_up_for(&entry.id).is_some() {
            *last_offered = Some(entry.id.clone());
        }

        tracing::debug!(
            entry_id = %entry.id,
            resolution = ?resolution,
            pending = ?*last_offered,
            "Dialogue turn resolved"
        );

        Some(Turn {
            entry_id: entry.id.clone(),
            resolution,
            reply: entry.to_match(),
        })
    }

    pub fn respond(&self, query: &str) -> Option<QueryMatch> {
        self.resolve(query).map(|turn| turn.reply)
    }
}

impl Matcher for DialogueSession {
    fn name(&self) -> &str {
        "dialogue"
    }

    fn find(&self, query: &str) -> Option<QueryMatch> {
        self.respond(query)
    }
}

/// Whether any affirmative appears as a run of whole words in the query
fn is_affirmative(query: &str, follow_up: &FollowUp) -> bool {
    let words: Vec<String> = query.unicode_words().map(str::to_lowercase).collect();

    follow_up.affirmatives.iter().any(|affirmative| {
        let phrase: Vec<String> = affirmative.unicode_words().map(str::to_lowercase).collect();
        !phrase.is_empty() && words.windows(phrase.len()).any(|window| window == phrase.as_slice())
    })
}
