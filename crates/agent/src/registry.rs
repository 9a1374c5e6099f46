//! Conversation registry
//!
//! An ordered, read-only catalog of canned entries plus the follow-up
//! offers between them. Declaration order matters: the scored matcher
//! breaks ties in favour of earlier entries.

use std::path::Path;

use deskmate_config::CatalogFile;
use deskmate_core::text::phrase_len;
use deskmate_core::{ConversationEntry, FollowUp};

use crate::AgentError;

/// Bare affirmatives that only make sense as an answer to a question
pub const AFFIRMATIVES: &[&str] = &[
    "yes", "yeah", "yep", "sure", "ok", "okay", "please", "go ahead", "proceed",
];

/// Triggers shorter than this are flagged as too generic
const MIN_SPECIFIC_TRIGGER_LEN: usize = 4;

/// A trigger flagged by [`ConversationRegistry::generic_triggers`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTrigger {
    pub entry_id: String,
    pub trigger: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConversationRegistry {
    entries: Vec<ConversationEntry>,
    /// Lower-cased triggers, parallel to `entries`
    triggers: Vec<Vec<String>>,
    follow_ups: Vec<FollowUp>,
}

impl ConversationRegistry {
    /// Build a registry. Entries are taken as-is; no validation happens here.
    pub fn new(entries: Vec<ConversationEntry>) -> Self {
        let triggers = entries
            .iter()
            .map(|entry| entry.triggers.iter().map(|t| t.to_lowercase()).collect())
            .collect();

        Self {
            entries,
            triggers,
            follow_ups: Vec::new(),
        }
    }

    pub fn with_follow_ups(mut self, follow_ups: Vec<FollowUp>) -> Self {
        self.follow_ups = follow_ups;
        self
    }

    pub fn from_catalog(catalog: CatalogFile) -> Self {
        Self::new(catalog.entries).with_follow_ups(catalog.follow_ups)
    }

    /// Load and validate a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let catalog = CatalogFile::load(path)?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ConversationEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Lower-cased triggers of the entry at `index`
    pub(crate) fn triggers_at(&self, index: usize) -> &[String] {
        self.triggers.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn follow_ups(&self) -> &[FollowUp] {
        &self.follow_ups
    }

    /// The offer made by an entry's reply, if it asks one
    pub fn follow_up_for(&self, entry_id: &str) -> Option<&FollowUp> {
        self.follow_ups.iter().find(|f| f.offered_by == entry_id)
    }

    /// Triggers that fire on nearly any short reply.
    ///
    /// These let a bare "yes" select an entry with no idea what was asked.
    /// Entries listed here are candidates for a [`FollowUp`] instead.
    pub fn generic_triggers(&self) -> Vec<GenericTrigger> {
        self.entries
            .iter()
            .zip(&self.triggers)
            .flat_map(|(entry, triggers)| {
                triggers
                    .iter()
                    .filter(|t| is_generic(t))
                    .map(move |t| GenericTrigger {
                        entry_id: entry.id.clone(),
                        trigger: t.clone(),
                    })
            })
            .collect()
    }

    /// Copy of this registry where each follow-up target loses the triggers
    /// its follow-up answers with, so those answers only count after the
    /// question was asked.
    pub fn gated(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                let gated: Vec<String> = self
                    .follow_ups
                    .iter()
                    .filter(|f| f.resolves_to == entry.id)
                    .flat_map(|f| f.affirmatives.iter().map(|a| a.to_lowercase()))
                    .collect();

                let mut entry = entry.clone();
                entry
                    .triggers
                    .retain(|t| !gated.contains(&t.to_lowercase()));
                entry
            })
            .collect();

        Self::new(entries).with_follow_ups(self.follow_ups.clone())
    }
}

fn is_generic(trigger: &str) -> bool {
    AFFIRMATIVES.contains(&trigger) || phrase_len(trigger) < MIN_SPECIFIC_TRIGGER_LEN
}
