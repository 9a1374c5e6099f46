//! Scored trigger matcher
//!
//! Every entry with at least one trigger contained in the normalized query
//! is a candidate. A candidate scores the summed length of its matched
//! triggers plus ten per matched trigger, so longer phrases and several
//! simultaneous hits both outrank a single short word. Matching is plain
//! substring containment: "reschedule" contains "schedule".

use std::sync::Arc;

use deskmate_core::text::phrase_len;
use deskmate_core::{normalize, ConversationEntry, QueryMatch};

use crate::matcher::{Candidate, Matcher, Ranking};
use crate::registry::ConversationRegistry;

/// Bonus per matched trigger
const MATCH_BONUS: usize = 10;

/// Why an entry was a candidate
#[derive(Debug, Clone)]
pub struct TriggerScore<'a> {
    pub entry: &'a ConversationEntry,
    pub index: usize,
    pub matched: Vec<&'a str>,
    pub score: usize,
}

pub struct ScoredTriggerMatcher {
    registry: Arc<ConversationRegistry>,
    ranking: Ranking,
}

impl ScoredTriggerMatcher {
    pub fn new(registry: Arc<ConversationRegistry>) -> Self {
        Self {
            registry,
            ranking: Ranking::ByScore,
        }
    }

    pub fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn registry(&self) -> &Arc<ConversationRegistry> {
        &self.registry
    }

    /// Score one entry against already-normalized text
    pub fn score(&self, index: usize, normalized: &str) -> Option<TriggerScore<'_>> {
        let entry = self.registry.entries().get(index)?;
        let matched: Vec<&str> = self
            .registry
            .triggers_at(index)
            .iter()
            .map(String::as_str)
            .filter(|trigger| normalized.contains(trigger))
            .collect();

        if matched.is_empty() {
            return None;
        }

        let score = matched.iter().map(|t| phrase_len(t)).sum::<usize>()
            + MATCH_BONUS * matched.len();

        Some(TriggerScore {
            entry,
            index,
            matched,
            score,
        })
    }

    /// Every candidate for a query, in declaration order
    pub fn explain(&self, query: &str) -> Vec<TriggerScore<'_>> {
        let normalized = normalize(query);
        (0..self.registry.len())
            .filter_map(|index| self.score(index, &normalized))
            .collect()
    }

    /// Entry selected for a query
    pub fn best_match(&self, query: &str) -> Option<&ConversationEntry> {
        let normalized = normalize(query);
        let candidates = (0..self.registry.len())
            .filter_map(|index| self.score(index, &normalized))
            .map(|scored| Candidate::new(scored.index, scored.score));

        let winner = self.ranking.select(candidates)?;
        let entry = self.registry.entries().get(winner.index)?;

        tracing::debug!(
            entry_id = %entry.id,
            score = winner.score,
            "Scored trigger match"
        );

        Some(entry)
    }
}

impl Matcher for ScoredTriggerMatcher {
    fn name(&self) -> &str {
        "scored"
    }

    fn find(&self, query: &str) -> Option<QueryMatch> {
        self.best_match(query).map(ConversationEntry::to_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(entries: Vec<ConversationEntry>) -> ScoredTriggerMatcher {
        ScoredTriggerMatcher::new(Arc::new(ConversationRegistry::new(entries)))
    }

    #[test]
    fn test_score_formula() {
        let m = matcher(vec![ConversationEntry::new(
            "q1",
            &["schedule a 1-on-1", "coaching session with", "schedule 1-on-1"],
            "",
            "reply",
        )]);
        let scored = m
            .explain("Schedule a 1-on-1 coaching session with Marcus")
            .remove(0);
        assert_eq!(scored.matched, vec!["schedule a 1-on-1", "coaching session with"]);
        assert_eq!(scored.score, 17 + 21 + 20);
    }

    #[test]
    fn test_superset_dominates() {
        let m = matcher(vec![
            ConversationEntry::new("narrow", &["sla"], "", "narrow"),
            ConversationEntry::new("wide", &["sla", "breakdown"], "", "wide"),
        ]);
        assert_eq!(m.best_match("sla breakdown please").unwrap().id, "wide");
    }

    #[test]
    fn test_tie_goes_to_earlier_entry() {
        // "abcd" and "wxyz" both score 4 + 10
        let m = matcher(vec![
            ConversationEntry::new("first", &["abcd"], "", "first"),
            ConversationEntry::new("second", &["wxyz"], "", "second"),
        ]);
        assert_eq!(m.best_match("wxyz abcd").unwrap().id, "first");
        assert_eq!(m.best_match("abcd wxyz").unwrap().id, "first");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let m = matcher(vec![ConversationEntry::new(
            "sla",
            &["SLA Performance"],
            "",
            "reply",
        )]);
        assert_eq!(
            m.find("  Show Me SLA Performance Breakdown  "),
            m.find("show me sla performance breakdown")
        );
        assert!(m.find("show me sla performance breakdown").is_some());
    }

    #[test]
    fn test_substring_not_word_aware() {
        let m = matcher(vec![ConversationEntry::new("book", &["schedule"], "", "reply")]);
        assert!(m.best_match("please reschedule").is_some());
    }

    #[test]
    fn test_no_match() {
        let m = matcher(vec![ConversationEntry::new("a", &["alpha"], "", "reply")]);
        assert!(m.find("beta").is_none());
        assert!(m.find("").is_none());
        assert!(matcher(vec![]).find("alpha").is_none());
    }

    #[test]
    fn test_priority_ranking_override() {
        let m = matcher(vec![
            ConversationEntry::new("short", &["sla"], "", "short"),
            ConversationEntry::new("long", &["sla performance"], "", "long"),
        ])
        .with_ranking(Ranking::ByPriority);
        assert_eq!(m.best_match("sla performance").unwrap().id, "short");
    }
}
