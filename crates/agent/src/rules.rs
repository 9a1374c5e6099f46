//! Cascading rule chains
//!
//! A chain first looks the normalized query up in its exact-phrase table,
//! then walks its rules top to bottom and returns the outcome of the first
//! rule whose predicate holds. Rule order is the priority: specific rules
//! must be declared before the general ones they overlap with.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use deskmate_core::{normalize, QueryMatch};

use crate::matcher::{Candidate, Matcher, Ranking};

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid number pattern"));

/// Boolean test over normalized query text
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Literal substring (stored lower-cased)
    Contains(String),
    AllOf(Vec<Predicate>),
    AnyOf(Vec<Predicate>),
    Not(Box<Predicate>),
    Pattern(Regex),
}

impl Predicate {
    pub fn evaluate(&self, text: &str) -> bool {
        match self {
            Predicate::Contains(needle) => text.contains(needle.as_str()),
            Predicate::AllOf(parts) => parts.iter().all(|p| p.evaluate(text)),
            Predicate::AnyOf(parts) => parts.iter().any(|p| p.evaluate(text)),
            Predicate::Not(inner) => !inner.evaluate(text),
            Predicate::Pattern(regex) => regex.is_match(text),
        }
    }
}

pub fn contains(needle: &str) -> Predicate {
    Predicate::Contains(needle.to_lowercase())
}

/// Any of the given phrases
pub fn contains_any(needles: &[&str]) -> Predicate {
    Predicate::AnyOf(needles.iter().map(|n| contains(n)).collect())
}

pub fn all(parts: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::AllOf(parts.into_iter().collect())
}

pub fn any(parts: impl IntoIterator<Item = Predicate>) -> Predicate {
    Predicate::AnyOf(parts.into_iter().collect())
}

pub fn not(inner: Predicate) -> Predicate {
    Predicate::Not(Box::new(inner))
}

pub fn pattern(regex: &Regex) -> Predicate {
    Predicate::Pattern(regex.clone())
}

/// Text contains a run of ASCII digits
pub fn has_number() -> Predicate {
    pattern(&NUMBER)
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub when: Predicate,
    pub outcome: QueryMatch,
}

/// Exact-phrase table plus ordered rules for one persona
#[derive(Debug, Clone)]
pub struct RuleChain {
    name: String,
    exact: HashMap<String, QueryMatch>,
    rules: Vec<Rule>,
    ranking: Ranking,
}

impl RuleChain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exact: HashMap::new(),
            rules: Vec::new(),
            ranking: Ranking::ByPriority,
        }
    }

    /// Pin a phrase to an outcome. The phrase is normalized on insert.
    pub fn exact(mut self, phrase: &str, outcome: QueryMatch) -> Self {
        self.exact.insert(normalize(phrase), outcome);
        self
    }

    /// Append a rule after every rule declared so far
    pub fn rule(mut self, name: impl Into<String>, when: Predicate, outcome: QueryMatch) -> Self {
        self.rules.push(Rule {
            name: name.into(),
            when,
            outcome,
        });
        self
    }

    pub fn with_ranking(mut self, ranking: Ranking) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn exact_phrases(&self) -> impl Iterator<Item = &str> {
        self.exact.keys().map(String::as_str)
    }

    /// Names of every rule whose predicate holds, in declaration order.
    /// Ignores the exact table.
    pub fn fired(&self, query: &str) -> Vec<&str> {
        let normalized = normalize(query);
        self.rules
            .iter()
            .filter(|rule| rule.when.evaluate(&normalized))
            .map(|rule| rule.name.as_str())
            .collect()
    }

    pub fn detect(&self, query: &str) -> Option<QueryMatch> {
        let normalized = normalize(query);

        if let Some(outcome) = self.exact.get(&normalized) {
            tracing::debug!(chain = %self.name, phrase = %normalized, "Exact phrase match");
            return Some(outcome.clone());
        }

        let candidates = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.when.evaluate(&normalized))
            .map(|(index, _)| Candidate::new(index, 0));

        let winner = self.ranking.select(candidates)?;
        let rule = self.rules.get(winner.index)?;

        tracing::debug!(chain = %self.name, rule = %rule.name, "Rule match");

        Some(rule.outcome.clone())
    }
}

impl Matcher for RuleChain {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, query: &str) -> Option<QueryMatch> {
        self.detect(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> RuleChain {
        RuleChain::new("test")
            .exact("Which categories are we failing", QueryMatch::text("exact"))
            .rule(
                "failing",
                all([contains("which categories"), contains("failing")]),
                QueryMatch::text("failing"),
            )
            .rule(
                "general",
                any([contains("categories"), contains("sla")]),
                QueryMatch::text("general"),
            )
            .rule(
                "ticket-number",
                all([contains("ticket"), has_number()]),
                QueryMatch::text("ticket"),
            )
    }

    #[test]
    fn test_exact_before_rules() {
        let chain = chain();
        let hit = chain.detect("  WHICH categories are we failing ").unwrap();
        assert_eq!(hit.response_text, "exact");
        // Rules would also fire for it
        assert_eq!(chain.fired("which categories are we failing"), vec!["failing", "general"]);
    }

    #[test]
    fn test_first_declared_rule_wins() {
        let chain = chain();
        let hit = chain.detect("which categories are failing today").unwrap();
        assert_eq!(hit.response_text, "failing");
        assert_eq!(chain.detect("sla categories").unwrap().response_text, "general");
    }

    #[test]
    fn test_number_pattern() {
        let chain = chain();
        assert_eq!(chain.detect("ticket 4521").unwrap().response_text, "ticket");
        assert!(chain.detect("ticket please").is_none());
    }

    #[test]
    fn test_number_is_ascii_only() {
        assert!(has_number().evaluate("ticket 42"));
        assert!(!has_number().evaluate("ticket ४२"));
        assert!(!has_number().evaluate("ticket ٣"));
    }

    #[test]
    fn test_predicates() {
        assert!(not(contains("summary")).evaluate("good morning"));
        assert!(!not(contains("summary")).evaluate("morning summary"));
        assert!(contains_any(&["a1", "b2"]).evaluate("xx b2"));
        assert!(all(Vec::new()).evaluate("x"));
        assert!(!any(Vec::new()).evaluate("x"));
        // Needles are lower-cased to match normalized text
        assert!(contains("KB").evaluate("open kb"));
    }

    #[test]
    fn test_score_ranking_keeps_declaration_order() {
        let chain = chain().with_ranking(Ranking::ByScore);
        assert_eq!(
            chain.detect("which categories failing").unwrap().response_text,
            "failing"
        );
    }

    #[test]
    fn test_no_rule_fires() {
        assert!(chain().detect("what's the weather today?").is_none());
        assert!(chain().find("").is_none());
    }
}
