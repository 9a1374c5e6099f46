//! Shared matcher contract
//!
//! Both the scored trigger catalog and the persona rule chains answer the
//! same question: which of an ordered set of candidates applies to this
//! text. They differ only in how a winner is picked, which is what
//! [`Ranking`] captures.

use deskmate_core::QueryMatch;

/// A candidate that fired for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Declaration index in the owning catalog or chain
    pub index: usize,
    /// Strength of the hit; ignored by [`Ranking::ByPriority`]
    pub score: usize,
}

impl Candidate {
    pub fn new(index: usize, score: usize) -> Self {
        Self { index, score }
    }
}

/// How a winner is chosen among the candidates that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// Highest score wins; on a tie the earlier declaration wins
    ByScore,
    /// First declared candidate wins; scores are not consulted
    #[default]
    ByPriority,
}

impl Ranking {
    /// Pick the winner from candidates yielded in declaration order.
    ///
    /// `ByPriority` stops pulling from the iterator at the first candidate,
    /// so lazily evaluated predicates after the winner never run.
    pub fn select<I>(self, candidates: I) -> Option<Candidate>
    where
        I: IntoIterator<Item = Candidate>,
    {
        match self {
            Ranking::ByPriority => candidates.into_iter().next(),
            Ranking::ByScore => candidates.into_iter().fold(None, |best, candidate| match best {
                Some(current) if !Self::beats(candidate, current) => Some(current),
                _ => Some(candidate),
            }),
        }
    }

    fn beats(candidate: Candidate, current: Candidate) -> bool {
        candidate.score > current.score
            || (candidate.score == current.score && candidate.index < current.index)
    }
}

/// Anything that resolves free text to a canned reply
pub trait Matcher: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Resolve a raw query. `None` means nothing applies; callers supply
    /// their own fallback.
    fn find(&self, query: &str) -> Option<QueryMatch>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(scores: &[(usize, usize)]) -> Vec<Candidate> {
        scores.iter().map(|&(i, s)| Candidate::new(i, s)).collect()
    }

    #[test]
    fn test_by_score_picks_maximum() {
        let winner = Ranking::ByScore.select(candidates(&[(0, 18), (2, 57), (5, 30)]));
        assert_eq!(winner, Some(Candidate::new(2, 57)));
    }

    #[test]
    fn test_by_score_tie_goes_to_earlier() {
        let winner = Ranking::ByScore.select(candidates(&[(1, 20), (3, 20), (4, 12)]));
        assert_eq!(winner.map(|c| c.index), Some(1));

        // Independent of yield order
        let winner = Ranking::ByScore.select(candidates(&[(3, 20), (1, 20)]));
        assert_eq!(winner.map(|c| c.index), Some(1));
    }

    #[test]
    fn test_by_priority_takes_first() {
        let winner = Ranking::ByPriority.select(candidates(&[(4, 1), (6, 99)]));
        assert_eq!(winner, Some(Candidate::new(4, 1)));
    }

    #[test]
    fn test_by_priority_is_lazy() {
        let mut pulled = 0;
        let stream = (0..10).map(|i| {
            pulled += 1;
            Candidate::new(i, 0)
        });
        assert_eq!(Ranking::ByPriority.select(stream).map(|c| c.index), Some(0));
        assert_eq!(pulled, 1);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(Ranking::ByScore.select(Vec::new()), None);
        assert_eq!(Ranking::ByPriority.select(Vec::new()), None);
    }
}
