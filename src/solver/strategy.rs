//! Move selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::Candidate;

/// A strategy for choosing which word to play next
pub trait Strategy {
    /// Pick one of the candidates found on the board
    ///
    /// Candidates arrive sorted by score (highest first), then alphabetically.
    /// Returns `None` if there is nothing to play.
    fn choose<'a>(&self, candidates: &'a [Candidate]) -> Option<&'a Candidate>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Greedy: the highest-scoring word (default)
    HighestScore(HighestScore),
    /// Clear as many tiles per move as possible
    LongestWord(LongestWord),
    /// Any word at random
    Random(RandomPick),
}

impl Strategy for StrategyType {
    fn choose<'a>(&self, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
        match self {
            Self::HighestScore(s) => s.choose(candidates),
            Self::LongestWord(s) => s.choose(candidates),
            Self::Random(s) => s.choose(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "highest", "score", "longest", "random".
    /// Defaults to highest-score if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "longest" => Self::LongestWord(LongestWord),
            "random" => Self::Random(RandomPick),
            _ => Self::HighestScore(HighestScore),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HighestScore(_) => "highest",
            Self::LongestWord(_) => "longest",
            Self::Random(_) => "random",
        }
    }
}

/// Always plays the highest-scoring word, alphabetically first on ties
pub struct HighestScore;

impl Strategy for HighestScore {
    fn choose<'a>(&self, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
        candidates
            .iter()
            .reduce(|best, c| if c.score > best.score { c } else { best })
    }
}

/// Plays the longest word, breaking ties by score
pub struct LongestWord;

impl Strategy for LongestWord {
    fn choose<'a>(&self, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
        candidates.iter().reduce(|best, c| {
            if (c.len(), c.score) > (best.len(), best.score) {
                c
            } else {
                best
            }
        })
    }
}

/// Random strategy
///
/// Baseline for comparing the other strategies in simulations.
pub struct RandomPick;

impl Strategy for RandomPick {
    fn choose<'a>(&self, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    fn candidate(word: &str, score: u32) -> Candidate {
        Candidate {
            word: word.to_string(),
            path: (0..word.len()).map(TileId).collect(),
            score,
        }
    }

    fn setup_test_data() -> Vec<Candidate> {
        vec![
            candidate("jab", 18),
            candidate("zoo", 18),
            candidate("stone", 12),
            candidate("cat", 7),
        ]
    }

    #[test]
    fn highest_score_prefers_first_on_ties() {
        let candidates = setup_test_data();
        let choice = HighestScore.choose(&candidates).unwrap();
        assert_eq!(choice.word, "jab");
    }

    #[test]
    fn longest_word_prefers_length() {
        let candidates = setup_test_data();
        let choice = LongestWord.choose(&candidates).unwrap();
        assert_eq!(choice.word, "stone");
    }

    #[test]
    fn random_picks_a_candidate() {
        let candidates = setup_test_data();
        let choice = RandomPick.choose(&candidates).unwrap();
        assert!(candidates.contains(choice));
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        assert!(HighestScore.choose(&[]).is_none());
        assert!(LongestWord.choose(&[]).is_none());
        assert!(RandomPick.choose(&[]).is_none());
    }

    #[test]
    fn from_name_defaults_to_highest() {
        assert_eq!(StrategyType::from_name("longest").name(), "longest");
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("whatever").name(), "highest");
    }
}
