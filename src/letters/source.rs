//! Seedable letter generator

use crate::core::Letter;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Draws letters (and wildcards) weighted by the frequency table
///
/// The generator is an explicit seeded RNG owned by the source, so two
/// sources built from the same seed produce the same letter sequence.
pub struct LetterSource {
    rng: StdRng,
    letters: Vec<Letter>,
    dist: WeightedIndex<u32>,
}

impl LetterSource {
    /// Create a source from a numeric seed
    ///
    /// # Panics
    /// Will not panic - the frequency table is a non-empty set of positive weights.
    ///
    /// # Examples
    /// ```
    /// use word_popper::letters::LetterSource;
    ///
    /// let mut a = LetterSource::from_seed(42);
    /// let mut b = LetterSource::from_seed(42);
    /// assert_eq!(a.next_letter(), b.next_letter());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a source from a seed string such as a date (`"2026-10-19"`)
    #[must_use]
    pub fn from_seed_str(seed: &str) -> Self {
        Self::from_seed(seed_from_str(seed))
    }

    /// Create a source seeded from the thread RNG
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    fn with_rng(rng: StdRng) -> Self {
        let table = Letter::frequency_table();
        let letters = table.iter().map(|&(letter, _)| letter).collect();
        let dist = WeightedIndex::new(table.iter().map(|&(_, weight)| weight))
            .expect("frequency table has positive weights");
        Self { rng, letters, dist }
    }

    /// Draw the next letter
    pub fn next_letter(&mut self) -> Letter {
        self.letters[self.dist.sample(&mut self.rng)]
    }
}

impl Iterator for LetterSource {
    type Item = Letter;

    fn next(&mut self) -> Option<Letter> {
        Some(self.next_letter())
    }
}

/// Stable 64-bit seed for a seed string
///
/// Uses `FxHasher`, which carries no per-process random state.
#[must_use]
pub fn seed_from_str(seed: &str) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(seed.trim().as_bytes());
    hasher.finish()
}
