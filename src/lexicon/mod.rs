//! The lexicon of valid words
//!
//! An immutable word set loaded once at startup. Besides exact membership it
//! answers prefix queries (for the word finder) and wildcard pattern queries
//! (for resolving selections that contain wildcard tiles).

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Letter, spell};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Set of valid lowercase words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<Box<str>>,
    sorted: Vec<Box<str>>,
    by_length: FxHashMap<usize, Vec<Box<str>>>,
}

impl Lexicon {
    /// Build a lexicon from any list of words
    ///
    /// Words are trimmed and lowercased; blank entries and entries containing
    /// anything other than ASCII letters are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_popper::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["Cat", " dog ", "", "x-ray"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("CAT"));
    /// assert!(!lexicon.contains("x-ray"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<Box<str>> = words
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();

        let mut sorted: Vec<Box<str>> = words.iter().cloned().collect();
        sorted.sort_unstable();

        let mut by_length: FxHashMap<usize, Vec<Box<str>>> = FxHashMap::default();
        for word in &sorted {
            by_length.entry(word.len()).or_default().push(word.clone());
        }

        Self {
            words,
            sorted,
            by_length,
        }
    }

    /// The lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact, case-insensitive membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Does any word start with `prefix`? (`prefix` must be lowercase)
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let idx = self.sorted.partition_point(|w| **w < *prefix);
        self.sorted
            .get(idx)
            .is_some_and(|w| w.starts_with(prefix))
    }

    /// First word, in lexicographic order, matching `pattern` letter for letter
    ///
    /// Only words of the same length are considered; wildcard positions match
    /// any letter. Lexicographic order makes the choice deterministic when
    /// several words fit.
    #[must_use]
    pub fn find_pattern(&self, pattern: &[Letter]) -> Option<&str> {
        self.by_length
            .get(&pattern.len())?
            .par_iter()
            .find_first(|word| {
                word.chars()
                    .zip(pattern)
                    .all(|(c, letter)| letter.matches(c))
            })
            .map(|w| &**w)
    }

    /// Resolve a selection's letters to a lexicon word
    ///
    /// Without wildcards this is exact membership; with wildcards it is a
    /// pattern search (see [`Lexicon::find_pattern`]).
    ///
    /// # Examples
    /// ```
    /// use word_popper::core::Letter;
    /// use word_popper::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["cat", "cot"]);
    /// let c_t = [Letter::Plain('c'), Letter::Wild, Letter::Plain('t')];
    /// assert_eq!(lexicon.resolve(&c_t), Some("cat"));
    /// ```
    #[must_use]
    pub fn resolve(&self, letters: &[Letter]) -> Option<&str> {
        if letters.is_empty() {
            return None;
        }
        if letters.iter().any(|l| l.is_wild()) {
            return self.find_pattern(letters);
        }
        self.words.get(spell(letters).as_str()).map(|w| &**w)
    }

    /// All words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sorted.iter().map(|w| &**w)
    }
}

fn normalize(word: &str) -> Option<Box<str>> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase().into_boxed_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().map(|c| Letter::from_char(c).unwrap()).collect()
    }

    #[test]
    fn exact_membership() {
        let lexicon = Lexicon::from_words(["cat", "act"]);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("Act"));
        assert!(!lexicon.contains("tac"));
    }

    #[test]
    fn duplicates_collapse() {
        let lexicon = Lexicon::from_words(["cat", "CAT", "cat "]);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn prefix_queries() {
        let lexicon = Lexicon::from_words(["cater", "dog"]);
        assert!(lexicon.has_prefix("c"));
        assert!(lexicon.has_prefix("cat"));
        assert!(lexicon.has_prefix("cater"));
        assert!(!lexicon.has_prefix("caters"));
        assert!(!lexicon.has_prefix("e"));
        assert!(lexicon.has_prefix(""));
    }

    #[test]
    fn pattern_requires_equal_length() {
        let lexicon = Lexicon::from_words(["cats", "cat"]);
        assert_eq!(lexicon.find_pattern(&letters("c*t")), Some("cat"));
        assert_eq!(lexicon.find_pattern(&letters("c*ts")), Some("cats"));
        assert_eq!(lexicon.find_pattern(&letters("c*")), None);
    }

    #[test]
    fn pattern_resolution_is_lexicographic() {
        let lexicon = Lexicon::from_words(["cut", "cot", "cat"]);
        assert_eq!(lexicon.find_pattern(&letters("c*t")), Some("cat"));
        assert_eq!(lexicon.find_pattern(&letters("***")), Some("cat"));
    }

    #[test]
    fn resolve_exact_without_wildcards() {
        let lexicon = Lexicon::from_words(["cat"]);
        assert_eq!(lexicon.resolve(&letters("cat")), Some("cat"));
        assert_eq!(lexicon.resolve(&letters("cot")), None);
        assert_eq!(lexicon.resolve(&[]), None);
    }

    #[test]
    fn resolve_with_wildcard_uses_pattern() {
        let lexicon = Lexicon::from_words(["cat"]);
        assert_eq!(lexicon.resolve(&letters("c*t")), Some("cat"));
        assert_eq!(lexicon.resolve(&letters("d*g")), None);
    }

    #[test]
    fn embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded();
        assert_eq!(lexicon.len(), WORDS_COUNT);
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("dog"));
        assert!(lexicon.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }
}
