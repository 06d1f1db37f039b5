//! Letter representation
//!
//! A tile carries either a plain lowercase Latin letter or the wildcard, which
//! stands in for any single letter during word resolution and scores nothing.

use std::fmt;

/// Symbol used to display and parse the wildcard
pub const WILD_SYMBOL: char = '*';

/// Scrabble tile counts, used as draw weights for plain letters
const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('a', 9),
    ('b', 2),
    ('c', 2),
    ('d', 4),
    ('e', 12),
    ('f', 2),
    ('g', 3),
    ('h', 2),
    ('i', 9),
    ('j', 1),
    ('k', 1),
    ('l', 4),
    ('m', 2),
    ('n', 6),
    ('o', 8),
    ('p', 2),
    ('q', 1),
    ('r', 6),
    ('s', 4),
    ('t', 6),
    ('u', 4),
    ('v', 2),
    ('w', 2),
    ('x', 1),
    ('y', 2),
    ('z', 1),
];

/// Draw weight of the wildcard (two blanks in a Scrabble bag)
const WILD_WEIGHT: u32 = 2;

/// Scrabble letter values, indexed by `letter - 'a'`
const LETTER_SCORES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// A tile letter: a plain lowercase letter or the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Plain(char),
    Wild,
}

/// Error type for unparseable letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    Unsupported(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(c) => {
                write!(f, "Unsupported letter '{c}': expected a-z or '{WILD_SYMBOL}'")
            }
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Parse a letter from a character
    ///
    /// Accepts ASCII letters in either case and the wildcard symbol.
    ///
    /// # Errors
    /// Returns `LetterError::Unsupported` for any other character.
    ///
    /// # Examples
    /// ```
    /// use word_popper::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Q').unwrap(), Letter::Plain('q'));
    /// assert_eq!(Letter::from_char('*').unwrap(), Letter::Wild);
    /// assert!(Letter::from_char('7').is_err());
    /// ```
    pub const fn from_char(c: char) -> Result<Self, LetterError> {
        if c == WILD_SYMBOL {
            return Ok(Self::Wild);
        }
        if c.is_ascii_alphabetic() {
            return Ok(Self::Plain(c.to_ascii_lowercase()));
        }
        Err(LetterError::Unsupported(c))
    }

    /// The character contributed to a word: the letter itself, or the wildcard symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plain(c) => c,
            Self::Wild => WILD_SYMBOL,
        }
    }

    /// Point value of this letter (wildcard scores zero)
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Plain(c) => LETTER_SCORES[(c as u8 - b'a') as usize],
            Self::Wild => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Self::Wild)
    }

    /// Does this letter match `c` at the same position of a candidate word?
    #[inline]
    #[must_use]
    pub const fn matches(self, c: char) -> bool {
        match self {
            Self::Plain(p) => p == c,
            Self::Wild => true,
        }
    }

    /// The full draw table: 26 letters plus the wildcard, with weights
    #[must_use]
    pub fn frequency_table() -> Vec<(Self, u32)> {
        LETTER_WEIGHTS
            .iter()
            .map(|&(c, w)| (Self::Plain(c), w))
            .chain(std::iter::once((Self::Wild, WILD_WEIGHT)))
            .collect()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().to_ascii_uppercase())
    }
}

/// Concatenate letter symbols in order (wildcards stay as `*`)
#[must_use]
pub fn spell(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Letter::from_char('a'), Ok(Letter::Plain('a')));
        assert_eq!(Letter::from_char('A'), Ok(Letter::Plain('a')));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(Letter::from_char('.'), Err(LetterError::Unsupported('.')));
        assert_eq!(Letter::from_char('é'), Err(LetterError::Unsupported('é')));
    }

    #[test]
    fn scores_follow_scrabble_values() {
        assert_eq!(Letter::Plain('a').score(), 1);
        assert_eq!(Letter::Plain('c').score(), 3);
        assert_eq!(Letter::Plain('q').score(), 10);
        assert_eq!(Letter::Plain('z').score(), 10);
        assert_eq!(Letter::Wild.score(), 0);
    }

    #[test]
    fn frequency_table_has_27_symbols() {
        let table = Letter::frequency_table();
        assert_eq!(table.len(), 27);
        assert_eq!(table.iter().map(|(_, w)| w).sum::<u32>(), 100);
        assert!(table.contains(&(Letter::Wild, 2)));
    }

    #[test]
    fn wild_matches_anything() {
        assert!(Letter::Wild.matches('x'));
        assert!(Letter::Plain('x').matches('x'));
        assert!(!Letter::Plain('x').matches('y'));
    }

    #[test]
    fn spell_keeps_wild_symbol() {
        let letters = [Letter::Plain('c'), Letter::Wild, Letter::Plain('t')];
        assert_eq!(spell(&letters), "c*t");
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(format!("{}", Letter::Plain('k')), "K");
        assert_eq!(format!("{}", Letter::Wild), "*");
    }
}
