//! Word scoring
//!
//! A word is worth the sum of its letter scores scaled by half its length,
//! so longer words pay off superlinearly.

use super::Tile;

/// Score a word from its per-tile letter scores, in selection order
///
/// `total = floor(sum * count / 2)`. Scores are whole points; when
/// `sum * count` is odd the half point is dropped. This is the same value as
/// `sum + bonus` with `bonus = floor(sum * count / 2) - sum`.
///
/// # Examples
/// ```
/// use word_popper::core::score_word;
///
/// // C(3) A(1) T(1): 5 * 3 / 2 = 7.5 -> 7
/// assert_eq!(score_word(&[3, 1, 1]), 7);
/// assert_eq!(score_word(&[]), 0);
/// ```
#[must_use]
pub fn score_word(letter_scores: &[u32]) -> u32 {
    let sum: u32 = letter_scores.iter().sum();
    let count = letter_scores.len() as u32;
    sum * count / 2
}

/// Score a selection of tiles using each tile's current score
#[must_use]
pub fn score_tiles<'a, I>(tiles: I) -> u32
where
    I: IntoIterator<Item = &'a Tile>,
{
    let scores: Vec<u32> = tiles.into_iter().map(Tile::score).collect();
    score_word(&scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, TileId};

    #[test]
    fn empty_selection_scores_zero() {
        assert_eq!(score_word(&[]), 0);
    }

    #[test]
    fn single_letter_is_halved() {
        assert_eq!(score_word(&[4]), 2);
        assert_eq!(score_word(&[1]), 0);
    }

    #[test]
    fn length_bonus_scales_with_count() {
        // sum 8, count 4 -> 16
        assert_eq!(score_word(&[1, 1, 3, 3]), 16);
        // sum 10, count 5 -> 25
        assert_eq!(score_word(&[2, 2, 2, 2, 2]), 25);
    }

    #[test]
    fn odd_products_truncate() {
        // sum 5, count 3 -> 7 (7.5 truncated)
        assert_eq!(score_word(&[3, 1, 1]), 7);
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(score_word(&[1, 3, 1]), score_word(&[3, 1, 1]));
    }

    #[test]
    fn scoring_is_repeatable() {
        let scores = [4, 1, 8, 1];
        assert_eq!(score_word(&scores), score_word(&scores));
    }

    #[test]
    fn wildcards_contribute_nothing_but_length() {
        let tiles = [
            Tile::new(TileId(0), Letter::Plain('c'), 0, 0),
            Tile::new(TileId(1), Letter::Wild, 1, 0),
            Tile::new(TileId(2), Letter::Plain('t'), 2, 0),
        ];
        // (3 + 0 + 1) * 3 / 2 = 6
        assert_eq!(score_tiles(&tiles), 6);
    }
}
