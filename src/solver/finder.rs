//! Exhaustive word search over a board
//!
//! Depth-first search from every live tile through Chebyshev-adjacent
//! neighbours, pruned as soon as the letters so far stop being a prefix of
//! any lexicon word.

use crate::core::{Letter, TileId, score_tiles};
use crate::grid::Grid;
use crate::lexicon::Lexicon;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Shortest word the finder reports
pub const MIN_WORD_LEN: usize = 2;

/// A word that can be spelled on the board, with the path that scores best
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub path: Vec<TileId>,
    pub score: u32,
}

impl Candidate {
    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Does the path use a wildcard tile?
    #[must_use]
    pub fn uses_wild(&self, grid: &Grid) -> bool {
        self.path.iter().any(|&id| grid.tile(id).letter().is_wild())
    }
}

type Found = FxHashMap<String, Candidate>;

/// Find every lexicon word spelled by a path of adjacent live tiles
///
/// Wildcards try every letter. Each word appears once, with its
/// highest-scoring path. Results are sorted by score (highest first), then
/// alphabetically.
///
/// A wildcard path committed through a session may resolve to a different
/// word of the same pattern; it scores the same because the score depends
/// only on the tiles.
///
/// # Examples
/// ```
/// use word_popper::grid::Grid;
/// use word_popper::lexicon::Lexicon;
/// use word_popper::solver::find_words;
///
/// let grid = Grid::from_layout(&["ca", "xt"]).unwrap();
/// let lexicon = Lexicon::from_words(["cat", "act", "tax"]);
/// let words: Vec<String> = find_words(&grid, &lexicon)
///     .into_iter()
///     .map(|c| c.word)
///     .collect();
/// assert_eq!(words, ["tax", "act", "cat"]);
/// ```
#[must_use]
pub fn find_words(grid: &Grid, lexicon: &Lexicon) -> Vec<Candidate> {
    let starts: Vec<TileId> = grid.live_tiles().map(|tile| tile.id()).collect();

    let found = starts
        .par_iter()
        .map(|&start| {
            let mut found = Found::default();
            let mut path = Vec::new();
            let mut word = String::new();
            search(grid, lexicon, start, &mut path, &mut word, &mut found);
            found
        })
        .reduce(Found::default, merge);

    let mut candidates: Vec<Candidate> = found.into_values().collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    candidates
}

fn merge(mut left: Found, right: Found) -> Found {
    for (word, candidate) in right {
        record(&mut left, word, candidate);
    }
    left
}

fn record(found: &mut Found, word: String, candidate: Candidate) {
    match found.get(&word) {
        Some(existing) if existing.score >= candidate.score => {}
        _ => {
            found.insert(word, candidate);
        }
    }
}

fn search(
    grid: &Grid,
    lexicon: &Lexicon,
    id: TileId,
    path: &mut Vec<TileId>,
    word: &mut String,
    found: &mut Found,
) {
    path.push(id);
    match grid.tile(id).letter() {
        Letter::Plain(c) => extend(grid, lexicon, id, c, path, word, found),
        Letter::Wild => {
            for c in 'a'..='z' {
                extend(grid, lexicon, id, c, path, word, found);
            }
        }
    }
    path.pop();
}

/// Spell `c` with tile `id` (already on `path`) and keep searching
fn extend(
    grid: &Grid,
    lexicon: &Lexicon,
    id: TileId,
    c: char,
    path: &mut Vec<TileId>,
    word: &mut String,
    found: &mut Found,
) {
    word.push(c);
    if lexicon.has_prefix(word) {
        if word.len() >= MIN_WORD_LEN && lexicon.contains(word) {
            let score = score_tiles(path.iter().map(|&id| grid.tile(id)));
            let candidate = Candidate {
                word: word.clone(),
                path: path.clone(),
                score,
            };
            record(found, word.clone(), candidate);
        }

        let (row, col) = grid.tile(id).position();
        for next in neighbours(grid, row, col) {
            if !path.contains(&next) {
                search(grid, lexicon, next, path, word, found);
            }
        }
    }
    word.pop();
}

fn neighbours(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = TileId> + '_ {
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.id_at(r, c)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.word.as_str()).collect()
    }

    #[test]
    fn finds_words_along_adjacent_paths() {
        let grid = Grid::from_layout(&["cat", "xyz"]).unwrap();
        let lexicon = Lexicon::from_words(["cat", "act", "tax", "zit"]);
        let found = find_words(&grid, &lexicon);
        // "act" would need C and T to touch
        assert_eq!(words(&found), ["tax", "cat"]);
        assert_eq!(found[0].score, 15);
    }

    #[test]
    fn does_not_reuse_tiles() {
        let grid = Grid::from_layout(&["ab"]).unwrap();
        let lexicon = Lexicon::from_words(["aba", "ab"]);
        assert_eq!(words(&find_words(&grid, &lexicon)), ["ab"]);
    }

    #[test]
    fn does_not_jump_between_distant_tiles() {
        let grid = Grid::from_layout(&["c.t", "..a"]).unwrap();
        let lexicon = Lexicon::from_words(["cat"]);
        assert!(find_words(&grid, &lexicon).is_empty());
    }

    #[test]
    fn wildcards_try_every_letter() {
        let grid = Grid::from_layout(&["c*t"]).unwrap();
        let lexicon = Lexicon::from_words(["cat", "cot", "cut"]);
        let found = find_words(&grid, &lexicon);
        assert_eq!(words(&found), ["cat", "cot", "cut"]);
        assert!(found.iter().all(|c| c.score == 6 && c.uses_wild(&grid)));
    }

    #[test]
    fn keeps_best_scoring_path() {
        // "at" can use the wildcard or the real A; the real A scores more
        let grid = Grid::from_layout(&["*t", "a."]).unwrap();
        let lexicon = Lexicon::from_words(["at"]);
        let found = find_words(&grid, &lexicon);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].score, 2);
        assert_eq!(found[0].path[0], grid.id_at(1, 0).unwrap());
    }

    #[test]
    fn empty_board_has_no_words() {
        let grid = Grid::from_layout(&["..", ".."]).unwrap();
        assert!(find_words(&grid, &Lexicon::embedded()).is_empty());
    }

    #[test]
    fn candidates_are_committable_paths() {
        let grid = Grid::new(5, 5, &mut crate::letters::LetterSource::from_seed(3));
        let lexicon = Lexicon::embedded();
        for candidate in find_words(&grid, &lexicon) {
            for pair in candidate.path.windows(2) {
                assert!(grid.tile(pair[0]).is_adjacent(grid.tile(pair[1])));
            }
            let letters: Vec<Letter> = candidate
                .path
                .iter()
                .map(|&id| grid.tile(id).letter())
                .collect();
            assert!(lexicon.resolve(&letters).is_some());
        }
    }
}
