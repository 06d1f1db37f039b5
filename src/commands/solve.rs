//! Board solving command
//!
//! Lists every word that can be spelled on a board.

use crate::grid::{Grid, GridError};
use crate::lexicon::Lexicon;
use crate::solver::{Candidate, find_words};
use std::time::{Duration, Instant};

/// Result of solving a board
pub struct SolveResult {
    pub grid: Grid,
    pub candidates: Vec<Candidate>,
    pub duration: Duration,
}

impl SolveResult {
    /// Best possible single move
    #[must_use]
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Longest word on the board, highest score first on ties
    #[must_use]
    pub fn longest(&self) -> Option<&Candidate> {
        self.candidates.iter().reduce(|best, c| {
            if c.len() > best.len() { c } else { best }
        })
    }
}

/// Find all words on `grid`
#[must_use]
pub fn solve_board(grid: Grid, lexicon: &Lexicon) -> SolveResult {
    let start = Instant::now();
    let candidates = find_words(&grid, lexicon);
    SolveResult {
        grid,
        candidates,
        duration: start.elapsed(),
    }
}

/// Parse a board given on the command line
///
/// Rows are separated by `,` or `/` and use the layout symbols
/// (letters, `*` for a wildcard, `.` for an empty cell).
///
/// # Errors
///
/// Returns `GridError` if the rows do not form a valid layout.
///
/// # Examples
/// ```
/// use word_popper::commands::parse_board;
///
/// let grid = parse_board("cat/d*g").unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// ```
pub fn parse_board(text: &str) -> Result<Grid, GridError> {
    let rows: Vec<String> = text
        .split([',', '/'])
        .map(|row| row.trim().to_lowercase())
        .filter(|row| !row.is_empty())
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Grid::from_layout(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_lists_words_best_first() {
        let grid = parse_board("cat,xyz").unwrap();
        let lexicon = Lexicon::from_words(["cat", "tax", "at"]);
        let result = solve_board(grid, &lexicon);
        let words: Vec<&str> = result.candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, ["tax", "cat", "at"]);
        assert_eq!(result.best().unwrap().word, "tax");
    }

    #[test]
    fn longest_prefers_length() {
        let grid = parse_board("stone").unwrap();
        let lexicon = Lexicon::from_words(["stone", "one", "to"]);
        let result = solve_board(grid, &lexicon);
        assert_eq!(result.longest().unwrap().word, "stone");
    }

    #[test]
    fn parse_board_accepts_both_separators() {
        let grid = parse_board(" CAT / d*g ,").unwrap();
        assert_eq!(grid.layout(), vec!["cat", "d*g"]);
    }

    #[test]
    fn parse_board_rejects_ragged_rows() {
        assert!(matches!(
            parse_board("cat,do"),
            Err(GridError::Ragged { row: 1, .. })
        ));
        assert!(matches!(parse_board(" , "), Err(GridError::Empty)));
    }
}
