//! Computer play: repeatedly find words and commit them

use super::{Strategy, find_words};
use crate::session::{FoundWord, Session};
use log::debug;

/// Outcome of an automatically played game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub words: Vec<FoundWord>,
    pub tiles_left: usize,
    pub hints_used: u32,
}

impl GameSummary {
    /// Did the game pop every tile?
    #[must_use]
    pub const fn cleared(&self) -> bool {
        self.tiles_left == 0
    }
}

/// Play `session` to the end with `strategy`
///
/// Each turn commits the candidate the strategy picks. When no word can be
/// spelled and hints remain, the highest-scoring live tile is turned into a
/// wildcard and the search retried. Play stops when the board is empty or
/// no move is possible.
pub fn autoplay<S: Strategy>(session: &mut Session<'_>, strategy: &S) -> GameSummary {
    let start_hints = session.hints();
    let start_words = session.found().len();

    while !session.is_over() {
        let candidates = find_words(session.grid(), session.lexicon());
        if let Some(choice) = strategy.choose(&candidates) {
            debug!("Playing {} for {}", choice.word, choice.score);
            if session.play_path(&choice.path).is_none() {
                break;
            }
            continue;
        }

        let stuck = session
            .grid()
            .live_tiles()
            .filter(|tile| !tile.letter().is_wild())
            .max_by_key(|tile| tile.score())
            .map(|tile| tile.id());
        match stuck {
            Some(id) if session.make_wild(id) => {}
            _ => break,
        }
    }

    GameSummary {
        score: session.score(),
        words: session.found()[start_words..].to_vec(),
        tiles_left: session.grid().live_count(),
        hints_used: start_hints - session.hints(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::grid::Grid;
    use crate::lexicon::Lexicon;
    use crate::solver::{HighestScore, LongestWord};

    fn session<'a>(layout: &[&str], lexicon: &'a Lexicon, hints: u32) -> Session<'a> {
        let grid = Grid::from_layout(layout).unwrap();
        let config = GameConfig::default().with_hints(hints);
        Session::with_grid(grid, &config, lexicon).unwrap()
    }

    #[test]
    fn clears_a_solvable_board() {
        let lexicon = Lexicon::from_words(["cat", "dog"]);
        let mut s = session(&["cd", "ao", "tg"], &lexicon, 0);
        let summary = autoplay(&mut s, &HighestScore);
        assert!(summary.cleared());
        assert_eq!(summary.words.len(), 2);
        // dog: (2 + 1 + 2) * 3 / 2, cat: (3 + 1 + 1) * 3 / 2
        assert_eq!(summary.score, 14);
        assert_eq!(summary.hints_used, 0);
    }

    #[test]
    fn spends_hints_when_stuck() {
        let lexicon = Lexicon::from_words(["at"]);
        let mut s = session(&["qt"], &lexicon, 3);
        let summary = autoplay(&mut s, &HighestScore);
        // Q becomes a wildcard and "*t" resolves to "at"
        assert!(summary.cleared());
        assert_eq!(summary.hints_used, 1);
        assert_eq!(summary.words[0].word, "at");
        assert_eq!(summary.words[0].letters, "*t");
    }

    #[test]
    fn stops_when_no_move_is_left() {
        let lexicon = Lexicon::from_words(["cat"]);
        let mut s = session(&["xyz"], &lexicon, 0);
        let summary = autoplay(&mut s, &LongestWord);
        assert_eq!(summary.tiles_left, 3);
        assert!(summary.words.is_empty());
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let lexicon = Lexicon::embedded();
        let config = GameConfig::default().with_seed("seed-0");
        let mut a = Session::new(&config, &lexicon).unwrap();
        let mut b = Session::new(&config, &lexicon).unwrap();
        assert_eq!(autoplay(&mut a, &HighestScore), autoplay(&mut b, &HighestScore));
    }
}
