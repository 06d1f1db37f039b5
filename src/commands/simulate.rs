//! Simulate many games - strategy evaluation
//!
//! Auto-plays a run of seeded games and generates statistics.

use crate::config::GameConfig;
use crate::lexicon::Lexicon;
use crate::session::Session;
use crate::solver::{GameSummary, Strategy, autoplay};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Seed prefix used when the configuration has none
pub const DEFAULT_SEED_PREFIX: &str = "seed";

/// Result from a single simulated game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: String,
    pub summary: GameSummary,
    pub duration: Duration,
}

/// Statistics over all simulated games
#[derive(Debug)]
pub struct SimulationStatistics {
    pub games: usize,
    pub cleared: usize,
    pub average_score: f64,
    pub average_words: f64,
    pub average_tiles_left: f64,
    pub hints_used: u32,
    pub best_game: Option<(String, u32)>,
    pub worst_game: Option<(String, u32)>,
    pub best_word: Option<(String, u32)>,
    pub total_time: Duration,
}

/// Seed for game `index` of a run
///
/// # Examples
/// ```
/// use word_popper::commands::game_seed;
///
/// assert_eq!(game_seed(None, 0), "seed-0");
/// assert_eq!(game_seed(Some("daily"), 3), "daily-3");
/// ```
#[must_use]
pub fn game_seed(prefix: Option<&str>, index: usize) -> String {
    format!("{}-{index}", prefix.unwrap_or(DEFAULT_SEED_PREFIX))
}

/// Auto-play `games` seeded games
///
/// Game `i` uses seed `<prefix>-<i>`, where the prefix is the configured
/// seed or `seed`, so runs are reproducible. Games run in parallel.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_simulate<S: Strategy + Sync>(
    config: &GameConfig,
    lexicon: &Lexicon,
    strategy: &S,
    games: usize,
) -> Result<SimulationStatistics, String> {
    config.validate().map_err(|e| e.to_string())?;

    println!("🎯 Simulating {games} games...");

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let results = (0..games)
        .into_par_iter()
        .map(|index| -> Result<GameResult, String> {
            let seed = game_seed(config.seed.as_deref(), index);
            let game_config = config.clone().with_seed(seed.clone());
            let game_start = Instant::now();
            let mut session =
                Session::new(&game_config, lexicon).map_err(|e| e.to_string())?;
            let summary = autoplay(&mut session, strategy);
            pb.set_message(format!("{seed}: {}", summary.score));
            pb.inc(1);
            Ok(GameResult {
                seed,
                summary,
                duration: game_start.elapsed(),
            })
        })
        .collect::<Result<Vec<_>, String>>()?;
    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

/// Aggregate per-game results
#[must_use]
pub fn summarize(results: &[GameResult], total_time: Duration) -> SimulationStatistics {
    let games = results.len();
    let mean = |total: f64| {
        if games == 0 { 0.0 } else { total / games as f64 }
    };

    let total_score: u64 = results.iter().map(|r| u64::from(r.summary.score)).sum();
    let total_words: usize = results.iter().map(|r| r.summary.words.len()).sum();
    let total_left: usize = results.iter().map(|r| r.summary.tiles_left).sum();

    let best_game = results
        .iter()
        .max_by_key(|r| r.summary.score)
        .map(|r| (r.seed.clone(), r.summary.score));
    let worst_game = results
        .iter()
        .min_by_key(|r| r.summary.score)
        .map(|r| (r.seed.clone(), r.summary.score));
    let best_word = results
        .iter()
        .flat_map(|r| &r.summary.words)
        .max_by_key(|w| w.score)
        .map(|w| (w.word.clone(), w.score));

    SimulationStatistics {
        games,
        cleared: results.iter().filter(|r| r.summary.cleared()).count(),
        average_score: mean(total_score as f64),
        average_words: mean(total_words as f64),
        average_tiles_left: mean(total_left as f64),
        hints_used: results.iter().map(|r| r.summary.hints_used).sum(),
        best_game,
        worst_game,
        best_word,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FoundWord;
    use crate::solver::HighestScore;

    fn result(seed: &str, score: u32, tiles_left: usize, words: &[(&str, u32)]) -> GameResult {
        GameResult {
            seed: seed.to_string(),
            summary: GameSummary {
                score,
                words: words
                    .iter()
                    .map(|&(word, score)| FoundWord {
                        word: word.to_string(),
                        letters: word.to_string(),
                        tiles: Vec::new(),
                        score,
                    })
                    .collect(),
                tiles_left,
                hints_used: 1,
            },
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn summarize_aggregates_games() {
        let results = [
            result("seed-0", 30, 0, &[("cat", 7), ("quiz", 44)]),
            result("seed-1", 10, 4, &[("dog", 7)]),
        ];
        let stats = summarize(&results, Duration::from_secs(1));
        assert_eq!(stats.games, 2);
        assert_eq!(stats.cleared, 1);
        assert!((stats.average_score - 20.0).abs() < f64::EPSILON);
        assert!((stats.average_words - 1.5).abs() < f64::EPSILON);
        assert!((stats.average_tiles_left - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.hints_used, 2);
        assert_eq!(stats.best_game, Some(("seed-0".to_string(), 30)));
        assert_eq!(stats.worst_game, Some(("seed-1".to_string(), 10)));
        assert_eq!(stats.best_word, Some(("quiz".to_string(), 44)));
    }

    #[test]
    fn summarize_empty_run() {
        let stats = summarize(&[], Duration::ZERO);
        assert_eq!(stats.games, 0);
        assert!(stats.average_score.abs() < f64::EPSILON);
        assert!(stats.best_game.is_none());
    }

    #[test]
    fn simulation_is_reproducible() {
        let lexicon = Lexicon::embedded();
        let config = GameConfig::default().with_size(5, 5);
        let a = run_simulate(&config, &lexicon, &HighestScore, 3).unwrap();
        let b = run_simulate(&config, &lexicon, &HighestScore, 3).unwrap();
        assert_eq!(a.games, 3);
        assert!((a.average_score - b.average_score).abs() < f64::EPSILON);
        assert_eq!(a.best_game, b.best_game);
    }

    #[test]
    fn invalid_config_fails() {
        let lexicon = Lexicon::from_words(["cat"]);
        let config = GameConfig::default().with_size(0, 0);
        assert!(run_simulate(&config, &lexicon, &HighestScore, 1).is_err());
    }
}
