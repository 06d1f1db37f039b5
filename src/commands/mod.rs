//! Command implementations

pub mod simple;
pub mod simulate;
pub mod solve;

pub use simple::{SimpleCommand, SimpleExit, parse_command, play_lines, run_simple};
pub use simulate::{GameResult, SimulationStatistics, game_seed, run_simulate, summarize};
pub use solve::{SolveResult, parse_board, solve_board};
