//! Word Popper - CLI
//!
//! Word-search tile game with a TUI, a line-oriented mode, a board solver
//! and a self-play simulator.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use word_popper::{
    commands::{parse_board, run_simple, run_simulate, solve_board},
    config::{DEFAULT_COLS, DEFAULT_HINTS, DEFAULT_ROWS, GameConfig},
    grid::Grid,
    lexicon::{Lexicon, loader::load_named},
    output::{print_simulation_statistics, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "word_popper",
    about = "Spell words from adjacent tiles, pop them and let the board fall",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed text for a reproducible board (e.g. today's date)
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Board rows
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board columns
    #[arg(long, global = true, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Wildcard hints per game
    #[arg(long, global = true, default_value_t = DEFAULT_HINTS)]
    hints: u32,

    /// Long-press duration in milliseconds before a tile turns wild
    #[arg(long, global = true, default_value = "750")]
    long_press_ms: u64,

    /// Lexicon: 'all' (default, embedded list) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    words: String,

    /// Strategy for solve/simulate: highest (default), longest, random
    #[arg(short, long, global = true, default_value = "highest")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default, mouse driven)
    Play,

    /// Simple CLI mode (type cell paths instead of dragging)
    Simple,

    /// List every word that can be spelled on a board
    Solve {
        /// Board rows separated by '/' or ',' (e.g. "cat/xyz"); a seeded board if omitted
        #[arg(short, long)]
        board: Option<String>,

        /// Maximum number of words to show
        #[arg(short, long, default_value = "25")]
        limit: usize,
    },

    /// Auto-play seeded games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_size(self.rows, self.cols)
            .with_hints(self.hints)
            .with_long_press(Duration::from_millis(self.long_press_ms));
        match &self.seed {
            Some(seed) => config.with_seed(seed.clone()),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.game_config();
    config.validate()?;
    let lexicon = load_named(&cli.words)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, &lexicon),
        Commands::Simple => run_simple(&config, &lexicon).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { board, limit } => {
            run_solve_command(&config, board.as_deref(), limit, &lexicon)
        }
        Commands::Simulate { count } => {
            run_simulate_command(&cli.strategy, &config, count, &lexicon)
        }
    }
}

fn run_solve_command(
    config: &GameConfig,
    board: Option<&str>,
    limit: usize,
    lexicon: &Lexicon,
) -> Result<()> {
    let grid = match board {
        Some(text) => parse_board(text)?,
        None => Grid::new(config.rows, config.cols, &mut config.letter_source()),
    };
    let result = solve_board(grid, lexicon);
    print_solve_result(&result, limit);
    Ok(())
}

fn run_simulate_command(
    strategy_name: &str,
    config: &GameConfig,
    count: usize,
    lexicon: &Lexicon,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let stats =
        run_simulate(config, lexicon, &strategy, count).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_statistics(&stats, strategy.name());
    Ok(())
}

fn run_play_command(config: GameConfig, lexicon: &Lexicon) -> Result<()> {
    use word_popper::interactive::{App, run_tui};

    let app = App::new(config, lexicon)?;
    run_tui(app)
}
