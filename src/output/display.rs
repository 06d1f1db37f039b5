//! Display functions for boards and command results

use super::formatters::{create_progress_bar, format_path, letter_label};
use crate::commands::{SimulationStatistics, SolveResult};
use crate::core::{Tile, TileId};
use crate::grid::{EMPTY_SYMBOL, Grid};
use crate::session::Session;
use colored::{ColoredString, Colorize};

/// Letter scores at or above this are shown as rare letters
const RARE_SCORE: u32 = 8;

fn colored_tile(tile: &Tile, highlighted: bool) -> ColoredString {
    let label = letter_label(tile.letter());
    if highlighted {
        label.black().on_bright_yellow().bold()
    } else if tile.letter().is_wild() {
        label.bright_magenta().bold()
    } else if tile.score() >= RARE_SCORE {
        label.bright_red().bold()
    } else {
        label.bright_white()
    }
}

/// Print the board with row and column numbers, highlighting `highlight`
pub fn print_board(grid: &Grid, highlight: &[TileId]) {
    let header: String = (0..grid.cols()).map(|col| format!("{col:>3}")).collect();
    println!("\n    {}", header.bright_black());
    for row in 0..grid.rows() {
        print!("{}", format!("{row:>3} ").bright_black());
        for col in 0..grid.cols() {
            match grid.tile_at(row, col) {
                Some(tile) => print!("  {}", colored_tile(tile, highlight.contains(&tile.id()))),
                None => print!("  {}", EMPTY_SYMBOL.to_string().bright_black()),
            }
        }
        println!();
    }
    println!();
}

/// Print score, hints and the live selection
pub fn print_status(session: &Session<'_>) {
    println!(
        "Score: {}   Hints: {}   Words: {}",
        session.score().to_string().bright_yellow().bold(),
        session.hints().to_string().bright_magenta(),
        session.found().len()
    );
    let preview = session.word_preview();
    if !preview.is_empty() {
        println!("Selected: {}", preview.bright_cyan().bold());
    }
}

/// Print the end-of-game banner
pub fn print_game_over(session: &Session<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  B O A R D   C L E A R E D !  🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Final score: {} from {} words",
        session.score().to_string().bright_yellow().bold(),
        session.found().len()
    );
    for found in session.found() {
        println!(
            "    {} {}",
            found.word.to_uppercase().bright_white().bold(),
            format!("({})", found.score).bright_black()
        );
    }
    println!();
}

/// Print the words available on a board
pub fn print_solve_result(result: &SolveResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    print!("{}", "Board:".bright_cyan().bold());
    print_board(&result.grid, &[]);
    println!("{}", "─".repeat(60).cyan());

    if result.candidates.is_empty() {
        println!("{}", "❌ No words can be spelled on this board".red().bold());
        return;
    }

    println!(
        "Found {} words in {:.2}ms",
        result.candidates.len().to_string().bright_yellow().bold(),
        result.duration.as_secs_f64() * 1000.0
    );

    let top = result.candidates.first().map_or(1, |c| c.score).max(1);
    for candidate in result.candidates.iter().take(limit) {
        println!(
            "  {} {:>4}  {}  {}",
            format!("{:<10}", candidate.word.to_uppercase())
                .bright_white()
                .bold(),
            candidate.score,
            create_progress_bar(f64::from(candidate.score), f64::from(top), 20).green(),
            format_path(&result.grid, &candidate.path).bright_black()
        );
    }
    if result.candidates.len() > limit {
        println!("  … and {} more", result.candidates.len() - limit);
    }

    if let Some(longest) = result.longest() {
        println!(
            "\nLongest: {} ({} letters)",
            longest.word.to_uppercase().bright_cyan(),
            longest.len()
        );
    }
}

/// Print statistics from a simulation run
pub fn print_simulation_statistics(stats: &SimulationStatistics, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Games played:     {}", stats.games);
    println!(
        "   Boards cleared:   {}",
        format!("{}", stats.cleared).green()
    );
    println!(
        "   Average score:    {}",
        format!("{:.1}", stats.average_score).bright_yellow().bold()
    );
    println!("   Average words:    {:.1}", stats.average_words);
    println!("   Tiles left:       {:.1}", stats.average_tiles_left);
    println!("   Hints used:       {}", stats.hints_used);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n🏆 {}", "Highlights:".bright_cyan().bold());
    if let Some((seed, score)) = &stats.best_game {
        println!("   Best game:   {} ({seed})", score.to_string().green());
    }
    if let Some((seed, score)) = &stats.worst_game {
        println!("   Worst game:  {} ({seed})", score.to_string().yellow());
    }
    if let Some((word, score)) = &stats.best_word {
        println!(
            "   Best word:   {} ({score})",
            word.to_uppercase().bright_white().bold()
        );
    }
}
