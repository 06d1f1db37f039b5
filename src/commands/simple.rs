//! Simple interactive CLI mode
//!
//! Line-oriented play without the TUI: type a path of cells to pop a word.

use crate::config::GameConfig;
use crate::core::TileId;
use crate::lexicon::Lexicon;
use crate::output::{print_board, print_game_over, print_status};
use crate::session::Session;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    /// Select these cells in order and commit
    Path(Vec<(usize, usize)>),
    /// Turn the tile at this cell into a wildcard
    Wild(usize, usize),
    Undo,
    New,
    Help,
    Quit,
}

/// How a line-oriented game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleExit {
    Quit,
    NewGame,
    EndOfInput,
}

/// Parse one line of input
///
/// Cells are written `row,col` and separated by spaces.
///
/// # Errors
///
/// Returns a message describing what could not be understood.
///
/// # Examples
/// ```
/// use word_popper::commands::{SimpleCommand, parse_command};
///
/// assert_eq!(
///     parse_command("2,0 1,0 0,0"),
///     Ok(SimpleCommand::Path(vec![(2, 0), (1, 0), (0, 0)]))
/// );
/// assert_eq!(parse_command("wild 3,4"), Ok(SimpleCommand::Wild(3, 4)));
/// ```
pub fn parse_command(line: &str) -> Result<SimpleCommand, String> {
    let line = line.trim().to_lowercase();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err("Empty input".to_string());
    };

    match first {
        "quit" | "q" | "exit" => Ok(SimpleCommand::Quit),
        "undo" | "u" => Ok(SimpleCommand::Undo),
        "new" | "n" => Ok(SimpleCommand::New),
        "help" | "h" | "?" => Ok(SimpleCommand::Help),
        "wild" | "w" => {
            let cell = words.next().ok_or("Usage: wild row,col")?;
            let (row, col) = parse_cell(cell)?;
            Ok(SimpleCommand::Wild(row, col))
        }
        _ => line
            .split_whitespace()
            .map(parse_cell)
            .collect::<Result<Vec<_>, _>>()
            .map(SimpleCommand::Path),
    }
}

fn parse_cell(text: &str) -> Result<(usize, usize), String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("Expected row,col but got '{text}'"))?;
    let row = row
        .parse()
        .map_err(|_| format!("Invalid row in '{text}'"))?;
    let col = col
        .parse()
        .map_err(|_| format!("Invalid column in '{text}'"))?;
    Ok((row, col))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the configuration is invalid or there's an I/O error
/// reading user input.
pub fn run_simple(config: &GameConfig, lexicon: &Lexicon) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Popper - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        let mut session = Session::new(config, lexicon).map_err(|e| e.to_string())?;
        match play_lines(&mut session, io::stdin().lock())? {
            SimpleExit::NewGame => println!("\n🔄 New game started!\n"),
            SimpleExit::Quit | SimpleExit::EndOfInput => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play `session` from lines of `input` until the game ends or the player leaves
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn play_lines<R: BufRead>(session: &mut Session<'_>, input: R) -> Result<SimpleExit, String> {
    let mut lines = input.lines();
    loop {
        print_board(session.grid(), &[]);
        print_status(session);

        if session.is_over() {
            print_game_over(session);
            return Ok(SimpleExit::Quit);
        }

        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let Some(line) = lines.next() else {
            return Ok(SimpleExit::EndOfInput);
        };
        let line = line.map_err(|e| e.to_string())?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(SimpleCommand::Quit) => return Ok(SimpleExit::Quit),
            Ok(SimpleCommand::New) => return Ok(SimpleExit::NewGame),
            Ok(SimpleCommand::Help) => print_help(),
            Ok(SimpleCommand::Undo) => {
                if !session.undo() {
                    println!("Nothing to undo!");
                }
            }
            Ok(SimpleCommand::Wild(row, col)) => match session.grid().id_at(row, col) {
                Some(id) => {
                    if !session.make_wild(id) {
                        println!("❌ Can't turn that tile wild ({} hints left)", session.hints());
                    }
                }
                None => println!("❌ No tile at ({row}, {col})"),
            },
            Ok(SimpleCommand::Path(cells)) => play_cells(session, &cells),
            Err(message) => println!("❌ {message}"),
        }

        if let Some(entry) = session.log().last() {
            println!("{entry}");
        }
    }
}

fn play_cells(session: &mut Session<'_>, cells: &[(usize, usize)]) {
    let mut path: Vec<TileId> = Vec::with_capacity(cells.len());
    for &(row, col) in cells {
        let Some(id) = session.grid().id_at(row, col) else {
            println!("❌ No tile at ({row}, {col})");
            return;
        };
        path.push(id);
    }

    session.cancel();
    for (&id, &(row, col)) in path.iter().zip(cells) {
        if !session.select(id) {
            println!("❌ ({row}, {col}) is not next to the previous tile");
            session.cancel();
            return;
        }
    }

    let word = session.word_preview();
    if session.commit().is_none() {
        println!("❌ {word} is not a word");
    }
}

fn print_help() {
    println!("Pop words by typing the cells of adjacent tiles in order:");
    println!("  row,col row,col ...   e.g. '9,0 8,0 8,1'");
    println!("  wild row,col          spend a hint to turn a tile into a wildcard");
    println!("Commands: 'undo', 'new', 'help', 'quit'\n");
}
