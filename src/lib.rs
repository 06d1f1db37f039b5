//! Word Popper
//!
//! A word-search tile game: spell words by chaining adjacent letter tiles,
//! pop them off the board, and let gravity and column collapse close the gaps.
//!
//! # Quick Start
//!
//! ```rust
//! use word_popper::config::GameConfig;
//! use word_popper::grid::Grid;
//! use word_popper::lexicon::Lexicon;
//! use word_popper::session::Session;
//!
//! let lexicon = Lexicon::from_words(["cat", "act"]);
//! let grid = Grid::from_layout(&["cat"]).unwrap();
//! let mut session = Session::with_grid(grid, &GameConfig::default(), &lexicon).unwrap();
//!
//! let path: Vec<_> = (0..3).filter_map(|col| session.grid().id_at(0, col)).collect();
//! let found = session.play_path(&path).unwrap();
//! assert_eq!(found.word, "cat");
//! assert!(session.is_over());
//! ```

// Core domain types
pub mod core;

// Letter generation
pub mod letters;

// Dictionary
pub mod lexicon;

// Board state, gravity and collapse
pub mod grid;

// Game configuration
pub mod config;

// Selection, pointer input and scoring
pub mod session;

// Word finding and computer play
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
