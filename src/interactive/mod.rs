//! Interactive TUI interface
//!
//! Mouse-driven play in the terminal: drag across tiles to spell, hold or
//! right-click a tile to make it wild.

pub mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, TERMINAL_GEOMETRY, run_tui};
