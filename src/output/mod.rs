//! Terminal output formatting
//!
//! Display utilities for boards, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_game_over, print_simulation_statistics, print_solve_result, print_status,
};
