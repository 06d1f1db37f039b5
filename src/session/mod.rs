//! Game session: selection, commit, wildcards and pointer input
//!
//! The session owns the grid for one game and turns input events into grid
//! operations. Front ends either drive it with pointer events (press, drag,
//! release, clock ticks) or call [`Session::select`], [`Session::commit`]
//! and [`Session::make_wild`] directly.

mod engine;
mod geometry;
mod press;
mod selection;

pub use engine::{FoundWord, Session, SessionState};
pub use geometry::{CLOSE_FRACTION, Point, TILE_GAP, TILE_SIZE, TileGeometry};
pub use press::PressTimer;
pub use selection::Selection;
