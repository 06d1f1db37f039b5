//! Formatting utilities for terminal output

use crate::core::{Letter, TileId};
use crate::grid::Grid;

/// Uppercase label for a tile letter (`*` for a wildcard)
#[must_use]
pub fn letter_label(letter: Letter) -> String {
    letter.to_string()
}

/// Format a path of tiles as `row,col` cells, the input format of simple mode
#[must_use]
pub fn format_path(grid: &Grid, path: &[TileId]) -> String {
    path.iter()
        .filter_map(|&id| grid.get(id))
        .map(|tile| format!("{},{}", tile.row(), tile.col()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_labels() {
        assert_eq!(letter_label(Letter::Plain('q')), "Q");
        assert_eq!(letter_label(Letter::Wild), "*");
    }

    #[test]
    fn path_as_cells() {
        let grid = Grid::from_layout(&["ca", "xt"]).unwrap();
        let path = [
            grid.id_at(0, 0).unwrap(),
            grid.id_at(0, 1).unwrap(),
            grid.id_at(1, 1).unwrap(),
        ];
        assert_eq!(format_path(&grid, &path), "0,0 0,1 1,1");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 3), "░░░");
    }
}
