//! Screen-space layout of the board and pointer hit-testing
//!
//! The renderer decides units (pixels for a canvas, character cells for a
//! terminal); the session only needs to map a pointer position to a cell and
//! decide whether the pointer is close enough to that cell's center.

/// Classic tile edge length in pixels
pub const TILE_SIZE: f64 = 60.0;
/// Classic gap between tiles (and around the board) in pixels
pub const TILE_GAP: f64 = 6.0;
/// A drag selects a tile only inside this fraction of the tile's half-extent
pub const CLOSE_FRACTION: f64 = 0.9;

/// A pointer position in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Placement of tiles on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    pub tile_w: f64,
    pub tile_h: f64,
    pub gap: f64,
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self::new(TILE_SIZE, TILE_SIZE, TILE_GAP)
    }
}

impl TileGeometry {
    #[must_use]
    pub const fn new(tile_w: f64, tile_h: f64, gap: f64) -> Self {
        Self { tile_w, tile_h, gap }
    }

    /// Left edge of a tile in column `col`
    #[must_use]
    pub fn left(&self, col: usize) -> f64 {
        self.gap + col as f64 * (self.tile_w + self.gap)
    }

    /// Top edge of a tile in row `row`
    #[must_use]
    pub fn top(&self, row: usize) -> f64 {
        self.gap + row as f64 * (self.tile_h + self.gap)
    }

    /// Top-left corner of the tile at `(row, col)`
    #[must_use]
    pub fn origin_of(&self, row: usize, col: usize) -> Point {
        Point::new(self.left(col), self.top(row))
    }

    #[must_use]
    pub fn center_of(&self, row: usize, col: usize) -> Point {
        let origin = self.origin_of(row, col);
        Point::new(origin.x + self.tile_w / 2.0, origin.y + self.tile_h / 2.0)
    }

    /// Size of a `rows × cols` board including the outer gap
    #[must_use]
    pub fn board_size(&self, rows: usize, cols: usize) -> (f64, f64) {
        (self.left(cols), self.top(rows))
    }

    /// The cell whose tile rectangle contains `point` (gaps hit nothing)
    ///
    /// # Examples
    /// ```
    /// use word_popper::session::{Point, TileGeometry};
    ///
    /// let geometry = TileGeometry::default(); // 60px tiles, 6px gaps
    /// assert_eq!(geometry.cell_at(Point::new(10.0, 80.0)), Some((1, 0)));
    /// assert_eq!(geometry.cell_at(Point::new(3.0, 3.0)), None);
    /// ```
    #[must_use]
    pub fn cell_at(&self, point: Point) -> Option<(usize, usize)> {
        let col = axis_cell(point.x, self.tile_w, self.gap)?;
        let row = axis_cell(point.y, self.tile_h, self.gap)?;
        Some((row, col))
    }

    /// Is `point` near enough to the center of tile `(row, col)`?
    ///
    /// Distance is measured relative to the tile's half-width and
    /// half-height, so the accepted region is an ellipse inscribed in the
    /// tile and shrunk by [`CLOSE_FRACTION`]. This keeps diagonal drags from
    /// clipping the corners of orthogonal neighbours.
    #[must_use]
    pub fn touch_is_close(&self, point: Point, row: usize, col: usize) -> bool {
        let center = self.center_of(row, col);
        let dx = (point.x - center.x) / (self.tile_w / 2.0);
        let dy = (point.y - center.y) / (self.tile_h / 2.0);
        dx.hypot(dy) < CLOSE_FRACTION
    }

    /// Hit-test for drags: the containing cell, if the point is close to its center
    #[must_use]
    pub fn close_cell_at(&self, point: Point) -> Option<(usize, usize)> {
        self.cell_at(point)
            .filter(|&(row, col)| self.touch_is_close(point, row, col))
    }
}

fn axis_cell(coord: f64, size: f64, gap: f64) -> Option<usize> {
    let offset = coord - gap;
    if offset < 0.0 {
        return None;
    }
    let stride = size + gap;
    let index = (offset / stride).floor();
    let within = offset - index * stride;
    (within < size).then_some(index as usize)
}
