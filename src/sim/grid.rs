//! Toroidal grid geometry and item spawning

use std::collections::HashSet;

use glam::IVec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_COLS, GRID_ROWS};
use crate::{Point, wrap_point};

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub cols: i32,
    pub rows: i32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(GRID_COLS, GRID_ROWS)
    }
}

impl GridSize {
    pub fn new(cols: i32, rows: i32) -> Self {
        debug_assert!(cols > 0 && rows > 0, "grid must have at least one cell");
        Self { cols, rows }
    }

    pub fn center(&self) -> Point {
        IVec2::new(self.cols / 2, self.rows / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.cols).contains(&point.x) && (0..self.rows).contains(&point.y)
    }

    /// Wrap a point back onto the torus
    #[inline]
    pub fn wrap(&self, point: Point) -> Point {
        wrap_point(point, self.cols, self.rows)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| IVec2::new(x, y)))
    }

    /// Whether two in-bounds cells share an edge, counting wraparound
    pub fn are_adjacent(&self, a: Point, b: Point) -> bool {
        let dx = (a.x - b.x).rem_euclid(self.cols);
        let dy = (a.y - b.y).rem_euclid(self.rows);
        let x_step = dx == 1 || dx == self.cols - 1;
        let y_step = dy == 1 || dy == self.rows - 1;
        (x_step && dy == 0) || (y_step && dx == 0)
    }
}

/// Pick a uniformly random cell that is neither occupied nor `excluded`.
///
/// Returns `None` when every cell is taken.
pub fn pick_empty_cell<R, I>(
    rng: &mut R,
    grid: GridSize,
    occupied: I,
    excluded: Option<Point>,
) -> Option<Point>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Point>,
{
    let mut taken: HashSet<Point> = occupied.into_iter().collect();
    taken.extend(excluded);

    let free: Vec<Point> = grid.cells().filter(|cell| !taken.contains(cell)).collect();
    free.choose(rng).copied()
}
