//! # Shape Representation
//!
//! A `Shape` is one orientation of a polyomino: the set of cells it occupies,
//! stored as (row, col) offsets normalized so the minimum row and column are
//! both zero. Shapes are immutable values; rotation and mirroring produce new
//! shapes rather than mutating in place, so orientations can be shared freely
//! between the catalog, the rule engine, and any number of search threads.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use thiserror::Error;

/// Errors raised when constructing a shape from raw offsets.
///
/// These are programming-error class failures: once the piece catalog is
/// fixed they can no longer occur at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeDefinitionError {
    #[error("shape has no cells")]
    Empty,
    #[error("shape contains duplicate cell ({0}, {1})")]
    DuplicateCell(i32, i32),
    #[error("shape cells are not edge-connected")]
    Disconnected,
}

/// One orientation of a polyomino.
///
/// Invariants (enforced by [`Shape::new`] and preserved by every transform):
/// - at least one cell, no duplicates
/// - cells are edge-connected
/// - normalized: min row and min col are both 0
/// - cells are sorted, so equal shapes compare and hash equal
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Shape {
    cells: Vec<(i32, i32)>,
}

impl Shape {
    /// Builds a shape from a set of cell offsets.
    ///
    /// The offsets may sit anywhere in the plane; the result is shifted so
    /// its bounding box starts at (0, 0).
    ///
    /// # Arguments
    /// * `cells` - occupied (row, col) offsets, in any order
    ///
    /// # Returns
    /// The normalized shape, or a `ShapeDefinitionError` if the offsets are
    /// empty, contain duplicates, or do not form a connected polyomino.
    pub fn new(cells: Vec<(i32, i32)>) -> Result<Self, ShapeDefinitionError> {
        if cells.is_empty() {
            return Err(ShapeDefinitionError::Empty);
        }
        let mut seen = HashSet::with_capacity(cells.len());
        for &(r, c) in &cells {
            if !seen.insert((r, c)) {
                return Err(ShapeDefinitionError::DuplicateCell(r, c));
            }
        }
        if !edge_connected(&seen) {
            return Err(ShapeDefinitionError::Disconnected);
        }
        Ok(Self::normalized(cells))
    }

    /// Shifts cells so min row/col are 0 and sorts them. Private because it
    /// skips validation; every caller already holds a valid cell set.
    fn normalized(cells: Vec<(i32, i32)>) -> Self {
        let min_r = cells.iter().map(|p| p.0).min().unwrap_or(0);
        let min_c = cells.iter().map(|p| p.1).min().unwrap_or(0);
        let mut cells: Vec<(i32, i32)> = cells.iter().map(|p| (p.0 - min_r, p.1 - min_c)).collect();
        cells.sort_unstable();
        Shape { cells }
    }

    /// The occupied offsets, sorted, with min row/col at 0.
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    /// Number of occupied cells (1 to 5 for the standard catalog).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounding-box height in rows.
    pub fn height(&self) -> i32 {
        self.cells.iter().map(|p| p.0).max().unwrap_or(0) + 1
    }

    /// Bounding-box width in columns.
    pub fn width(&self) -> i32 {
        self.cells.iter().map(|p| p.1).max().unwrap_or(0) + 1
    }

    /// Returns this shape rotated 90 degrees clockwise, re-normalized.
    pub fn rotated(&self) -> Shape {
        Self::normalized(self.cells.iter().map(|&(r, c)| (c, -r)).collect())
    }

    /// Returns this shape mirrored left-to-right, re-normalized.
    pub fn mirrored(&self) -> Shape {
        Self::normalized(self.cells.iter().map(|&(r, c)| (r, -c)).collect())
    }
}

impl fmt::Display for Shape {
    /// Renders the occupancy grid with '#' for cells, '.' for gaps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupied: HashSet<(i32, i32)> = self.cells.iter().copied().collect();
        for r in 0..self.height() {
            for c in 0..self.width() {
                write!(f, "{}", if occupied.contains(&(r, c)) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Flood fill over orthogonal neighbors; true when every cell is reachable
/// from the first one.
fn edge_connected(cells: &HashSet<(i32, i32)>) -> bool {
    let start = match cells.iter().next() {
        Some(&cell) => cell,
        None => return false,
    };
    let mut visited = HashSet::with_capacity(cells.len());
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some((r, c)) = queue.pop_front() {
        for (dr, dc) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
            let next = (r + dr, c + dc);
            if cells.contains(&next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    visited.len() == cells.len()
}
