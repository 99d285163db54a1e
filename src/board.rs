//! # Board Representation
//!
//! A size x size grid of cell owners (standard play uses 20x20). The board is
//! deliberately rule-free: it answers geometric queries and performs the raw
//! placement write. Legality lives in [`crate::rules`]; the board only
//! double-checks, via debug assertions, that a placement it is asked to make
//! targets in-bounds empty cells.
//!
//! Placement is monotonic: an occupied cell never becomes empty again, so a
//! cloned board is a cheap, independent snapshot for concurrent read-only
//! queries.

use crate::shape::Shape;
use std::fmt;

/// One of the four player colors.
///
/// An empty cell is represented as `Option<Color>::None` rather than a fifth
/// variant, so owner queries compose with `==` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Yellow,
    Red,
    Green,
}

impl Color {
    /// Seat order for a standard game.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Red, Color::Green];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }

    /// Single-character board glyph.
    pub fn glyph(&self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The mutable owner grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major flat grid; `None` is an empty cell.
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Side length of the standard board.
    pub const STANDARD_SIZE: usize = 20;

    /// Creates an empty board. `size` must be at least 1.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Creates the standard 20x20 board.
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_SIZE)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True when (r, c) is a board coordinate. Takes signed coordinates so
    /// neighbor probes can pass raw offsets without pre-checking.
    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.size && (c as usize) < self.size
    }

    /// Owner of the cell at (r, c).
    ///
    /// Off-board coordinates report `None`, the same as an empty cell, so
    /// adjacency checks can treat off-board neighbors uniformly as "not the
    /// same owner". Callers that need to distinguish emptiness from
    /// out-of-range must check [`Board::in_bounds`] themselves.
    pub fn owner_at(&self, r: i32, c: i32) -> Option<Color> {
        if self.in_bounds(r, c) {
            self.cells[r as usize * self.size + c as usize]
        } else {
            None
        }
    }

    /// The four board corners, clockwise from the origin.
    pub fn corners(&self) -> [(usize, usize); 4] {
        let last = self.size - 1;
        [(0, 0), (0, last), (last, last), (last, 0)]
    }

    /// Writes `color` into every cell covered by `shape` at `anchor` and
    /// returns the covered coordinates.
    ///
    /// This is the raw mutation primitive: it performs no rule checking. The
    /// caller must have validated the placement; targeting an out-of-bounds
    /// or occupied cell is a caller bug, caught by debug assertions.
    pub fn place(&mut self, shape: &Shape, anchor: (usize, usize), color: Color) -> Vec<(usize, usize)> {
        let mut covered = Vec::with_capacity(shape.cell_count());
        for &(dr, dc) in shape.cells() {
            let r = anchor.0 as i32 + dr;
            let c = anchor.1 as i32 + dc;
            debug_assert!(self.in_bounds(r, c), "placement cell ({r}, {c}) off board");
            debug_assert!(self.owner_at(r, c).is_none(), "placement cell ({r}, {c}) occupied");
            let (r, c) = (r as usize, c as usize);
            self.cells[r * self.size + c] = Some(color);
            covered.push((r, c));
        }
        covered
    }

    /// Number of cells owned by `color`.
    pub fn count_owned(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                match self.cells[r * self.size + c] {
                    Some(color) => write!(f, "{} ", color.glyph())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        assert_eq!(board.size(), 20);
        for r in 0..20 {
            for c in 0..20 {
                assert_eq!(board.owner_at(r, c), None);
            }
        }
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(10);
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(9, 9));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 10));
    }

    #[test]
    fn test_owner_at_off_board_sentinel() {
        let board = Board::new(10);
        assert_eq!(board.owner_at(-1, 3), None);
        assert_eq!(board.owner_at(3, 10), None);
    }

    #[test]
    fn test_corners() {
        let board = Board::new(10);
        assert_eq!(board.corners(), [(0, 0), (0, 9), (9, 9), (9, 0)]);
    }

    #[test]
    fn test_place_writes_owner() {
        let mut board = Board::new(10);
        let shape = Shape::new(vec![(0, 0), (1, 0), (1, 1)]).unwrap();
        let covered = board.place(&shape, (2, 3), Color::Red);
        assert_eq!(covered, vec![(2, 3), (3, 3), (3, 4)]);
        assert_eq!(board.owner_at(2, 3), Some(Color::Red));
        assert_eq!(board.owner_at(3, 4), Some(Color::Red));
        assert_eq!(board.owner_at(2, 4), None);
        assert_eq!(board.count_owned(Color::Red), 3);
    }

    #[test]
    fn test_display_glyphs() {
        let mut board = Board::new(3);
        let dot = Shape::new(vec![(0, 0)]).unwrap();
        board.place(&dot, (0, 0), Color::Blue);
        let rendered = board.to_string();
        assert!(rendered.starts_with("B . . "));
    }
}
