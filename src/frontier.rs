//! # Corner Frontier
//!
//! The per-player candidate-anchor cache that keeps move enumeration cheap.
//!
//! A frontier cell for a player is an empty board cell that touches at least
//! one of that player's cells diagonally and none of them orthogonally:
//! exactly the cells where the player's next piece may land a corner contact.
//! Every legal non-first placement covers at least one frontier cell, so
//! enumeration only needs to try anchors that put some piece cell onto some
//! frontier cell instead of scanning the whole board.
//!
//! The frontier is a derived cache, never source-of-truth: [`CornerFrontier::compute`]
//! rebuilds it from the board alone, and the incremental updates must agree
//! with that rebuild after every placement (the integration tests compare the
//! two after each move of randomized playouts).

use crate::board::{Board, Color};
use std::collections::HashSet;

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The set of candidate corner cells for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CornerFrontier {
    cells: HashSet<(usize, usize)>,
}

impl CornerFrontier {
    /// An empty frontier (a player with no pieces on the board).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the frontier from scratch by scanning the whole board.
    ///
    /// O(board area); the incremental updates exist so this only has to run
    /// for validation, but the result is always the ground truth.
    pub fn compute(board: &Board, color: Color) -> Self {
        let mut cells = HashSet::new();
        for r in 0..board.size() {
            for c in 0..board.size() {
                if qualifies(board, color, (r, c)) {
                    cells.insert((r, c));
                }
            }
        }
        CornerFrontier { cells }
    }

    pub fn contains(&self, cell: (usize, usize)) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates the frontier cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    /// Updates the frontier after its own player placed `covered` cells.
    ///
    /// Membership can only change near the new cells: the covered cells stop
    /// being empty, their orthogonal neighbors gain a side contact, and their
    /// diagonal neighbors may gain the corner contact that makes them
    /// eligible. Eligibility is re-checked against the board, so a diagonal
    /// neighbor that also picked up a side contact stays out.
    pub fn apply_own_placement(&mut self, board: &Board, color: Color, covered: &[(usize, usize)]) {
        for &(r, c) in covered {
            self.cells.remove(&(r, c));
            for (dr, dc) in ORTHOGONAL {
                let (nr, nc) = (r as i32 + dr, c as i32 + dc);
                if nr >= 0 && nc >= 0 {
                    self.cells.remove(&(nr as usize, nc as usize));
                }
            }
        }
        for &(r, c) in covered {
            for (dr, dc) in DIAGONAL {
                let (nr, nc) = (r as i32 + dr, c as i32 + dc);
                if board.in_bounds(nr, nc) && qualifies(board, color, (nr as usize, nc as usize)) {
                    self.cells.insert((nr as usize, nc as usize));
                }
            }
        }
    }

    /// Drops cells covered by another player's placement.
    ///
    /// Foreign pieces never change this player's adjacency structure, but a
    /// covered cell is no longer empty and so no longer a candidate.
    pub fn remove_covered(&mut self, covered: &[(usize, usize)]) {
        for cell in covered {
            self.cells.remove(cell);
        }
    }
}

/// The frontier membership test: empty, diagonal contact with `color`,
/// no orthogonal contact with `color`.
fn qualifies(board: &Board, color: Color, (r, c): (usize, usize)) -> bool {
    let (r, c) = (r as i32, c as i32);
    if board.owner_at(r, c).is_some() {
        return false;
    }
    if ORTHOGONAL
        .iter()
        .any(|(dr, dc)| board.owner_at(r + dr, c + dc) == Some(color))
    {
        return false;
    }
    DIAGONAL
        .iter()
        .any(|(dr, dc)| board.owner_at(r + dr, c + dc) == Some(color))
}
