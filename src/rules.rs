//! # Placement Rule Engine
//!
//! Stateless legality testing and legal-move enumeration.
//!
//! ## Rules
//! - Every cell of a placed piece must be on the board and empty
//! - A player's first piece must cover one of the four board corners
//! - Every later piece must touch the player's own color diagonally and must
//!   not touch it orthogonally; other players' pieces never matter
//!
//! ## Enumeration strategy
//! Testing one placement is O(piece size), but scanning every board cell for
//! every orientation is O(board area) per piece. Each legal non-first
//! placement has to land a cell on one of the player's frontier cells, so
//! candidate anchors are derived only from the frontier (or, for the first
//! move, from the four board corners): for each seed cell and each occupied
//! offset of the orientation, the anchor putting that offset on the seed is a
//! candidate. The dominant cost drops to frontier size x orientations x piece
//! size, and the frontier is bounded by the perimeter of the placed pieces.
//!
//! Enumeration fans out across catalog keys with rayon; callers may rely on
//! the set of emitted moves but never on their order.

use crate::board::{Board, Color};
use crate::frontier::CornerFrontier;
use crate::piece::{orientations, PieceKind};
use crate::player::Inventory;
use crate::shape::Shape;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A fully specified placement: who, which piece, which orientation of it,
/// and where its bounding-box origin lands.
///
/// Ephemeral by design: moves are enumerated, validated, applied or
/// discarded, never stored by the engine (the turn controller keeps its own
/// history).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub kind: PieceKind,
    /// Index into `orientations(kind)`.
    pub orientation: usize,
    /// Board cell where the orientation's (0, 0) offset lands.
    pub anchor: (usize, usize),
}

impl Move {
    /// The orientation shape this move places.
    ///
    /// Panics if the orientation index is out of range for the kind; moves
    /// produced by [`legal_moves`] always carry a valid index.
    pub fn shape(&self) -> &'static Shape {
        &orientations(self.kind)[self.orientation]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{} at ({}, {})",
            self.color, self.kind, self.orientation, self.anchor.0, self.anchor.1
        )
    }
}

/// Why an apply was rejected.
///
/// `is_legal` returning false is an ordinary query result; this error is for
/// [`apply_move`], where an illegal request means the caller applied a stale
/// enumeration or has a bookkeeping bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    #[error("piece {0} is not in the player's inventory")]
    PieceNotHeld(PieceKind),
    #[error("orientation {orientation} is out of range for piece {kind}")]
    UnknownOrientation { kind: PieceKind, orientation: usize },
    #[error("placing {kind} at {anchor:?} violates the placement rules")]
    RuleViolation { kind: PieceKind, anchor: (usize, usize) },
    #[error("the game is already over")]
    GameOver,
}

/// Tests whether placing `shape` at `anchor` is legal for `color`.
///
/// Evaluated as a short-circuiting conjunction: bounds, then overlap, then
/// the first-move corner requirement or the corner/side rule. A single cell
/// off the board fails the whole placement; a single orthogonal contact with
/// the player's own color vetoes the placement no matter how many diagonal
/// contacts it also has.
pub fn is_legal(
    board: &Board,
    shape: &Shape,
    anchor: (usize, usize),
    color: Color,
    is_first_move: bool,
) -> bool {
    for &(dr, dc) in shape.cells() {
        let r = anchor.0 as i32 + dr;
        let c = anchor.1 as i32 + dc;
        if !board.in_bounds(r, c) || board.owner_at(r, c).is_some() {
            return false;
        }
    }

    if is_first_move {
        let corners = board.corners();
        return shape.cells().iter().any(|&(dr, dc)| {
            let cell = ((anchor.0 as i32 + dr) as usize, (anchor.1 as i32 + dc) as usize);
            corners.contains(&cell)
        });
    }

    let mut touches_corner = false;
    for &(dr, dc) in shape.cells() {
        let r = anchor.0 as i32 + dr;
        let c = anchor.1 as i32 + dc;
        for (sr, sc) in ORTHOGONAL {
            if board.owner_at(r + sr, c + sc) == Some(color) {
                return false;
            }
        }
        if !touches_corner {
            for (sr, sc) in DIAGONAL {
                if board.owner_at(r + sr, c + sc) == Some(color) {
                    touches_corner = true;
                    break;
                }
            }
        }
    }
    touches_corner
}

/// Collects the legal anchors that land some cell of `shape` on some seed
/// cell.
///
/// For each seed and each occupied offset, the anchor placing that offset on
/// the seed is a candidate; candidates are deduplicated before the legality
/// test so each anchor is tested once. Covers shapes whose (0, 0) offset is
/// unoccupied, such as the X pentomino.
pub fn anchors_for_shape(
    board: &Board,
    shape: &Shape,
    color: Color,
    is_first_move: bool,
    seeds: &[(usize, usize)],
) -> Vec<(usize, usize)> {
    let mut tested = HashSet::new();
    let mut anchors = Vec::new();
    for &(sr, sc) in seeds {
        for &(dr, dc) in shape.cells() {
            let ar = sr as i32 - dr;
            let ac = sc as i32 - dc;
            if ar < 0 || ac < 0 {
                continue;
            }
            let anchor = (ar as usize, ac as usize);
            if tested.insert(anchor) && is_legal(board, shape, anchor, color, is_first_move) {
                anchors.push(anchor);
            }
        }
    }
    anchors
}

/// Enumerates every legal move for `color`.
///
/// Candidate anchors come from the board corners on the first move and from
/// the player's corner frontier afterwards. Pure in the inputs: re-running on
/// an unchanged board yields the same move set. Emission order is
/// unspecified; the catalog keys are processed in parallel.
pub fn legal_moves(
    board: &Board,
    color: Color,
    inventory: &Inventory,
    frontier: &CornerFrontier,
    is_first_move: bool,
) -> Vec<Move> {
    let seeds: Vec<(usize, usize)> = if is_first_move {
        board.corners().to_vec()
    } else {
        frontier.cells().collect()
    };
    if seeds.is_empty() {
        return Vec::new();
    }

    inventory
        .kinds()
        .par_iter()
        .flat_map(|&kind| {
            let mut moves = Vec::new();
            for (orientation, shape) in orientations(kind).iter().enumerate() {
                for anchor in anchors_for_shape(board, shape, color, is_first_move, &seeds) {
                    moves.push(Move {
                        color,
                        kind,
                        orientation,
                        anchor,
                    });
                }
            }
            moves
        })
        .collect()
}

/// Validates and applies `mv`, mutating board, inventory, and frontier
/// together.
///
/// Legality is re-checked from scratch: an enumeration result is stale the
/// moment the board changes, so the caller's claim is never trusted. On any
/// error nothing is modified; on success the covered board cells are
/// returned so a controller can drop them from other players' frontiers.
pub fn apply_move(
    board: &mut Board,
    mv: &Move,
    inventory: &mut Inventory,
    frontier: &mut CornerFrontier,
    is_first_move: bool,
) -> Result<Vec<(usize, usize)>, IllegalMoveError> {
    if !inventory.contains(mv.kind) {
        return Err(IllegalMoveError::PieceNotHeld(mv.kind));
    }
    let shape = orientations(mv.kind)
        .get(mv.orientation)
        .ok_or(IllegalMoveError::UnknownOrientation {
            kind: mv.kind,
            orientation: mv.orientation,
        })?;
    if !is_legal(board, shape, mv.anchor, mv.color, is_first_move) {
        return Err(IllegalMoveError::RuleViolation {
            kind: mv.kind,
            anchor: mv.anchor,
        });
    }

    let covered = board.place(shape, mv.anchor, mv.color);
    inventory.remove(mv.kind);
    frontier.apply_own_placement(board, mv.color, &covered);
    Ok(covered)
}
