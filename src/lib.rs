//! # Blokus Rule Engine
//!
//! The single source of truth for Blokus legality, board mutation, and
//! scoring. Callers (a CLI, a GUI, an AI, a network layer) only ever ask
//! two questions: "is this move legal" and "apply this move".
//!
//! ## Structure
//! - [`shape`] / [`piece`]: the 21-piece catalog and its 91 distinct
//!   orientations, computed once and cached
//! - [`board`]: the 20x20 owner grid with sentinel out-of-bounds queries
//! - [`frontier`]: the per-player corner-frontier cache that keeps move
//!   enumeration proportional to the placed perimeter, not the board area
//! - [`rules`]: the legality test and the frontier-driven enumerator
//! - [`player`] / [`game`]: seat bookkeeping, turn rotation, scoring
//!
//! ## Concurrency
//! All operations are synchronous. Read-only queries against an unchanging
//! board are safe from any number of threads; `apply_move` demands exclusive
//! access. Search layers that want parallel lookahead clone the board, which
//! is a flat grid and cheap to copy. Move enumeration internally fans out over
//! catalog keys with rayon, so only the emitted *set* of moves is
//! deterministic, never their order.

pub mod board;
pub mod frontier;
pub mod game;
pub mod piece;
pub mod player;
pub mod rules;
pub mod shape;

pub use board::{Board, Color};
pub use frontier::CornerFrontier;
pub use game::{Game, PlayedMove};
pub use piece::{catalog, orientations, Piece, PieceKind};
pub use player::{Inventory, Player};
pub use rules::{anchors_for_shape, apply_move, is_legal, legal_moves, IllegalMoveError, Move};
pub use shape::{Shape, ShapeDefinitionError};
