//! # Player Bookkeeping
//!
//! The per-seat state the rule engine consumes: the multiset of unplaced
//! pieces, the player's corner frontier, and the externally tracked
//! first-move flag. The engine itself keeps no memory of history; everything
//! a turn controller needs to answer "what may this player do next" lives
//! here and is passed into the rules calls explicitly.

use crate::board::Color;
use crate::frontier::CornerFrontier;
use crate::piece::PieceKind;

/// The pieces a player has not yet placed.
///
/// Starts with one of each of the 21 catalog keys and only ever shrinks; a
/// removed key can never be reintroduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    kinds: Vec<PieceKind>,
}

impl Inventory {
    /// A fresh inventory holding all 21 pieces.
    pub fn full() -> Self {
        Inventory {
            kinds: PieceKind::ALL.to_vec(),
        }
    }

    pub fn contains(&self, kind: PieceKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Removes `kind`; returns false when it was not held.
    pub fn remove(&mut self, kind: PieceKind) -> bool {
        match self.kinds.iter().position(|&k| k == kind) {
            Some(idx) => {
                self.kinds.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// The remaining kinds, in catalog order.
    pub fn kinds(&self) -> &[PieceKind] {
        &self.kinds
    }

    /// Total cell count of the remaining pieces.
    pub fn remaining_cells(&self) -> usize {
        self.kinds.iter().map(|k| k.cell_count()).sum()
    }
}

/// One seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    pub color: Color,
    pub inventory: Inventory,
    pub frontier: CornerFrontier,
    /// True until the player's first piece lands.
    pub first_move: bool,
    /// The most recently placed kind, for the monomino endgame bonus.
    pub last_placed: Option<PieceKind>,
    /// Cells covered by this player's placed pieces.
    pub placed_cells: usize,
    /// Set once the player has no legal move left; never cleared.
    pub finished: bool,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Player {
            color,
            inventory: Inventory::full(),
            frontier: CornerFrontier::new(),
            first_move: true,
            last_placed: None,
            placed_cells: 0,
            finished: false,
        }
    }

    /// The player's score in the positive-accumulation form: one point per
    /// placed cell, +15 for placing all 21 pieces, +5 more when the monomino
    /// was the last piece placed.
    pub fn score(&self) -> i32 {
        let mut score = self.placed_cells as i32;
        if self.inventory.is_empty() {
            score += 15;
            if self.last_placed == Some(PieceKind::One) {
                score += 5;
            }
        }
        score
    }
}
