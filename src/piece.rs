//! # Piece Catalog
//!
//! The 21 canonical Blokus pieces and their orientation sets.
//!
//! Each [`PieceKind`] names one polyomino from the standard set (one monomino,
//! one domino, two trominoes, five tetrominoes, twelve pentominoes). Applying
//! the four rotations to a canonical shape and to its mirror image yields up
//! to eight orientations; symmetric pieces collapse to fewer (the monomino
//! and the 2x2 square to one, straight pieces to two). The deduplicated
//! orientation sets are computed once per process and cached.

use crate::shape::{Shape, ShapeDefinitionError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Identity of one of the 21 canonical pieces.
///
/// The discriminant doubles as the index into the cached catalog, so the
/// order here must match [`PieceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    One,
    Two,
    I3,
    V3,
    I4,
    L4,
    O4,
    T4,
    Z4,
    F5,
    I5,
    L5,
    N5,
    P5,
    T5,
    U5,
    V5,
    W5,
    X5,
    Y5,
    Z5,
}

impl PieceKind {
    /// Every catalog key, in catalog order.
    pub const ALL: [PieceKind; 21] = [
        PieceKind::One,
        PieceKind::Two,
        PieceKind::I3,
        PieceKind::V3,
        PieceKind::I4,
        PieceKind::L4,
        PieceKind::O4,
        PieceKind::T4,
        PieceKind::Z4,
        PieceKind::F5,
        PieceKind::I5,
        PieceKind::L5,
        PieceKind::N5,
        PieceKind::P5,
        PieceKind::T5,
        PieceKind::U5,
        PieceKind::V5,
        PieceKind::W5,
        PieceKind::X5,
        PieceKind::Y5,
        PieceKind::Z5,
    ];

    /// Conventional name of the piece ("1", "2", then letter + size).
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::One => "1",
            PieceKind::Two => "2",
            PieceKind::I3 => "I3",
            PieceKind::V3 => "V3",
            PieceKind::I4 => "I4",
            PieceKind::L4 => "L4",
            PieceKind::O4 => "O4",
            PieceKind::T4 => "T4",
            PieceKind::Z4 => "Z4",
            PieceKind::F5 => "F5",
            PieceKind::I5 => "I5",
            PieceKind::L5 => "L5",
            PieceKind::N5 => "N5",
            PieceKind::P5 => "P5",
            PieceKind::T5 => "T5",
            PieceKind::U5 => "U5",
            PieceKind::V5 => "V5",
            PieceKind::W5 => "W5",
            PieceKind::X5 => "X5",
            PieceKind::Y5 => "Y5",
            PieceKind::Z5 => "Z5",
        }
    }

    /// The canonical (un-rotated, un-mirrored) cell offsets.
    pub fn canonical_cells(&self) -> &'static [(i32, i32)] {
        match self {
            PieceKind::One => &[(0, 0)],
            PieceKind::Two => &[(0, 0), (0, 1)],
            PieceKind::I3 => &[(0, 0), (0, 1), (0, 2)],
            PieceKind::V3 => &[(0, 0), (1, 0), (1, 1)],
            PieceKind::I4 => &[(0, 0), (0, 1), (0, 2), (0, 3)],
            PieceKind::L4 => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            PieceKind::O4 => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            PieceKind::T4 => &[(0, 0), (0, 1), (0, 2), (1, 1)],
            PieceKind::Z4 => &[(0, 0), (0, 1), (1, 1), (1, 2)],
            PieceKind::F5 => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
            PieceKind::I5 => &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
            PieceKind::L5 => &[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)],
            PieceKind::N5 => &[(0, 1), (1, 0), (1, 1), (2, 0), (3, 0)],
            PieceKind::P5 => &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)],
            PieceKind::T5 => &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
            PieceKind::U5 => &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
            PieceKind::V5 => &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
            PieceKind::W5 => &[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
            PieceKind::X5 => &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
            PieceKind::Y5 => &[(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)],
            PieceKind::Z5 => &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
        }
    }

    /// Number of cells the piece covers; also its face score value.
    pub fn cell_count(&self) -> usize {
        self.canonical_cells().len()
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PieceKind {
    type Err = String;

    /// Looks a piece up by its conventional name, e.g. "X5".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PieceKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("unknown piece name: {s:?}"))
    }
}

/// A catalog entry: a piece identity plus its deduplicated orientation set.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    orientations: Vec<Shape>,
}

impl Piece {
    /// Generates the orientation set for a catalog key.
    ///
    /// Applies the four rotations to the canonical shape and to its mirror
    /// image, keeping each distinct normalized result. The collection order
    /// is fixed (rotations of the canonical shape first, then of the mirror),
    /// so orientation indices are stable.
    pub fn new(kind: PieceKind) -> Result<Self, ShapeDefinitionError> {
        let mut orientations = Vec::with_capacity(8);
        let mut current = Shape::new(kind.canonical_cells().to_vec())?;
        for _ in 0..2 {
            for _ in 0..4 {
                if !orientations.contains(&current) {
                    orientations.push(current.clone());
                }
                current = current.rotated();
            }
            current = current.mirrored();
        }
        Ok(Piece { kind, orientations })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// All distinct orientations, between 1 and 8.
    pub fn orientations(&self) -> &[Shape] {
        &self.orientations
    }

    pub fn cell_count(&self) -> usize {
        self.kind.cell_count()
    }
}

/// The full piece catalog, computed on first use.
pub fn catalog() -> &'static [Piece] {
    static CATALOG: OnceLock<Vec<Piece>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        PieceKind::ALL
            .iter()
            .map(|&kind| Piece::new(kind).expect("canonical piece shapes are valid polyominoes"))
            .collect()
    })
}

/// The deduplicated orientation set for one catalog key.
pub fn orientations(kind: PieceKind) -> &'static [Shape] {
    catalog()[kind as usize].orientations()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_21_pieces() {
        assert_eq!(catalog().len(), 21);
        for (i, piece) in catalog().iter().enumerate() {
            assert_eq!(piece.kind() as usize, i);
        }
    }

    #[test]
    fn test_orientation_counts() {
        let expected = [
            (PieceKind::One, 1),
            (PieceKind::Two, 2),
            (PieceKind::I3, 2),
            (PieceKind::V3, 4),
            (PieceKind::I4, 2),
            (PieceKind::L4, 8),
            (PieceKind::O4, 1),
            (PieceKind::T4, 4),
            (PieceKind::Z4, 4),
            (PieceKind::F5, 8),
            (PieceKind::I5, 2),
            (PieceKind::L5, 8),
            (PieceKind::N5, 8),
            (PieceKind::P5, 8),
            (PieceKind::T5, 4),
            (PieceKind::U5, 4),
            (PieceKind::V5, 4),
            (PieceKind::W5, 4),
            (PieceKind::X5, 1),
            (PieceKind::Y5, 8),
            (PieceKind::Z5, 4),
        ];
        for (kind, count) in expected {
            assert_eq!(orientations(kind).len(), count, "piece {kind}");
        }
        let total: usize = PieceKind::ALL.iter().map(|&k| orientations(k).len()).sum();
        assert_eq!(total, 91);
    }

    #[test]
    fn test_orientations_preserve_cell_count() {
        for &kind in &PieceKind::ALL {
            for shape in orientations(kind) {
                assert_eq!(shape.cell_count(), kind.cell_count());
            }
        }
    }

    #[test]
    fn test_orientations_are_valid_polyominoes() {
        // Re-validating through the public constructor checks connectivity
        // and uniqueness of every generated orientation.
        for &kind in &PieceKind::ALL {
            for shape in orientations(kind) {
                let rebuilt = Shape::new(shape.cells().to_vec()).unwrap();
                assert_eq!(&rebuilt, shape);
            }
        }
    }

    #[test]
    fn test_total_cells() {
        let total: usize = PieceKind::ALL.iter().map(|k| k.cell_count()).sum();
        assert_eq!(total, 89);
    }

    #[test]
    fn test_name_lookup() {
        for &kind in &PieceKind::ALL {
            assert_eq!(kind.name().parse::<PieceKind>().unwrap(), kind);
        }
        assert!("Q7".parse::<PieceKind>().is_err());
    }
}
