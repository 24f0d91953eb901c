//! The dice catalog and the per-board letter distribution.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the sixteen six-faced dice used to fill the grid.
pub type Die = [&'static str; 6];

/// The fixed dice catalog.
///
/// Faces are lower-case glyphs; all are single letters except the
/// digraphs "qu" and "ch", which occupy one cell and are traversed
/// as a single unit.
pub const DICE: [Die; 16] = [
    ["g", "o", "l", "d", "o", "b"],
    ["f", "u", "a", "a", "b", "r"],
    ["b", "t", "a", "i", "n", "a"],
    ["b", "u", "o", "a", "e", "i"],
    ["c", "m", "r", "e", "a", "e"],
    ["v", "u", "qu", "d", "ch", "b"],
    ["t", "a", "i", "o", "l", "g"],
    ["m", "i", "b", "n", "e", "e"],
    ["a", "x", "h", "n", "s", "j"],
    ["ch", "o", "o", "e", "e", "u"],
    ["j", "i", "r", "f", "s", "e"],
    ["r", "z", "s", "p", "l", "t"],
    ["t", "m", "o", "f", "i", "u"],
    ["r", "e", "s", "d", "a", "h"],
    ["v", "u", "e", "c", "p", "o"],
    ["t", "a", "p", "s", "c", "a"],
];

/// Grid dimension. Only 4x4 boards are supported.
pub const GRID_SIZE: usize = 4;

/// A 4x4 ordered grid of glyphs, one per cell, in row-major order.
///
/// A distribution is rolled once per board and owned exclusively by
/// that board; it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    rows: [[String; 4]; 4],
}

impl Distribution {
    /// Rolls a fresh distribution from the catalog using the thread RNG.
    ///
    /// The catalog is shuffled (uniform permutation), dice are assigned
    /// to cells in row-major order, and one face is chosen uniformly
    /// per die.
    #[instrument]
    pub fn roll() -> Self {
        Self::roll_with(&mut rand::rng())
    }

    /// Rolls a distribution using a caller-provided RNG.
    ///
    /// Useful for deterministic boards in tests and replays.
    pub fn roll_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut dice = DICE;
        dice.shuffle(rng);

        let mut faces = dice
            .iter()
            .map(|die| die.choose(rng).copied().unwrap_or(die[0]).to_string());
        let rows = std::array::from_fn(|_| std::array::from_fn(|_| faces.next().unwrap_or_default()));
        Self { rows }
    }

    /// Builds a fixed distribution from literal rows.
    pub fn from_rows(rows: [[&str; 4]; 4]) -> Self {
        Self {
            rows: rows.map(|row| row.map(|glyph| glyph.to_lowercase())),
        }
    }

    /// Returns the glyph at the given row and column (both 0-3).
    pub fn glyph(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }

    /// Returns the grid rows in order.
    pub fn rows(&self) -> &[[String; 4]; 4] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixteen_dice_of_six_faces() {
        assert_eq!(DICE.len(), GRID_SIZE * GRID_SIZE);
        for die in DICE {
            assert_eq!(die.len(), 6);
            for face in die {
                assert!(matches!(face.len(), 1 | 2));
                assert_eq!(face, face.to_lowercase());
            }
        }
    }

    #[test]
    fn test_roll_places_one_catalog_face_per_cell() {
        let distribution = Distribution::roll();
        let mut cells = 0;
        for row in distribution.rows() {
            for glyph in row {
                cells += 1;
                assert!(
                    DICE.iter().any(|die| die.contains(&glyph.as_str())),
                    "glyph {glyph:?} is not a catalog face"
                );
            }
        }
        assert_eq!(cells, 16);
    }

    #[test]
    fn test_from_rows_lowercases() {
        let distribution = Distribution::from_rows([
            ["A", "B", "C", "D"],
            ["E", "F", "G", "H"],
            ["I", "J", "K", "L"],
            ["M", "N", "O", "P"],
        ]);
        assert_eq!(distribution.glyph(0, 0), "a");
        assert_eq!(distribution.glyph(3, 3), "p");
    }
}
