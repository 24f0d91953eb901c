//! Grid cells and the adjacency graph derived from a distribution.

use super::dice::{Distribution, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A glyph pinned to its grid cell.
///
/// Two cells may carry identical glyphs, so path search tracks the
/// (glyph, index) pair rather than the glyph alone. The index is
/// row-major, 0-15.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocatedGlyph {
    glyph: String,
    index: usize,
}

impl LocatedGlyph {
    /// Creates a located glyph.
    pub fn new(glyph: impl Into<String>, index: usize) -> Self {
        Self {
            glyph: glyph.into(),
            index,
        }
    }

    /// Returns the glyph text.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Returns the linear cell index (row * 4 + column).
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for LocatedGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.glyph, self.index)
    }
}

/// King-move connectivity between grid cells.
///
/// Maps every cell of the board to the set of cells reachable in one
/// step (up/down/left/right/diagonals, clipped at the board edge).
/// Built once at board construction and read-only afterwards; the
/// one-time O(16) cost keeps each existence query fast.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    nodes: HashMap<LocatedGlyph, HashSet<LocatedGlyph>>,
}

impl AdjacencyGraph {
    /// Builds the graph for a distribution.
    pub fn build(distribution: &Distribution) -> Self {
        let bound = GRID_SIZE as isize;
        let mut nodes = HashMap::with_capacity(GRID_SIZE * GRID_SIZE);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let key = LocatedGlyph::new(distribution.glyph(row, col), row * GRID_SIZE + col);
                let mut around = HashSet::new();
                for dr in -1..=1isize {
                    for dc in -1..=1isize {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let (nr, nc) = (row as isize + dr, col as isize + dc);
                        if (0..bound).contains(&nr) && (0..bound).contains(&nc) {
                            let (nr, nc) = (nr as usize, nc as usize);
                            around.insert(LocatedGlyph::new(
                                distribution.glyph(nr, nc),
                                nr * GRID_SIZE + nc,
                            ));
                        }
                    }
                }
                nodes.insert(key, around);
            }
        }
        Self { nodes }
    }

    /// Returns the neighbor set of a cell, if the cell belongs to this board.
    pub fn neighbors(&self, cell: &LocatedGlyph) -> Option<&HashSet<LocatedGlyph>> {
        self.nodes.get(cell)
    }

    /// Iterates over all cells of the board.
    pub fn cells(&self) -> impl Iterator<Item = &LocatedGlyph> {
        self.nodes.keys()
    }

    /// Returns the number of cells (always 16 for a 4x4 board).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph holds no cells.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
