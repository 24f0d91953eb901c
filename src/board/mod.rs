mod board;
mod dice;
mod graph;
mod search;

pub use board::Board;
pub use dice::{DICE, Die, Distribution, GRID_SIZE};
pub use graph::{AdjacencyGraph, LocatedGlyph};
