//! The board: a rolled distribution plus its derived adjacency graph.

use super::dice::Distribution;
use super::graph::AdjacencyGraph;
use super::search;
use tracing::{debug, instrument};

/// A boggle board for one round.
///
/// Owns the letter distribution and the adjacency graph built from it.
/// Immutable after construction; a new round gets a new board. The only
/// query is [`Board::exists`].
#[derive(Debug, Clone)]
pub struct Board {
    distribution: Distribution,
    graph: AdjacencyGraph,
}

impl Board {
    /// Rolls a fresh board from the dice catalog.
    #[instrument]
    pub fn new() -> Self {
        Self::from_distribution(Distribution::roll())
    }

    /// Builds a board over a fixed distribution.
    pub fn from_distribution(distribution: Distribution) -> Self {
        let graph = AdjacencyGraph::build(&distribution);
        Self {
            distribution,
            graph,
        }
    }

    /// Returns true if the word traces a valid path on this board.
    ///
    /// Expects a lower-cased word with no whitespace or punctuation;
    /// normalization happens upstream in word ingestion.
    #[instrument(skip(self))]
    pub fn exists(&self, word: &str) -> bool {
        let found = search::word_exists(&self.graph, word);
        debug!(word, found, "Board existence query");
        found
    }

    /// Returns the letter distribution.
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Returns the adjacency graph.
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Renders the board for display.
    ///
    /// One line per grid row, glyphs upper-cased and separated by two
    /// spaces, with a trailing newline. The messaging layer delivers
    /// this text as-is.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(4);
        for row in self.distribution.rows() {
            let glyphs: Vec<String> = row.iter().map(|glyph| glyph.to_uppercase()).collect();
            lines.push(glyphs.join("  "));
        }
        lines.join("\n") + "\n"
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
