//! Backtracking path search over the adjacency graph.
//!
//! Glyphs may be one or two characters, so candidates are matched by
//! prefix against the remaining suffix of the word; a per-character
//! walk would split a digraph cell into two steps. Recursion depth is
//! bounded by the word length and the branching factor by 8, so native
//! recursion is safe for any dictionary-sized input.

use super::graph::{AdjacencyGraph, LocatedGlyph};

/// Returns true if the word traces a valid path on the graph.
pub(crate) fn word_exists(graph: &AdjacencyGraph, word: &str) -> bool {
    extend_chain(graph, word, graph.cells(), &mut Vec::new())
}

/// Tries to extend the committed chain with each useful candidate.
///
/// `remaining` is the suffix of the word not yet matched; `candidates`
/// is the neighbor set of the last committed cell (or every cell on
/// the board at the first step). A candidate is useful when its glyph
/// is a prefix of `remaining`, it is not already part of the chain,
/// and — for the start cell only — it would supply the final glyph of
/// the word. Closing a loop back onto the start cell is legal only to
/// terminate the word, never mid-word.
fn extend_chain<'a>(
    graph: &'a AdjacencyGraph,
    remaining: &str,
    candidates: impl Iterator<Item = &'a LocatedGlyph>,
    chain: &mut Vec<&'a LocatedGlyph>,
) -> bool {
    if remaining.is_empty() {
        return true;
    }

    for candidate in candidates.filter(|cell| remaining.starts_with(cell.glyph())) {
        if chain.iter().skip(1).any(|used| *used == candidate) {
            // the cell is already spent earlier in the chain
            continue;
        }
        if let Some(first) = chain.first() {
            if *first == candidate && remaining.len() > candidate.glyph().len() {
                // revisiting the start cell before the last glyph
                // would close an unauthorized cycle
                continue;
            }
        }

        let Some(neighbors) = graph.neighbors(candidate) else {
            continue;
        };
        chain.push(candidate);
        if extend_chain(graph, &remaining[candidate.glyph().len()..], neighbors.iter(), chain) {
            return true;
        }
        chain.pop();
    }
    false
}
