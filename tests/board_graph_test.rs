//! Tests for adjacency graph construction.

use std::collections::HashSet;
use strictly_boggle::{Board, Distribution, LocatedGlyph};

fn letter_board() -> Board {
    Board::from_distribution(Distribution::from_rows([
        ["a", "b", "c", "d"],
        ["e", "f", "g", "h"],
        ["i", "j", "k", "l"],
        ["m", "n", "o", "p"],
    ]))
}

fn neighbors_of(board: &Board, glyph: &str, index: usize) -> HashSet<LocatedGlyph> {
    board
        .graph()
        .neighbors(&LocatedGlyph::new(glyph, index))
        .expect("cell belongs to the board")
        .clone()
}

#[test]
fn test_graph_has_sixteen_cells() {
    let board = letter_board();
    assert_eq!(board.graph().len(), 16);
}

#[test]
fn test_corner_cell_has_three_neighbors() {
    let board = letter_board();
    let expected: HashSet<LocatedGlyph> = [
        LocatedGlyph::new("b", 1),
        LocatedGlyph::new("e", 4),
        LocatedGlyph::new("f", 5),
    ]
    .into_iter()
    .collect();
    assert_eq!(neighbors_of(&board, "a", 0), expected);
}

#[test]
fn test_edge_cell_has_five_neighbors() {
    let board = letter_board();
    let expected: HashSet<LocatedGlyph> = [
        LocatedGlyph::new("a", 0),
        LocatedGlyph::new("c", 2),
        LocatedGlyph::new("e", 4),
        LocatedGlyph::new("f", 5),
        LocatedGlyph::new("g", 6),
    ]
    .into_iter()
    .collect();
    assert_eq!(neighbors_of(&board, "b", 1), expected);
}

#[test]
fn test_interior_cell_has_eight_neighbors() {
    let board = letter_board();
    let expected: HashSet<LocatedGlyph> = [
        LocatedGlyph::new("a", 0),
        LocatedGlyph::new("b", 1),
        LocatedGlyph::new("c", 2),
        LocatedGlyph::new("e", 4),
        LocatedGlyph::new("g", 6),
        LocatedGlyph::new("i", 8),
        LocatedGlyph::new("j", 9),
        LocatedGlyph::new("k", 10),
    ]
    .into_iter()
    .collect();
    assert_eq!(neighbors_of(&board, "f", 5), expected);
}

#[test]
fn test_neighbor_counts_match_cell_class() {
    // corners 3, edges 5, interior 8, for a rolled board too
    let board = Board::new();
    let corners = [0, 3, 12, 15];
    let interior = [5, 6, 9, 10];
    for cell in board.graph().cells() {
        let count = board
            .graph()
            .neighbors(cell)
            .expect("cell belongs to the board")
            .len();
        let expected = if corners.contains(&cell.index()) {
            3
        } else if interior.contains(&cell.index()) {
            8
        } else {
            5
        };
        assert_eq!(count, expected, "cell {cell}");
    }
}

#[test]
fn test_duplicate_glyphs_stay_distinct_cells() {
    let board = Board::from_distribution(Distribution::from_rows([
        ["a", "a", "a", "a"],
        ["a", "a", "a", "a"],
        ["a", "a", "a", "a"],
        ["a", "a", "a", "a"],
    ]));
    assert_eq!(board.graph().len(), 16);
    let neighbors = neighbors_of(&board, "a", 5);
    assert_eq!(neighbors.len(), 8);
    assert!(!neighbors.contains(&LocatedGlyph::new("a", 5)));
}

#[test]
fn test_render_upper_cases_rows() {
    let board = Board::from_distribution(Distribution::from_rows([
        ["a", "b", "c", "d"],
        ["ch", "f", "g", "h"],
        ["i", "j", "qu", "l"],
        ["m", "n", "o", "p"],
    ]));
    assert_eq!(
        board.render(),
        "A  B  C  D\nCH  F  G  H\nI  J  QU  L\nM  N  O  P\n"
    );
}
