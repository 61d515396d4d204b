//! Move generation tests.

use crate::board::{Board, BoardBuilder, Color, Coord};

fn make_board(diagram: &str) -> Board {
    diagram.parse().expect("valid diagram")
}

#[test]
fn opening_position_black_moves() {
    let board = Board::new();
    let moves = board.legal_moves(Color::Black);

    assert_eq!(moves.len(), 4);
    for notation in ["D3", "C4", "F5", "E6"] {
        let dest: Coord = notation.parse().expect("valid notation");
        let flips = moves.get(dest).unwrap_or_else(|| {
            panic!("expected {notation} to be legal");
        });
        assert_eq!(flips.len(), 1, "{notation} should capture exactly one disc");
    }
}

#[test]
fn opening_position_white_moves() {
    let board = Board::new();
    let moves = board.legal_moves(Color::White);

    // White's opening options mirror Black's.
    assert_eq!(moves.len(), 4);
    for notation in ["D6", "F4", "E3", "C5"] {
        let dest: Coord = notation.parse().expect("valid notation");
        assert!(moves.contains(dest), "expected {notation} to be legal");
    }
}

#[test]
fn opening_capture_sets() {
    let board = Board::new();
    let moves = board.legal_moves(Color::Black);

    let d3: Coord = "D3".parse().expect("valid notation");
    assert_eq!(moves.get(d3), Some(&[Coord(3, 3)][..]));
    let e6: Coord = "E6".parse().expect("valid notation");
    assert_eq!(moves.get(e6), Some(&[Coord(4, 4)][..]));
}

#[test]
fn move_order_is_deterministic() {
    let board = Board::new();
    let first = board.legal_moves(Color::Black);
    let second = board.legal_moves(Color::Black);

    let order_a: Vec<Coord> = first.destinations().collect();
    let order_b: Vec<Coord> = second.destinations().collect();
    assert_eq!(order_a, order_b);
}

#[test]
fn no_moves_returns_empty_map() {
    // A lone disc has nothing to capture.
    let board = BoardBuilder::new().disc(Coord(3, 3), Color::Black).build();
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(board.legal_moves(Color::White).is_empty());
}

#[test]
fn empty_board_has_no_moves() {
    let board = Board::empty();
    assert!(board.legal_moves(Color::Black).is_empty());
}

#[test]
fn capture_requires_closing_disc() {
    // Black next to a white run that ends on an empty cell: the run is
    // never closed, so the cell past it is not a legal destination from
    // that direction.
    let board = make_board(
        "........
         ........
         ........
         .BWW....
         ........
         ........
         ........
         ........",
    );
    let moves = board.legal_moves(Color::Black);
    let dest = Coord(3, 4);
    assert!(moves.contains(dest), "E4 should be legal");
    // Flips accumulate walking outward from the destination.
    assert_eq!(moves.get(dest), Some(&[Coord(3, 3), Coord(3, 2)][..]));
    assert_eq!(moves.len(), 1);

    // White in turn can only move on the far side of the black disc.
    let white_moves = board.legal_moves(Color::White);
    assert_eq!(white_moves.len(), 1);
    assert_eq!(white_moves.get(Coord(3, 0)), Some(&[Coord(3, 1)][..]));
}

#[test]
fn capture_unions_multiple_directions() {
    // Playing D4 captures along the row and the column at once.
    let board = make_board(
        "........
         ...B....
         ...W....
         .BW.....
         ........
         ........
         ........
         ........",
    );
    let moves = board.legal_moves(Color::Black);
    let dest = Coord(3, 3);
    let flips = moves.get(dest).expect("D4 should be legal");
    assert_eq!(flips.len(), 2);
    assert!(flips.contains(&Coord(2, 3)));
    assert!(flips.contains(&Coord(3, 2)));
}

#[test]
fn long_run_captured_whole() {
    let board = make_board(
        "B.......
         W.......
         W.......
         W.......
         W.......
         W.......
         W.......
         ........",
    );
    let moves = board.legal_moves(Color::Black);
    let dest = Coord(7, 0);
    let flips = moves.get(dest).expect("A8 should be legal");
    assert_eq!(flips.len(), 6);
}

#[test]
fn occupied_cell_is_never_a_destination() {
    let board = Board::new();
    let moves = board.legal_moves(Color::Black);
    for &at in board.occupied() {
        assert!(!moves.contains(at));
    }
}
