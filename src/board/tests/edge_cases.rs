//! Boundary rays and special positions.

use crate::board::{Board, Cell, Color, Coord, MoveError, SIZE};

fn make_board(diagram: &str) -> Board {
    diagram.parse().expect("valid diagram")
}

#[test]
fn rays_never_wrap_across_an_edge() {
    // C3 is legal via the column capture. A generator that walks past
    // column A by wrapping would also claim the discs at G3 and H3,
    // because from A3 the "leftward" ray would reappear at column H and
    // run into the black disc at F3.
    let board = make_board(
        "........
         ........
         .....BWW
         W.......
         B.......
         ........
         ........
         ........",
    );
    let moves = board.legal_moves(Color::Black);
    let dest = Coord(2, 0);
    let flips = moves.get(dest).expect("A3 should be legal");
    assert_eq!(flips, &[Coord(3, 0)][..]);
}

#[test]
fn corner_destination_has_no_outward_rays() {
    let board = make_board(
        "........
         .W......
         ..B.....
         ........
         ........
         ........
         ........
         ........",
    );
    let moves = board.legal_moves(Color::Black);
    let corner = Coord(0, 0);
    let flips = moves.get(corner).expect("A1 should be legal");
    assert_eq!(flips, &[Coord(1, 1)][..]);
}

#[test]
fn edge_runs_capture_without_wrapping() {
    // A full bottom-edge run: H8 closes against the disc at A8.
    let board = make_board(
        "........
         ........
         ........
         ........
         ........
         ........
         ........
         BWWWWWW.",
    );
    let moves = board.legal_moves(Color::Black);
    let dest = Coord(7, 7);
    let flips = moves.get(dest).expect("H8 should be legal");
    assert_eq!(flips.len(), 6);
    assert!(flips.iter().all(|c| c.row() == 7));
}

#[test]
fn occupied_list_tracks_applied_moves() {
    let mut board = Board::new();
    let moves = board.legal_moves(Color::Black);
    let dest = moves.first().expect("opening has moves").dest;
    board.play(Color::Black, dest, &moves).expect("legal move");

    assert_eq!(board.disc_count(), 5);
    let mut from_grid = Vec::new();
    for idx in 0..SIZE * SIZE {
        let at = Coord::from_index(idx);
        if !board.cell(at).is_empty() {
            from_grid.push(at);
        }
    }
    let mut from_list: Vec<Coord> = board.occupied().to_vec();
    from_list.sort();
    assert_eq!(from_list, from_grid);
}

#[test]
fn apply_overwrites_captures_in_place() {
    let mut board = Board::new();
    let moves = board.legal_moves(Color::Black);
    let e6: Coord = "E6".parse().expect("valid notation");
    board.play(Color::Black, e6, &moves).expect("legal move");

    // E5 flipped to black; no cell was vacated.
    assert_eq!(board.cell(Coord(4, 4)), Cell::Black);
    assert_eq!(board.score(), (4, 1));
}

#[test]
fn play_rejects_moves_outside_the_map() {
    let mut board = Board::new();
    let moves = board.legal_moves(Color::Black);
    let err = board
        .play(Color::Black, Coord(0, 0), &moves)
        .expect_err("A1 is not legal at the opening");
    assert_eq!(
        err,
        MoveError::UnknownMove {
            notation: "A1".to_string()
        }
    );
    // The board is untouched by the rejected move.
    assert_eq!(board.disc_count(), 4);
}

#[test]
fn stale_map_is_rejected_after_the_board_changes() {
    let mut board = Board::new();
    let stale = board.legal_moves(Color::Black);
    let e6: Coord = "E6".parse().expect("valid notation");
    board.play(Color::Black, e6, &stale).expect("legal move");

    // Replaying from the stale map: the destination is now occupied.
    let err = board.play(Color::Black, e6, &stale).expect_err("stale map");
    assert!(matches!(err, MoveError::UnknownMove { .. }));
}

#[test]
fn full_board_detection() {
    let mut board = Board::empty();
    for idx in 0..SIZE * SIZE {
        assert!(!board.is_full());
        let at = Coord::from_index(idx);
        let color = if idx % 2 == 0 {
            Color::Black
        } else {
            Color::White
        };
        board.set_disc(at, color);
    }
    assert!(board.is_full());
    assert_eq!(board.score(), (32, 32));
}
