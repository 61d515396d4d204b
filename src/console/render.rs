//! Console output for the game loop.

use crate::board::{Board, Coord, MoveMap};

use super::Player;

/// Print the board with the mover's candidate destinations marked.
pub(crate) fn print_board(board: &Board, moves: &MoveMap) {
    println!("{}", board.render_with_moves(moves));
}

/// Print the running score line.
pub(crate) fn print_score(players: &[Player; 2], board: &Board) {
    let (black, white) = board.score();
    println!(
        "Score:   {} (B) = {}   {} (W) = {}",
        players[0].name, black, players[1].name, white
    );
}

/// Print the separator that opens each turn.
pub(crate) fn print_turn_rule() {
    println!("{}", "~".repeat(100));
}

/// Print the engine's move evaluations for debug mode.
pub(crate) fn print_evaluations(evaluations: &[(Coord, i32)]) {
    let pairs: Vec<String> = evaluations
        .iter()
        .map(|(mv, value)| format!("{mv}: {value}"))
        .collect();
    println!("Move heuristics: {{{}}}", pairs.join(", "));
}
