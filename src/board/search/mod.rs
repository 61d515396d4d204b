//! Fixed-depth minimax search.
//!
//! The engine expands the complete game tree to the requested depth,
//! scores the leaves with the positional heuristic, backs values up
//! under alternating max/min selection, and picks the best root move.
//! There is no pruning and no move ordering; every legal move at every
//! node is expanded, so depth is the dominant cost and bounding it is
//! the caller's job.
//!
//! One search is one synchronous pass over a private tree: build, back
//! up, select, drop. Nothing is shared between calls.
//
// TODO: alpha-beta pruning would cut the tree well below the full
// product of branching factors.

mod tree;

use super::error::SearchError;
use super::types::{Color, Coord, MoveMap};
use super::Board;

use tree::SearchTree;

/// Result of a search: the chosen move plus every root move's
/// backed-up heuristic, in move-map order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found
    pub best_move: Coord,
    /// Each immediate move paired with its minimax value; the driver's
    /// debug mode shows this map
    pub evaluations: Vec<(Coord, i32)>,
}

/// Search for the best move for `to_move` on `board`.
///
/// `moves` must be the current legal-move map for `to_move`; the caller
/// already has it in hand from deciding whether the mover can act at
/// all. The heuristic is always taken from `to_move`'s perspective, at
/// every node of the tree.
///
/// # Errors
///
/// - [`SearchError::InvalidDepth`] when `depth` is 0. A depth-0 "random
///   move" difficulty is driver policy, not search policy.
/// - [`SearchError::NoLegalMoves`] when `moves` is empty. The mover must
///   pass, and passing is the caller's to handle.
pub fn find_best_move(
    board: &Board,
    to_move: Color,
    moves: &MoveMap,
    depth: usize,
) -> Result<SearchResult, SearchError> {
    if depth < 1 {
        return Err(SearchError::InvalidDepth { depth });
    }
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut tree = SearchTree::build(board, to_move, moves.clone(), depth);
    #[cfg(feature = "logging")]
    log::debug!(
        "expanded {} nodes across {} levels for {to_move}",
        tree.node_count(),
        tree.level_count(),
    );

    tree.backpropagate();
    let (best_move, evaluations) = tree.select().ok_or(SearchError::NoLegalMoves)?;
    #[cfg(feature = "logging")]
    log::debug!("selected {best_move} from {} root moves", evaluations.len());

    Ok(SearchResult {
        best_move,
        evaluations,
    })
}
