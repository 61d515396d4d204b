//! Minimax tree construction and value backup.

use super::super::types::{Color, Coord, MoveMap};
use super::super::Board;

/// One position inside the search tree.
///
/// Nodes never point at each other; a node records the index of its
/// parent within the previous level, so the tree is a plain value with
/// no shared ownership.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) board: Board,
    /// Whose turn it is at this node, not who moved into it
    pub(crate) to_move: Color,
    /// The move that produced this node; `None` for the root
    pub(crate) entered_by: Option<Coord>,
    /// Index of the parent within the previous level; 0 for the root
    pub(crate) parent: usize,
    /// Set at creation for leaves, filled by backup for inner nodes
    pub(crate) heuristic: Option<i32>,
    /// The child move currently backing this node's heuristic
    pub(crate) best_reply: Option<Coord>,
    /// Legal moves for `to_move` on this node's board
    pub(crate) moves: MoveMap,
}

/// A fixed-depth game tree, stored level by level.
///
/// Every leaf is scored from the root color's perspective at build
/// time. The tree is built once, backed up once, read once, then
/// dropped; nothing survives into the next search call.
pub(crate) struct SearchTree {
    levels: Vec<Vec<Node>>,
}

impl SearchTree {
    /// Expand the full tree breadth-first from `board` down `depth` plies.
    ///
    /// Level 0 holds the root; the color to move alternates each level.
    /// Every legal move of every node is expanded, so level sizes are the
    /// running product of branching factors. Nodes at the final level are
    /// scored immediately, always from the root color's perspective. A
    /// node whose mover has no legal move gets no children and is scored
    /// immediately as well, so the backup pass below never meets an
    /// unscored subtree.
    pub(crate) fn build(board: &Board, to_move: Color, moves: MoveMap, depth: usize) -> Self {
        let perspective = to_move;
        let root = Node {
            board: board.clone(),
            to_move,
            entered_by: None,
            parent: 0,
            heuristic: None,
            best_reply: None,
            moves,
        };
        let mut levels = vec![vec![root]];

        for ply in 0..depth {
            let mut next = Vec::new();
            for (parent_idx, parent) in levels[ply].iter().enumerate() {
                for entry in &parent.moves {
                    let mut board = parent.board.clone();
                    board.apply(parent.to_move, entry.dest, &entry.flips);
                    let to_move = parent.to_move.opponent();
                    let moves = board.legal_moves(to_move);
                    let heuristic = (ply + 1 == depth || moves.is_empty())
                        .then(|| board.evaluate(perspective));
                    next.push(Node {
                        board,
                        to_move,
                        entered_by: Some(entry.dest),
                        parent: parent_idx,
                        heuristic,
                        best_reply: None,
                        moves,
                    });
                }
            }
            if next.is_empty() {
                break;
            }
            levels.push(next);
        }

        SearchTree { levels }
    }

    /// Back heuristics up the tree, deepest level first.
    ///
    /// Children are folded into their parents in sibling order: a parent
    /// with no value adopts the first child seen; after that a child
    /// replaces the parent's value only by a strict comparison, greater
    /// at odd levels (the incoming move was the root color's, maximize)
    /// and less at even levels (the opponent's, minimize). Ties keep the
    /// earlier child, which makes the whole pass deterministic.
    pub(crate) fn backpropagate(&mut self) {
        for ply in (1..self.levels.len()).rev() {
            let (lower, upper) = self.levels.split_at_mut(ply);
            let (Some(parents), Some(children)) = (lower.last_mut(), upper.first()) else {
                continue;
            };
            let maximizing = ply % 2 == 1;
            for child in children {
                let Some(value) = child.heuristic else {
                    continue;
                };
                let parent = &mut parents[child.parent];
                let replace = match parent.heuristic {
                    None => true,
                    Some(held) => {
                        if maximizing {
                            value > held
                        } else {
                            value < held
                        }
                    }
                };
                if replace {
                    parent.heuristic = Some(value);
                    parent.best_reply = child.entered_by;
                }
            }
        }
    }

    /// Pick the root move whose subtree backed up the greatest value.
    ///
    /// The backup pass already folded the root's children in sibling
    /// order, first seen winning ties, so the root's best reply is the
    /// answer; the children are scanned once more only to report every
    /// root move with its backed-up heuristic. Returns `None` only when
    /// the root has no children.
    pub(crate) fn select(&self) -> Option<(Coord, Vec<(Coord, i32)>)> {
        let root = self.levels.first()?.first()?;
        let replies = self.levels.get(1)?;
        let evaluations = replies
            .iter()
            .filter_map(|node| Some((node.entered_by?, node.heuristic?)))
            .collect();
        root.best_reply.map(|mv| (mv, evaluations))
    }

    /// Number of expanded levels, root included
    #[cfg(feature = "logging")]
    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Total number of nodes in the tree
    #[cfg(feature = "logging")]
    pub(crate) fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }
}
