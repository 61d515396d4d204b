pub mod board;
pub mod console;

pub use board::{find_best_move, Board, Cell, Color, Coord, MoveMap, SearchResult};
