//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use othello_engine::board::prelude::*;
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, Cell, Color, Coord, CoordError, DiagramError, MoveError,
    MoveMap, SearchError, SearchResult,
};
