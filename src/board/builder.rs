//! Fluent builder for constructing board positions.
//!
//! Allows creating positions disc by disc rather than parsing diagrams.
//!
//! # Example
//! ```
//! use othello_engine::board::{BoardBuilder, Color, Coord};
//!
//! let board = BoardBuilder::new()
//!     .disc(Coord(0, 0), Color::Black)
//!     .disc(Coord(0, 7), Color::White)
//!     .build();
//! assert_eq!(board.disc_count(), 2);
//! ```

use super::types::{Color, Coord};
use super::Board;

/// A fluent builder for constructing `Board` positions.
///
/// Discs enter the occupied list in the order they are added, which is
/// the order move generation scans them.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    discs: Vec<(Coord, Color)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { discs: Vec::new() }
    }

    /// Create a builder holding the standard opening position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::new()
            .disc(Coord(3, 4), Color::Black)
            .disc(Coord(4, 3), Color::Black)
            .disc(Coord(3, 3), Color::White)
            .disc(Coord(4, 4), Color::White)
    }

    /// Add a disc at the given cell.
    #[must_use]
    pub fn disc(mut self, at: Coord, color: Color) -> Self {
        self.discs.push((at, color));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (at, color) in self.discs {
            board.set_disc(at, color);
        }
        board
    }
}
