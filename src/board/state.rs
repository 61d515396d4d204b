use super::error::MoveError;
use super::types::{Cell, Color, Coord, MoveMap, SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8x8 Othello board.
///
/// Alongside the cell grid the board keeps an occupied-position list:
/// the coordinates of every non-empty cell, in the order discs were
/// placed. The list always matches the set of non-empty cells exactly
/// and holds no duplicates; move generation and evaluation scan it
/// instead of the full grid, and its order feeds the deterministic
/// move ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) grid: [[Cell; SIZE]; SIZE],
    pub(crate) occupied: Vec<Coord>,
}

impl Board {
    /// Create a board with the standard opening position: Black discs
    /// at D4 and E5, White discs at D5 and E4.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.set_disc(Coord(3, 4), Color::Black);
        board.set_disc(Coord(4, 3), Color::Black);
        board.set_disc(Coord(3, 3), Color::White);
        board.set_disc(Coord(4, 4), Color::White);
        board
    }

    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[Cell::Empty; SIZE]; SIZE],
            occupied: Vec::new(),
        }
    }

    /// Get the state of a cell
    #[inline]
    #[must_use]
    pub fn cell(&self, at: Coord) -> Cell {
        self.grid[at.row()][at.col()]
    }

    /// The occupied-position list: every non-empty cell, in placement order
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> &[Coord] {
        &self.occupied
    }

    /// Number of discs on the board
    #[inline]
    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.occupied.len()
    }

    /// Returns true when all 64 cells are occupied
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied.len() == SIZE * SIZE
    }

    /// Count the discs of each color, returned as (black, white)
    #[must_use]
    pub fn score(&self) -> (usize, usize) {
        let black = self
            .occupied
            .iter()
            .filter(|&&at| self.cell(at) == Cell::Black)
            .count();
        (black, self.occupied.len() - black)
    }

    /// Row-major snapshot of the grid
    #[must_use]
    pub fn snapshot(&self) -> [[Cell; SIZE]; SIZE] {
        self.grid
    }

    /// Place a disc on an empty cell and record it in the occupied list.
    /// Used by position construction; gameplay goes through [`Board::apply`].
    pub(crate) fn set_disc(&mut self, at: Coord, color: Color) {
        debug_assert!(self.cell(at).is_empty(), "cell {at} already occupied");
        self.grid[at.row()][at.col()] = Cell::from(color);
        self.occupied.push(at);
    }

    /// Apply a move: place the mover's disc on `dest` and turn every
    /// cell in `flips` to the mover's color. Capture only recolors, so
    /// the occupied list gains exactly the destination.
    pub(crate) fn apply(&mut self, color: Color, dest: Coord, flips: &[Coord]) {
        debug_assert!(self.cell(dest).is_empty(), "destination {dest} occupied");
        self.grid[dest.row()][dest.col()] = Cell::from(color);
        self.occupied.push(dest);
        for &flip in flips {
            debug_assert!(!self.cell(flip).is_empty(), "flipping empty cell {flip}");
            self.grid[flip.row()][flip.col()] = Cell::from(color);
        }
        #[cfg(debug_assertions)]
        self.assert_consistent();
    }

    /// Play a move from a legal-move map.
    ///
    /// Returns `MoveError::UnknownMove` when `dest` is not in the map,
    /// or when the destination is already occupied, which signals that
    /// the map is stale for this board.
    pub fn play(&mut self, color: Color, dest: Coord, moves: &MoveMap) -> Result<(), MoveError> {
        let flips = moves
            .get(dest)
            .filter(|_| self.cell(dest).is_empty())
            .ok_or_else(|| MoveError::UnknownMove {
                notation: dest.to_string(),
            })?
            .to_vec();
        self.apply(color, dest, &flips);
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
