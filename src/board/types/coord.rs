//! Board coordinate type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// Board side length; the board is always `SIZE` x `SIZE`.
pub const SIZE: usize = 8;

/// A cell on the board, represented as (row, column).
///
/// Rows and columns are zero-based and count from the top-left corner.
/// The textual form pairs a column letter with a one-based row number,
/// so `Coord(2, 3)` prints as `D3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord(pub usize, pub usize); // (row, column)

impl Coord {
    /// Create a new coordinate with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Coord(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = the top row, printed as 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = column A)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Step to a neighbouring cell, returning `None` when the step
    /// leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if (0..SIZE as isize).contains(&row) && (0..SIZE as isize).contains(&col) {
            Some(Coord(row as usize, col as usize))
        } else {
            None
        }
    }

    /// True when the cell lies on the top or bottom row
    #[inline]
    #[must_use]
    pub const fn on_boundary_row(self) -> bool {
        self.0 == 0 || self.0 == SIZE - 1
    }

    /// True when the cell lies on the leftmost or rightmost column
    #[inline]
    #[must_use]
    pub const fn on_boundary_col(self) -> bool {
        self.1 == 0 || self.1 == SIZE - 1
    }

    /// Get the cell's index (0-63, A1=0, B1=1, ..., H8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * SIZE + self.1
    }

    /// Create a coordinate from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Coord(idx / SIZE, idx % SIZE)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'A') as char, self.0 + 1)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by index (A1=0, B1=1, ..., H8=63)
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= SIZE {
            return Err(CoordError::RowOutOfBounds { row });
        }
        if col >= SIZE {
            return Err(CoordError::ColOutOfBounds { col });
        }
        Ok(Coord(row, col))
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(CoordError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let col = match chars[0].to_ascii_uppercase() {
            c @ 'A'..='H' => c as usize - 'A' as usize,
            _ => {
                return Err(CoordError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => {
                return Err(CoordError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Coord(row, col))
    }
}
