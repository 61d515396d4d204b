//! Board text format: diagram parsing and rendering.
//!
//! A diagram is eight rows of eight cell characters (`B`, `W`, or `.`),
//! top row first, optionally separated by whitespace within a row:
//!
//! ```text
//! ........
//! ........
//! ........
//! ...WB...
//! ...BW...
//! ........
//! ........
//! ........
//! ```
//!
//! Rendering frames the grid with column letters and row numbers, the
//! same layout the console driver prints.

use std::fmt;
use std::str::FromStr;

use super::error::DiagramError;
use super::types::{Cell, Color, Coord, MoveMap, SIZE};
use super::Board;

impl Board {
    /// Parse a board from a diagram string.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != SIZE {
                return Err(DiagramError::WrongRowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                match c {
                    '.' => {}
                    _ => {
                        let color = Color::from_char(c)
                            .ok_or(DiagramError::InvalidCell { char: c })?;
                        board.set_disc(Coord(row, col), color);
                    }
                }
            }
        }
        Ok(board)
    }

    /// Render the board, marking every destination in `marks` with `-`.
    /// The console driver uses this to show the mover's options.
    #[must_use]
    pub fn render_with_moves(&self, marks: &MoveMap) -> String {
        let mut out = String::from("  A  B  C  D  E  F  G  H \n");
        for row in 0..SIZE {
            out.push_str(&(row + 1).to_string());
            for col in 0..SIZE {
                let at = Coord(row, col);
                let c = if marks.contains(at) {
                    '-'
                } else {
                    match self.cell(at) {
                        Cell::Empty => ' ',
                        cell => cell.to_char(),
                    }
                };
                out.push(' ');
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with_moves(&MoveMap::new()))
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}
