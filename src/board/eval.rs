//! Positional heuristic.

use super::types::Color;
use super::Board;

impl Board {
    /// Score the board from `perspective`'s point of view.
    ///
    /// Each of the perspective color's discs is worth 1, plus 2 when it
    /// sits on a boundary row and 2 more on a boundary column, so a
    /// corner disc contributes 5. Opposing discs cost 2 per boundary row
    /// and column they hold, with no base penalty. With `score` the
    /// running total over the occupied list and `n` the number of
    /// occupied cells, the heuristic is `2 * score - n`: material plus a
    /// strong pull toward edges and corners.
    ///
    /// Pure function of the position; the same board always yields the
    /// same value.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        let mut score = 0i32;
        for &at in &self.occupied {
            match self.cell(at).color() {
                Some(c) if c == perspective => {
                    score += 1;
                    if at.on_boundary_row() {
                        score += 2;
                    }
                    if at.on_boundary_col() {
                        score += 2;
                    }
                }
                Some(_) => {
                    if at.on_boundary_row() {
                        score -= 2;
                    }
                    if at.on_boundary_col() {
                        score -= 2;
                    }
                }
                None => {}
            }
        }
        2 * score - self.occupied.len() as i32
    }
}
