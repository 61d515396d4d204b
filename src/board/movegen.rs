//! Legal move generation.
//!
//! Othello move legality is pure ray geometry: a destination is legal
//! for a color when some straight line from it crosses a contiguous run
//! of opposing discs and ends on one of the mover's own discs. Rays come
//! from the precomputed boundary-clipped tables in [`super::rays`], so a
//! walk stops at the board edge and never wraps to the opposite side.

use super::rays::{ray, DIRECTIONS};
use super::types::{Color, Coord, MoveMap};
use super::Board;

impl Board {
    /// Compute every legal move for `color`, mapped to its capture set.
    ///
    /// Candidate destinations are found by scanning the occupied list in
    /// order and casting rays from each of the mover's discs: a ray that
    /// crosses at least one opposing disc and lands in-bounds on an
    /// empty cell marks that cell. Each candidate's capture set is then
    /// accumulated by re-casting rays from the candidate itself, keeping
    /// an opposing run only when a mover disc closes it. Candidates that
    /// capture nothing are dropped.
    ///
    /// An empty map is not an error; it means `color` must pass.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveMap {
        let opponent = color.opponent();
        let mut candidates: Vec<Coord> = Vec::new();

        for &from in &self.occupied {
            if self.cell(from).color() != Some(color) {
                continue;
            }
            for dir in 0..DIRECTIONS.len() {
                let mut crossed = false;
                for &at in ray(from, dir) {
                    match self.cell(at).color() {
                        Some(c) if c == opponent => crossed = true,
                        None => {
                            if crossed && !candidates.contains(&at) {
                                candidates.push(at);
                            }
                            break;
                        }
                        Some(_) => break,
                    }
                }
                // A ray that runs off the edge marks nothing.
            }
        }

        let mut moves = MoveMap::new();
        for dest in candidates {
            let flips = self.captures_for(dest, color);
            if !flips.is_empty() {
                moves.insert(dest, flips);
            }
        }
        moves
    }

    /// Collect every disc `color` would capture by playing `dest`: the
    /// union over all directions of opposing runs closed by a mover disc.
    fn captures_for(&self, dest: Coord, color: Color) -> Vec<Coord> {
        let opponent = color.opponent();
        let mut flips = Vec::new();

        for dir in 0..DIRECTIONS.len() {
            let mut run: Vec<Coord> = Vec::new();
            for &at in ray(dest, dir) {
                match self.cell(at).color() {
                    Some(c) if c == opponent => run.push(at),
                    Some(_) => {
                        // Mover disc closes the run; keep it.
                        flips.append(&mut run);
                        break;
                    }
                    None => break,
                }
            }
            // Runs ending on an empty cell or the board edge are discarded.
        }
        flips
    }
}
