//! Precomputed ray tables.
//!
//! For every cell and every direction the table holds the cells along
//! that direction out to the board edge. Walking a table ray therefore
//! terminates at the boundary and can never wrap onto the opposite edge.

use once_cell::sync::Lazy;

use super::types::{Coord, SIZE};

/// The 8 unit direction vectors as (row delta, column delta).
///
/// This order is fixed: the move generator scans directions in table
/// order, and the deterministic move ordering inherits from it.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

static RAYS: Lazy<Vec<[Vec<Coord>; 8]>> = Lazy::new(|| {
    (0..SIZE * SIZE)
        .map(|idx| {
            let origin = Coord::from_index(idx);
            std::array::from_fn(|dir| {
                let (dr, dc) = DIRECTIONS[dir];
                let mut ray = Vec::new();
                let mut cur = origin;
                while let Some(next) = cur.offset(dr, dc) {
                    ray.push(next);
                    cur = next;
                }
                ray
            })
        })
        .collect()
});

/// The cells along `dir` from `origin` (exclusive) out to the board edge
#[inline]
pub(crate) fn ray(origin: Coord, dir: usize) -> &'static [Coord] {
    &RAYS[origin.as_index()][dir]
}
