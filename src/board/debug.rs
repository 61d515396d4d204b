use super::types::{Coord, SIZE};
use super::Board;

#[cfg(debug_assertions)]
impl Board {
    /// Check that the occupied list matches the set of non-empty cells
    /// exactly, with no duplicates. Panics on violation.
    pub(crate) fn assert_consistent(&self) {
        let mut seen = [false; SIZE * SIZE];
        for &at in &self.occupied {
            assert!(
                !self.cell(at).is_empty(),
                "occupied list names empty cell {at}"
            );
            assert!(!seen[at.as_index()], "occupied list repeats {at}");
            seen[at.as_index()] = true;
        }
        for idx in 0..SIZE * SIZE {
            let at = Coord::from_index(idx);
            assert_eq!(
                seen[idx],
                !self.cell(at).is_empty(),
                "cell {at} missing from occupied list"
            );
        }
    }
}
