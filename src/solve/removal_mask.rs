use crate::board::MAX_SIZE;
use crate::collections::Coord;

/// Marks the cells removed during the current pass, one bit per cell.
///
/// Each row is a single `u128`, which covers every supported width.
/// Cells outside of the board read as removed.
#[derive(Clone, Debug)]
pub struct RemovalMask {
    width: usize,
    rows: Vec<u128>,
}

impl RemovalMask {
    pub fn new(height: usize, width: usize) -> Self {
        debug_assert!(width <= MAX_SIZE);
        Self {
            width,
            rows: vec![0; height],
        }
    }

    /// Whether the cell at `(y, x)` is removed. Off-board positions are always removed.
    pub fn get(&self, y: isize, x: isize) -> bool {
        if y < 0 || x < 0 || x as usize >= self.width {
            return true;
        }
        match self.rows.get(y as usize) {
            Some(row) => (row >> x) & 1 == 1,
            None => true,
        }
    }

    pub fn is_removed(&self, coord: Coord) -> bool {
        self.get(coord.row() as isize, coord.col() as isize)
    }

    pub fn set(&mut self, coord: Coord) {
        debug_assert!(coord.col() < self.width);
        self.rows[coord.row()] |= 1u128 << coord.col();
    }

    pub fn reset(&mut self) {
        for row in &mut self.rows {
            *row = 0;
        }
    }

    pub fn copy_from(&mut self, source: &RemovalMask) {
        debug_assert_eq!(self.width, source.width);
        self.rows.copy_from_slice(&source.rows);
    }

    pub fn count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::RemovalMask;
    use crate::collections::Coord;

    #[test]
    fn off_board_is_removed() {
        let mask = RemovalMask::new(2, 3);
        assert!(mask.get(-1, 0));
        assert!(mask.get(0, -1));
        assert!(mask.get(2, 0));
        assert!(mask.get(0, 3));
        assert!(!mask.get(1, 2));
    }

    #[test]
    fn set_is_idempotent() {
        let mut mask = RemovalMask::new(2, 127);
        mask.set(Coord::new(1, 126));
        mask.set(Coord::new(1, 126));
        assert!(mask.is_removed(Coord::new(1, 126)));
        assert!(!mask.is_removed(Coord::new(0, 126)));
        assert_eq!(1, mask.count());
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut mask = RemovalMask::new(3, 4);
        for y in 0..3 {
            for x in (y % 2..4).step_by(2) {
                mask.set(Coord::new(y, x));
            }
        }
        mask.reset();
        mask.reset();
        for y in 0..3 {
            for x in 0..4 {
                assert!(!mask.get(y, x));
            }
        }
        assert_eq!(0, mask.count());
    }
}
