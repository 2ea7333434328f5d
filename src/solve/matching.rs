//! A single greedy pass removing same-colored pairs until none remain

use std::cmp::Ordering;

use crate::board::{Board, Color};
use crate::collections::Coord;
use crate::solve::adjacency::{AdjacencyBoard, Direction, DirectionSet};
use crate::solve::moves::Move;
use crate::solve::occupancy::Occupancy;
use crate::solve::removal_mask::RemovalMask;

/// Everything a pass mutates. Restored from a saved source state before each pass.
#[derive(Clone)]
pub struct PassState {
    pub mask: RemovalMask,
    pub occupancy: Occupancy,
    /// present cells of each color, in scan order
    pub positions: Vec<Vec<Coord>>,
    pub history: Vec<Move>,
}

impl PassState {
    /// Every tile of the board present
    pub fn new(board: &Board) -> Self {
        Self {
            mask: RemovalMask::new(board.height(), board.width()),
            occupancy: Occupancy::new(board),
            positions: (0..board.color_count())
                .map(|color| board.cells_of(color as Color).collect())
                .collect(),
            history: Vec::new(),
        }
    }

    /// Reset to `source` without reallocating. The history is cleared.
    pub fn restore(&mut self, source: &PassState) {
        self.mask.copy_from(&source.mask);
        self.occupancy.copy_from(&source.occupancy);
        for (positions, source) in self.positions.iter_mut().zip(&source.positions) {
            positions.clear();
            positions.extend_from_slice(source);
        }
        self.history.clear();
    }

    pub fn present_count(&self) -> usize {
        self.positions.iter().map(Vec::len).sum()
    }
}

/// Greedily removes pairs in `color_order` until a full sweep over every color removes nothing.
///
/// For each pivot the first partner found in position-list order is taken, not the nearest.
/// Partners are pre-filtered with the pivot's open directions before the rectangle query,
/// and the rectangle query alone decides whether a pair is removed.
pub struct MatchingPass<'a> {
    adjacency: &'a AdjacencyBoard,
    state: &'a mut PassState,
    color_order: &'a [Color],
    max_pairs: Option<usize>,
    removed: usize,
}

impl<'a> MatchingPass<'a> {
    pub fn new(
        adjacency: &'a AdjacencyBoard,
        state: &'a mut PassState,
        color_order: &'a [Color],
    ) -> Self {
        Self {
            adjacency,
            state,
            color_order,
            max_pairs: None,
            removed: 0,
        }
    }

    /// Stop once this many pairs have been removed
    pub fn max_pairs(mut self, max_pairs: usize) -> Self {
        self.max_pairs = Some(max_pairs);
        self
    }

    /// Runs the pass and returns the number of pairs removed
    pub fn run(mut self) -> usize {
        loop {
            let mut removed_any = false;
            for &color in self.color_order {
                if self.match_color(color) {
                    removed_any = true;
                }
                if self.limit_reached() {
                    return self.removed;
                }
            }
            if !removed_any {
                break;
            }
        }
        self.removed
    }

    fn limit_reached(&self) -> bool {
        self.max_pairs.map_or(false, |max| self.removed >= max)
    }

    /// Removes pairs of one color until no pivot has a partner
    fn match_color(&mut self, color: Color) -> bool {
        let color_index = usize::from(color);
        if color_index >= self.state.positions.len() {
            return false;
        }
        let mut removed_any = false;
        let mut i = 0;
        while i < self.state.positions[color_index].len() && !self.limit_reached() {
            match self.find_partner(color, i) {
                Some(j) => {
                    self.remove_pair(color, i, j);
                    removed_any = true;
                    // Pivots before the first refilled slot already failed, and removing
                    // tiles of their own color neither clears a rectangle nor opens a
                    // direction for them, so the rescan resumes there.
                    i = i.min(j);
                }
                None => i += 1,
            }
        }
        removed_any
    }

    fn find_partner(&self, color: Color, i: usize) -> Option<usize> {
        let positions = &self.state.positions[usize::from(color)];
        let pivot = positions[i];
        let open = self.open_directions(pivot);
        positions.iter().enumerate().position(|(j, &other)| {
            j != i
                && may_reach(open, pivot, other)
                && self.state.occupancy.is_clear(color, pivot, other)
        })
    }

    /// Directions whose neighbor is removed, off the board, or originally the same color
    fn open_directions(&self, pivot: Coord) -> DirectionSet {
        let mut open = self.adjacency.same_color_neighbors(pivot);
        let (y, x) = (pivot.row() as isize, pivot.col() as isize);
        for &direction in &Direction::ALL {
            let (dy, dx) = direction.offset();
            if self.state.mask.get(y + dy, x + dx) {
                open.insert(direction);
            }
        }
        open
    }

    fn remove_pair(&mut self, color: Color, i: usize, j: usize) {
        let state = &mut *self.state;
        let positions = &mut state.positions[usize::from(color)];
        let (pivot, partner) = (positions[i], positions[j]);
        debug_assert_eq!(color, self.adjacency.color_of(pivot));
        debug_assert_eq!(color, self.adjacency.color_of(partner));
        positions.swap_remove(i.max(j));
        positions.swap_remove(i.min(j));
        for &coord in &[pivot, partner] {
            state.mask.set(coord);
            state.occupancy.remove(coord, color);
        }
        state.history.push(Move::new(pivot, partner));
        self.removed += 1;
        trace!("Removed {:?} and {:?} (color {})", pivot, partner, color);
    }
}

/// Whether the pivot's open directions allow `other` as a partner. A closed direction means a
/// present tile of another color sits next to the pivot inside the bounding rectangle.
fn may_reach(open: DirectionSet, pivot: Coord, other: Coord) -> bool {
    use Direction::*;
    use Ordering::*;

    match (other.row().cmp(&pivot.row()), other.col().cmp(&pivot.col())) {
        (Less, Equal) => open.contains(Up),
        (Greater, Equal) => open.contains(Down),
        (Equal, Less) => open.contains(Left),
        (Equal, Greater) => open.contains(Right),
        (Less, Less) => open.contains_all(&[UpLeft, Up, Left]),
        (Less, Greater) => open.contains_all(&[UpRight, Up, Right]),
        (Greater, Less) => open.contains_all(&[DownLeft, Down, Left]),
        (Greater, Greater) => open.contains_all(&[DownRight, Down, Right]),
        (Equal, Equal) => false,
    }
}
