//! Counts of present tiles over rectangles of the board

use crate::board::{Board, Color};
use crate::collections::Coord;

/// A 2D Fenwick tree of present-tile counts for one class of tiles.
///
/// Point updates and prefix queries are O(log H · log W).
#[derive(Clone, Debug)]
pub struct OccupancyIndex {
    height: usize,
    width: usize,
    /// 1-based tree with stride `width + 1`; row and column 0 are unused
    tree: Vec<i32>,
}

impl OccupancyIndex {
    /// Build an index where `present` tells which cells are counted, in O(H·W)
    pub fn build(height: usize, width: usize, present: impl Fn(Coord) -> bool) -> Self {
        let stride = width + 1;
        let mut tree = vec![0; (height + 1) * stride];
        for y in 0..height {
            for x in 0..width {
                if present(Coord::new(y, x)) {
                    tree[(y + 1) * stride + x + 1] = 1;
                }
            }
        }
        // push every node into its parent, first along rows then along columns
        for i in 1..=height {
            for j in 1..=width {
                let parent = j + lowbit(j);
                if parent <= width {
                    tree[i * stride + parent] += tree[i * stride + j];
                }
            }
        }
        for i in 1..=height {
            let parent = i + lowbit(i);
            if parent <= height {
                for j in 1..=width {
                    tree[parent * stride + j] += tree[i * stride + j];
                }
            }
        }
        Self {
            height,
            width,
            tree,
        }
    }

    pub fn add(&mut self, y: usize, x: usize, delta: i32) {
        debug_assert!(y < self.height && x < self.width);
        let stride = self.width + 1;
        let mut i = y + 1;
        while i <= self.height {
            let mut j = x + 1;
            while j <= self.width {
                self.tree[i * stride + j] += delta;
                j += lowbit(j);
            }
            i += lowbit(i);
        }
    }

    /// Count over the rectangle `[0, y) × [0, x)`
    fn prefix_sum(&self, y: usize, x: usize) -> i32 {
        let stride = self.width + 1;
        let mut sum = 0;
        let mut i = y;
        while i > 0 {
            let mut j = x;
            while j > 0 {
                sum += self.tree[i * stride + j];
                j &= j - 1;
            }
            i &= i - 1;
        }
        sum
    }

    /// Count over the half-open rectangle `[y0, y1) × [x0, x1)`
    pub fn range_sum(&self, y0: usize, x0: usize, y1: usize, x1: usize) -> i32 {
        debug_assert!(y0 <= y1 && y1 <= self.height);
        debug_assert!(x0 <= x1 && x1 <= self.width);
        self.prefix_sum(y1, x1) - self.prefix_sum(y0, x1) - self.prefix_sum(y1, x0)
            + self.prefix_sum(y0, x0)
    }

    pub fn point(&self, coord: Coord) -> i32 {
        self.range_sum(coord.row(), coord.col(), coord.row() + 1, coord.col() + 1)
    }

    pub fn copy_from(&mut self, source: &OccupancyIndex) {
        debug_assert_eq!((self.height, self.width), (source.height, source.width));
        self.tree.copy_from_slice(&source.tree);
    }
}

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// The half-open bounding rectangle `(y0, x0, y1, x1)` of two cells
pub fn bounding_rect(a: Coord, b: Coord) -> (usize, usize, usize, usize) {
    (
        a.row().min(b.row()),
        a.col().min(b.col()),
        a.row().max(b.row()) + 1,
        a.col().max(b.col()) + 1,
    )
}

/// One occupancy index per color, followed by one counting tiles of any color
#[derive(Clone, Debug)]
pub struct Occupancy {
    indices: Vec<OccupancyIndex>,
}

impl Occupancy {
    /// Every tile of the board present
    pub fn new(board: &Board) -> Self {
        let (height, width) = (board.height(), board.width());
        let mut indices: Vec<OccupancyIndex> = (0..board.color_count())
            .map(|color| {
                OccupancyIndex::build(height, width, |coord| {
                    usize::from(board.color(coord)) == color
                })
            })
            .collect();
        indices.push(OccupancyIndex::build(height, width, |_| true));
        Self { indices }
    }

    pub fn color(&self, color: Color) -> &OccupancyIndex {
        &self.indices[usize::from(color)]
    }

    pub fn any(&self) -> &OccupancyIndex {
        &self.indices[self.indices.len() - 1]
    }

    pub fn remove(&mut self, coord: Coord, color: Color) {
        let any = self.indices.len() - 1;
        debug_assert_eq!(1, self.indices[usize::from(color)].point(coord));
        self.indices[usize::from(color)].add(coord.row(), coord.col(), -1);
        self.indices[any].add(coord.row(), coord.col(), -1);
    }

    /// Whether every present tile in the bounding rectangle of `a` and `b` has the given color
    pub fn is_clear(&self, color: Color, a: Coord, b: Coord) -> bool {
        let (y0, x0, y1, x1) = bounding_rect(a, b);
        self.color(color).range_sum(y0, x0, y1, x1) == self.any().range_sum(y0, x0, y1, x1)
    }

    pub fn present_count(&self) -> usize {
        let any = self.any();
        any.range_sum(0, 0, any.height, any.width) as usize
    }

    pub fn copy_from(&mut self, source: &Occupancy) {
        debug_assert_eq!(self.indices.len(), source.indices.len());
        for (index, source) in self.indices.iter_mut().zip(&source.indices) {
            index.copy_from(source);
        }
    }
}
