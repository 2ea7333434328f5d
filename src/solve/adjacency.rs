use std::fmt;

use crate::board::{Board, Color};
use crate::collections::{Coord, Grid};

/// One of the eight neighbors of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// `(dy, dx)`
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of directions packed into one byte
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn contains_all(self, directions: &[Direction]) -> bool {
        directions.iter().all(|&d| self.contains(d))
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(Direction::ALL.iter().filter(|&&d| self.contains(d)))
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct CellInfo {
    color: Color,
    same_color: DirectionSet,
}

/// Per-cell color and the neighbors that share it, computed once from the original board.
///
/// Off-board neighbors never match.
pub struct AdjacencyBoard {
    cells: Grid<CellInfo>,
}

impl AdjacencyBoard {
    pub fn new(board: &Board) -> Self {
        let mut cells = Grid::with_value(board.height(), board.width(), CellInfo::default());
        for coord in board.colors().coords() {
            let color = board.color(coord);
            let mut same_color = DirectionSet::default();
            for &direction in &Direction::ALL {
                let (dy, dx) = direction.offset();
                let matches = coord
                    .offset(dy, dx)
                    .filter(|&neighbor| board.contains(neighbor))
                    .map_or(false, |neighbor| board.color(neighbor) == color);
                if matches {
                    same_color.insert(direction);
                }
            }
            cells[coord] = CellInfo { color, same_color };
        }
        Self { cells }
    }

    pub fn color_of(&self, coord: Coord) -> Color {
        self.cells[coord].color
    }

    pub fn same_color_neighbor(&self, coord: Coord, direction: Direction) -> bool {
        self.cells[coord].same_color.contains(direction)
    }

    pub fn same_color_neighbors(&self, coord: Coord) -> DirectionSet {
        self.cells[coord].same_color
    }
}

#[cfg(test)]
mod tests {
    use super::{AdjacencyBoard, Direction, DirectionSet};
    use crate::board::Board;
    use crate::collections::Coord;

    #[test]
    fn neighbors() {
        let board = Board::from_rows(&["001", "101", "110"]).unwrap();
        let adjacency = AdjacencyBoard::new(&board);
        let center = Coord::new(1, 1);
        assert_eq!(0, adjacency.color_of(center));
        let expected = [
            (Direction::Up, true),
            (Direction::Down, false),
            (Direction::Left, false),
            (Direction::Right, false),
            (Direction::UpLeft, true),
            (Direction::UpRight, false),
            (Direction::DownLeft, false),
            (Direction::DownRight, true),
        ];
        for &(direction, same) in &expected {
            assert_eq!(
                same,
                adjacency.same_color_neighbor(center, direction),
                "{:?}",
                direction
            );
        }
    }

    #[test]
    fn border_never_matches() {
        let board = Board::from_rows(&["00", "00"]).unwrap();
        let adjacency = AdjacencyBoard::new(&board);
        let mut expected = DirectionSet::default();
        expected.insert(Direction::Down);
        expected.insert(Direction::Right);
        expected.insert(Direction::DownRight);
        assert_eq!(expected, adjacency.same_color_neighbors(Coord::new(0, 0)));
    }

    #[test]
    fn single_cell() {
        let board = Board::from_rows(&["7"]).unwrap();
        let adjacency = AdjacencyBoard::new(&board);
        assert!(adjacency.same_color_neighbors(Coord::new(0, 0)).is_empty());
    }
}
