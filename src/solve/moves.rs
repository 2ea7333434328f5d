use std::fmt;

use itertools::Itertools;

use crate::collections::Coord;

/// A pair of same-colored tiles removed together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub first: Coord,
    pub second: Coord,
}

impl Move {
    pub fn new(first: Coord, second: Coord) -> Self {
        Self { first, second }
    }
}

/// `row1 col1 row2 col2`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.first.row(),
            self.first.col(),
            self.second.row(),
            self.second.col()
        )
    }
}

/// Render the number of moves followed by one line per move
pub fn format_moves(moves: &[Move]) -> String {
    let mut s = moves.len().to_string();
    s.push('\n');
    if !moves.is_empty() {
        s.push_str(&moves.iter().join("\n"));
        s.push('\n');
    }
    s
}
