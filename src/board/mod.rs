//! The static tile colors of a puzzle

use std::fs;
use std::path::Path;

use crate::collections::{Coord, Grid};
use crate::error::{BoardFromFileError, InvalidBoard, ParseBoardError};
use crate::parse::parse_board;

/// Largest supported height or width
pub const MAX_SIZE: usize = 127;

pub type Color = u8;

/// A rectangular board of colored tiles, as loaded before any tile is removed
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    colors: Grid<Color>,
    color_count: usize,
}

impl Board {
    pub(crate) fn new(colors: Grid<Color>) -> Self {
        debug_assert!(colors.height() <= MAX_SIZE && colors.width() <= MAX_SIZE);
        let color_count = colors.iter().max().map_or(0, |&c| usize::from(c) + 1);
        Self {
            colors,
            color_count,
        }
    }

    /// Build a board from rows of decimal digits
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidBoard> {
        if rows.is_empty() {
            return Err(InvalidBoard::new("the board has no rows".into()));
        }
        if rows.len() > MAX_SIZE {
            return Err(InvalidBoard::new(format!(
                "height {} exceeds {}",
                rows.len(),
                MAX_SIZE
            )));
        }
        let width = rows[0].as_ref().len();
        if width == 0 {
            return Err(InvalidBoard::new("the board has empty rows".into()));
        }
        if width > MAX_SIZE {
            return Err(InvalidBoard::new(format!(
                "width {} exceeds {}",
                width, MAX_SIZE
            )));
        }
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.as_ref();
                if row.len() != width {
                    return Err(InvalidBoard::new(format!(
                        "row {} has length {}, expected {}",
                        i,
                        row.len(),
                        width
                    )));
                }
                row.chars()
                    .map(|c| {
                        color_from_char(c).ok_or_else(|| {
                            InvalidBoard::new(format!("invalid color '{}' in row {}", c, i))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(Grid::from_rows(rows)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardFromFileError> {
        let s = fs::read_to_string(path)?;
        let board = Self::parse(&s)?;
        Ok(board)
    }

    pub fn parse(s: &str) -> Result<Self, ParseBoardError> {
        parse_board(s)
    }

    pub fn height(&self) -> usize {
        self.colors.height()
    }

    pub fn width(&self) -> usize {
        self.colors.width()
    }

    /// The number of cells on the board
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// One more than the largest color on the board
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    pub fn color(&self, coord: Coord) -> Color {
        self.colors[coord]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.colors.contains(coord)
    }

    pub fn colors(&self) -> &Grid<Color> {
        &self.colors
    }

    /// Every cell of the given color, in row-major order
    pub fn cells_of(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        self.colors
            .iter_coord()
            .filter(move |&(_, &c)| c == color)
            .map(|(coord, _)| coord)
    }

    /// The board rendered as rows of digits
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.colors
            .rows()
            .map(|row| row.iter().map(|&c| char::from(b'0' + c)).collect())
    }
}

pub(crate) fn color_from_char(c: char) -> Option<Color> {
    c.to_digit(10).map(|d| d as Color)
}
