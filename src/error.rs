use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

use crate::collections::Coord;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[error("invalid board: {msg}")]
pub struct InvalidBoard {
    msg: String,
}

impl InvalidBoard {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum BoardFromFileError {
    #[error("error reading board file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseBoardError),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseBoardError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoard),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseBoardErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParseBoardErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: Some(line),
        }
    }

    pub(crate) const fn from_type(error_type: ParseBoardErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
        }
    }

    pub fn error_type(&self) -> &ParseBoardErrorType {
        &self.error_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseBoardErrorType {
    EmptyInput,
    EmptyRow,
    InvalidColor,
    InvalidHeight,
    MissingRows,
    RaggedRow,
    SizeTooBig,
    UnexpectedLine,
}

impl Display for ParseBoardErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseBoardErrorType::EmptyInput => "Empty input",
            ParseBoardErrorType::EmptyRow => "Empty row",
            ParseBoardErrorType::InvalidColor => "Invalid color",
            ParseBoardErrorType::InvalidHeight => "Invalid board height",
            ParseBoardErrorType::MissingRows => "Missing rows",
            ParseBoardErrorType::RaggedRow => "Row length differs from the first row",
            ParseBoardErrorType::SizeTooBig => "Board size too big",
            ParseBoardErrorType::UnexpectedLine => "Unexpected line",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

/// A move that cannot be applied at its position in a move list
#[derive(Debug, Error, PartialEq)]
#[error("move #{} is invalid: {}", .index + 1, .kind)]
pub struct InvalidMove {
    pub index: usize,
    pub kind: InvalidMoveKind,
}

#[derive(Debug, PartialEq)]
pub enum InvalidMoveKind {
    OutOfBounds(Coord),
    SameCell,
    AlreadyRemoved(Coord),
    ColorMismatch,
    Obstructed(Coord),
}

impl Display for InvalidMoveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveKind::OutOfBounds(c) => write!(f, "{:?} is outside of the board", c),
            InvalidMoveKind::SameCell => write!(f, "both tiles are the same cell"),
            InvalidMoveKind::AlreadyRemoved(c) => write!(f, "{:?} was already removed", c),
            InvalidMoveKind::ColorMismatch => write!(f, "tiles have different colors"),
            InvalidMoveKind::Obstructed(c) => {
                write!(f, "a tile of another color remains at {:?}", c)
            }
        }
    }
}
