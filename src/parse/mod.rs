//! Parse boards from text
//!
//! The text format is a line holding the number of rows, followed by one line of digits per row.

use crate::board::{color_from_char, Board, Color, MAX_SIZE};
use crate::collections::Grid;
use crate::error::{ParseBoardError, ParseBoardErrorType::*, ParseError};

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// parse a `Board` from a string
pub fn parse_board(s: &str) -> Result<Board, ParseBoardError> {
    // line numbers are 1-based
    let mut lines = s
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()));
    let (height_line, height) = lines
        .by_ref()
        .find(|(_, line)| !line.is_empty())
        .ok_or_else(|| ParseError::from_type(EmptyInput))?;
    let height = read_height(height_line, height)?;
    let rows = lines
        .by_ref()
        .take(height)
        .map(|(i, line)| read_row(i, line))
        .collect::<Result<Vec<_>>>()?;
    if rows.len() < height {
        return Err(ParseError::from_type(MissingRows).into());
    }
    if let Some((i, line)) = lines.find(|(_, line)| !line.is_empty()) {
        return Err(ParseError::new(UnexpectedLine, line, i).into());
    }
    check_widths(height_line, &rows)?;
    Ok(Board::new(Grid::from_rows(rows)))
}

fn read_height(line_number: usize, line: &str) -> Result<usize> {
    let height = line
        .parse::<usize>()
        .map_err(|_| ParseError::new(InvalidHeight, line, line_number))?;
    if height == 0 {
        return Err(ParseError::new(InvalidHeight, line, line_number));
    }
    if height > MAX_SIZE {
        return Err(ParseError::new(SizeTooBig, line, line_number));
    }
    Ok(height)
}

fn read_row(line_number: usize, line: &str) -> Result<Vec<Color>> {
    if line.is_empty() {
        return Err(ParseError::new(EmptyRow, line, line_number));
    }
    line.chars()
        .map(|c| color_from_char(c).ok_or_else(|| ParseError::new(InvalidColor, c, line_number)))
        .collect()
}

fn check_widths(height_line: usize, rows: &[Vec<Color>]) -> Result<()> {
    let width = rows[0].len();
    if width > MAX_SIZE {
        return Err(ParseError::new(SizeTooBig, width, height_line + 1));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ParseError::new(RaggedRow, row.len(), height_line + 1 + i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::error::{ParseBoardError, ParseBoardErrorType};
    use crate::parse::parse_board;

    fn error_type(s: &str) -> ParseBoardErrorType {
        match parse_board(s) {
            Err(ParseBoardError::Parse(e)) => *e.error_type(),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty() {
        assert_eq!(ParseBoardErrorType::EmptyInput, error_type(""));
        assert_eq!(ParseBoardErrorType::EmptyInput, error_type("\n  \n"));
    }

    #[test]
    fn test() {
        let str = "\
        3\n\
        0120\n\
        1221\n\
        0000\n";
        let board = Board::from_rows(&["0120", "1221", "0000"]).unwrap();
        assert_eq!(board, parse_board(str).unwrap());
    }

    #[test]
    fn surrounding_whitespace() {
        let board = parse_board("\n 2 \r\n01\r\n10 \n\n").unwrap();
        assert_eq!(Board::from_rows(&["01", "10"]).unwrap(), board);
    }

    #[test]
    fn invalid_height() {
        assert_eq!(ParseBoardErrorType::InvalidHeight, error_type("x\n00"));
        assert_eq!(ParseBoardErrorType::InvalidHeight, error_type("0\n"));
        assert_eq!(ParseBoardErrorType::SizeTooBig, error_type("128\n00"));
    }

    #[test]
    fn missing_rows() {
        assert_eq!(ParseBoardErrorType::MissingRows, error_type("3\n00\n11"));
    }

    #[test]
    fn unexpected_line() {
        assert_eq!(ParseBoardErrorType::UnexpectedLine, error_type("1\n00\n11"));
    }

    #[test]
    fn invalid_color() {
        let err = parse_board("2\n00\n1x").unwrap_err();
        assert_eq!("Invalid color: \"x\" at line 3", err.to_string());
    }

    #[test]
    fn ragged_row() {
        assert_eq!(ParseBoardErrorType::RaggedRow, error_type("2\n000\n11"));
    }

    #[test]
    fn empty_row() {
        assert_eq!(ParseBoardErrorType::EmptyRow, error_type("2\n00\n\n11"));
    }
}
