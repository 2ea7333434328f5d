//! Check a move list against the rules by applying it to a fresh board

use crate::board::{Board, Color};
use crate::collections::Coord;
use crate::error::{InvalidMove, InvalidMoveKind};
use crate::solve::moves::Move;
use crate::solve::occupancy::{bounding_rect, Occupancy};
use crate::solve::removal_mask::RemovalMask;

/// Applies `moves` in order, failing at the first move that breaks a rule
pub fn validate_moves(board: &Board, moves: &[Move]) -> Result<(), InvalidMove> {
    let mut occupancy = Occupancy::new(board);
    let mut mask = RemovalMask::new(board.height(), board.width());
    for (index, m) in moves.iter().enumerate() {
        let invalid = |kind| InvalidMove { index, kind };
        for &coord in &[m.first, m.second] {
            if !board.contains(coord) {
                return Err(invalid(InvalidMoveKind::OutOfBounds(coord)));
            }
        }
        if m.first == m.second {
            return Err(invalid(InvalidMoveKind::SameCell));
        }
        for &coord in &[m.first, m.second] {
            if mask.is_removed(coord) {
                return Err(invalid(InvalidMoveKind::AlreadyRemoved(coord)));
            }
        }
        let color = board.color(m.first);
        if board.color(m.second) != color {
            return Err(invalid(InvalidMoveKind::ColorMismatch));
        }
        if !occupancy.is_clear(color, m.first, m.second) {
            let coord = find_obstruction(board, &mask, color, m)
                .expect("occupancy disagrees with the removal mask");
            return Err(invalid(InvalidMoveKind::Obstructed(coord)));
        }
        for &coord in &[m.first, m.second] {
            mask.set(coord);
            occupancy.remove(coord, color);
        }
    }
    debug!("Validated {} moves", moves.len());
    Ok(())
}

fn find_obstruction(board: &Board, mask: &RemovalMask, color: Color, m: &Move) -> Option<Coord> {
    let (y0, x0, y1, x1) = bounding_rect(m.first, m.second);
    (y0..y1)
        .flat_map(|y| (x0..x1).map(move |x| Coord::new(y, x)))
        .find(|&coord| !mask.is_removed(coord) && board.color(coord) != color)
}
