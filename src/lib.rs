//! Remove pairs of same-colored tiles from a board
//!
//! Two tiles of one color may be removed together when the rectangle spanning them holds no
//! remaining tile of another color. [`solve::PairSolver`] searches for a long sequence of such
//! removals within a time budget.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod board;
pub mod collections;
pub mod error;
pub mod parse;
pub mod solve;
