//! Rovers exploring a rectangular plateau.
//!
//! A [`Board`] owns a fixed grid of squares and every [`Rover`] placed on it. Rovers are
//! driven by command strings made of `L` (turn left), `R` (turn right), and `M` (move one
//! square forward). A command string is always simulated against the board before the
//! rover moves, so it is either applied in full or rejected with no change at all.
//!
//! ```
//! use marsrovers::{Board, Coordinate, Heading};
//!
//! let mut board = Board::new(5, 5)?;
//! let rover = board.place_rover(Coordinate::new(1, 2), Heading::North)?;
//! board.compute_movements("LMLMLMLMM", rover)?;
//! assert_eq!(board.to_string(), "1 3 N\n");
//! # Ok::<(), marsrovers::BoardError>(())
//! ```

pub mod board;
pub mod heading;
pub mod rover;

pub use crate::{
    board::{Board, BoardError, Coordinate, ErrorKind},
    heading::{Heading, Rotation},
    rover::{Rover, RoverId},
};
