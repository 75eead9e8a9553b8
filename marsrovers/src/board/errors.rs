//! Errors returned by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{
    board::{Coordinate, Dimensions},
    rover::RoverId,
};

/// Broad category of a [`BoardError`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A dimension or coordinate is outside the allowed range, or a path leaves the
    /// board.
    #[error("value out of range")]
    OutOfRange,
    /// A command string contained something other than `L`, `R`, or `M`.
    #[error("invalid command")]
    InvalidCommand,
    /// The command string was empty.
    #[error("empty input")]
    NullOrEmptyInput,
    /// No rover was found for the given handle.
    #[error("no rover")]
    NullRover,
    /// The requested position is held by another rover.
    #[error("conflict with another rover")]
    Conflict,
}

/// Error returned by board construction, placement, lookup, and movement.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// Both dimensions of a board must be positive, and the board may not have more
    /// than [`Dimensions::MAX_SQUARES`] squares.
    #[error(
        "board dimensions must be positive and cover at most {max} squares, got {columns}x{lines}",
        max = Dimensions::MAX_SQUARES
    )]
    InvalidDimensions { columns: i32, lines: i32 },

    /// The coordinate does not name a square on the board.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),

    /// Two consecutive positions of a path are not neighbors.
    #[error("path jumps from {from} to {to}")]
    NonAdjacentStep { from: Coordinate, to: Coordinate },

    /// The command string was empty.
    #[error("command string is empty")]
    EmptyCommand,

    /// The command string contained an unknown command.
    #[error("invalid command {command:?} at position {index}")]
    InvalidCommand { command: char, index: usize },

    /// The rover handle does not belong to this board.
    #[error("rover {0} is not on this board")]
    NoRover(RoverId),

    /// The square is already occupied by another rover.
    #[error("square {0} is occupied by another rover")]
    Conflict(Coordinate),
}

impl BoardError {
    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::InvalidDimensions { .. }
            | BoardError::OutOfBounds(_)
            | BoardError::NonAdjacentStep { .. } => ErrorKind::OutOfRange,
            BoardError::EmptyCommand => ErrorKind::NullOrEmptyInput,
            BoardError::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            BoardError::NoRover(_) => ErrorKind::NullRover,
            BoardError::Conflict(_) => ErrorKind::Conflict,
        }
    }

    /// Get the coordinate this error refers to, if any.
    pub fn coord(&self) -> Option<&Coordinate> {
        match self {
            BoardError::OutOfBounds(coord) | BoardError::Conflict(coord) => Some(coord),
            BoardError::NonAdjacentStep { to, .. } => Some(to),
            _ => None,
        }
    }
}
