//! Size of a rover board and the mapping between coordinates and storage indexes.
use std::convert::TryFrom;

use crate::board::{BoardError, Coordinate};

/// Rectangular dimensions of a board. Both corners are addressable, so a board with
/// `columns` by `lines` spans `x` in `[0, columns]` and `y` in `[0, lines]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Largest valid `x`.
    columns: i32,
    /// Largest valid `y`.
    lines: i32,
}

impl Dimensions {
    /// Largest number of squares a board may have. Every square is allocated up front.
    pub const MAX_SQUARES: usize = 1 << 24;

    /// Create new [`Dimensions`] with the specified upper right corner.
    /// Returns an error if either value is not positive, or if the board would have
    /// more than [`MAX_SQUARES`][Self::MAX_SQUARES] squares.
    pub fn try_new(columns: i32, lines: i32) -> Result<Self, BoardError> {
        let err = BoardError::InvalidDimensions { columns, lines };
        if columns <= 0 || lines <= 0 {
            return Err(err);
        }
        // Both are positive, so widening to usize is lossless.
        match (columns as usize + 1).checked_mul(lines as usize + 1) {
            Some(total) if total <= Self::MAX_SQUARES => Ok(Self { columns, lines }),
            _ => Err(err),
        }
    }

    /// Get the number of columns. This is the largest valid `x`.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Get the number of lines. This is the largest valid `y`.
    pub fn lines(&self) -> i32 {
        self.lines
    }

    /// Number of squares needed to cover these dimensions.
    pub fn total_size(&self) -> usize {
        self.width() * self.height()
    }

    /// Check if the given [`Coordinate`] lies on the board.
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        (0..=self.columns).contains(&coord.x) && (0..=self.lines).contains(&coord.y)
    }

    /// Convert a coordinate to its storage index. Squares are stored column by column,
    /// so all of `x = 0` comes first in increasing `y`, then `x = 1`, and so on.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        Some(x * self.height() + y)
    }

    /// Get an iterator over all coordinates in storage order.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let lines = self.lines;
        (0..=self.columns).flat_map(move |x| (0..=lines).map(move |y| Coordinate::new(x, y)))
    }

    /// Number of distinct `x` values.
    fn width(&self) -> usize {
        self.columns as usize + 1
    }

    /// Number of distinct `y` values.
    fn height(&self) -> usize {
        self.lines as usize + 1
    }
}
