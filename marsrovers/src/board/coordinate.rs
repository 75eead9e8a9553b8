use std::fmt;

use crate::heading::Heading;

/// The coordinates of a square on the board, or of a position a rover might try to
/// reach. Signed so that positions past the bottom or left edge can be represented and
/// rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Coordinate {
    /// Horizontal position, increasing to the east.
    pub x: i32,
    /// Vertical position, increasing to the north.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the coordinate one step away along the given heading. Saturates at the
    /// integer limits, which are never on a board.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns true if `other` differs from this coordinate by at most one in each axis.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        // Widen so that saturated coordinates can't overflow the subtraction.
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx <= 1 && dy <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
