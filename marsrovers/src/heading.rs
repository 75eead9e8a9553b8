//! Cardinal headings and the rotations between them.
use std::fmt;

/// Direction of a 90 degree turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rotation {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

/// Cardinal direction a rover faces. Ordered clockwise starting from `North`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Heading {
    /// Toward increasing `y`.
    North,
    /// Toward increasing `x`.
    East,
    /// Toward decreasing `y`.
    South,
    /// Toward decreasing `x`.
    West,
}

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: &'static [Heading] =
        &[Heading::North, Heading::East, Heading::South, Heading::West];

    /// Get the heading after turning once in the given direction.
    pub fn rotate(self, rotation: Rotation) -> Self {
        match (self, rotation) {
            (Heading::North, Rotation::Left) => Heading::West,
            (Heading::North, Rotation::Right) => Heading::East,
            (Heading::East, Rotation::Left) => Heading::North,
            (Heading::East, Rotation::Right) => Heading::South,
            (Heading::South, Rotation::Left) => Heading::East,
            (Heading::South, Rotation::Right) => Heading::West,
            (Heading::West, Rotation::Left) => Heading::South,
            (Heading::West, Rotation::Right) => Heading::North,
        }
    }

    /// Parse a heading from its single letter abbreviation. Anything other than `N`,
    /// `E`, `S`, or `W` is treated as `North`.
    pub fn from_char(c: char) -> Self {
        match c {
            'E' => Heading::East,
            'S' => Heading::South,
            'W' => Heading::West,
            _ => Heading::North,
        }
    }

    /// Single letter abbreviation of this heading.
    pub fn abbrev(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Unit `(dx, dy)` offset of one step forward along this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }
}

impl Default for Heading {
    fn default() -> Self {
        Heading::North
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.abbrev(), f)
    }
}
