//! Rovers and the notifications they send when they move.
use std::fmt;

use crate::{
    board::Coordinate,
    heading::{Heading, Rotation},
};

/// Handle to a rover placed on a [`Board`][crate::board::Board]. Handles remember the
/// board that issued them and don't resolve on any other board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RoverId {
    /// Identity of the issuing board.
    pub(crate) board: usize,
    /// Position of the rover in the board's list of rovers.
    pub(crate) index: usize,
}

impl fmt::Display for RoverId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}.{}", self.board, self.index)
    }
}

/// Position and heading of a rover.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pose {
    /// Square the rover is on.
    pub position: Coordinate,
    /// Direction the rover faces.
    pub heading: Heading,
}

impl Pose {
    /// Construct a [`Pose`] from a position and heading.
    pub fn new(position: Coordinate, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// The pose after turning in place.
    pub fn rotated(self, rotation: Rotation) -> Self {
        Self {
            heading: self.heading.rotate(rotation),
            ..self
        }
    }

    /// The pose after one step forward.
    pub fn advanced(self) -> Self {
        Self {
            position: self.position.step(self.heading),
            ..self
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// A rover moved from one square to another.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LocationChange {
    pub from: Coordinate,
    pub to: Coordinate,
}

/// Receives a [`LocationChange`] every time a rover moves. The board's grid implements
/// this to keep its occupancy in sync with rover positions.
pub trait LocationObserver {
    fn location_changed(&mut self, change: LocationChange);
}

/// Ignores all notifications. For rovers that aren't on a board.
impl LocationObserver for () {
    fn location_changed(&mut self, _change: LocationChange) {}
}

/// A rover with a position and heading.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rover {
    pose: Pose,
}

impl Rover {
    /// Construct a free-standing rover. Rovers on a board are created by
    /// [`Board::place_rover`][crate::board::Board::place_rover].
    pub fn new(position: Coordinate, heading: Heading) -> Self {
        Self {
            pose: Pose::new(position, heading),
        }
    }

    /// Current position and heading.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current position.
    pub fn position(&self) -> Coordinate {
        self.pose.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    /// Turn in place.
    pub fn rotate(&mut self, rotation: Rotation) -> &mut Self {
        self.pose = self.pose.rotated(rotation);
        self
    }

    /// Move one square forward and notify the observer. Does no bounds or collision
    /// checking.
    pub fn move_forward<O: LocationObserver + ?Sized>(&mut self, observer: &mut O) -> &mut Self {
        let from = self.pose.position;
        self.pose = self.pose.advanced();
        observer.location_changed(LocationChange {
            from,
            to: self.pose.position,
        });
        self
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.pose, f)
    }
}
