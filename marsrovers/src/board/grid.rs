//! Storage for the squares of a board and the occupancy index they make up.
use std::ops::{Index, IndexMut};

use log::trace;

use crate::{
    board::{Coordinate, Dimensions},
    rover::{LocationChange, LocationObserver, RoverId},
};

/// A single square of the grid.
#[derive(Debug, Default)]
pub(super) struct Square {
    /// The rover that occupies this square, if any.
    pub(super) rover: Option<RoverId>,
}

/// Squares of a board, stored in the order given by [`Dimensions::try_linearize`].
#[derive(Debug)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Squares that make up this board.
    pub(super) squares: Box<[Square]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let squares = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, squares }
    }

    /// Get a reference to the square at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&Square> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.squares.get(i))
    }

    /// Get a mutable reference to the square at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Square> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.squares.get_mut(i))
    }
}

impl Index<&Coordinate> for Grid {
    type Output = Square;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

impl LocationObserver for Grid {
    /// Move the occupant of `from` onto `to`. Movement is validated before any rover on
    /// the board is moved, so both squares exist and `to` is free.
    fn location_changed(&mut self, change: LocationChange) {
        let rover = self[&change.from].rover.take();
        debug_assert!(rover.is_some(), "no rover at {}", change.from);
        debug_assert!(
            self[&change.to].rover.is_none() || self[&change.to].rover == rover,
            "{} is already occupied",
            change.to
        );
        trace!("{:?} moved {} -> {}", rover, change.from, change.to);
        self[&change.to].rover = rover;
    }
}
