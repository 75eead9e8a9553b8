//! Types that make up the rover board.

use std::{
    borrow::Borrow,
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

use log::debug;

use crate::{
    heading::Heading,
    rover::{Rover, RoverId},
};

use self::grid::{Grid, Square};
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{BoardError, ErrorKind},
    validate::{parse_commands, simulate, Command, Trajectory},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
mod validate;

/// Source of board identities, so that a [`RoverId`] only resolves on the board that
/// issued it.
static NEXT_BOARD: AtomicUsize = AtomicUsize::new(0);

/// Reference to a particular square of the board.
#[derive(Debug, Copy, Clone)]
pub struct SquareRef<'a> {
    /// Coordinate of this square.
    coord: Coordinate,

    /// The rover that occupies this square, if any.
    rover: Option<(RoverId, &'a Rover)>,
}

impl<'a> SquareRef<'a> {
    /// The coordinate of this square.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Whether a rover is on this square.
    pub fn occupied(&self) -> bool {
        self.rover.is_some()
    }

    /// The rover on this square, if any.
    pub fn rover(&self) -> Option<&'a Rover> {
        self.rover.map(|(_, rover)| rover)
    }

    /// Handle of the rover on this square, if any.
    pub fn rover_id(&self) -> Option<RoverId> {
        self.rover.map(|(id, _)| id)
    }
}

/// A rectangular plateau that rovers move on. Owns its rovers and tracks which square
/// each of them is on.
#[derive(Debug)]
pub struct Board {
    /// Identity stamped on every [`RoverId`] this board hands out.
    id: usize,

    /// Squares and their occupants.
    grid: Grid,

    /// Every rover placed on this board, indexed by [`RoverId`].
    rovers: Vec<Rover>,
}

impl Board {
    /// Construct an empty board reaching from `(0, 0)` to `(columns, lines)` inclusive.
    /// Fails if either value is not positive.
    pub fn new(columns: i32, lines: i32) -> Result<Self, BoardError> {
        let dim = Dimensions::try_new(columns, lines)?;
        Ok(Self {
            id: NEXT_BOARD.fetch_add(1, Ordering::Relaxed),
            grid: Grid::new(dim),
            rovers: Vec::new(),
        })
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of squares on the board.
    pub fn square_count(&self) -> usize {
        self.grid.squares.len()
    }

    /// Get the square at the given coordinate.
    pub fn square_at(&self, coord: Coordinate) -> Result<SquareRef, BoardError> {
        self.grid
            .get(&coord)
            .map(|square| self.square_ref(coord, square))
            .ok_or(BoardError::OutOfBounds(coord))
    }

    /// Get the squares at each of the given coordinates, in order. Fails on the first
    /// coordinate that isn't on the board.
    pub fn squares_at<I>(&self, coords: I) -> Result<Vec<SquareRef>, BoardError>
    where
        I: IntoIterator,
        I::Item: Borrow<Coordinate>,
    {
        coords
            .into_iter()
            .map(|coord| self.square_at(*coord.borrow()))
            .collect()
    }

    /// Get an iterator over every square of the board in storage order: all of `x = 0`
    /// in increasing `y`, then `x = 1`, and so on.
    pub fn squares(&self) -> impl Iterator<Item = SquareRef> {
        self.grid
            .dim
            .iter_coordinates()
            .zip(self.grid.squares.iter())
            .map(move |(coord, square)| self.square_ref(coord, square))
    }

    /// Get the rover with the given handle. Returns `None` for a handle issued by a
    /// different board.
    pub fn rover(&self, id: RoverId) -> Option<&Rover> {
        if id.board != self.id {
            return None;
        }
        self.rovers.get(id.index)
    }

    /// Get an iterator over the rovers on the board, in storage order of the squares
    /// they occupy.
    pub fn rovers(&self) -> impl Iterator<Item = (RoverId, &Rover)> {
        self.squares()
            .filter_map(|square| square.rover_id().zip(square.rover()))
    }

    /// Put a new rover on the given square. Fails if the square is off the board or
    /// already holds a rover.
    pub fn place_rover(
        &mut self,
        coord: Coordinate,
        heading: Heading,
    ) -> Result<RoverId, BoardError> {
        let id = RoverId {
            board: self.id,
            index: self.rovers.len(),
        };
        let square = self
            .grid
            .get_mut(&coord)
            .ok_or(BoardError::OutOfBounds(coord))?;
        if square.rover.is_some() {
            return Err(BoardError::Conflict(coord));
        }
        square.rover = Some(id);
        self.rovers.push(Rover::new(coord, heading));
        debug!("placed rover {} at {} facing {:?}", id, coord, heading);
        Ok(id)
    }

    /// Check whether the command string could be applied to the rover, without moving
    /// it.
    pub fn plan(&self, input: &str, rover: RoverId) -> Result<Trajectory, BoardError> {
        validate::validate(self, input, rover)
    }

    /// Apply a command string to a rover. The whole string is validated first; if any
    /// command is invalid or any step would leave the board or run into another rover,
    /// returns an error and nothing changes.
    pub fn compute_movements(&mut self, input: &str, rover: RoverId) -> Result<(), BoardError> {
        let trajectory = self.plan(input, rover)?;
        let live = &mut self.rovers[trajectory.rover().index];
        for command in trajectory.commands() {
            match *command {
                Command::Rotate(rotation) => {
                    live.rotate(rotation);
                }
                Command::Move => {
                    live.move_forward(&mut self.grid);
                }
            }
        }
        debug_assert_eq!(live.pose(), trajectory.end());
        debug!(
            "rover {} ran {:?}: {} -> {}",
            rover,
            input,
            trajectory.start(),
            trajectory.end()
        );
        Ok(())
    }

    /// Build a [`SquareRef`] for a square of this board.
    fn square_ref<'a>(&'a self, coord: Coordinate, square: &Square) -> SquareRef<'a> {
        SquareRef {
            coord,
            rover: square.rover.map(|id| (id, &self.rovers[id.index])),
        }
    }
}

impl fmt::Display for Board {
    /// One line per rover, in the format `"<x> <y> <heading>"`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (_, rover) in self.rovers() {
            writeln!(f, "{}", rover)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_rover(x: i32, y: i32, heading: char) -> (Board, RoverId) {
        let mut board = Board::new(5, 5).unwrap();
        let id = board
            .place_rover(Coordinate::new(x, y), Heading::from_char(heading))
            .unwrap();
        (board, id)
    }

    #[test]
    fn five_by_five_has_36_squares() {
        let board = Board::new(5, 5).unwrap();
        assert_eq!(board.square_count(), 36);
        assert_eq!(board.squares().count(), 36);
        assert!(board.squares().all(|s| !s.occupied()));
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn non_square_board() {
        let board = Board::new(3, 1).unwrap();
        assert_eq!(board.square_count(), 8);
        assert!(board.square_at(Coordinate::new(3, 1)).is_ok());
        assert_eq!(
            board.square_at(Coordinate::new(1, 2)).unwrap_err(),
            BoardError::OutOfBounds(Coordinate::new(1, 2))
        );
    }

    #[test]
    fn negative_dimensions() {
        let err = Board::new(-5, -5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(Board::new(0, 1).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn place_rover_marks_square() {
        let (board, id) = board_with_rover(1, 2, 'N');
        let square = board.square_at(Coordinate::new(1, 2)).unwrap();
        assert!(square.occupied());
        assert_eq!(square.rover_id(), Some(id));
        assert_eq!(square.rover().unwrap().heading(), Heading::North);
        assert_eq!(board.rover(id).unwrap().to_string(), "1 2 N");
    }

    #[test]
    fn place_rover_out_of_range() {
        let mut board = Board::new(5, 5).unwrap();
        let err = board
            .place_rover(Coordinate::new(6, 6), Heading::North)
            .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds(Coordinate::new(6, 6)));
        assert_eq!(
            board
                .place_rover(Coordinate::new(-1, 0), Heading::North)
                .unwrap_err()
                .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(board.rovers().count(), 0);
    }

    #[test]
    fn place_rover_on_occupied_square() {
        let (mut board, first) = board_with_rover(1, 2, 'N');
        let err = board
            .place_rover(Coordinate::new(1, 2), Heading::South)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(board.rover(first).unwrap().to_string(), "1 2 N");
        assert_eq!(board.to_string(), "1 2 N\n");
    }

    #[test]
    fn squares_at_keeps_order() {
        let (board, id) = board_with_rover(2, 2, 'E');
        let coords = [
            Coordinate::new(0, 1),
            Coordinate::new(2, 2),
            Coordinate::new(5, 5),
        ];
        let squares = board.squares_at(&coords).unwrap();
        let got: Vec<_> = squares.iter().map(|s| *s.coord()).collect();
        assert_eq!(got, coords.to_vec());
        assert_eq!(squares[1].rover_id(), Some(id));
        assert_eq!(
            board
                .squares_at(vec![Coordinate::new(0, 0), Coordinate::new(0, 6)])
                .unwrap_err(),
            BoardError::OutOfBounds(Coordinate::new(0, 6))
        );
    }

    #[test]
    fn compute_movements_updates_occupancy() {
        let (mut board, id) = board_with_rover(1, 2, 'N');
        board.compute_movements("MRM", id).unwrap();
        assert!(!board.square_at(Coordinate::new(1, 2)).unwrap().occupied());
        assert!(!board.square_at(Coordinate::new(1, 3)).unwrap().occupied());
        assert_eq!(
            board.square_at(Coordinate::new(2, 3)).unwrap().rover_id(),
            Some(id)
        );
        assert_eq!(board.squares().filter(|s| s.occupied()).count(), 1);
    }

    #[test]
    fn rotations_only() {
        let (mut board, id) = board_with_rover(1, 2, 'N');
        board.compute_movements("LLLL", id).unwrap();
        assert_eq!(board.rover(id).unwrap().heading(), Heading::North);
        board.compute_movements("RRRR", id).unwrap();
        assert_eq!(board.rover(id).unwrap().heading(), Heading::North);
        board.compute_movements("R", id).unwrap();
        assert_eq!(board.to_string(), "1 2 E\n");
    }

    #[test]
    fn display_uses_storage_order() {
        let mut board = Board::new(5, 5).unwrap();
        board.place_rover(Coordinate::new(3, 0), Heading::West).unwrap();
        board.place_rover(Coordinate::new(0, 4), Heading::South).unwrap();
        board.place_rover(Coordinate::new(0, 1), Heading::East).unwrap();
        assert_eq!(board.to_string(), "0 1 E\n0 4 S\n3 0 W\n");
    }

    #[test]
    fn unknown_handle() {
        let (mut board, _) = board_with_rover(0, 0, 'N');
        let stray = RoverId {
            board: board.id,
            index: 1,
        };
        assert_eq!(
            board.compute_movements("M", stray),
            Err(BoardError::NoRover(stray))
        );
    }

    #[test]
    fn handles_from_another_board_do_not_resolve() {
        let (mut mine, _) = board_with_rover(3, 3, 'E');
        let (theirs, foreign) = board_with_rover(0, 0, 'N');
        assert_ne!(mine.id, theirs.id);
        assert!(mine.rover(foreign).is_none());
        assert_eq!(
            mine.compute_movements("M", foreign),
            Err(BoardError::NoRover(foreign))
        );
        assert_eq!(mine.to_string(), "3 3 E\n");
        assert_eq!(theirs.to_string(), "0 0 N\n");
    }

    #[test]
    fn huge_dimensions_are_rejected() {
        assert_eq!(
            Board::new(i32::max_value(), i32::max_value()).unwrap_err(),
            BoardError::InvalidDimensions {
                columns: i32::max_value(),
                lines: i32::max_value(),
            }
        );
        assert_eq!(
            Board::new(100_000, 100_000).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }
}
