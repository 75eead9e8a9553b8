//! Validation of command strings. A command string is parsed and simulated against a
//! copy of the rover's pose, and the resulting path is checked against the board, all
//! before the live rover is touched.
use log::trace;

use crate::{
    board::{Board, BoardError, Coordinate},
    heading::Rotation,
    rover::{Pose, RoverId},
};

/// A single instruction from a command string.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// Turn in place (`L` or `R`).
    Rotate(Rotation),
    /// Step forward one square (`M`).
    Move,
}

impl Command {
    /// Parse a single command character. Case-sensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Command::Rotate(Rotation::Left)),
            'R' => Some(Command::Rotate(Rotation::Right)),
            'M' => Some(Command::Move),
            _ => None,
        }
    }
}

/// Parse a whole command string. Fails on an empty string or on the first character
/// that isn't a command.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, BoardError> {
    if input.is_empty() {
        return Err(BoardError::EmptyCommand);
    }
    input
        .chars()
        .enumerate()
        .map(|(index, c)| {
            Command::from_char(c).ok_or(BoardError::InvalidCommand { command: c, index })
        })
        .collect()
}

/// Apply commands to a pose without touching any rover. Returns the position reached by
/// every [`Command::Move`] in order, and the final pose.
pub fn simulate(start: Pose, commands: &[Command]) -> (Vec<Coordinate>, Pose) {
    let mut pose = start;
    let mut steps = Vec::new();
    for command in commands {
        match *command {
            Command::Rotate(rotation) => pose = pose.rotated(rotation),
            Command::Move => {
                pose = pose.advanced();
                steps.push(pose.position);
            }
        }
    }
    (steps, pose)
}

/// A command string that was checked against a board and can be applied as a whole.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Trajectory {
    rover: RoverId,
    start: Pose,
    end: Pose,
    steps: Vec<Coordinate>,
    commands: Vec<Command>,
}

impl Trajectory {
    /// The rover this trajectory was planned for.
    pub fn rover(&self) -> RoverId {
        self.rover
    }

    /// Pose of the rover before any command.
    pub fn start(&self) -> Pose {
        self.start
    }

    /// Pose of the rover after every command.
    pub fn end(&self) -> Pose {
        self.end
    }

    /// Every square entered, in order. Empty if there were no moves.
    pub fn steps(&self) -> &[Coordinate] {
        &self.steps
    }

    /// The parsed commands.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

/// Check that each position of a path is a neighbor of the one before it, starting
/// from `start`.
pub(super) fn check_adjacency(start: Coordinate, steps: &[Coordinate]) -> Result<(), BoardError> {
    let mut previous = start;
    for &to in steps {
        if !previous.is_adjacent(&to) {
            return Err(BoardError::NonAdjacentStep { from: previous, to });
        }
        previous = to;
    }
    Ok(())
}

/// Check that `input` can be applied to `rover` in full. Nothing on the board is
/// modified.
pub(super) fn validate(
    board: &Board,
    input: &str,
    rover: RoverId,
) -> Result<Trajectory, BoardError> {
    let commands = parse_commands(input)?;
    let start = board.rover(rover).ok_or(BoardError::NoRover(rover))?.pose();

    let (steps, end) = simulate(start, &commands);
    let squares = board.squares_at(&steps)?;
    check_adjacency(start.position, &steps)?;

    if let Some(square) = squares
        .iter()
        .find(|square| square.rover_id().map_or(false, |other| other != rover))
    {
        trace!("{} blocked at {} by {:?}", rover, square.coord(), square.rover_id());
        return Err(BoardError::Conflict(*square.coord()));
    }

    Ok(Trajectory {
        rover,
        start,
        end,
        steps,
        commands,
    })
}
