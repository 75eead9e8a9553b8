use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    num::ParseIntError,
};

use clap::{App, Arg};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use marsrovers::{Board, BoardError, Heading, RoverId};

/// Matches the first line, `<columns> <lines>`.
static BOARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<columns>-?[0-9]+)\s+(?P<lines>-?[0-9]+)$").unwrap());

/// Matches a rover placement, `<x> <y> <heading>`.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<x>-?[0-9]+)\s+
        (?P<y>-?[0-9]+)\s+
        (?P<heading>\S)$",
    )
    .unwrap()
});

fn main() -> io::Result<()> {
    env_logger::init();

    let matches = App::new("Mars Rovers")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Drives rovers around a rectangular plateau.")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("read instructions from FILE instead of stdin")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("report_each")
                .short("r")
                .long("report-each")
                .help("print each rover's position after its commands are applied"),
        )
        .get_matches();

    let report_each = matches.is_present("report_each");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match matches.value_of("input") {
        Some(path) => run(BufReader::new(File::open(path)?), &mut out, report_each),
        None => {
            let stdin = io::stdin();
            let input = stdin.lock();
            run(input, &mut out, report_each)
        }
    }
}

/// Reason a line of input was rejected.
#[derive(Debug, Error)]
enum LineError {
    #[error("expected board size \"<columns> <lines>\", got {0:?}")]
    BadBoard(String),
    #[error("expected rover \"<x> <y> <heading>\", got {0:?}")]
    BadPlacement(String),
    #[error("number out of range: {0}")]
    BadNumber(#[from] ParseIntError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// What the next line of input is expected to be.
enum State {
    /// Waiting for the board size.
    Empty,
    /// Waiting for a rover to be placed.
    Placing(Board),
    /// Waiting for commands for the given rover.
    Driving(Board, RoverId),
}

/// Line-by-line driver for a single board.
struct Session {
    state: State,
    report_each: bool,
}

impl Session {
    fn new(report_each: bool) -> Self {
        Self {
            state: State::Empty,
            report_each,
        }
    }

    /// Handle one line of input. On error, the state is left as it was so the same kind
    /// of line can be entered again.
    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        let line = line.to_ascii_uppercase();
        let state = std::mem::replace(&mut self.state, State::Empty);
        self.state = match state {
            State::Empty => match parse_board(&line) {
                Ok(board) => State::Placing(board),
                Err(err) => {
                    report(out, &err)?;
                    State::Empty
                }
            },
            State::Placing(mut board) => match place(&mut board, &line) {
                Ok(rover) => State::Driving(board, rover),
                Err(err) => {
                    report(out, &err)?;
                    State::Placing(board)
                }
            },
            State::Driving(mut board, rover) => match board.compute_movements(&line, rover) {
                Ok(()) => {
                    if self.report_each {
                        if let Some(rover) = board.rover(rover) {
                            writeln!(out, "{}", rover)?;
                        }
                    }
                    State::Placing(board)
                }
                Err(err) => {
                    report(out, &LineError::from(err))?;
                    State::Driving(board, rover)
                }
            },
        };
        Ok(())
    }

    /// End the session, printing every rover on the board.
    fn finish<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self.state {
            State::Empty => Ok(()),
            State::Placing(board) | State::Driving(board, _) => write!(out, "{}", board),
        }
    }
}

/// Read lines until an empty line or end of input, then print the final board. Only a
/// truly empty line ends the session; a line of blanks is handled like any other input.
fn run<B: BufRead, W: Write>(input: B, out: &mut W, report_each: bool) -> io::Result<()> {
    let mut session = Session::new(report_each);
    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        session.handle_line(line.trim(), out)?;
    }
    session.finish(out)
}

/// Print a rejected line's error and keep going.
fn report<W: Write>(out: &mut W, err: &LineError) -> io::Result<()> {
    match err {
        LineError::Board(err) => debug!("rejected by board: {:?}", err.kind()),
        other => warn!("malformed input: {}", other),
    }
    writeln!(out, "{}", err)
}

fn parse_board(line: &str) -> Result<Board, LineError> {
    let captures = BOARD
        .captures(line)
        .ok_or_else(|| LineError::BadBoard(line.to_owned()))?;
    let columns = captures["columns"].parse::<i32>()?;
    let lines = captures["lines"].parse::<i32>()?;
    Ok(Board::new(columns, lines)?)
}

fn place(board: &mut Board, line: &str) -> Result<RoverId, LineError> {
    let captures = PLACE
        .captures(line)
        .ok_or_else(|| LineError::BadPlacement(line.to_owned()))?;
    let x = captures["x"].parse::<i32>()?;
    let y = captures["y"].parse::<i32>()?;
    // The pattern guarantees exactly one character.
    let heading = captures["heading"]
        .chars()
        .next()
        .map_or(Heading::North, Heading::from_char);
    Ok(board.place_rover((x, y).into(), heading)?)
}
