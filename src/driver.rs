//! Line-oriented command protocol over a `RankedTreap<i64>`.
//!
//! The first line holds the number of commands that follow. Each command line holds two tokens,
//! `command value`. Command `1` inserts `value` and prints its rank. Any other command removes the
//! key whose rank is `value` and prints nothing.

use crate::treap::{self, RankedTreap};
use std::error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::result;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    MissingCount,
    InvalidCount(String),
    UnexpectedEof { expected: usize, found: usize },
    MalformedCommand { line: usize, content: String },
    TreapError { line: usize, error: treap::Error },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::TreapError { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::MissingCount => write!(f, "input is empty, expected a command count"),
            Error::InvalidCount(content) => write!(f, "invalid command count `{}`", content),
            Error::UnexpectedEof { expected, found } => write!(
                f,
                "input ended after {} of {} commands",
                found, expected,
            ),
            Error::MalformedCommand { line, content } => {
                write!(f, "line {}: malformed command `{}`", line, content)
            },
            Error::TreapError { line, error } => write!(f, "line {}: {}", line, error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// A single parsed command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Insert(i64),
    Remove(usize),
}

impl Command {
    /// Parses `command value`. Returns `None` unless the line holds exactly two tokens and the
    /// value fits the command.
    pub fn parse(line: &str) -> Option<Command> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some("1"), Some(value), None) => value.parse().ok().map(Command::Insert),
            (Some(_), Some(value), None) => value.parse().ok().map(Command::Remove),
            _ => None,
        }
    }
}

/// Executes the commands read from `input` against `treap`, writing one rank per insert to
/// `output`. Returns the number of commands executed.
pub fn run<R, W>(input: R, mut output: W, treap: &mut RankedTreap<i64>) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let count_line = lines.next().ok_or(Error::MissingCount)??;
    let count = count_line
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidCount(count_line.trim().to_string()))?;
    log::debug!("executing {} commands", count);

    for executed in 0..count {
        let line_number = executed + 2;
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::UnexpectedEof {
                    expected: count,
                    found: executed,
                })
            },
        };
        let command = Command::parse(&line).ok_or_else(|| Error::MalformedCommand {
            line: line_number,
            content: line.clone(),
        })?;
        log::trace!("line {}: {:?}", line_number, command);

        let to_error = |error| Error::TreapError {
            line: line_number,
            error,
        };
        match command {
            Command::Insert(key) => {
                let rank = treap.insert(key).map_err(to_error)?;
                writeln!(output, "{}", rank)?;
            },
            Command::Remove(index) => {
                treap.remove(index).map_err(to_error)?;
            },
        }
    }

    output.flush()?;
    Ok(count)
}
