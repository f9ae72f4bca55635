use std::fmt;

use cellpath_core::{Point, Weight};
use thiserror::Error;

/// One of the four numbers on the coordinate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    StartRow,
    StartCol,
    EndRow,
    EndCol,
}

impl Coordinate {
    /// In input order.
    pub const ALL: [Coordinate; 4] = [
        Coordinate::StartRow,
        Coordinate::StartCol,
        Coordinate::EndRow,
        Coordinate::EndCol,
    ];

    /// Whether the value is a row (bounded by height) rather than a column.
    pub fn is_row(self) -> bool {
        matches!(self, Coordinate::StartRow | Coordinate::EndRow)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Coordinate::StartRow => "start row",
            Coordinate::StartCol => "start column",
            Coordinate::EndRow => "end row",
            Coordinate::EndCol => "end column",
        };
        f.write_str(s)
    }
}

/// Malformed or out-of-policy input. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty: expected `<width> <height>` on the first line")]
    MissingDimensions,
    #[error("line {line}: dimension `{token}` is not an integer")]
    InvalidDimension { line: usize, token: String },
    #[error("line {line}: expected exactly 2 dimensions, found {found}")]
    DimensionCount { line: usize, found: usize },
    #[error("matrix size must be positive, got width={width}, height={height}")]
    NonPositiveDimensions { width: i64, height: i64 },
    #[error("matrix of {width}x{height} cells is too large")]
    DimensionsTooLarge { width: i64, height: i64 },
    #[error("line {line}: weight `{token}` is not a non-negative integer")]
    InvalidWeight { line: usize, token: String },
    #[error("line {line}: weight must be in 0..={max}, got {weight}")]
    WeightOutOfRange { line: usize, weight: u64, max: Weight },
    #[error("line {line}: expected {expected} weights, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} matrix rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("missing coordinate line `<start row> <start col> <end row> <end col>`")]
    MissingCoordinates,
    #[error(
        "line {line}: expected 4 coordinates, found {found} (also check the element count of the last matrix row)"
    )]
    CoordinateCount { line: usize, found: usize },
    #[error("{which} `{token}` is not an integer")]
    InvalidCoordinate { which: Coordinate, token: String },
    #[error(
        "{which} {value} is outside the matrix {}: {limit}",
        if .which.is_row() { "height" } else { "width" }
    )]
    CoordinateOutOfBounds {
        which: Coordinate,
        value: i64,
        limit: usize,
    },
    #[error("line {line}: unexpected trailing input")]
    TrailingInput { line: usize },
}

/// Anything that ends a run unsuccessfully.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    #[error("no path from ({start}) to ({end})")]
    Unreachable { start: Point, end: Point },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Input(_) => 1,
            CliError::Unreachable { .. } => 2,
            CliError::Io(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = InputError::CoordinateOutOfBounds {
            which: Coordinate::StartCol,
            value: 3,
            limit: 3,
        };
        assert_eq!(e.to_string(), "start column 3 is outside the matrix width: 3");

        let e = InputError::CoordinateOutOfBounds {
            which: Coordinate::EndRow,
            value: -1,
            limit: 2,
        };
        assert_eq!(e.to_string(), "end row -1 is outside the matrix height: 2");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::from(InputError::MissingDimensions).exit_code(), 1);
        let unreachable = CliError::Unreachable {
            start: Point::new(0, 0),
            end: Point::new(1, 1),
        };
        assert_eq!(unreachable.exit_code(), 2);
        assert_eq!(unreachable.to_string(), "no path from (0 0) to (1 1)");
        let io = CliError::from(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 3);
    }
}
