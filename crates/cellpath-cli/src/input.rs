//! Text input format.
//!
//! ```text
//! <width> <height>
//! <w> <w> ... <w>        height lines of width weights each
//! <start row> <start col> <end row> <end col>
//! ```
//!
//! Blank lines are ignored anywhere.

use cellpath_core::{Grid, Point};

use crate::error::{Coordinate, InputError};
use crate::validate::ValidationPolicy;

/// A parsed and validated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
}

/// Parse the whole input text.
pub fn parse_input(text: &str, policy: &ValidationPolicy) -> Result<Problem, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    // Header.
    let (line, header) = lines.next().ok_or(InputError::MissingDimensions)?;
    let dims: Vec<&str> = header.split_whitespace().collect();
    let [w, h] = dims.as_slice() else {
        return Err(InputError::DimensionCount {
            line,
            found: dims.len(),
        });
    };
    let width = parse_dimension(line, w)?;
    let height = parse_dimension(line, h)?;
    let bounds = policy.dimensions(width, height)?;

    // Matrix.
    let mut weights = Vec::new();
    for row in 0..bounds.height {
        let (line, text) = lines.next().ok_or(InputError::MissingRows {
            expected: bounds.height,
            found: row,
        })?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != bounds.width {
            return Err(InputError::RowLength {
                line,
                expected: bounds.width,
                found: tokens.len(),
            });
        }
        for token in tokens {
            weights.push(policy.weight(line, token)?);
        }
    }
    let grid = Grid::new(bounds.width, bounds.height, weights)
        .ok_or(InputError::NonPositiveDimensions { width, height })?;

    // Coordinates.
    let (line, text) = lines.next().ok_or(InputError::MissingCoordinates)?;
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 4 {
        return Err(InputError::CoordinateCount {
            line,
            found: tokens.len(),
        });
    }
    let mut coords = [0i64; 4];
    for ((slot, token), which) in coords.iter_mut().zip(&tokens).zip(Coordinate::ALL) {
        *slot = token.parse().map_err(|_| InputError::InvalidCoordinate {
            which,
            token: token.to_string(),
        })?;
    }

    if let Some((line, _)) = lines.next() {
        return Err(InputError::TrailingInput { line });
    }

    let (start, end) = policy.endpoints(coords, bounds)?;
    log::debug!("parsed {} grid, start ({start}), end ({end})", bounds);
    Ok(Problem { grid, start, end })
}

fn parse_dimension(line: usize, token: &str) -> Result<i64, InputError> {
    token.parse().map_err(|_| InputError::InvalidDimension {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Problem, InputError> {
        parse_input(text, &ValidationPolicy::default())
    }

    #[test]
    fn well_formed_input() {
        let p = parse("3 3\n1 2 3\n4 5 6\n7 8 9\n0 0 2 2\n").unwrap();
        assert_eq!(p.grid.width(), 3);
        assert_eq!(p.grid.height(), 3);
        assert_eq!(p.grid.weight(Point::new(1, 2)), Some(6));
        assert_eq!(p.start, Point::new(0, 0));
        assert_eq!(p.end, Point::new(2, 2));
    }

    #[test]
    fn width_and_height_are_not_swapped() {
        let p = parse("3 2\n1 2 3\n4 5 6\n1 2 0 0").unwrap();
        assert_eq!(p.grid.width(), 3);
        assert_eq!(p.grid.height(), 2);
        assert_eq!(p.start, Point::new(1, 2));
    }

    #[test]
    fn blank_lines_and_extra_spaces_are_ignored() {
        let p = parse("\n2  2\n\n 1 2 \n3 4\n\n0 0   1 1\n\n").unwrap();
        assert_eq!(p.end, Point::new(1, 1));
    }

    #[test]
    fn all_zero_matrix_is_valid_input() {
        assert!(parse("2 2\n0 0\n0 0\n0 0 1 1\n").is_ok());
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse(""), Err(InputError::MissingDimensions));
        assert_eq!(parse("  \n\n"), Err(InputError::MissingDimensions));
    }

    #[test]
    fn bad_header() {
        assert_eq!(
            parse("3\n"),
            Err(InputError::DimensionCount { line: 1, found: 1 })
        );
        assert!(matches!(
            parse("x 3\n"),
            Err(InputError::InvalidDimension { line: 1, .. })
        ));
        assert!(matches!(
            parse("-1 3\n1 2 3\n"),
            Err(InputError::NonPositiveDimensions { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn huge_header_fails_on_the_first_row() {
        assert_eq!(
            parse("4000000000 4000000000\n1\n"),
            Err(InputError::RowLength {
                line: 2,
                expected: 4_000_000_000,
                found: 1
            })
        );
    }

    #[test]
    fn cell_count_overflow_is_an_error() {
        assert!(matches!(
            parse("9223372036854775807 9223372036854775807\n1\n"),
            Err(InputError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn non_digit_weight() {
        assert_eq!(
            parse("3 3\na 2 3\n4 5 6\n7 8 9\n0 0 2 2\n"),
            Err(InputError::InvalidWeight {
                line: 2,
                token: "a".into()
            })
        );
    }

    #[test]
    fn negative_weight() {
        assert!(matches!(
            parse("2 2\n-1 2\n3 4\n0 0 1 1\n"),
            Err(InputError::InvalidWeight { line: 2, .. })
        ));
    }

    #[test]
    fn weight_above_policy() {
        assert!(matches!(
            parse("2 2\n1 12\n3 4\n0 0 1 1\n"),
            Err(InputError::WeightOutOfRange { weight: 12, .. })
        ));
        let relaxed = ValidationPolicy { max_weight: 20 };
        assert!(parse_input("2 2\n1 12\n3 4\n0 0 1 1\n", &relaxed).is_ok());
    }

    #[test]
    fn row_too_long_or_short() {
        assert_eq!(
            parse("2 2\n1 2 3\n4 5\n"),
            Err(InputError::RowLength {
                line: 2,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            parse("2 2\n1\n4 5\n"),
            Err(InputError::RowLength {
                line: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn missing_rows() {
        assert_eq!(
            parse("2 3\n1 2\n"),
            Err(InputError::MissingRows {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn coordinate_line_problems() {
        assert_eq!(parse("1 1\n5\n"), Err(InputError::MissingCoordinates));
        assert_eq!(
            parse("1 1\n5\n0 0 0\n"),
            Err(InputError::CoordinateCount { line: 3, found: 3 })
        );
        assert_eq!(
            parse("1 1\n5\n0 0 zero 0\n"),
            Err(InputError::InvalidCoordinate {
                which: Coordinate::EndRow,
                token: "zero".into()
            })
        );
    }

    #[test]
    fn coordinates_out_of_bounds() {
        assert!(matches!(
            parse("3 3\n1 1 1\n1 1 1\n1 1 1\n0 3 2 2\n"),
            Err(InputError::CoordinateOutOfBounds {
                which: Coordinate::StartCol,
                value: 3,
                limit: 3
            })
        ));
        assert!(matches!(
            parse("3 3\n1 1 1\n1 1 1\n1 1 1\n-1 1 2 2\n"),
            Err(InputError::CoordinateOutOfBounds {
                which: Coordinate::StartRow,
                value: -1,
                ..
            })
        ));
    }

    #[test]
    fn trailing_input() {
        assert_eq!(
            parse("1 1\n5\n0 0 0 0\n1 2\n"),
            Err(InputError::TrailingInput { line: 4 })
        );
    }
}
