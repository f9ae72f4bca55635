//! Bounds checks applied to parsed input before any search runs.

use cellpath_core::{Bounds, Point, Weight};

use crate::error::{Coordinate, InputError};

/// Largest weight accepted by default.
pub const DEFAULT_MAX_WEIGHT: Weight = 9;

/// Limits enforced on the input grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub max_weight: Weight,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }
}

impl ValidationPolicy {
    /// Check matrix dimensions read from the header line.
    pub fn dimensions(&self, width: i64, height: i64) -> Result<Bounds, InputError> {
        if width <= 0 || height <= 0 {
            return Err(InputError::NonPositiveDimensions { width, height });
        }
        let too_large = || InputError::DimensionsTooLarge { width, height };
        let w = usize::try_from(width).map_err(|_| too_large())?;
        let h = usize::try_from(height).map_err(|_| too_large())?;
        w.checked_mul(h).ok_or_else(too_large)?;
        Ok(Bounds::new(w, h))
    }

    /// Parse and range-check one weight token.
    pub fn weight(&self, line: usize, token: &str) -> Result<Weight, InputError> {
        let value: u64 = token.parse().map_err(|_| InputError::InvalidWeight {
            line,
            token: token.to_string(),
        })?;
        if value > u64::from(self.max_weight) {
            return Err(InputError::WeightOutOfRange {
                line,
                weight: value,
                max: self.max_weight,
            });
        }
        Ok(value as Weight)
    }

    /// Check the four coordinates (in input order) against `bounds` and turn
    /// them into start and end points.
    ///
    /// Columns are checked before rows, start before end.
    pub fn endpoints(&self, coords: [i64; 4], bounds: Bounds) -> Result<(Point, Point), InputError> {
        const CHECK_ORDER: [usize; 4] = [1, 3, 0, 2];
        for i in CHECK_ORDER {
            let which = Coordinate::ALL[i];
            let value = coords[i];
            let limit = if which.is_row() {
                bounds.height
            } else {
                bounds.width
            };
            if value < 0 || value as u64 >= limit as u64 {
                return Err(InputError::CoordinateOutOfBounds {
                    which,
                    value,
                    limit,
                });
            }
        }
        let [sr, sc, er, ec] = coords.map(|v| v as usize);
        Ok((Point::new(sr, sc), Point::new(er, ec)))
    }
}
