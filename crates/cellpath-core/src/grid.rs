//! The [`Grid`] type: an immutable row-major matrix of cell weights.

use crate::geom::{Bounds, Point};

/// Traversal cost of a single cell. Zero marks a wall.
pub type Weight = u32;

/// A `width × height` matrix of non-negative cell weights.
///
/// A grid is built once and never mutated afterwards; every search borrows it
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    bounds: Bounds,
    weights: Vec<Weight>,
}

impl Grid {
    /// Create a grid from a row-major weight buffer.
    ///
    /// Returns `None` if either dimension is zero or the buffer length is not
    /// `width * height`.
    pub fn new(width: usize, height: usize, weights: Vec<Weight>) -> Option<Self> {
        let bounds = Bounds::new(width, height);
        if bounds.is_empty() || weights.len() != bounds.len() {
            return None;
        }
        Some(Self { bounds, weights })
    }

    /// Create a grid from a list of equally long rows.
    pub fn from_rows<R: AsRef<[Weight]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let weights = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(width, height, weights)
    }

    /// The bounding rectangle of this grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height
    }

    /// Weight of the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<Weight> {
        self.bounds.index(p).map(|i| self.weights[i])
    }

    /// Whether the cell at `p` has weight zero.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.weight(p) == Some(0)
    }
}
