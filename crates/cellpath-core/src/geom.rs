//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs, 0-indexed, with rows growing down and
//! columns growing right. Both axes are unsigned; anything outside a
//! [`Bounds`] is simply not a cell.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid cell position.
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The in-bounds cardinal neighbours, in the order up, down, left, right.
    pub fn neighbors_4(self, b: Bounds) -> impl Iterator<Item = Point> {
        let up = self.row.checked_sub(1).map(|r| Self::new(r, self.col));
        let down = Some(Self::new(self.row + 1, self.col));
        let left = self.col.checked_sub(1).map(|c| Self::new(self.row, c));
        let right = Some(Self::new(self.row, self.col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |p| b.contains(*p))
    }

    /// Whether `other` is exactly one step away along a single axis.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        manhattan(self, other) == 1
    }
}

/// Renders as `"<row> <col>"`, the line format used for printed paths.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The rectangle `[0, height) × [0, width)` of a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.width * self.height
    }

    /// Whether the rectangle has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `p` is inside the rectangle.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row < self.height && p.col < self.width
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| p.row * self.width + p.col)
    }

    /// Inverse of [`index`](Bounds::index). `idx` must be `< len()`.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        Point::new(idx / self.width, idx % self.width)
    }

    /// Row-major iterator over every point in the rectangle.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_display_is_row_then_col() {
        assert_eq!(Point::new(2, 7).to_string(), "2 7");
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 2), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 2), Point::new(1, 0)]);
    }

    #[test]
    fn points_hash_structurally() {
        let set: HashSet<Point> = [Point::new(1, 2), Point::new(1, 2), Point { row: 1, col: 2 }]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn neighbors_in_corner() {
        let b = Bounds::new(3, 3);
        let n: Vec<_> = Point::ZERO.neighbors_4(b).collect();
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn neighbors_in_center_keep_order() {
        let b = Bounds::new(3, 3);
        let n: Vec<_> = Point::new(1, 1).neighbors_4(b).collect();
        assert_eq!(
            n,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_on_single_cell_grid() {
        let b = Bounds::new(1, 1);
        assert_eq!(Point::ZERO.neighbors_4(b).count(), 0);
    }

    #[test]
    fn adjacency() {
        let p = Point::new(1, 1);
        assert!(p.is_adjacent(Point::new(0, 1)));
        assert!(p.is_adjacent(Point::new(1, 2)));
        assert!(!p.is_adjacent(Point::new(2, 2)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::new(3, 2);
        assert_eq!(b.len(), 6);
        assert!(!b.is_empty());
        assert!(b.contains(Point::new(1, 2)));
        assert!(!b.contains(Point::new(2, 0)));
        assert!(!b.contains(Point::new(0, 3)));
        assert!(Bounds::new(0, 4).is_empty());
    }

    #[test]
    fn bounds_index_round_trip() {
        let b = Bounds::new(4, 3);
        for p in b {
            let i = b.index(p).unwrap();
            assert_eq!(b.point(i), p);
        }
        assert_eq!(b.index(Point::new(3, 0)), None);
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let b = Bounds::new(3, 2);
        let pts: Vec<_> = b.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(0, 2));
        assert_eq!(pts[3], Point::new(1, 0));
        assert_eq!(b.iter().len(), 6);
    }

    #[test]
    fn empty_bounds_iter() {
        assert_eq!(Bounds::new(0, 0).iter().count(), 0);
        assert_eq!(Bounds::new(5, 0).iter().count(), 0);
    }
}
