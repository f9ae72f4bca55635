use cellpath_core::{Bounds, Grid, Point, Weight};

/// Read access to the per-cell weights a [`GridGraph`](crate::GridGraph) is
/// built from.
pub trait CellWeights {
    /// The rectangle of cells that exist.
    fn bounds(&self) -> Bounds;

    /// Weight of the cell at `p`. Only called for points inside
    /// [`bounds`](CellWeights::bounds).
    fn weight(&self, p: Point) -> Weight;
}

impl CellWeights for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn weight(&self, p: Point) -> Weight {
        Grid::weight(self, p).unwrap_or(0)
    }
}

impl<T: CellWeights + ?Sized> CellWeights for &T {
    #[inline]
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    #[inline]
    fn weight(&self, p: Point) -> Weight {
        (**self).weight(p)
    }
}

/// Adapts a closure `Fn(Point) -> Weight` over a fixed rectangle.
pub struct FnWeights<F> {
    bounds: Bounds,
    f: F,
}

impl<F: Fn(Point) -> Weight> FnWeights<F> {
    pub fn new(width: usize, height: usize, f: F) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            f,
        }
    }
}

impl<F: Fn(Point) -> Weight> CellWeights for FnWeights<F> {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn weight(&self, p: Point) -> Weight {
        (self.f)(p)
    }
}
