use cellpath_core::{Bounds, Point, Weight};

use crate::path::Path;

/// Accumulated path cost.
pub type Cost = u64;

/// Sentinel cost meaning "no known route yet".
pub const UNREACHABLE: Cost = Cost::MAX;

// ---------------------------------------------------------------------------
// CostTable
// ---------------------------------------------------------------------------

/// Tentative cost per cell, stored row-major.
///
/// Every cell of the grid has an entry, walls included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    bounds: Bounds,
    costs: Vec<Cost>,
}

impl CostTable {
    /// A table with every cell at [`UNREACHABLE`].
    pub fn unreachable(bounds: Bounds) -> Self {
        Self {
            bounds,
            costs: vec![UNREACHABLE; bounds.len()],
        }
    }

    /// Cost at `p`, or [`UNREACHABLE`] if `p` is outside the table.
    #[inline]
    pub fn get(&self, p: Point) -> Cost {
        self.bounds
            .index(p)
            .map_or(UNREACHABLE, |i| self.costs[i])
    }

    /// Whether some route to `p` is known.
    #[inline]
    pub fn is_finite(&self, p: Point) -> bool {
        self.get(p) != UNREACHABLE
    }

    /// Number of entries (one per cell).
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Row-major iterator over `(Point, Cost)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cost)> + '_ {
        let bounds = self.bounds;
        self.costs
            .iter()
            .enumerate()
            .map(move |(i, &c)| (bounds.point(i), c))
    }

    #[inline]
    pub(crate) fn at_index(&self, idx: usize) -> Cost {
        self.costs[idx]
    }

    #[inline]
    pub(crate) fn set_index(&mut self, idx: usize, cost: Cost) {
        self.costs[idx] = cost;
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Cost, parent and processed tables owned by a single search.
///
/// Costs only ever decrease. A node enters the processed set at most once,
/// after which its cost is final.
#[derive(Debug, Clone)]
pub struct SearchState {
    start: Point,
    costs: CostTable,
    parents: Vec<Option<Point>>,
    processed: Vec<bool>,
    processed_count: usize,
}

impl SearchState {
    /// Take ownership of an initial cost table and seed `start` at cost 0.
    pub fn new(initial: CostTable, start: Point) -> Self {
        let len = initial.len();
        let mut state = Self {
            start,
            costs: initial,
            parents: vec![None; len],
            processed: vec![false; len],
            processed_count: 0,
        };
        if let Some(si) = state.bounds().index(start) {
            state.costs.set_index(si, 0);
        }
        state
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.costs.bounds()
    }

    #[inline]
    pub fn costs(&self) -> &CostTable {
        &self.costs
    }

    #[inline]
    pub fn cost(&self, p: Point) -> Cost {
        self.costs.get(p)
    }

    /// Predecessor of `p` on the cheapest known route. `None` for the start
    /// and for nodes never reached.
    #[inline]
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.bounds().index(p).and_then(|i| self.parents[i])
    }

    #[inline]
    pub fn is_processed(&self, p: Point) -> bool {
        self.bounds().index(p).is_some_and(|i| self.processed[i])
    }

    /// Size of the processed set.
    #[inline]
    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    /// The unprocessed node with the smallest finite cost.
    ///
    /// Scans every entry in row-major order; on ties the first node scanned
    /// wins.
    pub fn lowest_cost_unprocessed(&self) -> Option<Point> {
        let mut lowest = UNREACHABLE;
        let mut found = None;
        for (i, &done) in self.processed.iter().enumerate() {
            let cost = self.costs.at_index(i);
            if !done && cost < lowest {
                lowest = cost;
                found = Some(i);
            }
        }
        found.map(|i| self.bounds().point(i))
    }

    /// Relax the directed edge `from → to` of weight `weight`.
    ///
    /// Returns `true` if the cost of `to` strictly improved.
    pub(crate) fn relax(&mut self, from: Point, to: Point, weight: Weight) -> bool {
        let bounds = self.bounds();
        let (Some(fi), Some(ti)) = (bounds.index(from), bounds.index(to)) else {
            return false;
        };
        let base = self.costs.at_index(fi);
        if base == UNREACHABLE {
            return false;
        }
        let tentative = base.saturating_add(Cost::from(weight));
        if tentative >= self.costs.at_index(ti) {
            return false;
        }
        self.costs.set_index(ti, tentative);
        self.parents[ti] = Some(from);
        true
    }

    /// Add `p` to the processed set. Returns `false` if it was already there.
    pub(crate) fn mark_processed(&mut self, p: Point) -> bool {
        let Some(i) = self.bounds().index(p) else {
            return false;
        };
        if self.processed[i] {
            return false;
        }
        self.processed[i] = true;
        self.processed_count += 1;
        true
    }

    /// Walk parent links back from `end` and return the nodes start-first.
    ///
    /// If `end` was never reached the result holds `end` alone and has no
    /// cost.
    pub fn reconstruct(&self, end: Point) -> Path {
        let mut nodes = vec![end];
        let mut current = end;
        while let Some(parent) = self.parent(current) {
            nodes.push(parent);
            current = parent;
        }
        nodes.reverse();

        let cost = self.cost(end);
        Path::new(nodes, (cost != UNREACHABLE).then_some(cost))
    }
}
