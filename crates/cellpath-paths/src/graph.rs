use cellpath_core::{Bounds, Point, Weight};

use crate::state::CostTable;
use crate::traits::CellWeights;

/// A directed edge to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: Point,
    pub weight: Weight,
}

/// The implicit graph of a weighted grid.
///
/// Every cell is a node. A cell with positive weight `w` has a directed edge
/// of weight `w` to each in-bounds cardinal neighbour; a zero-weight cell has
/// no outgoing edges but can still be entered from its neighbours. Edges are
/// therefore asymmetric: `a → b` costs `weight(a)`, `b → a` costs
/// `weight(b)`.
///
/// Read-only after [`build`](GridGraph::build), so one graph can back any
/// number of searches.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGraph {
    bounds: Bounds,
    out_edges: Vec<Vec<Edge>>,
}

impl GridGraph {
    /// Build the graph from per-cell weights.
    pub fn build<W: CellWeights>(source: &W) -> Self {
        let bounds = source.bounds();
        let mut out_edges = vec![Vec::new(); bounds.len()];

        for (i, p) in bounds.iter().enumerate() {
            let weight = source.weight(p);
            if weight == 0 {
                continue;
            }
            out_edges[i].extend(p.neighbors_4(bounds).map(|to| Edge { to, weight }));
        }

        let graph = Self { bounds, out_edges };
        log::debug!(
            "built grid graph {}: {} nodes, {} edges",
            bounds,
            graph.number_of_nodes(),
            graph.number_of_edges()
        );
        graph
    }

    /// The rectangle of cells this graph covers.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Outgoing edges of `p` (empty for walls and out-of-bounds points).
    pub fn edges(&self, p: Point) -> impl ExactSizeIterator<Item = Edge> + '_ {
        let edges: &[Edge] = match self.bounds.index(p) {
            Some(i) => &self.out_edges[i],
            None => &[],
        };
        edges.iter().copied()
    }

    /// Weight of the edge `from → to`, if there is one.
    pub fn edge_weight(&self, from: Point, to: Point) -> Option<Weight> {
        self.edges(from).find(|e| e.to == to).map(|e| e.weight)
    }

    /// Every node, row-major.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = Point> {
        self.bounds.iter()
    }

    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.bounds.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.out_edges.iter().map(Vec::len).sum()
    }

    /// A fresh cost table with every node at
    /// [`UNREACHABLE`](crate::UNREACHABLE).
    pub fn initial_costs(&self) -> CostTable {
        CostTable::unreachable(self.bounds)
    }
}

/// Build the graph and its initial cost table in one step.
pub fn build<W: CellWeights>(source: &W) -> (GridGraph, CostTable) {
    let graph = GridGraph::build(source);
    let costs = graph.initial_costs();
    (graph, costs)
}
