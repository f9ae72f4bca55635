use std::collections::BinaryHeap;

use cellpath_core::Point;

use crate::graph::GridGraph;
use crate::path::Path;
use crate::state::{Cost, CostTable, SearchState};

/// How the next node to process is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Scan the whole cost table for the cheapest unprocessed node, O(V²)
    /// overall. Ties go to the first node in row-major order.
    #[default]
    LinearScan,
    /// Pop from a min-heap frontier with lazy deletion. Same costs as
    /// `LinearScan`; among equally cheap paths it may pick another one.
    BinaryHeap,
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first, breaking ties by row-major index.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Frontier {
    idx: usize,
    cost: Cost,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest-path search over a [`GridGraph`].
///
/// The search never stops early: it keeps processing until every node
/// reachable from the start has a final cost, then reconstructs the route to
/// the requested end.
#[derive(Clone, Copy)]
pub struct ShortestPath<'g> {
    graph: &'g GridGraph,
    selection: Selection,
}

impl<'g> ShortestPath<'g> {
    pub fn new(graph: &'g GridGraph) -> Self {
        Self {
            graph,
            selection: Selection::default(),
        }
    }

    /// Use `selection` to pick the next node to process.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[inline]
    pub fn graph(&self) -> &'g GridGraph {
        self.graph
    }

    /// Cheapest route from `start` to `end`.
    ///
    /// If `end` cannot be reached the returned path holds `end` alone.
    pub fn search(&self, start: Point, end: Point) -> Path {
        let path = self.run(start).reconstruct(end);
        if path.cost().is_none() {
            log::debug!("{end} is unreachable from {start}");
        }
        path
    }

    /// Run the relaxation loop from `start` on a fresh cost table.
    pub fn run(&self, start: Point) -> SearchState {
        self.run_with(self.graph.initial_costs(), start)
    }

    /// Run the relaxation loop from `start`, taking ownership of `costs`
    /// (normally the table produced alongside the graph).
    pub fn run_with(&self, costs: CostTable, start: Point) -> SearchState {
        let mut state = SearchState::new(costs, start);
        match self.selection {
            Selection::LinearScan => self.run_linear(&mut state),
            Selection::BinaryHeap => self.run_heap(&mut state),
        }
        log::debug!(
            "search from {start} ({:?}) processed {} of {} nodes",
            self.selection,
            state.processed_count(),
            self.graph.number_of_nodes()
        );
        state
    }

    fn run_linear(&self, state: &mut SearchState) {
        while let Some(current) = state.lowest_cost_unprocessed() {
            log::trace!("processing {current} at cost {}", state.cost(current));
            for edge in self.graph.edges(current) {
                state.relax(current, edge.to, edge.weight);
            }
            state.mark_processed(current);
        }
    }

    fn run_heap(&self, state: &mut SearchState) {
        let bounds = state.bounds();
        let mut open: BinaryHeap<Frontier> = BinaryHeap::new();
        if let Some(si) = bounds.index(state.start()) {
            open.push(Frontier { idx: si, cost: 0 });
        }

        while let Some(Frontier { idx, cost }) = open.pop() {
            let current = bounds.point(idx);
            // Skip stale entries.
            if state.is_processed(current) || cost != state.cost(current) {
                continue;
            }
            log::trace!("processing {current} at cost {cost}");

            for edge in self.graph.edges(current) {
                if !state.relax(current, edge.to, edge.weight) {
                    continue;
                }
                if let Some(ni) = bounds.index(edge.to) {
                    open.push(Frontier {
                        idx: ni,
                        cost: state.cost(edge.to),
                    });
                }
            }
            state.mark_processed(current);
        }
    }
}

/// Linear-scan search from `start` to `end` seeded with the builder's cost
/// table.
pub fn shortest_path(graph: &GridGraph, costs: CostTable, start: Point, end: Point) -> Path {
    ShortestPath::new(graph).run_with(costs, start).reconstruct(end)
}
