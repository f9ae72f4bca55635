use cellpath_core::Point;

use crate::graph::GridGraph;
use crate::state::Cost;

/// A reconstructed route, ordered from start to end.
///
/// An unreachable end yields a path holding only the end node and no cost;
/// callers check [`is_reachable_from`](Path::is_reachable_from) before using
/// the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Point>,
    cost: Option<Cost>,
}

impl Path {
    pub(crate) fn new(nodes: Vec<Point>, cost: Option<Cost>) -> Self {
        Self { nodes, cost }
    }

    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    #[inline]
    pub fn into_nodes(self) -> Vec<Point> {
        self.nodes
    }

    /// Total edge weight, `None` if the end was never reached.
    #[inline]
    pub fn cost(&self) -> Option<Cost> {
        self.cost
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.nodes.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the route actually begins at `start`.
    #[inline]
    pub fn is_reachable_from(&self, start: Point) -> bool {
        self.start() == Some(start) && self.cost.is_some()
    }
}

/// Sum of edge weights along `nodes`, or `None` if two consecutive nodes are
/// not joined by an edge of `graph`.
pub fn path_cost(graph: &GridGraph, nodes: &[Point]) -> Option<Cost> {
    nodes.windows(2).try_fold(0, |acc: Cost, pair| {
        let w = graph.edge_weight(pair[0], pair[1])?;
        Some(acc + Cost::from(w))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellpath_core::Grid;

    #[test]
    fn path_cost_sums_source_weights() {
        let grid = Grid::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let g = GridGraph::build(&grid);
        let nodes = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        assert_eq!(path_cost(&g, &nodes), Some(3));
        let back = [Point::new(1, 1), Point::new(0, 1), Point::new(0, 0)];
        assert_eq!(path_cost(&g, &back), Some(6));
    }

    #[test]
    fn path_cost_rejects_gaps_and_walls() {
        let grid = Grid::from_rows(&[[1, 0], [1, 1]]).unwrap();
        let g = GridGraph::build(&grid);
        assert_eq!(path_cost(&g, &[Point::new(0, 0), Point::new(1, 1)]), None);
        assert_eq!(
            path_cost(&g, &[Point::new(0, 1), Point::new(1, 1)]),
            None,
            "a wall has no outgoing edge"
        );
    }

    #[test]
    fn single_node_costs_nothing() {
        let grid = Grid::from_rows(&[[7]]).unwrap();
        let g = GridGraph::build(&grid);
        assert_eq!(path_cost(&g, &[Point::ZERO]), Some(0));
    }

    #[test]
    fn accessors() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(0, 1)], Some(4));
        assert_eq!(p.start(), Some(Point::new(0, 0)));
        assert_eq!(p.end(), Some(Point::new(0, 1)));
        assert_eq!(p.len(), 2);
        assert!(p.is_reachable_from(Point::new(0, 0)));
        assert!(!p.is_reachable_from(Point::new(0, 1)));
        assert_eq!(p.into_nodes().len(), 2);
    }
}
