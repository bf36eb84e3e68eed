use fxhash::FxBuildHasher;
use grid_util::grid::Grid;
use grid_util::point::Point;
use indexmap::IndexMap;
use log::{debug, trace};

use crate::cost_grid::CostGrid;
use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::result::SearchResult;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Expansion order of the 4-connected neighbourhood: positive x, negative x,
/// negative y, positive y.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Straight-line distance between two grid positions, in index units.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Phase of a [PathFinder]: `Running` until the destination is expanded
/// (`Found`) or the frontier runs dry (`Exhausted`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Found,
    Exhausted,
}

/// A stepwise A* search over a borrowed [CostGrid]. The grid stays immutable
/// for as long as the search holds it.
///
/// [new](Self::new) validates the endpoints and seeds the frontier with the
/// source, [step](Self::step) performs one expansion, and [run](Self::run)
/// drives the search to completion.
pub struct PathFinder<'a> {
    grid: &'a CostGrid,
    destination: Point,
    frontier: Frontier,
    closed: FxIndexMap<Point, SearchNode>,
    state: SearchState,
}

impl<'a> PathFinder<'a> {
    /// Starts a search from `source` to `destination`, rejecting endpoints
    /// that lie off the grid. The source is seeded with `g = 0` and `f = 0`;
    /// its heuristic value never matters because the seed is popped before
    /// any cost comparison can involve it.
    pub fn new(grid: &'a CostGrid, source: Point, destination: Point) -> Result<PathFinder<'a>> {
        for (endpoint, position) in [("source", source), ("destination", destination)] {
            if !grid.in_bounds(position.x, position.y) {
                return Err(SearchError::OutOfBounds {
                    endpoint,
                    position,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }
        let mut frontier = Frontier::new();
        frontier.insert(SearchNode::new(source, None, 0.0, 0.0));
        Ok(PathFinder {
            grid,
            destination,
            frontier,
            closed: FxIndexMap::default(),
            state: SearchState::Running,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Performs one transition: pops the cheapest open node, closes it, and
    /// either finishes or queues its in-bounds neighbours. Stepping a
    /// finished search does nothing.
    ///
    /// Closed positions are never reopened. With step costs of at least one
    /// the straight-line heuristic never overestimates and the discard is
    /// exact; below that the heuristic can overestimate and a cheaper route
    /// to a closed position may be missed.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }
        let node = match self.frontier.pop() {
            Some(node) => node,
            None => {
                debug!("frontier exhausted after {} expansions", self.closed.len());
                self.state = SearchState::Exhausted;
                return self.state;
            }
        };
        self.closed.insert(node.position, node);
        if node.position == self.destination {
            debug!(
                "reached {} after expanding {} nodes",
                self.destination,
                self.closed.len()
            );
            self.state = SearchState::Found;
            return self.state;
        }
        trace!(
            "expanding {} (g = {}, f = {})",
            node.position,
            node.g,
            node.f
        );
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let neighbour = Point::new(node.position.x + dx, node.position.y + dy);
            if !self.grid.in_bounds(neighbour.x, neighbour.y) {
                continue;
            }
            let g = node.g + self.grid.cost(neighbour);
            let f = g + euclidean(neighbour, self.destination);
            let candidate = SearchNode::new(neighbour, Some(node.position), g, f);
            if let Some(slot) = self.frontier.index_of(neighbour) {
                // Only strictly cheaper routes replace an open entry.
                if self.frontier.get(slot).map_or(false, |open| open.f > f) {
                    self.frontier.decrease(slot, candidate);
                }
            } else if !self.closed.contains_key(&neighbour) {
                self.frontier.insert(candidate);
            }
        }
        self.state
    }

    /// Drives the search to completion and reports the result. The expansion
    /// trace is listed in closing order whether or not a path was found.
    pub fn run(mut self) -> SearchResult {
        while self.state == SearchState::Running {
            self.step();
        }
        let path = match self.state {
            SearchState::Found => self.reconstruct(),
            _ => Vec::new(),
        };
        SearchResult {
            path,
            expanded: self.closed.keys().copied().collect(),
        }
    }

    /// Rebuilds the route by following parents back from the destination
    /// through the closed set, then reverses it to run source-first.
    fn reconstruct(&self) -> Vec<Point> {
        let mut path: Vec<Point> = itertools::unfold(Some(self.destination), |current| {
            current.take().map(|position| {
                *current = self.closed.get(&position).and_then(|node| node.parent);
                position
            })
        })
        .collect();
        path.reverse();
        path
    }
}

impl CostGrid {
    /// Finds a cheapest 4-connected route between two cells. No route is not
    /// an error: the result then carries an empty path along with everything
    /// the search expanded. Endpoints off the grid are rejected up front.
    pub fn search(&self, source: Point, destination: Point) -> Result<SearchResult> {
        debug!("searching {} -> {}", source, destination);
        Ok(PathFinder::new(self, source, destination)?.run())
    }
}
