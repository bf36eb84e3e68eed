use grid_util::point::Point;

/// A single A* search node: a grid position together with the cost `g` of the
/// cheapest known route to it, the heuristic estimate `f = g + h`, and the
/// preceding position on that route. The source node has no parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    pub position: Point,
    pub parent: Option<Point>,
    pub g: f64,
    pub f: f64,
}

impl SearchNode {
    pub fn new(position: Point, parent: Option<Point>, g: f64, f: f64) -> SearchNode {
        SearchNode {
            position,
            parent,
            g,
            f,
        }
    }
}
