use grid_util::point::Point;

/// The outcome of a completed search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    /// The route from source to destination, both endpoints included. Empty
    /// when the destination could not be reached.
    pub path: Vec<Point>,
    /// Every position the search expanded, in closing order. Populated even
    /// when no path exists.
    pub expanded: Vec<Point>,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// The number of unit moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
