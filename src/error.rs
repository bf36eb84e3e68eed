//! Error types for grid_astar

use grid_util::point::Point;
use thiserror::Error;

/// Errors reported by grid construction, loading and search setup.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to read grid file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    #[error("{endpoint} {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: &'static str,
        position: Point,
        width: usize,
        height: usize,
    },
}

impl From<csv::Error> for SearchError {
    fn from(e: csv::Error) -> Self {
        SearchError::MalformedGrid(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
