use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

use crate::error::{Result, SearchError};

/// Step cost marking a cell as an obstacle. Obstacles are not walls: a search
/// will still cross one when every alternative is more expensive.
pub const OBSTACLE_COST: f64 = 100.0;

/// Comparison tolerance for [is_obstacle](CostGrid::is_obstacle).
const OBSTACLE_TOLERANCE: f64 = 0.005;

/// [CostGrid] is a rectangular grid of non-negative step costs stored in a
/// [SimpleGrid]. Entering a cell costs that cell's value; `x` addresses
/// within a row and `y` selects the row. Implements [Grid] by building on
/// [SimpleGrid].
#[derive(Clone, Debug, Default)]
pub struct CostGrid {
    pub grid: SimpleGrid<f64>,
}

impl CostGrid {
    /// Builds a grid from rows of costs, top row first. Rows must be equally
    /// long and every cost must be finite and non-negative.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<CostGrid> {
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(SearchError::MalformedGrid("grid is empty".to_owned()));
        }
        let mut grid = SimpleGrid::new(width, rows.len(), 0.0);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SearchError::MalformedGrid(format!(
                    "row {} holds {} values, expected {}",
                    y + 1,
                    row.len(),
                    width
                )));
            }
            for (x, &cost) in row.iter().enumerate() {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(SearchError::MalformedGrid(format!(
                        "cost {} at ({}, {}) in row {} is not a non-negative real",
                        cost,
                        x,
                        y,
                        y + 1
                    )));
                }
                grid.set(x, y, cost);
            }
        }
        Ok(CostGrid { grid })
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }

    /// The cost of stepping onto `point`.
    pub fn cost(&self, point: Point) -> f64 {
        self.grid.get_point(point)
    }

    /// Whether `point` carries the [OBSTACLE_COST] marker value.
    pub fn is_obstacle(&self, point: Point) -> bool {
        (self.cost(point) - OBSTACLE_COST).abs() < OBSTACLE_TOLERANCE
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y))
                .collect::<Vec<f64>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<f64> for CostGrid {
    fn new(width: usize, height: usize, default_value: f64) -> Self {
        CostGrid {
            grid: SimpleGrid::new(width, height, default_value),
        }
    }
    fn get(&self, x: usize, y: usize) -> f64 {
        self.grid.get(x, y)
    }
    fn set(&mut self, x: usize, y: usize, value: f64) {
        self.grid.set(x, y, value);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
