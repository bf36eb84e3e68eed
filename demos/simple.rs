use grid_astar::{CostGrid, OBSTACLE_COST};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle cell costing 100
// - S marks the source
// - E marks the destination
//
// Moves go through a 4-neighborhood and the search routes around the
// expensive centre.

fn main() {
    let mut grid = CostGrid::new(3, 3, 0.0);
    grid.set(1, 1, OBSTACLE_COST);
    println!("{}", grid);
    let source = Point::new(0, 0);
    let destination = Point::new(2, 2);
    let result = grid.search(source, destination).unwrap();
    println!("Path:");
    for p in &result.path {
        println!("{:?}", p);
    }
    println!("Expanded {} nodes", result.expanded.len());
}
