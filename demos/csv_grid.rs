use std::fs;

use grid_astar::load_grid;
use grid_util::point::Point;

// Loads a cost grid from a comma-delimited file and searches it. The middle
// column is an obstacle wall with a gap on the bottom row, so the path
// funnels through the gap instead of paying for a crossing.

fn main() -> grid_astar::Result<()> {
    let path = std::env::temp_dir().join("grid_astar_demo.csv");
    fs::write(&path, "0,100,0\n0,100,0\n0,0,0\n")?;
    let grid = load_grid(&path)?;
    fs::remove_file(&path)?;
    println!("{}", grid);
    let result = grid.search(Point::new(0, 0), Point::new(2, 0))?;
    println!("Path:");
    for p in &result.path {
        println!("{:?}", p);
    }
    println!("Expanded {} nodes", result.expanded.len());
    Ok(())
}
