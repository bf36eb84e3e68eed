//! Fuzzes the search over many random cost grids, checking the structural
//! promises of every result and comparing costs against a reference
//! Dijkstra wherever the straight-line heuristic is consistent.

use grid_astar::{CostGrid, OBSTACLE_COST};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, zero_costs: bool) -> CostGrid {
    let mut grid = CostGrid::new(w, h, 0.0);
    for x in 0..w {
        for y in 0..h {
            let cost = if rng.gen_bool(0.2) {
                OBSTACLE_COST
            } else if zero_costs {
                rng.gen_range(0..5) as f64
            } else {
                rng.gen_range(1..10) as f64
            };
            grid.set(x, y, cost);
        }
    }
    grid
}

fn random_point(grid: &CostGrid, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..grid.width() as i32),
        rng.gen_range(0..grid.height() as i32),
    )
}

fn visualize_grid(grid: &CostGrid, source: &Point, destination: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *source == p {
                print!("S");
            } else if *destination == p {
                print!("G");
            } else if grid.is_obstacle(p) {
                print!("#");
            } else {
                print!("{}", grid.cost(p) as u32 % 10);
            }
        }
        println!();
    }
}

/// The cost of walking `path`: the source cell is free, every cell entered
/// after it costs its grid value. Costs are whole numbers here so summing
/// them as integers is exact.
fn path_cost(grid: &CostGrid, path: &[Point]) -> u64 {
    path.iter().skip(1).map(|p| grid.cost(*p) as u64).sum()
}

fn dijkstra_cost(grid: &CostGrid, source: Point, destination: Point) -> u64 {
    let w = grid.width();
    let h = grid.height();
    let ix = |p: Point| p.y as usize * w + p.x as usize;
    let mut dist = vec![u64::MAX; w * h];
    let mut done = vec![false; w * h];
    dist[ix(source)] = 0;
    loop {
        let mut current = usize::MAX;
        let mut best = u64::MAX;
        for i in 0..w * h {
            if !done[i] && dist[i] < best {
                best = dist[i];
                current = i;
            }
        }
        if current == usize::MAX {
            break;
        }
        done[current] = true;
        let p = Point::new((current % w) as i32, (current / w) as i32);
        for (dx, dy) in [(1, 0), (-1, 0), (0, -1), (0, 1)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if grid.in_bounds(n.x, n.y) {
                let candidate = best + grid.cost(n) as u64;
                if candidate < dist[ix(n)] {
                    dist[ix(n)] = candidate;
                }
            }
        }
    }
    dist[ix(destination)]
}

#[test]
fn fuzz() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for zero_costs in [false, true] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, N, &mut rng, zero_costs);
            let source = random_point(&grid, &mut rng);
            let destination = random_point(&grid, &mut rng);
            let result = grid.search(source, destination).unwrap();
            let again = grid.search(source, destination).unwrap();
            assert_eq!(result, again);
            // Obstacles are merely expensive, so every cell is reachable.
            if !result.found() {
                visualize_grid(&grid, &source, &destination);
            }
            assert!(result.found());
            assert_eq!(result.path.first(), Some(&source));
            assert_eq!(result.path.last(), Some(&destination));
            for pair in result.path.windows(2) {
                let dx = (pair[1].x - pair[0].x).abs();
                let dy = (pair[1].y - pair[0].y).abs();
                assert_eq!(dx + dy, 1);
            }
            for p in &result.path {
                assert!(result.expanded.contains(p));
            }
        }
    }
}

#[test]
fn fuzz_optimal() {
    const N: usize = 6;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    // Whole costs of at least one keep the straight-line heuristic
    // consistent, so the search has to match Dijkstra exactly.
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, false);
        let source = random_point(&grid, &mut rng);
        let destination = random_point(&grid, &mut rng);
        let result = grid.search(source, destination).unwrap();
        assert!(result.found());
        let found = path_cost(&grid, &result.path);
        let reference = dijkstra_cost(&grid, source, destination);
        if found != reference {
            println!("A* cost: {found}; Dijkstra cost: {reference}");
            println!("path: {:?}", result.path);
            visualize_grid(&grid, &source, &destination);
        }
        assert_eq!(found, reference);
    }
}
