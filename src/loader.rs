use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use grid_util::grid::Grid;
use log::info;

use crate::cost_grid::CostGrid;
use crate::error::{Result, SearchError};

/// Reads a cost grid from a comma-delimited text file. See [parse_grid] for
/// the accepted format.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<CostGrid> {
    let text = fs::read_to_string(path.as_ref())?;
    let grid = parse_grid(&text)?;
    info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        path.as_ref().display()
    );
    Ok(grid)
}

/// Parses one grid row per line with costs separated by commas. Whitespace
/// around values is ignored and empty fields left by repeated or trailing
/// delimiters are skipped. Rows must come out equally long and every cost
/// must be a non-negative real.
pub fn parse_grid(text: &str) -> Result<CostGrid> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let mut row = Vec::with_capacity(record.len());
        for field in record.iter() {
            if field.is_empty() {
                continue;
            }
            let cost: f64 = field.parse().map_err(|_| {
                SearchError::MalformedGrid(format!(
                    "value '{}' on line {} is not a number",
                    field, line
                ))
            })?;
            row.push(cost);
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    CostGrid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    #[test]
    fn parses_comma_delimited_rows() {
        let grid = parse_grid("0,0,0\n0,100,0\n0,0,0\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cost(Point::new(1, 1)), 100.0);
        assert!(grid.is_obstacle(Point::new(1, 1)));
    }

    #[test]
    fn skips_repeated_and_trailing_delimiters() {
        let grid = parse_grid("1,,2,\n 3 ,4,,\n").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cost(Point::new(0, 1)), 3.0);
        assert_eq!(grid.cost(Point::new(1, 0)), 2.0);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_grid("1,x\n"),
            Err(SearchError::MalformedGrid(_))
        ));
        assert!(matches!(
            parse_grid("1,2\n3\n"),
            Err(SearchError::MalformedGrid(_))
        ));
        assert!(matches!(
            parse_grid("1,-2\n"),
            Err(SearchError::MalformedGrid(_))
        ));
        // "nan" parses as a float, so rejection happens on the value check.
        assert!(matches!(
            parse_grid("nan,1\n"),
            Err(SearchError::MalformedGrid(_))
        ));
        assert!(matches!(
            parse_grid(""),
            Err(SearchError::MalformedGrid(_))
        ));
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_grid("1,2\n3,oops\n").err().unwrap();
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn loads_grid_from_file() {
        let path = std::env::temp_dir().join("grid_astar_loader_test.csv");
        fs::write(&path, "0,1\n2,3\n").unwrap();
        let grid = load_grid(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cost(Point::new(1, 1)), 3.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_grid("/definitely/not/here.csv").err().unwrap();
        assert!(matches!(err, SearchError::Io(_)));
    }
}
