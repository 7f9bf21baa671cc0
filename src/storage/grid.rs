//! Square grid of cells as an implicit graph.
//!
//! Two cells are adjacent if they share a side and the neighbor is not a
//! barrier. The adjacency is computed on demand from the current barrier
//! state, so editing the grid between searches needs no extra bookkeeping.
//!
//! # Examples
//!
//! ```
//! use tourgrid::{core::Point, storage::grid::GridMap};
//!
//! let map: GridMap = "\
//! S.#
//! ..#
//! ..E"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(map.grid.rows(), 3);
//! assert_eq!(map.start, Some(Point::new(0, 0)));
//! assert!(map.grid.is_barrier(&Point::new(1, 2)));
//! ```

use std::{fmt, str::FromStr};

use crate::core::{
    error::{GridError, ParseGridError},
    Cell, Neighbors, Point,
};

/// A `rows` × `rows` array of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with all cells free.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            cells: vec![Cell::Free; rows * rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.row < self.rows && point.col < self.rows
    }

    pub fn get(&self, point: &Point) -> Option<Cell> {
        self.index(point).map(|index| self.cells[index])
    }

    /// Changes the cell, returning its previous value.
    pub fn set(&mut self, point: Point, cell: Cell) -> Result<Cell, GridError> {
        let index = self.index(&point).ok_or(GridError::OutOfBounds {
            point,
            rows: self.rows,
        })?;
        Ok(std::mem::replace(&mut self.cells[index], cell))
    }

    pub fn set_barrier(&mut self, point: Point) -> Result<(), GridError> {
        self.set(point, Cell::Barrier).map(|_| ())
    }

    /// Flips a free cell into a barrier and vice versa. Returns the new value.
    pub fn toggle_barrier(&mut self, point: Point) -> Result<Cell, GridError> {
        let next = match self.get(&point) {
            Some(Cell::Barrier) => Cell::Free,
            _ => Cell::Barrier,
        };
        self.set(point, next)?;
        Ok(next)
    }

    /// Makes every cell free again.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Free);
    }

    /// Returns `true` if the point is a barrier. Points outside of the grid
    /// are not barriers, they are not part of the grid at all.
    pub fn is_barrier(&self, point: &Point) -> bool {
        self.get(point).is_some_and(|cell| cell.is_barrier())
    }

    /// Returns `true` if the point is inside the grid and not a barrier.
    pub fn is_passable(&self, point: &Point) -> bool {
        self.get(point).is_some_and(|cell| !cell.is_barrier())
    }

    pub fn barrier_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_barrier()).count()
    }

    /// All points of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.rows).map(move |col| Point::new(row, col)))
    }

    /// Renders the grid as text with the path drawn over it.
    ///
    /// Free cells are `.`, barriers `#`, points on the path `*`, start `S` and
    /// end `E`.
    pub fn render_path(&self, start: &Point, end: &Point, path: &[Point]) -> String {
        let mut canvas = self.canvas();

        for point in path {
            self.draw(&mut canvas, point, '*');
        }
        self.draw(&mut canvas, start, 'S');
        self.draw(&mut canvas, end, 'E');

        Self::join(canvas)
    }

    fn canvas(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.rows.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Free => '.',
                        Cell::Barrier => '#',
                    })
                    .collect()
            })
            .collect()
    }

    fn draw(&self, canvas: &mut [Vec<char>], point: &Point, ch: char) {
        if self.contains(point) {
            canvas[point.row][point.col] = ch;
        }
    }

    fn join(canvas: Vec<Vec<char>>) -> String {
        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, point: &Point) -> Option<usize> {
        self.contains(point)
            .then(|| point.row * self.rows + point.col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::join(self.canvas()))
    }
}

impl Neighbors for Grid {
    type VertexId = Point;

    type NeighborsIter<'a> = GridNeighbors<'a>
    where
        Self: 'a;

    fn neighbors(&self, from: &Point) -> Self::NeighborsIter<'_> {
        GridNeighbors {
            grid: self,
            from: *from,
            // Points outside of the grid have no neighbors.
            index: if self.contains(from) { 0 } else { 4 },
        }
    }

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Iterator over the passable neighbors of a cell.
///
/// Neighbors are reported in the order down, up, right, left.
pub struct GridNeighbors<'a> {
    grid: &'a Grid,
    from: Point,
    index: u8,
}

impl Iterator for GridNeighbors<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let Point { row, col } = self.from;

        while self.index < 4 {
            let candidate = match self.index {
                0 => Some(Point::new(row + 1, col)),
                1 => row.checked_sub(1).map(|row| Point::new(row, col)),
                2 => Some(Point::new(row, col + 1)),
                _ => col.checked_sub(1).map(|col| Point::new(row, col)),
            };

            self.index += 1;

            match candidate {
                Some(point) if self.grid.is_passable(&point) => return Some(point),
                _ => continue,
            }
        }

        None
    }
}

/// A grid together with the start and end markers read from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    pub grid: Grid,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl FromStr for GridMap {
    type Err = ParseGridError;

    /// Parses a grid where `.` is a free cell, `#` a barrier, `S` the start
    /// and `E` the end. Leading and trailing whitespace of each line is
    /// ignored, blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        let rows = lines.len();
        if rows == 0 {
            return Err(ParseGridError::Empty);
        }

        let mut grid = Grid::new(rows);
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != rows {
                return Err(ParseGridError::NotSquare {
                    row,
                    len,
                    expected: rows,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let point = Point::new(row, col);
                let marker = match ch {
                    '.' => None,
                    '#' => {
                        grid.cells[row * rows + col] = Cell::Barrier;
                        None
                    }
                    'S' => Some(&mut start),
                    'E' => Some(&mut end),
                    _ => return Err(ParseGridError::UnknownCell { ch, point }),
                };

                if let Some(marker) = marker {
                    if marker.replace(point).is_some() {
                        return Err(ParseGridError::DuplicateMarker(ch));
                    }
                }
            }
        }

        Ok(GridMap { grid, start, end })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn neighbors(grid: &Grid, row: usize, col: usize) -> Vec<Point> {
        grid.neighbors(&Point::new(row, col)).collect()
    }

    #[test]
    fn neighbor_order() {
        let grid = Grid::new(3);

        assert_eq!(
            neighbors(&grid, 1, 1),
            vec![
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(1, 0)
            ]
        );
    }

    #[test]
    fn neighbors_at_border() {
        let grid = Grid::new(3);

        assert_eq!(
            neighbors(&grid, 0, 0),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
        assert_eq!(
            neighbors(&grid, 2, 2),
            vec![Point::new(1, 2), Point::new(2, 1)]
        );
    }

    #[test]
    fn barriers_are_not_neighbors() {
        let mut grid = Grid::new(3);
        grid.set_barrier(Point::new(2, 1)).unwrap();
        grid.set_barrier(Point::new(1, 0)).unwrap();

        assert_eq!(
            neighbors(&grid, 1, 1),
            vec![Point::new(0, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn outside_has_no_neighbors() {
        let grid = Grid::new(3);
        assert!(neighbors(&grid, 3, 0).is_empty());
        assert!(neighbors(&grid, 0, 7).is_empty());
    }

    #[test]
    fn editing() {
        let mut grid = Grid::new(4);
        let p = Point::new(1, 3);

        assert_eq!(grid.toggle_barrier(p), Ok(Cell::Barrier));
        assert!(grid.is_barrier(&p));
        assert_eq!(grid.barrier_count(), 1);

        assert_eq!(grid.toggle_barrier(p), Ok(Cell::Free));
        assert!(grid.is_passable(&p));

        grid.set_barrier(p).unwrap();
        grid.set_barrier(Point::new(0, 0)).unwrap();
        grid.clear();
        assert_eq!(grid.barrier_count(), 0);
    }

    #[test]
    fn out_of_bounds_edit() {
        let mut grid = Grid::new(2);

        assert_matches!(
            grid.set_barrier(Point::new(2, 0)),
            Err(GridError::OutOfBounds { rows: 2, .. })
        );
        assert!(!grid.is_barrier(&Point::new(2, 0)));
        assert!(!grid.is_passable(&Point::new(2, 0)));
    }

    #[test]
    fn parse_and_render() {
        let text = "S.#\n.##\n..E";
        let map: GridMap = text.parse().unwrap();

        assert_eq!(map.start, Some(Point::new(0, 0)));
        assert_eq!(map.end, Some(Point::new(2, 2)));
        assert_eq!(map.grid.barrier_count(), 3);
        assert_eq!(map.grid.to_string(), "..#\n.##\n...");

        let path = [Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)];
        assert_eq!(
            map.grid
                .render_path(&Point::new(0, 0), &Point::new(2, 2), &path),
            "S.#\n*##\n**E"
        );
    }

    #[test]
    fn parse_errors() {
        assert_matches!("".parse::<GridMap>(), Err(ParseGridError::Empty));
        assert_matches!(
            "...\n..\n...".parse::<GridMap>(),
            Err(ParseGridError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            })
        );
        assert_matches!(
            "..\n.x".parse::<GridMap>(),
            Err(ParseGridError::UnknownCell { ch: 'x', .. })
        );
        assert_matches!(
            "S.\n.S".parse::<GridMap>(),
            Err(ParseGridError::DuplicateMarker('S'))
        );
    }
}
