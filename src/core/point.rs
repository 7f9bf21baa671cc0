use std::fmt;

/// A cell of a square grid, identified by its row and column.
///
/// Points are plain values. The state of the cell (barrier or free), the role
/// of the point in a routing problem and the status of the point during a
/// search are all tracked outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of horizontal and vertical steps between the two points.
    pub fn manhattan(&self, other: &Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if the points share a side.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    /// The cell can't be entered and is never a neighbor of another cell.
    Barrier,
}

impl Cell {
    pub fn is_barrier(&self) -> bool {
        matches!(self, Cell::Barrier)
    }
}

/// Role of a point in a multi-vehicle routing problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Start and return point of a vehicle.
    Depot,
    /// Point that must be visited by some vehicle.
    Target,
}

impl Role {
    pub fn is_depot(&self) -> bool {
        matches!(self, Role::Depot)
    }
}

/// A point tagged with its routing role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    pub point: Point,
    pub role: Role,
}

impl Site {
    pub fn depot(row: usize, col: usize) -> Self {
        Self {
            point: Point::new(row, col),
            role: Role::Depot,
        }
    }

    pub fn target(row: usize, col: usize) -> Self {
        Self {
            point: Point::new(row, col),
            role: Role::Target,
        }
    }

    pub fn is_depot(&self) -> bool {
        self.role.is_depot()
    }
}

/// Geometry of a square grid drawn on screen.
///
/// The cell size is only used for measuring Euclidean distances between cell
/// centers. As long as it is positive, it scales every distance equally and so
/// never changes the shape of a spanning tree or a tour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
    /// Number of rows (and columns) of the grid.
    pub rows: usize,
    /// Side of a single cell.
    pub cell_size: f64,
}

impl Layout {
    pub const DEFAULT_ROWS: usize = 50;
    pub const DEFAULT_WINDOW_WIDTH: usize = 800;

    pub fn new(rows: usize, cell_size: f64) -> Self {
        Self { rows, cell_size }
    }

    /// Layout of a window `width` units wide split into `rows` rows. Cells
    /// have integral size, the remainder of the width is unused.
    pub fn for_window(width: usize, rows: usize) -> Self {
        let cell_size = width.checked_div(rows).unwrap_or(0);
        Self {
            rows,
            cell_size: cell_size as f64,
        }
    }

    /// Coordinates of the center of the cell.
    pub fn center(&self, point: &Point) -> (f64, f64) {
        let half = self.cell_size / 2.0;
        (
            point.row as f64 * self.cell_size + half,
            point.col as f64 * self.cell_size + half,
        )
    }

    /// Euclidean distance between the centers of two cells.
    pub fn distance(&self, u: &Point, v: &Point) -> f64 {
        let (x1, y1) = self.center(u);
        let (x2, y2) = self.center(v);
        (x2 - x1).hypot(y2 - y1)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_window(Self::DEFAULT_WINDOW_WIDTH, Self::DEFAULT_ROWS)
    }
}
