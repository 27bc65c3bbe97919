//! Grid cell type.

/// A position on the city grid.
///
/// Distances between cells are Manhattan (vehicles move one row or one
/// column per time step).
///
/// # Examples
///
/// ```
/// use fleet_anneal::models::Cell;
///
/// let a = Cell::new(0, 0);
/// let b = Cell::new(2, 3);
/// assert_eq!(a.distance_to(b), 5);
/// assert_eq!(b.distance_to(a), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    row: i32,
    col: i32,
}

impl Cell {
    /// Creates a cell at the given grid coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row coordinate.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column coordinate.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Manhattan distance to another cell.
    pub fn distance_to(&self, other: Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}
