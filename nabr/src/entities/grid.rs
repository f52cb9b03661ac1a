use crate::entities::PlanShape;
use ndarray::Array2;

/// Occupancy of a plan's bounding box, indexed by `[row, col]`.
/// `true` marks a cell belonging to the footprint, `false` an empty one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<bool>,
}

impl OccupancyGrid {
    pub fn generate(shape: PlanShape, rows: usize, cols: usize) -> Self {
        let cells = Array2::from_shape_fn((rows, cols), |(r, c)| shape.contains(r, c, rows, cols));
        Self { cells }
    }

    pub fn n_rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Returns `false` for cells outside the grid.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Number of cells in the footprint.
    pub fn n_occupied(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// All occupied cells as `(row, col)`, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, occupied)| **occupied)
            .map(|(idx, _)| idx)
    }

    /// Row `row` of the grid as a vector of occupancy flags.
    pub fn row(&self, row: usize) -> Vec<bool> {
        self.cells.row(row).to_vec()
    }
}
