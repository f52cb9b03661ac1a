use crate::entities::{OccupancyGrid, PlanShape};
use crate::geometry::primitives::{Point, Rect};
use crate::util::assertions;
use anyhow::{Result, ensure};
use std::fmt::{Display, Formatter};

/// Upper bound on `rows * cols` of a plan
pub const MAX_CELLS: usize = 1 << 24;

/// A building footprint laid out on a square grid.
///
/// The grid is derived once on construction and never changes afterwards.
/// Row `r`, column `c` covers the world square with lower-left corner `(c * grid_size, r * grid_size)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    tag: String,
    shape: PlanShape,
    dimensions: [usize; 2],
    corridor_width: f64,
    grid_size: f64,
    grid: OccupancyGrid,
}

impl Plan {
    pub fn new(
        tag: impl Into<String>,
        dimensions: [usize; 2],
        corridor_width: f64,
        grid_size: f64,
    ) -> Result<Self> {
        let [rows, cols] = dimensions;
        ensure!(
            rows > 0 && cols > 0,
            "plan dimensions must be positive, got [{rows}, {cols}]"
        );
        ensure!(
            rows.checked_mul(cols).is_some_and(|n| n <= MAX_CELLS),
            "plan of [{rows}, {cols}] cells exceeds the limit of {MAX_CELLS} cells"
        );
        ensure!(
            corridor_width.is_finite() && corridor_width > 0.0,
            "corridor width must be a positive number, got {corridor_width}"
        );
        ensure!(
            grid_size.is_finite() && grid_size > 0.0,
            "grid size must be a positive number, got {grid_size}"
        );

        let tag = tag.into();
        let shape = PlanShape::from_tag(&tag);
        let grid = OccupancyGrid::generate(shape, rows, cols);

        let plan = Self {
            tag,
            shape,
            dimensions,
            corridor_width,
            grid_size,
            grid,
        };
        debug_assert!(assertions::grid_matches_dimensions(&plan));
        Ok(plan)
    }

    /// Same as [`Plan::new`], but accepts the dimensions as an untyped list of integers.
    /// Exactly two positive entries are required.
    pub fn try_new(
        tag: impl Into<String>,
        dimensions: &[i64],
        corridor_width: f64,
        grid_size: f64,
    ) -> Result<Self> {
        ensure!(
            dimensions.len() == 2,
            "plan dimensions must hold exactly two entries (rows, cols), got {}",
            dimensions.len()
        );
        ensure!(
            dimensions.iter().all(|&d| d > 0),
            "plan dimensions must be positive, got {dimensions:?}"
        );
        let rows = usize::try_from(dimensions[0])?;
        let cols = usize::try_from(dimensions[1])?;
        Plan::new(tag, [rows, cols], corridor_width, grid_size)
    }

    /// Tag as supplied by the caller, part of the plan's identity
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn shape(&self) -> PlanShape {
        self.shape
    }

    /// `[rows, cols]`, in grid units
    pub fn dimensions(&self) -> [usize; 2] {
        self.dimensions
    }

    /// Corridor width in metres. Not used when deriving the grid.
    pub fn corridor_width(&self) -> f64 {
        self.corridor_width
    }

    /// Size of a grid cell in metres
    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn rows(&self) -> usize {
        self.dimensions[0]
    }

    pub fn cols(&self) -> usize {
        self.dimensions[1]
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.grid.is_occupied(row, col)
    }

    /// Number of cells in the footprint (not `rows * cols`).
    pub fn n_occupied(&self) -> usize {
        self.grid.n_occupied()
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.occupied_cells()
    }

    /// World rectangle covered by the cell at (`row`, `col`).
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let corner = Point(col as f64 * self.grid_size, row as f64 * self.grid_size);
        Rect {
            x_min: corner.0,
            y_min: corner.1,
            x_max: corner.0 + self.grid_size,
            y_max: corner.1 + self.grid_size,
        }
    }

    /// World rectangle covered by the whole grid, footprint or not.
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.cols() as f64 * self.grid_size,
            y_max: self.rows() as f64 * self.grid_size,
        }
    }

    /// Area of the footprint in square metres.
    pub fn footprint_area(&self) -> f64 {
        self.n_occupied() as f64 * self.grid_size * self.grid_size
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type: {} ({}), Dimensions: [{}, {}], Corridor Width: {}, Grid Size: {}",
            self.tag,
            self.shape,
            self.rows(),
            self.cols(),
            self.corridor_width,
            self.grid_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&[10]; "single entry")]
    #[test_case(&[10, 5, 3]; "three entries")]
    #[test_case(&[0, 5]; "zero rows")]
    #[test_case(&[10, -5]; "negative cols")]
    #[test_case(&[i64::MAX, 4]; "overflowing cell count")]
    #[test_case(&[5000, 5000]; "above cell limit")]
    fn rejects_malformed_dimensions(dims: &[i64]) {
        assert!(Plan::try_new("L", dims, 2.0, 8.5).is_err());
    }

    #[test_case(0.0, 8.5; "zero corridor")]
    #[test_case(2.0, -1.0; "negative grid")]
    #[test_case(2.0, f64::NAN; "nan grid")]
    fn rejects_non_positive_measures(corridor_width: f64, grid_size: f64) {
        assert!(Plan::new("L", [10, 5], corridor_width, grid_size).is_err());
    }

    #[test]
    fn cell_geometry() {
        let plan = Plan::new("L", [10, 5], 2.0, 8.5).unwrap();
        let r = plan.cell_rect(2, 3);
        assert!(r.almost_eq(&Rect::try_new(25.5, 17.0, 34.0, 25.5).unwrap()));
        assert!(plan.bbox().almost_eq(&Rect::try_new(0.0, 0.0, 42.5, 85.0).unwrap()));
        assert_eq!(plan.n_occupied(), 25);
        assert_eq!(plan.footprint_area(), 25.0 * 8.5 * 8.5);
    }

    #[test]
    fn cell_limit_is_inclusive() {
        let plan = Plan::new("rect", [1, MAX_CELLS], 2.0, 8.5).unwrap();
        assert_eq!(plan.n_occupied(), MAX_CELLS);
    }

    #[test]
    fn keeps_tag_and_shape() {
        let plan = Plan::new("u-shape", [6, 9], 2.0, 8.5).unwrap();
        assert_eq!(plan.tag(), "u-shape");
        assert_eq!(plan.shape(), PlanShape::U);
        assert_eq!(
            plan.to_string(),
            "Type: u-shape (U), Dimensions: [6, 9], Corridor Width: 2, Grid Size: 8.5"
        );
    }
}
