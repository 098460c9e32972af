//! Checkerbox shape.

use super::{ShapeError, PATH_TOLERANCE};
use crate::animation::Animatable;
use kurbo::{BezPath, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A rows-by-columns grid where a cell is filled when its row and
/// column indices sum to an even number, starting filled at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkerbox {
    /// Number of rows, >= 1.
    pub rows: u32,
    /// Number of columns, >= 1.
    pub columns: u32,
}

impl Checkerbox {
    pub fn new(rows: u32, columns: u32) -> Result<Self, ShapeError> {
        let checkerbox = Self { rows, columns };
        checkerbox.validate()?;
        Ok(checkerbox)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.rows < 1 {
            return Err(ShapeError::RowsOutOfRange);
        }
        if self.columns < 1 {
            return Err(ShapeError::ColumnsOutOfRange);
        }
        Ok(())
    }

    /// Number of filled cells.
    pub fn filled_cells(&self) -> u32 {
        let (r, c) = (self.rows, self.columns);
        r.div_ceil(2) * c.div_ceil(2) + (r / 2) * (c / 2)
    }

    /// One rectangular sub-path per filled cell, row-major order.
    pub fn path_in(&self, rect: Rect) -> BezPath {
        let cell_width = rect.width() / self.columns as f64;
        let cell_height = rect.height() / self.rows as f64;

        let mut path = BezPath::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                if (row + column) % 2 == 0 {
                    let x = rect.x0 + column as f64 * cell_width;
                    let y = rect.y0 + row as f64 * cell_height;
                    let cell = Rect::new(x, y, x + cell_width, y + cell_height);
                    for el in cell.path_elements(PATH_TOLERANCE) {
                        path.push(el);
                    }
                }
            }
        }
        path
    }
}

/// Fractional grid dimensions used while a checkerbox animation is in
/// flight.
///
/// Rows and columns interpolate independently as floats; converting
/// back to a [`Checkerbox`] rounds each component half-up
/// (`f64::round`, half away from zero, which is half-up for the
/// non-negative values carried here) and clamps to the >= 1 invariant
/// so a transient sample can never produce an empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: f64,
    pub columns: f64,
}

impl GridSize {
    pub fn new(rows: f64, columns: f64) -> Self {
        Self { rows, columns }
    }
}

impl From<Checkerbox> for GridSize {
    fn from(checkerbox: Checkerbox) -> Self {
        Self {
            rows: checkerbox.rows as f64,
            columns: checkerbox.columns as f64,
        }
    }
}

impl From<GridSize> for Checkerbox {
    fn from(grid: GridSize) -> Self {
        let rows = grid.rows.round().max(1.0) as u32;
        let columns = grid.columns.round().max(1.0) as u32;
        if grid.rows.round() < 1.0 || grid.columns.round() < 1.0 {
            log::debug!("grid size {grid:?} clamped to {rows}x{columns}");
        }
        Self { rows, columns }
    }
}

impl Animatable for GridSize {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            rows: self.rows + (to.rows - self.rows) * t,
            columns: self.columns + (to.columns - self.columns) * t,
        }
    }
}
