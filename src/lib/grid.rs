use std::collections::BTreeSet;

use crate::error::{EditorError, Result};
use crate::{DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_ROWS};

/// A fixed-size, row-major grid of palette codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
	rows: usize,
	cols: usize,
	cells: Vec<u32>,
}

impl Default for PixelGrid {
	fn default() -> Self {
		Self {
			rows: DEFAULT_ROWS,
			cols: DEFAULT_COLS,
			cells: vec![0; DEFAULT_ROWS * DEFAULT_COLS],
		}
	}
}

impl PixelGrid {
	/// A zero-filled grid. Both dimensions must be non-zero.
	pub fn new(rows: usize, cols: usize) -> Result<Self> {
		if rows == 0 || cols == 0 {
			return Err(EditorError::MalformedGrid(format!("a {cols}x{rows} grid has no cells")));
		}

		let len = rows.checked_mul(cols)
			.ok_or_else(|| EditorError::MalformedGrid(format!("a {cols}x{rows} grid is too large")))?;

		Ok(Self {
			rows,
			cols,
			cells: vec![0; len],
		})
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn cols(&self) -> usize {
		self.cols
	}

	fn index(&self, row: usize, col: usize) -> Result<usize> {
		if row >= self.rows || col >= self.cols {
			return Err(EditorError::IndexOutOfBounds { row, col, rows: self.rows, cols: self.cols });
		}

		Ok(row * self.cols + col)
	}

	/// Writes a code into a cell. The code is not checked against any palette.
	pub fn set(&mut self, row: usize, col: usize, code: u32) -> Result<()> {
		let i = self.index(row, col)?;
		self.cells[i] = code;
		Ok(())
	}

	pub fn get(&self, row: usize, col: usize) -> Result<u32> {
		let i = self.index(row, col)?;
		Ok(self.cells[i])
	}

	/// Iterates over `(row, col, code)` in row-major order.
	pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
		self.cells.iter().enumerate().map(|(i, &code)| (i / self.cols, i % self.cols, code))
	}

	/// Distinct codes currently painted, ascending.
	pub fn codes_in_use(&self) -> BTreeSet<u32> {
		self.cells.iter().copied().collect()
	}

	pub fn to_nested_sequence(&self) -> Vec<Vec<u32>> {
		self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
	}

	pub fn from_nested_sequence(data: &[Vec<u32>]) -> Result<PixelGrid> {
		let Some(first) = data.first() else {
			return Err(EditorError::MalformedGrid("the grid has no rows".to_string()));
		};

		let cols = first.len();
		if cols == 0 {
			return Err(EditorError::MalformedGrid("the grid has no columns".to_string()));
		}

		if let Some((i, row)) = data.iter().enumerate().find(|(_, row)| row.len() != cols) {
			return Err(EditorError::MalformedGrid(
				format!("row {i} has {} cells, expected {cols}", row.len())
			));
		}

		Ok(PixelGrid {
			rows: data.len(),
			cols,
			cells: data.concat(),
		})
	}
}

/// Maps screen positions to cells for a canvas drawn with square cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMapping {
	pub cell_size: u32,
}

impl Default for CellMapping {
	fn default() -> Self {
		Self { cell_size: DEFAULT_CELL_SIZE }
	}
}

impl CellMapping {
	pub fn new(cell_size: u32) -> Self {
		Self { cell_size }
	}

	/// Returns `(row, col)` for a click at `(x, y)`. Clicks off the canvas are rejected, never clamped.
	pub fn cell_at(&self, x: f64, y: f64, grid: &PixelGrid) -> Result<(usize, usize)> {
		let size = self.cell_size as f64;
		let width = (grid.cols() as f64) * size;
		let height = (grid.rows() as f64) * size;

		if self.cell_size == 0 || !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
			return Err(EditorError::ClickOutOfBounds { x, y });
		}

		let col = (x / size).floor() as usize;
		let row = (y / size).floor() as usize;
		Ok((row, col))
	}
}
