use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::document;
use crate::error::{EditorError, Result};
use crate::grid::{CellMapping, PixelGrid};
use crate::palette::{Color, Palette};
use crate::raster::{RasterImage, render};

/// The code selected after a load, or after the active color was deleted.
fn first_code(palette: &Palette) -> u32 {
	palette.codes().first().copied().unwrap_or_default()
}

/// Everything one editing session owns. Every operation either succeeds or leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
	pub palette: Palette,
	pub grid: PixelGrid,
	active: u32,
}

impl Default for EditorState {
	fn default() -> Self {
		Self {
			palette: Palette::default(),
			grid: PixelGrid::default(),
			active: 0,
		}
	}
}

impl EditorState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_size(rows: usize, cols: usize) -> Result<Self> {
		Ok(Self {
			grid: PixelGrid::new(rows, cols)?,
			..Self::default()
		})
	}

	pub fn from_parts(grid: PixelGrid, palette: Palette) -> Self {
		let active = first_code(&palette);
		Self { palette, grid, active }
	}

	pub fn active(&self) -> u32 {
		self.active
	}

	pub fn select(&mut self, code: u32) -> Result<()> {
		if !self.palette.contains(code) {
			return Err(EditorError::KeyNotFound(code));
		}

		self.active = code;
		Ok(())
	}

	pub fn paint(&mut self, row: usize, col: usize) -> Result<()> {
		self.grid.set(row, col, self.active)?;
		log::debug!("painted ({row}, {col}) with color {}", self.active);
		Ok(())
	}

	/// Paints the cell under a canvas click. Returns the `(row, col)` that was hit.
	pub fn paint_at(&mut self, x: f64, y: f64, mapping: CellMapping) -> Result<(usize, usize)> {
		let (row, col) = mapping.cell_at(x, y, &self.grid)?;
		self.paint(row, col)?;
		Ok((row, col))
	}

	pub fn add_color<C: Into<Color>>(&mut self, color: C) -> u32 {
		let color = color.into();
		let code = self.palette.add(color);
		log::debug!("added color {code} = {color}");
		code
	}

	/// Removes the highest palette code. Cells still using it are left as they are.
	pub fn delete_color(&mut self) -> bool {
		let Some(max) = self.palette.max_code() else {
			return false;
		};

		if !self.palette.remove_highest() {
			log::debug!("refusing to delete one of the last two colors");
			return false;
		}

		if self.active == max {
			self.active = first_code(&self.palette);
		}

		log::debug!("deleted color {max}");
		true
	}

	/// Codes still painted on the grid that the palette no longer defines.
	pub fn dangling_codes(&self) -> Vec<u32> {
		document::dangling_codes(&self.grid, &self.palette)
	}

	pub fn render(&self) -> Result<RasterImage> {
		render(&self.grid, &self.palette)
	}

	pub fn to_json_string(&self) -> Result<String> {
		document::to_json_string(&self.grid, &self.palette)
	}

	/// Replaces grid and palette with the document's. On error nothing changes.
	pub fn load_json<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let (grid, palette) = document::from_json_file(&path)?;
		let dangling = document::dangling_codes(&grid, &palette);
		if !dangling.is_empty() {
			log::warn!("{} uses colors missing from its palette: {dangling:?}", path.as_ref().display());
		}

		*self = Self::from_parts(grid, palette);
		Ok(())
	}

	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let mut state = Self::default();
		state.load_json(path)?;
		Ok(state)
	}

	/// Writes next to the destination first so a failed save never truncates an existing file.
	pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let path = path.as_ref();
		let dir = match path.parent() {
			Some(p) if !p.as_os_str().is_empty() => p,
			_ => Path::new("."),
		};

		let mut tmp = NamedTempFile::new_in(dir)?;
		document::write_json(&mut tmp, &self.grid, &self.palette)?;
		tmp.flush()?;
		tmp.persist(path)?;

		log::debug!("saved {}x{} grid to {}", self.grid.cols(), self.grid.rows(), path.display());
		Ok(())
	}

	pub fn export_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		self.render()?.write_png(path)
	}
}
