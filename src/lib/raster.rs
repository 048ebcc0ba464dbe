use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use png::{BitDepth, ColorType};

use crate::error::{EditorError, Result};
use crate::grid::PixelGrid;
use crate::palette::{Color, Palette};

pub const RGB_SIZE: usize = 3;

/// An 8-bit RGB image, one pixel per grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
	pub width: usize,
	pub height: usize,
	pub data: Vec<u8>,
}

impl RasterImage {
	pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}

		let i = (y * self.width + x) * RGB_SIZE;
		Some(Color::new(self.data[i], self.data[i + 1], self.data[i + 2]))
	}

	pub fn write_png_to<W: Write>(&self, w: W) -> Result<()> {
		let width = u32::try_from(self.width).map_err(|_| EditorError::MalformedGrid("image is too wide".to_string()))?;
		let height = u32::try_from(self.height).map_err(|_| EditorError::MalformedGrid("image is too tall".to_string()))?;

		let mut encoder = png::Encoder::new(w, width, height);
		encoder.set_color(ColorType::Rgb);
		encoder.set_depth(BitDepth::Eight);

		let mut writer = encoder.write_header()?;
		writer.write_image_data(&self.data)?;
		writer.finish()?;
		Ok(())
	}

	pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let f = File::create(&path)?;
		self.write_png_to(BufWriter::new(f))?;
		log::debug!("wrote {}x{} png to {}", self.width, self.height, path.as_ref().display());
		Ok(())
	}
}

/// Resolves every cell through the palette. The first cell (row-major) whose code is missing aborts the render.
pub fn render(grid: &PixelGrid, palette: &Palette) -> Result<RasterImage> {
	let mut data = Vec::with_capacity(grid.rows() * grid.cols() * RGB_SIZE);

	for (row, col, code) in grid.cells() {
		let color = palette.lookup(code)
			.map_err(|_| EditorError::UnknownColorCode { code, row, col })?;
		data.extend_from_slice(&color.to_array());
	}

	Ok(RasterImage {
		width: grid.cols(),
		height: grid.rows(),
		data,
	})
}
