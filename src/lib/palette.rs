use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{MAX_LOADED_CODE, MIN_PALETTE_COLORS};
use crate::error::{EditorError, Result};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);

impl Color {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_array(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<(u8, u8, u8)> for Color {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self { r, g, b }
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` and `r,g,b`.
impl FromStr for Color {
	type Err = EditorError;

	fn from_str(s: &str) -> Result<Self> {
		let trimmed = s.trim();

		if trimmed.contains(',') {
			let channels = trimmed.split(',')
				.map(|c| c.trim().parse::<u8>()
					.map_err(|_| EditorError::InvalidColor(format!("\"{c}\" is not a channel value between 0 and 255"))))
				.collect::<Result<Vec<u8>>>()?;

			return match channels.as_slice() {
				[r, g, b] => Ok(Color::new(*r, *g, *b)),
				_ => Err(EditorError::InvalidColor(format!("\"{trimmed}\" needs exactly three channels"))),
			};
		}

		// remove common hexadecimal prefixes from the string prior to parsing
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		if stripped.len() != 6 {
			return Err(EditorError::InvalidColor(format!("\"{trimmed}\" is not a six-digit hexadecimal color value")));
		}

		let parsed_int = u32::from_str_radix(stripped, 16)
			.map_err(|_| EditorError::InvalidColor(format!("\"{trimmed}\" is not a valid hexadecimal color value")))?;

		Ok(Color::from(parsed_int))
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
	pub code: u32,
	pub color: Color,
}

/// Ordered code → color mapping. Always holds at least [MIN_PALETTE_COLORS] entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
	entries: Vec<Entry>,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			entries: vec![
				Entry { code: 0, color: BLACK },
				Entry { code: 1, color: WHITE },
			],
		}
	}
}

impl Palette {
	/// Builds a palette from entries in display order.
	/// Fails if a code repeats, exceeds [MAX_LOADED_CODE], or there are fewer than [MIN_PALETTE_COLORS] entries.
	pub fn from_entries<I: IntoIterator<Item = (u32, Color)>>(entries: I) -> Result<Palette> {
		let mut pal = Palette { entries: Vec::new() };

		for (code, color) in entries {
			if code > MAX_LOADED_CODE {
				return Err(EditorError::MalformedDocument(
					format!("color {code} is above the highest allowed code {MAX_LOADED_CODE}")
				));
			}
			if pal.contains(code) {
				return Err(EditorError::MalformedDocument(format!("color {code} is defined more than once")));
			}
			pal.entries.push(Entry { code, color });
		}

		if pal.len() < MIN_PALETTE_COLORS {
			return Err(EditorError::MalformedDocument(
				format!("the palette needs at least {MIN_PALETTE_COLORS} colors, found {}", pal.len())
			));
		}

		Ok(pal)
	}

	/// Appends a color under a fresh code, one higher than the current maximum.
	pub fn add<C: Into<Color>>(&mut self, color: C) -> u32 {
		let code = self.max_code().map_or(0, |c| c + 1);
		self.entries.push(Entry { code, color: color.into() });
		code
	}

	/// Drops the entry with the greatest code unless only the minimum number of colors is left.
	pub fn remove_highest(&mut self) -> bool {
		if self.len() <= MIN_PALETTE_COLORS {
			return false;
		}

		let Some(max) = self.max_code() else {
			return false;
		};

		self.entries.retain(|e| e.code != max);
		true
	}

	pub fn lookup(&self, code: u32) -> Result<Color> {
		self.entries.iter()
			.find(|e| e.code == code)
			.map(|e| e.color)
			.ok_or(EditorError::KeyNotFound(code))
	}

	pub fn contains(&self, code: u32) -> bool {
		self.entries.iter().any(|e| e.code == code)
	}

	pub fn codes(&self) -> Vec<u32> {
		self.entries.iter().map(|e| e.code).collect()
	}

	pub fn entries(&self) -> impl Iterator<Item = &Entry> {
		self.entries.iter()
	}

	pub fn max_code(&self) -> Option<u32> {
		self.entries.iter().map(|e| e.code).max()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
