use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value, json};

use crate::error::{EditorError, Result};
use crate::grid::PixelGrid;
use crate::palette::{Color, Palette};

pub const COLOR_MAP_KEY: &str = "color_map";
pub const NUMBER_ARRAY_KEY: &str = "number_array";

const INDENT: &[u8] = b"    ";

fn malformed<S: Into<String>>(msg: S) -> EditorError {
	EditorError::MalformedDocument(msg.into())
}

/// Builds the JSON snapshot: `color_map` in palette order, then `number_array`.
pub fn serialize(grid: &PixelGrid, palette: &Palette) -> Value {
	let color_map = palette.entries()
		.map(|e| (e.code.to_string(), json!(e.color.to_array())))
		.collect::<Map<String, Value>>();

	let mut doc = Map::new();
	doc.insert(COLOR_MAP_KEY.to_string(), Value::Object(color_map));
	doc.insert(NUMBER_ARRAY_KEY.to_string(), json!(grid.to_nested_sequence()));
	Value::Object(doc)
}

/// Non-negative integers, also when written with a zero fraction like `255.0`.
fn as_whole_number(v: &Value) -> Option<u64> {
	if let Some(n) = v.as_u64() {
		return Some(n);
	}

	let f = v.as_f64()?;
	if f < 0.0 || f.fract() != 0.0 || f > u32::MAX as f64 {
		return None;
	}

	Some(f as u64)
}

fn parse_channel(code: u32, v: &Value) -> Result<u8> {
	as_whole_number(v)
		.and_then(|c| u8::try_from(c).ok())
		.ok_or_else(|| malformed(format!("color {code} has channel {v}, expected an integer between 0 and 255")))
}

fn parse_color_map(v: &Value) -> Result<Palette> {
	let Value::Object(map) = v else {
		return Err(malformed(format!("\"{COLOR_MAP_KEY}\" must be an object")));
	};

	let entries = map.iter().map(|(key, value)| -> Result<(u32, Color)> {
		let code = key.trim().parse::<u32>()
			.map_err(|_| malformed(format!("\"{key}\" is not a valid color code")))?;

		let channels = match value.as_array() {
			Some(channels) if channels.len() == 3 => channels,
			_ => return Err(malformed(format!("color {code} must be an array of three channels"))),
		};

		let color = Color::new(
			parse_channel(code, &channels[0])?,
			parse_channel(code, &channels[1])?,
			parse_channel(code, &channels[2])?,
		);

		Ok((code, color))
	}).collect::<Result<Vec<(u32, Color)>>>()?;

	Palette::from_entries(entries)
}

fn parse_number_array(v: &Value) -> Result<PixelGrid> {
	let Some(rows) = v.as_array() else {
		return Err(malformed(format!("\"{NUMBER_ARRAY_KEY}\" must be an array of rows")));
	};

	let rows = rows.iter().enumerate().map(|(y, row)| -> Result<Vec<u32>> {
		let Some(row) = row.as_array() else {
			return Err(malformed(format!("row {y} is not an array")));
		};

		row.iter().enumerate().map(|(x, code)| {
			as_whole_number(code)
				.and_then(|c| u32::try_from(c).ok())
				.ok_or_else(|| malformed(format!("cell ({y}, {x}) holds {code}, expected a color code")))
		}).collect::<Result<Vec<u32>>>()
	}).collect::<Result<Vec<Vec<u32>>>>()?;

	PixelGrid::from_nested_sequence(&rows).map_err(|e| match e {
		EditorError::MalformedGrid(msg) => malformed(msg),
		e => e,
	})
}

/// Reads a snapshot back into a grid and palette.
/// Codes in the grid are not checked against the palette, see [dangling_codes].
pub fn deserialize(doc: &Value) -> Result<(PixelGrid, Palette)> {
	let Value::Object(doc) = doc else {
		return Err(malformed("the document must be a JSON object"));
	};

	let color_map = doc.get(COLOR_MAP_KEY)
		.ok_or_else(|| malformed(format!("missing \"{COLOR_MAP_KEY}\"")))?;
	let number_array = doc.get(NUMBER_ARRAY_KEY)
		.ok_or_else(|| malformed(format!("missing \"{NUMBER_ARRAY_KEY}\"")))?;

	let palette = parse_color_map(color_map)?;
	let grid = parse_number_array(number_array)?;

	Ok((grid, palette))
}

/// Codes painted on the grid that the palette doesn't define, ascending.
pub fn dangling_codes(grid: &PixelGrid, palette: &Palette) -> Vec<u32> {
	grid.codes_in_use()
		.into_iter()
		.filter(|&code| !palette.contains(code))
		.collect()
}

pub fn write_json<W: Write>(w: W, grid: &PixelGrid, palette: &Palette) -> Result<()> {
	let formatter = PrettyFormatter::with_indent(INDENT);
	let mut ser = serde_json::Serializer::with_formatter(w, formatter);
	serialize(grid, palette).serialize(&mut ser)?;
	Ok(())
}

pub fn to_json_string(grid: &PixelGrid, palette: &Palette) -> Result<String> {
	let mut buf = Vec::new();
	write_json(&mut buf, grid, palette)?;
	String::from_utf8(buf).map_err(|e| malformed(e.to_string()))
}

fn from_json_internal<R: Read + BufRead>(reader: R) -> Result<(PixelGrid, Palette)> {
	let doc: Value = serde_json::from_reader(reader)
		.map_err(|e| match e.classify() {
			serde_json::error::Category::Io => EditorError::Json(e),
			_ => malformed(format!("not valid JSON: {e}")),
		})?;

	deserialize(&doc)
}

pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<(PixelGrid, Palette)> {
	let f = File::open(path)?;
	let reader = BufReader::new(f);
	from_json_internal(reader)
}

pub fn from_json_string<S: Into<String>>(s: S) -> Result<(PixelGrid, Palette)> {
	let s = s.into();
	let reader = BufReader::new(s.as_bytes());
	from_json_internal(reader)
}
