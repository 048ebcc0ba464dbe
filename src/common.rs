use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use colored::Colorize;
use log::LevelFilter;
use regex::{Captures, Regex};

use pixgrid::editor::EditorState;
use pixgrid::palette::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GridSize {
	pub width: usize,
	pub height: usize,
}

/// Parses `WxH`, e.g. `10x10`. Both sides must be non-zero.
pub(crate) fn parse_grid_size(size: &str) -> Result<GridSize> {
	let re = Regex::new(r"^\s*(?P<W>\d+)\s*[xX]\s*(?P<H>\d+)\s*$")?;
	let groups: Captures = match re.captures(size) {
		None => { anyhow::bail!("Invalid size string \"{size}\" provided") }
		Some(captures) => captures
	};

	if let (Some(w), Some(h)) = (groups.name("W"), groups.name("H")) {
		let width = w.as_str().parse::<usize>()
			.with_context(|| format!("Invalid width in size string \"{size}\""))?;
		let height = h.as_str().parse::<usize>()
			.with_context(|| format!("Invalid height in size string \"{size}\""))?;
		if width == 0 || height == 0 {
			anyhow::bail!("Grid size \"{size}\" must not be empty")
		}
		return Ok(GridSize { width, height });
	}

	anyhow::bail!("Couldn't parse size string \"{size}\"")
}

/// Parses two comma-separated values, e.g. `3,4`.
pub(crate) fn parse_pair<T: FromStr>(s: &str) -> Result<(T, T)> {
	let Some((a, b)) = s.split_once(',') else {
		anyhow::bail!("\"{s}\" must be two values separated by a comma")
	};

	match (a.trim().parse::<T>(), b.trim().parse::<T>()) {
		(Ok(a), Ok(b)) => Ok((a, b)),
		_ => anyhow::bail!("\"{s}\" contains a value that isn't a number"),
	}
}

pub(crate) fn parse_color(s: &str) -> Result<Color> {
	Ok(s.parse::<Color>()?)
}

pub(crate) fn init_logging(debug: bool) {
	let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
	if debug {
		builder.filter_level(LevelFilter::Debug);
	}
	builder.format_timestamp(None).init();
}

pub(crate) fn open_document<P: AsRef<Path>>(path: P) -> Result<EditorState> {
	let path = path.as_ref();
	EditorState::open(path).with_context(|| format!("Couldn't load {}", path.display()))
}

pub(crate) fn save_document<P: AsRef<Path>>(state: &EditorState, path: P) -> Result<()> {
	let path = path.as_ref();
	state.save_json(path).with_context(|| format!("Couldn't save {}", path.display()))
}

pub(crate) fn swatch(color: Color) -> String {
	"  ".on_truecolor(color.r, color.g, color.b).to_string()
}

pub(crate) fn warn_dangling(state: &EditorState) {
	let dangling = state.dangling_codes();
	if !dangling.is_empty() {
		let codes = dangling.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(", ");
		eprintln!("{} cells use colors that are not in the palette: {codes}", "NOTE:".yellow());
	}
}
