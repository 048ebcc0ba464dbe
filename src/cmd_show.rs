use anyhow::Result;
use colored::Colorize;

use crate::commands::DocumentArgs;
use crate::common::{open_document, swatch, warn_dangling};

pub(crate) fn cmd_show(args: &DocumentArgs) -> Result<()> {
	let state = open_document(&args.document)?;
	let grid = &state.grid;

	for row in grid.to_nested_sequence() {
		let line = row.iter().map(|&code| match state.palette.lookup(code) {
			Ok(color) => swatch(color),
			Err(_) => "??".red().bold().to_string(),
		}).collect::<Vec<String>>().join("");
		println!("{line}");
	}

	warn_dangling(&state);
	Ok(())
}

pub(crate) fn cmd_colors(args: &DocumentArgs) -> Result<()> {
	let state = open_document(&args.document)?;
	let in_use = state.grid.codes_in_use();

	for entry in state.palette.entries() {
		let usage = if in_use.contains(&entry.code) { "" } else { " (unused)" };
		println!("{} Color {}: {}{}", swatch(entry.color), entry.code, entry.color, usage.dimmed());
	}

	Ok(())
}

pub(crate) fn cmd_check(args: &DocumentArgs) -> Result<()> {
	let state = open_document(&args.document)?;
	let dangling = state.dangling_codes();

	println!("{}x{} grid, {} colors", state.grid.cols(), state.grid.rows(), state.palette.len());

	if !dangling.is_empty() {
		let codes = dangling.iter().map(|c| c.to_string()).collect::<Vec<String>>().join(", ");
		anyhow::bail!("colors missing from the palette: {codes}")
	}

	println!("{}", "OK".green());
	Ok(())
}
