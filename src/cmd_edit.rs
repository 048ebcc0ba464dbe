use anyhow::Result;
use colored::Colorize;

use pixgrid::grid::CellMapping;

use crate::commands::{AddColorArgs, DocumentArgs, PaintArgs};
use crate::common::{open_document, save_document, swatch, warn_dangling};

pub(crate) fn cmd_add_color(args: &AddColorArgs) -> Result<()> {
	let mut state = open_document(&args.document)?;
	let code = state.add_color(args.color);
	save_document(&state, &args.document)?;

	println!("{} Color {code}: {}", swatch(args.color), args.color);
	Ok(())
}

pub(crate) fn cmd_delete_color(args: &DocumentArgs) -> Result<()> {
	let mut state = open_document(&args.document)?;
	let highest = state.palette.max_code();

	if !state.delete_color() {
		eprintln!("{} Cannot delete default colors.", "NOTE:".yellow());
		return Ok(());
	}

	save_document(&state, &args.document)?;
	if let Some(code) = highest {
		println!("Deleted color {code}");
	}

	warn_dangling(&state);
	Ok(())
}

pub(crate) fn cmd_paint(args: &PaintArgs) -> Result<()> {
	let mut state = open_document(&args.document)?;
	state.select(args.color)?;

	let (row, col) = match (args.cell, args.click) {
		(Some((row, col)), _) => {
			state.paint(row, col)?;
			(row, col)
		}
		(None, Some((x, y))) => state.paint_at(x, y, CellMapping::new(args.cell_size))?,
		(None, None) => anyhow::bail!("Either --cell or --click is required"),
	};

	save_document(&state, &args.document)?;
	println!("Painted ({row}, {col}) with color {}", args.color);
	Ok(())
}
