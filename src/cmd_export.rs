use anyhow::{Context, Result};

use crate::commands::ExportArgs;
use crate::common::open_document;

pub(crate) fn cmd_export(args: &ExportArgs) -> Result<()> {
	let state = open_document(&args.document)?;
	state.export_png(&args.output)
		.with_context(|| format!("Couldn't export {}", args.output.display()))?;

	println!("Exported {}x{} image to {}", state.grid.cols(), state.grid.rows(), args.output.display());
	Ok(())
}
