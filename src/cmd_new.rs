use anyhow::Result;

use pixgrid::editor::EditorState;

use crate::commands::NewArgs;
use crate::common::save_document;

pub(crate) fn cmd_new(args: &NewArgs) -> Result<()> {
	if args.document.exists() && !args.force {
		anyhow::bail!("{} already exists, pass --force to overwrite it", args.document.display())
	}

	let state = EditorState::with_size(args.size.height, args.size.width)?;
	save_document(&state, &args.document)?;

	println!("Created {}x{} grid in {}", args.size.width, args.size.height, args.document.display());
	Ok(())
}
