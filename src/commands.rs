use std::path::PathBuf;

use clap::ArgGroup;
use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;

use pixgrid::palette::Color;
use pixgrid::DEFAULT_CELL_SIZE;

use crate::common::{parse_color, parse_grid_size, parse_pair, GridSize};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Edits small indexed-color pixel grids stored as JSON")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints diagnostic output.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct NewArgs {
	#[arg(help = "The document to create.")]
	pub document: PathBuf,

	#[arg(short, long, value_parser = parse_grid_size, help = "The grid size. Format WxH.", default_value = "10x10")]
	pub size: GridSize,

	#[arg(short, long, help = "Overwrites an existing document.")]
	pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DocumentArgs {
	#[arg(help = "The document to read.")]
	pub document: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct AddColorArgs {
	#[arg(help = "The document to modify.")]
	pub document: PathBuf,

	#[arg(value_parser = parse_color, help = "The new color. Format #RRGGBB or R,G,B.")]
	pub color: Color,
}

#[derive(Parser, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["cell", "click"])))]
pub(crate) struct PaintArgs {
	#[arg(help = "The document to modify.")]
	pub document: PathBuf,

	#[arg(short, long, help = "The color code to paint with.")]
	pub color: u32,

	#[arg(long, value_parser = parse_pair::<usize>, help = "The cell to paint. Format ROW,COL.")]
	pub cell: Option<(usize, usize)>,
	#[arg(long, value_parser = parse_pair::<f64>, help = "A canvas click position. Format X,Y.")]
	pub click: Option<(f64, f64)>,

	#[arg(long, help = "The on-screen cell size used to map clicks.", default_value_t = DEFAULT_CELL_SIZE)]
	pub cell_size: u32,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(help = "The document to export.")]
	pub document: PathBuf,
	#[arg(help = "The output PNG file.")]
	pub output: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Creates a blank document with the default palette.")]
	New(NewArgs),
	#[command(about = "Draws the grid in the terminal.")]
	Show(DocumentArgs),
	#[command(about = "Lists the palette's color codes.")]
	Colors(DocumentArgs),
	#[command(about = "Adds a color to the palette and prints its code.")]
	AddColor(AddColorArgs),
	#[command(about = "Deletes the color with the highest code.")]
	DeleteColor(DocumentArgs),
	#[command(about = "Paints a single cell.")]
	Paint(PaintArgs),
	#[command(about = "Exports the grid as a PNG, one pixel per cell.")]
	Export(ExportArgs),
	#[command(about = "Validates a document and reports colors missing from its palette.")]
	Check(DocumentArgs),
}
