pub mod document;
pub mod editor;
pub mod error;
pub mod grid;
pub mod palette;
pub mod raster;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

/// Edge length of a single cell on screen, in pixels. Only used for click mapping.
pub const DEFAULT_CELL_SIZE: u32 = 40;

/// Black and white can never be deleted.
pub const MIN_PALETTE_COLORS: usize = 2;

/// Highest code a loaded palette may use, leaving headroom for codes assigned by `Palette::add`.
pub const MAX_LOADED_CODE: u32 = u16::MAX as u32;
