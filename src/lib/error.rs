use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum EditorError {
	KeyNotFound(u32),
	IndexOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
	ClickOutOfBounds { x: f64, y: f64 },
	MalformedGrid(String),
	MalformedDocument(String),
	UnknownColorCode { code: u32, row: usize, col: usize },
	InvalidColor(String),
	Io(std::io::Error),
	Png(png::EncodingError),
	Json(serde_json::Error),
}

impl Display for EditorError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			EditorError::KeyNotFound(code) => write!(f, "Color {code} is not in the palette"),
			EditorError::IndexOutOfBounds { row, col, rows, cols } =>
				write!(f, "Cell ({row}, {col}) is outside the {cols}x{rows} grid"),
			EditorError::ClickOutOfBounds { x, y } => write!(f, "Click at ({x}, {y}) is outside the canvas"),
			EditorError::MalformedGrid(msg) => write!(f, "Malformed grid: {msg}"),
			EditorError::MalformedDocument(msg) => write!(f, "Malformed document: {msg}"),
			EditorError::UnknownColorCode { code, row, col } =>
				write!(f, "Cell ({row}, {col}) uses color {code}, which is not in the palette"),
			EditorError::InvalidColor(msg) => write!(f, "Invalid color: {msg}"),
			EditorError::Io(e) => write!(f, "io error: {e}"),
			EditorError::Png(e) => write!(f, "png error: {e}"),
			EditorError::Json(e) => write!(f, "json error: {e}"),
		}
	}
}

impl std::error::Error for EditorError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			EditorError::Io(e) => Some(e),
			EditorError::Png(e) => Some(e),
			EditorError::Json(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for EditorError {
	fn from(e: std::io::Error) -> Self {
		EditorError::Io(e)
	}
}

impl From<png::EncodingError> for EditorError {
	fn from(e: png::EncodingError) -> Self {
		EditorError::Png(e)
	}
}

impl From<serde_json::Error> for EditorError {
	fn from(e: serde_json::Error) -> Self {
		EditorError::Json(e)
	}
}

impl From<tempfile::PersistError> for EditorError {
	fn from(e: tempfile::PersistError) -> Self {
		EditorError::Io(e.error)
	}
}

pub type Result<T> = std::result::Result<T, EditorError>;
