use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};

use pixgrid::document::{dangling_codes, deserialize, from_json_file, from_json_string, serialize, to_json_string};
use pixgrid::error::EditorError;
use pixgrid::grid::PixelGrid;
use pixgrid::palette::{Color, Palette, BLACK, WHITE};

fn document_path(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/documents/{name}"))
}

fn red_pixel_scene() -> (PixelGrid, Palette) {
	let mut pal = Palette::default();
	let code = pal.add(Color::new(255, 0, 0));
	assert_eq!(code, 2);

	let mut grid = PixelGrid::new(10, 10).unwrap();
	grid.set(3, 4, code).unwrap();
	(grid, pal)
}

#[test]
fn red_pixel_serialization() {
	let (grid, pal) = red_pixel_scene();
	let doc = serialize(&grid, &pal);

	assert_eq!(doc["number_array"][3][4], json!(2));
	assert_eq!(doc["color_map"]["2"], json!([255, 0, 0]));
	assert_eq!(doc["number_array"].as_array().unwrap().len(), 10);
}

#[test]
fn field_and_key_order() {
	let pal = Palette::from_entries([(1, WHITE), (0, BLACK), (4, Color::new(9, 8, 7))]).unwrap();
	let doc = serialize(&PixelGrid::new(1, 1).unwrap(), &pal);

	let Value::Object(fields) = &doc else { panic!("not an object") };
	assert_eq!(fields.keys().collect::<Vec<&String>>(), vec!["color_map", "number_array"]);

	let keys = doc["color_map"].as_object().unwrap().keys().cloned().collect::<Vec<String>>();
	assert_eq!(keys, vec!["1", "0", "4"]);
}

#[test]
fn text_matches_reference_document() {
	let (grid, pal) = red_pixel_scene();
	let expected = fs::read_to_string(document_path("image.json")).unwrap();

	assert_eq!(to_json_string(&grid, &pal).unwrap(), expected);
}

#[test]
fn round_trip() {
	let (mut grid, mut pal) = red_pixel_scene();
	pal.add(Color::new(12, 34, 56));
	grid.set(9, 9, 3).unwrap();
	grid.set(0, 0, 1).unwrap();

	let (g, p) = deserialize(&serialize(&grid, &pal)).unwrap();
	assert_eq!(g, grid);
	assert_eq!(p, pal);

	let (g, p) = from_json_string(to_json_string(&grid, &pal).unwrap()).unwrap();
	assert_eq!(g, grid);
	assert_eq!(p, pal);
}

#[test]
fn round_trip_preserves_unordered_palette() {
	let (grid, pal) = from_json_file(document_path("dangling.json")).unwrap();
	assert_eq!(pal.codes(), vec![1, 0, 3]);

	let (g, p) = deserialize(&serialize(&grid, &pal)).unwrap();
	assert_eq!((g, p), (grid, pal));
}

#[test]
fn reference_document_loads() {
	let (grid, pal) = from_json_file(document_path("image.json")).unwrap();

	assert_eq!(grid.rows(), 10);
	assert_eq!(grid.cols(), 10);
	assert_eq!(grid.get(3, 4).unwrap(), 2);
	assert_eq!(pal.lookup(2).unwrap(), Color::new(255, 0, 0));
	assert!(dangling_codes(&grid, &pal).is_empty());
}

#[test]
fn dangling_codes_are_loaded_not_rejected() {
	let (grid, pal) = from_json_file(document_path("dangling.json")).unwrap();

	assert_eq!(grid.rows(), 2);
	assert_eq!(grid.cols(), 3);
	assert_eq!(dangling_codes(&grid, &pal), vec![5, 7]);
}

#[test]
fn integer_keys_are_parsed() {
	let doc = json!({
		"color_map": { "0": [0, 0, 0], "1": [255, 255, 255], "10": [1, 2, 3] },
		"number_array": [[10, 0], [1, 10]]
	});

	let (grid, pal) = deserialize(&doc).unwrap();
	assert_eq!(pal.codes(), vec![0, 1, 10]);
	assert_eq!(grid.get(1, 1).unwrap(), 10);
}

fn malformed_documents() -> Vec<(&'static str, Value)> {
	vec![
		("not an object", json!([1, 2, 3])),
		("missing number_array", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] } })),
		("code is not an integer", json!({ "color_map": { "zero": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("negative code", json!({ "color_map": { "-1": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [[1]] })),
		("two channels", json!({ "color_map": { "0": [0, 0], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("four channels", json!({ "color_map": { "0": [0, 0, 0, 0], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("channel out of range", json!({ "color_map": { "0": [0, 0, 256], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("channel is a string", json!({ "color_map": { "0": ["0", 0, 0], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("color is not an array", json!({ "color_map": { "0": "#000000", "1": [1, 1, 1] }, "number_array": [[0]] })),
		("color_map is an array", json!({ "color_map": [[0, 0, 0], [1, 1, 1]], "number_array": [[0]] })),
		("single color", json!({ "color_map": { "0": [0, 0, 0] }, "number_array": [[0]] })),
		("duplicate code", json!({ "color_map": { "1": [0, 0, 0], "01": [1, 1, 1] }, "number_array": [[1]] })),
		("number_array is flat", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [0, 1] })),
		("negative cell", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [[0, -1]] })),
		("fractional cell", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [[0, 1.5]] })),
		("fractional channel", json!({ "color_map": { "0": [0, 0, 0.5], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("negative float channel", json!({ "color_map": { "0": [0, -1.0, 0], "1": [1, 1, 1] }, "number_array": [[0]] })),
		("empty grid", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [] })),
		("empty rows", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [[], []] })),
		("ragged rows", json!({ "color_map": { "0": [0, 0, 0], "1": [1, 1, 1] }, "number_array": [[0, 1], [0]] })),
	]
}

#[test]
fn malformed_documents_are_rejected() {
	for (name, doc) in malformed_documents() {
		println!("Testing {name}…");
		let err = deserialize(&doc).unwrap_err();
		assert!(matches!(err, EditorError::MalformedDocument(_)), "{name} gave {err:?}");
	}
}

#[test]
#[should_panic(expected = "MalformedDocument(\"row 2 has 9 cells, expected 10\")")]
fn ragged_document() {
	from_json_file(document_path("ragged.json")).unwrap();
}

#[test]
#[should_panic(expected = "MalformedDocument(\"missing \\\"color_map\\\"\")")]
fn missing_color_map() {
	from_json_file(document_path("missing_color_map.json")).unwrap();
}

#[test]
#[should_panic(expected = "MalformedDocument(\"color 1 must be an array of three channels\")")]
fn short_color() {
	from_json_file(document_path("bad_color.json")).unwrap();
}

#[test]
#[should_panic(expected = "MalformedDocument(\"color 4294967295 is above the highest allowed code 65535\")")]
fn highest_code_rejected() {
	from_json_string(r#"{ "color_map": { "0": [0, 0, 0], "4294967295": [1, 1, 1] }, "number_array": [[0]] }"#).unwrap();
}

#[test]
fn whole_floats_are_accepted() {
	let doc = json!({
		"color_map": { "0": [0.0, 0, 0], "1": [255.0, 255.0, 255.0] },
		"number_array": [[1.0, 0], [0, 1]]
	});

	let (grid, pal) = deserialize(&doc).unwrap();
	assert_eq!(pal, Palette::default());
	assert_eq!(grid.get(0, 0).unwrap(), 1);

	let reserialized = serialize(&grid, &pal);
	assert_eq!(reserialized["color_map"]["1"], json!([255, 255, 255]));
}

#[test]
fn invalid_json_text() {
	let err = from_json_string("{ \"color_map\": ").unwrap_err();
	assert!(matches!(err, EditorError::MalformedDocument(_)), "{err:?}");
}

#[test]
fn missing_file() {
	let err = from_json_file(document_path("does_not_exist.json")).unwrap_err();
	assert!(matches!(err, EditorError::Io(_)), "{err:?}");
}
