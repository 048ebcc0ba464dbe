use pixgrid::error::EditorError;
use pixgrid::grid::{CellMapping, PixelGrid};

#[test]
fn new_grid_is_zero_filled() {
	let grid = PixelGrid::new(10, 10).unwrap();
	assert_eq!(grid.rows(), 10);
	assert_eq!(grid.cols(), 10);
	assert!(grid.cells().all(|(_, _, code)| code == 0));
	assert_eq!(grid.to_nested_sequence(), vec![vec![0; 10]; 10]);
}

#[test]
fn empty_or_oversized_grids_rejected() {
	for (rows, cols) in [(0, 0), (0, 10), (10, 0), (usize::MAX, 2)] {
		let err = PixelGrid::new(rows, cols).unwrap_err();
		assert!(matches!(err, EditorError::MalformedGrid(_)), "{rows}x{cols} gave {err:?}");
	}
}

#[test]
fn default_grid_is_ten_by_ten() {
	assert_eq!(PixelGrid::default(), PixelGrid::new(10, 10).unwrap());
}

#[test]
fn set_then_get() {
	let writes = [(0, 0, 1), (3, 4, 2), (9, 9, 7), (9, 0, 3), (0, 9, 42)];

	for (row, col, code) in writes {
		let mut grid = PixelGrid::new(10, 10).unwrap();
		let before = grid.clone();
		grid.set(row, col, code).unwrap();

		assert_eq!(grid.get(row, col).unwrap(), code);
		for (r, c, v) in grid.cells() {
			if (r, c) != (row, col) {
				assert_eq!(v, before.get(r, c).unwrap());
			}
		}
	}
}

#[test]
fn set_out_of_bounds_leaves_grid_unchanged() {
	let mut grid = PixelGrid::new(10, 10).unwrap();
	grid.set(5, 5, 1).unwrap();
	let before = grid.clone();

	for (row, col) in [(10, 0), (0, 10), (10, 10), (usize::MAX, 3)] {
		let err = grid.set(row, col, 1).unwrap_err();
		assert!(matches!(err, EditorError::IndexOutOfBounds { rows: 10, cols: 10, .. }));
		assert_eq!(grid, before);
	}
}

#[test]
fn non_square_grid_is_row_major() {
	let mut grid = PixelGrid::new(2, 3).unwrap();
	grid.set(1, 2, 5).unwrap();
	grid.set(0, 1, 4).unwrap();

	assert_eq!(grid.to_nested_sequence(), vec![vec![0, 4, 0], vec![0, 0, 5]]);
	assert_eq!(grid.get(1, 2).unwrap(), 5);
	assert!(grid.get(2, 1).is_err());
}

#[test]
fn nested_sequence_infers_shape() {
	let data = vec![vec![0, 1, 2, 3], vec![3, 2, 1, 0]];
	let grid = PixelGrid::from_nested_sequence(&data).unwrap();

	assert_eq!(grid.rows(), 2);
	assert_eq!(grid.cols(), 4);
	assert_eq!(grid.get(1, 0).unwrap(), 3);
	assert_eq!(grid.to_nested_sequence(), data);
	assert_eq!(grid.codes_in_use().into_iter().collect::<Vec<u32>>(), vec![0, 1, 2, 3]);
}

#[test]
#[should_panic(expected = "MalformedGrid(\"row 1 has 2 cells, expected 3\")")]
fn ragged_nested_sequence() {
	PixelGrid::from_nested_sequence(&[vec![0, 0, 0], vec![0, 0], vec![0, 0, 0]]).unwrap();
}

#[test]
#[should_panic(expected = "MalformedGrid(\"the grid has no rows\")")]
fn empty_nested_sequence() {
	PixelGrid::from_nested_sequence(&[]).unwrap();
}

#[test]
fn click_mapping() {
	let grid = PixelGrid::new(10, 10).unwrap();
	let mapping = CellMapping::default();

	let clicks = [
		((162.0, 7.0), (0, 4)),
		((0.0, 0.0), (0, 0)),
		((39.9, 40.0), (1, 0)),
		((399.0, 399.0), (9, 9)),
		((80.0, 121.5), (3, 2)),
	];

	for ((x, y), expected) in clicks {
		assert_eq!(mapping.cell_at(x, y, &grid).unwrap(), expected, "click at ({x}, {y})");
	}
}

#[test]
fn clicks_outside_canvas_are_rejected() {
	let grid = PixelGrid::new(10, 10).unwrap();
	let mapping = CellMapping::new(40);

	for (x, y) in [(400.0, 0.0), (0.0, 400.0), (-1.0, 5.0), (5.0, -0.5), (f64::NAN, 5.0)] {
		let err = mapping.cell_at(x, y, &grid).unwrap_err();
		assert!(matches!(err, EditorError::ClickOutOfBounds { .. }), "click at ({x}, {y}) gave {err:?}");
	}
}
