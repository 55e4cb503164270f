use sprite_pack::sprite_sheet::{assign_slot, compute_grid_shape, GridPosition, GridShape};

#[test]
fn shape_matches_ceil_sqrt() {
    for total in 1..=500u32 {
        let shape = compute_grid_shape(total);
        let columns = (1..).find(|c: &u32| c * c >= total).unwrap();
        assert_eq!(shape.columns, columns, "columns for {total} slots");
        assert_eq!(shape.rows, total.div_ceil(columns), "rows for {total} slots");
        assert!(shape.slots() >= total);
    }
}

#[test]
fn shape_examples() {
    assert_eq!(compute_grid_shape(1), GridShape { columns: 1, rows: 1 });
    assert_eq!(compute_grid_shape(4), GridShape { columns: 2, rows: 2 });
    assert_eq!(compute_grid_shape(5), GridShape { columns: 3, rows: 2 });
    assert_eq!(compute_grid_shape(10), GridShape { columns: 4, rows: 3 });
    assert_eq!(compute_grid_shape(17), GridShape { columns: 5, rows: 4 });
}

#[test]
fn zero_slots_still_has_unknown() {
    assert_eq!(compute_grid_shape(0), GridShape { columns: 1, rows: 1 });
}

#[test]
fn large_perfect_squares() {
    let shape = compute_grid_shape(65_535 * 65_535);
    assert_eq!(shape, GridShape { columns: 65_535, rows: 65_535 });
    let shape = compute_grid_shape(65_535 * 65_535 + 1);
    assert_eq!(shape.columns, 65_536);
}

#[test]
fn slots_fill_rows_left_to_right() {
    assert_eq!(assign_slot(0, 3), GridPosition { x: 0, y: 0 });
    assert_eq!(assign_slot(2, 3), GridPosition { x: 2, y: 0 });
    assert_eq!(assign_slot(3, 3), GridPosition { x: 0, y: 1 });
    assert_eq!(assign_slot(7, 3), GridPosition { x: 1, y: 2 });
}

#[test]
fn pixel_offsets_scale_by_tile() {
    let position = GridPosition { x: 3, y: 2 };
    assert_eq!(position.pixel_offset(256), (768, 512));
    assert_eq!(GridShape { columns: 4, rows: 3 }.pixel_size(256), (1024, 768));
}
