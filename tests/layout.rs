use blocksheet::layout::SheetMetrics;

fn metrics(sheet_width: f32, item_width: f32) -> SheetMetrics {
    SheetMetrics {
        sheet_width,
        container_padding_left: 16.0,
        container_padding_right: 16.0,
        item_width,
        item_padding_left: 8.0,
        item_padding_right: 8.0,
    }
}

#[test]
fn test_column_count_is_floor_of_usable_over_footprint() {
    // Phone-ish width: usable = 375 - 32 = 343, footprint = 120.
    assert_eq!(metrics(375.0, 104.0).number_of_columns(), 2);
    // Just under and just over a column boundary.
    assert_eq!(metrics(391.0, 104.0).number_of_columns(), 2);
    assert_eq!(metrics(392.0, 104.0).number_of_columns(), 3);
}

#[test]
fn test_column_count_zero_when_sheet_no_wider_than_padding() {
    for w in [32.0, 31.0, 0.0, -1.0, -400.0] {
        assert_eq!(metrics(w, 104.0).number_of_columns(), 0, "width {w}");
    }
}

#[test]
fn test_column_count_grows_monotonically_with_width() {
    let mut last = 0;
    for w in (0..3000).step_by(10) {
        let n = metrics(w as f32, 104.0).number_of_columns();
        assert!(n >= last, "column count shrank at width {w}");
        last = n;
    }
    assert!(last > 20);
}
