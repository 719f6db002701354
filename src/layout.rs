//! Sheet layout arithmetic.
//!
//! The picker lays its tiles out in a column grid whose count is derived
//! from the sheet width and the fixed tile footprint. The math lives here,
//! independent of any UI framework, so it can be tested directly.

/// Horizontal measurements of the sheet and one tile, in logical pixels.
///
/// Derived per frame from the current sheet width and the active
/// [`PickerStyle`](crate::picker::PickerStyle); nothing here is persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetMetrics {
    /// Current width of the sheet.
    pub sheet_width: f32,
    /// Content padding on the left edge of the sheet.
    pub container_padding_left: f32,
    /// Content padding on the right edge of the sheet.
    pub container_padding_right: f32,
    /// Width of a tile's icon box.
    pub item_width: f32,
    /// Padding to the left of each tile.
    pub item_padding_left: f32,
    /// Padding to the right of each tile.
    pub item_padding_right: f32,
}

impl SheetMetrics {
    /// Number of grid columns that fit the sheet:
    /// `floor(usable_width / item_footprint)`.
    ///
    /// Returns 0 whenever the sheet is no wider than its own padding (and
    /// never goes negative, whatever the inputs).
    pub fn number_of_columns(&self) -> usize {
        let item_total_width = self.item_width + self.item_padding_left + self.item_padding_right;
        if item_total_width <= 0.0 {
            return 0;
        }
        let container_total_width =
            self.sheet_width - (self.container_padding_left + self.container_padding_right);
        if container_total_width <= 0.0 {
            return 0;
        }
        (container_total_width / item_total_width).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(sheet_width: f32) -> SheetMetrics {
        SheetMetrics {
            sheet_width,
            container_padding_left: 16.0,
            container_padding_right: 16.0,
            item_width: 104.0,
            item_padding_left: 8.0,
            item_padding_right: 8.0,
        }
    }

    #[test]
    fn test_columns_floor_of_usable_width() {
        // usable = 400 - 32 = 368; footprint = 120 -> 3 columns
        assert_eq!(metrics(400.0).number_of_columns(), 3);
        // usable = 512; footprint = 120 -> 4 columns
        assert_eq!(metrics(544.0).number_of_columns(), 4);
    }

    #[test]
    fn test_columns_zero_when_width_at_or_below_padding() {
        assert_eq!(metrics(32.0).number_of_columns(), 0);
        assert_eq!(metrics(10.0).number_of_columns(), 0);
        assert_eq!(metrics(0.0).number_of_columns(), 0);
        assert_eq!(metrics(-50.0).number_of_columns(), 0);
    }

    #[test]
    fn test_columns_never_negative_over_width_sweep() {
        for w in (-200..2000).step_by(7) {
            let m = metrics(w as f32);
            let n = m.number_of_columns();
            let usable = m.sheet_width - 32.0;
            if usable > 0.0 {
                assert_eq!(n, (usable / 120.0).floor() as usize, "width {w}");
            } else {
                assert_eq!(n, 0, "width {w}");
            }
        }
    }

    #[test]
    fn test_degenerate_item_footprint_yields_zero() {
        let mut m = metrics(400.0);
        m.item_width = 0.0;
        m.item_padding_left = 0.0;
        m.item_padding_right = 0.0;
        assert_eq!(m.number_of_columns(), 0);
    }
}
