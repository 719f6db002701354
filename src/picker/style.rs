//! Style constants for the picker sheet.

#![cfg(feature = "egui")]

use eframe::egui::Color32;

use crate::layout::SheetMetrics;

/// Visual constants for the sheet and its tiles.
///
/// The defaults match the editor's dark theme; hosts can pass an override
/// through [`BlockPicker::style`](crate::picker::BlockPicker::style).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerStyle {
    /// Horizontal content padding inside the sheet, per side.
    pub content_padding: f32,
    /// Vertical content padding above and below the grid.
    pub content_vertical_padding: f32,
    /// Extra bottom inset applied on request (home-indicator clearance).
    pub extra_bottom_padding: f32,
    /// Width of a tile's icon box; the tile footprint derives from this.
    pub icon_wrapper_width: f32,
    /// Height of a tile's icon box.
    pub icon_wrapper_height: f32,
    /// Horizontal padding around each tile, per side.
    pub item_padding: f32,
    /// Edge length of the glyph/vector icon inside the icon box.
    pub icon_size: f32,
    /// Tile height including the label line.
    pub item_height: f32,
    /// Fill color icons are tinted with.
    pub icon_fill: Color32,
    /// Label text color.
    pub label_color: Color32,
    /// Background of the icon box.
    pub icon_box_fill: Color32,
    /// Hover/focus highlight behind a tile.
    pub hover_fill: Color32,
    /// Sheet background.
    pub sheet_fill: Color32,
    /// Row separator color.
    pub separator_color: Color32,
    /// Upper bound on the sheet width on wide screens.
    pub max_sheet_width: f32,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            content_padding: 16.0,
            content_vertical_padding: 12.0,
            extra_bottom_padding: 20.0,
            icon_wrapper_width: 104.0,
            icon_wrapper_height: 64.0,
            item_padding: 8.0,
            icon_size: 32.0,
            item_height: 96.0,
            icon_fill: Color32::from_rgb(235, 235, 240),
            label_color: Color32::from_rgb(200, 200, 205),
            icon_box_fill: Color32::from_rgb(46, 46, 52),
            hover_fill: Color32::from_rgb(58, 58, 66),
            sheet_fill: Color32::from_rgb(30, 30, 34),
            separator_color: Color32::from_rgb(62, 62, 70),
            max_sheet_width: 520.0,
        }
    }
}

impl PickerStyle {
    /// Sheet width for the current screen: full width, capped on wide screens.
    pub fn sheet_width(&self, screen_width: f32) -> f32 {
        screen_width.min(self.max_sheet_width)
    }

    /// Layout metrics at the given sheet width.
    pub fn metrics(&self, sheet_width: f32) -> SheetMetrics {
        SheetMetrics {
            sheet_width,
            container_padding_left: self.content_padding,
            container_padding_right: self.content_padding,
            item_width: self.icon_wrapper_width,
            item_padding_left: self.item_padding,
            item_padding_right: self.item_padding,
        }
    }

    /// Total tile footprint width: icon box plus horizontal padding.
    pub fn item_total_width(&self) -> f32 {
        self.icon_wrapper_width + 2.0 * self.item_padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_width_capped_on_wide_screens() {
        let style = PickerStyle::default();
        assert_eq!(style.sheet_width(390.0), 390.0);
        assert_eq!(style.sheet_width(1920.0), style.max_sheet_width);
    }

    #[test]
    fn test_metrics_mirror_style_constants() {
        let style = PickerStyle::default();
        let m = style.metrics(400.0);
        assert_eq!(m.sheet_width, 400.0);
        assert_eq!(m.item_width, style.icon_wrapper_width);
        assert_eq!(
            m.item_padding_left + m.item_width + m.item_padding_right,
            style.item_total_width()
        );
    }
}
