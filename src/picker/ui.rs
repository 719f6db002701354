//! Rendering and interaction for the block picker sheet.

#![cfg(feature = "egui")]

use eframe::egui::{
    self, Align2, CornerRadius, CursorIcon, FontId, Id, Margin, Modal, Pos2, Rect, Sense, Stroke,
    Ui, UiBuilder, Vec2, WidgetInfo, WidgetType,
};

use crate::icon::{BlockIcon, IconPaint, Rgb, glyph_char};
use crate::l10n::block_accessibility_label;
use crate::registry::{BlockTypeDescriptor, BlockTypeRegistry};

use super::style::PickerStyle;

/// What happened to the sheet this frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerResponse {
    /// Name of the block type the user tapped, if any.
    pub selected: Option<String>,
    /// True when the sheet was dismissed (backdrop tap or Escape).
    pub dismissed: bool,
}

type SelectHandler<'a> = Box<dyn FnOnce(&str) + 'a>;
type DismissHandler<'a> = Box<dyn FnOnce() + 'a>;

/// The block picker bottom sheet.
///
/// Built fresh and [`show`](Self::show)n every frame while the host keeps
/// it open. The callbacks are `FnOnce`, so a selection or dismissal is
/// reported at most once per frame, and only one of the two.
///
/// ```rust,ignore
/// BlockPicker::new()
///     .on_value_selected(|name| editor.insert_block(name))
///     .on_dismiss(|| editor.close_inserter())
///     .show(ctx, &registry);
/// ```
pub struct BlockPicker<'a> {
    is_replacement: bool,
    add_extra_bottom_padding: bool,
    style: PickerStyle,
    on_value_selected: Option<SelectHandler<'a>>,
    on_dismiss: Option<DismissHandler<'a>>,
}

impl Default for BlockPicker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BlockPicker<'a> {
    pub fn new() -> Self {
        Self {
            is_replacement: false,
            add_extra_bottom_padding: false,
            style: PickerStyle::default(),
            on_value_selected: None,
            on_dismiss: None,
        }
    }

    /// Whether the selection will replace an existing block. Informational;
    /// carried through to logging, never branched on here.
    pub fn is_replacement(mut self, is_replacement: bool) -> Self {
        self.is_replacement = is_replacement;
        self
    }

    /// Add an extra bottom inset to the sheet content.
    pub fn add_extra_bottom_padding(mut self, add: bool) -> Self {
        self.add_extra_bottom_padding = add;
        self
    }

    /// Override the default style constants.
    pub fn style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    /// Called with the tapped block type's unique name.
    pub fn on_value_selected(mut self, handler: impl FnOnce(&str) + 'a) -> Self {
        self.on_value_selected = Some(Box::new(handler));
        self
    }

    /// Called when the sheet is closed without a selection.
    pub fn on_dismiss(mut self, handler: impl FnOnce() + 'a) -> Self {
        self.on_dismiss = Some(Box::new(handler));
        self
    }

    /// Show the sheet for this frame and report what happened.
    ///
    /// The rendered list is the registry's current offering (sentinel
    /// excluded); registry changes are picked up on the next frame.
    pub fn show(self, ctx: &egui::Context, registry: &BlockTypeRegistry) -> PickerResponse {
        let BlockPicker {
            is_replacement,
            add_extra_bottom_padding,
            style,
            on_value_selected,
            on_dismiss,
        } = self;

        let available = registry.available_block_types();
        let sheet_width = style.sheet_width(ctx.screen_rect().width());
        let columns = style.metrics(sheet_width).number_of_columns();
        tracing::trace!(
            is_replacement,
            columns,
            items = available.len(),
            "showing block picker sheet"
        );

        let bottom_padding = if add_extra_bottom_padding {
            style.content_vertical_padding + style.extra_bottom_padding
        } else {
            style.content_vertical_padding
        };
        let frame = egui::Frame::new()
            .fill(style.sheet_fill)
            .corner_radius(CornerRadius {
                nw: 12,
                ne: 12,
                sw: 0,
                se: 0,
            })
            .inner_margin(Margin {
                left: style.content_padding as i8,
                right: style.content_padding as i8,
                top: style.content_vertical_padding as i8,
                bottom: bottom_padding as i8,
            });

        let mut selected: Option<String> = None;
        let modal = Modal::new(Id::new("blocksheet_picker"))
            .area(
                Modal::default_area(Id::new("blocksheet_picker_area"))
                    .anchor(Align2::CENTER_BOTTOM, Vec2::ZERO),
            )
            .frame(frame)
            .show(ctx, |ui| {
                ui.set_width(sheet_width - 2.0 * style.content_padding);
                grid(ui, &style, columns, &available, &mut selected);
            });

        let mut response = PickerResponse::default();
        if let Some(name) = selected {
            if let Some(handler) = on_value_selected {
                handler(&name);
            }
            response.selected = Some(name);
        } else if modal.should_close() {
            if let Some(handler) = on_dismiss {
                handler();
            }
            response.dismissed = true;
        }
        response
    }
}

/// Identity of the grid region.
///
/// Includes the column count, so a change in columns (resize, rotation)
/// re-mounts the grid with fresh layout state instead of re-flowing rows.
pub fn grid_identity(columns: usize) -> Id {
    Id::new(("blocksheet_picker_grid", columns))
}

fn grid(
    ui: &mut Ui,
    style: &PickerStyle,
    columns: usize,
    items: &[BlockTypeDescriptor],
    selected: &mut Option<String>,
) {
    // A computed count of 0 means the sheet is narrower than its own
    // padding; lay out a single column so the content stays reachable.
    let per_row = columns.max(1);
    ui.push_id(grid_identity(columns), |ui| {
        // Horizontal padding is part of the tile footprint; no extra spacing.
        ui.spacing_mut().item_spacing = Vec2::new(0.0, 4.0);
        for (row_index, row) in items.chunks(per_row).enumerate() {
            // Separators between rows only.
            if row_index > 0 {
                row_separator(ui, style);
            }
            ui.horizontal(|ui| {
                for item in row {
                    if block_tile(ui, style, item).clicked() {
                        *selected = Some(item.name.clone());
                    }
                }
            });
        }
    });
}

fn row_separator(ui: &mut Ui, style: &PickerStyle) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), 1.0), Sense::hover());
    ui.painter().line_segment(
        [rect.left_center(), rect.right_center()],
        Stroke::new(1.0, style.separator_color),
    );
}

/// One fixed-size tappable tile: tinted icon above the title label.
fn block_tile(ui: &mut Ui, style: &PickerStyle, item: &BlockTypeDescriptor) -> egui::Response {
    let desired = Vec2::new(style.item_total_width(), style.item_height);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

    if ui.is_rect_visible(rect) {
        if response.hovered() || response.has_focus() {
            ui.painter()
                .rect_filled(rect, CornerRadius::same(8), style.hover_fill);
        }
        let icon_box = Rect::from_min_size(
            Pos2::new(
                rect.center().x - style.icon_wrapper_width / 2.0,
                rect.top() + 4.0,
            ),
            Vec2::new(style.icon_wrapper_width, style.icon_wrapper_height),
        );
        ui.painter()
            .rect_filled(icon_box, CornerRadius::same(8), style.icon_box_fill);
        render_icon(
            ui,
            icon_box,
            item.icon.as_ref(),
            IconPaint {
                fill: style.icon_fill,
                size: style.icon_size,
            },
            &item.name,
        );
        ui.painter().text(
            Pos2::new(rect.center().x, rect.bottom() - 6.0),
            Align2::CENTER_BOTTOM,
            &item.title,
            FontId::proportional(12.0),
            style.label_color,
        );
    }

    let response = response.on_hover_cursor(CursorIcon::PointingHand);
    response.widget_info(|| {
        WidgetInfo::labeled(
            WidgetType::Button,
            ui.is_enabled(),
            block_accessibility_label(&item.title),
        )
    });
    response
}

/// Resolve one of the three declared icon shapes.
///
/// A descriptor without a renderable icon draws nothing; debug builds log
/// the gap so registration mistakes surface during development.
fn render_icon(
    ui: &mut Ui,
    icon_box: Rect,
    icon: Option<&BlockIcon>,
    paint: IconPaint,
    block_name: &str,
) {
    let target = Rect::from_center_size(icon_box.center(), Vec2::splat(paint.size));
    match icon {
        Some(BlockIcon::Glyph(name)) => match glyph_char(name) {
            Some(glyph) => {
                ui.painter().text(
                    icon_box.center(),
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(paint.size),
                    paint.fill,
                );
            }
            None => missing_icon(block_name, "unknown glyph name"),
        },
        Some(BlockIcon::Vector(vector)) => {
            let fill = Rgb::from(paint.fill);
            // The URI carries the fill so the texture cache keys recolored
            // variants apart.
            let uri = format!(
                "bytes://blocksheet/{block_name}/{}.svg",
                fill.to_css_hex().trim_start_matches('#')
            );
            let image = egui::Image::from_bytes(uri, vector.to_svg(fill).into_bytes())
                .fit_to_exact_size(Vec2::splat(paint.size));
            ui.put(target, image);
        }
        Some(BlockIcon::Factory(factory)) => {
            ui.scope_builder(UiBuilder::new().max_rect(target), |ui| factory(ui, paint));
        }
        None => missing_icon(block_name, "no icon registered"),
    }
}

fn missing_icon(block_name: &str, reason: &str) {
    if cfg!(debug_assertions) {
        tracing::warn!(block = block_name, reason, "rendering tile without an icon");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_identity_keyed_by_column_count() {
        assert_eq!(grid_identity(3), grid_identity(3));
        assert_ne!(grid_identity(3), grid_identity(4));
        assert_ne!(grid_identity(0), grid_identity(1));
    }

    #[test]
    fn test_builder_defaults() {
        let picker = BlockPicker::new();
        assert!(!picker.is_replacement);
        assert!(!picker.add_extra_bottom_padding);
        assert!(picker.on_value_selected.is_none());
        assert!(picker.on_dismiss.is_none());
        assert_eq!(picker.style, PickerStyle::default());
    }
}
