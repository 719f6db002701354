//! Block icon model.
//!
//! Every block type declares its icon as one of three shapes, resolved by a
//! single exhaustive match at render time:
//!
//! - [`BlockIcon::Glyph`]: a named glyph drawn from the themed icon font
//! - [`BlockIcon::Vector`]: inline vector markup, re-wrapped with the
//!   target fill color at render time
//! - [`BlockIcon::Factory`]: a caller-supplied renderer invoked with the
//!   requested fill color and size
//!
//! The shape is declared at registration time; there is no runtime type
//! probing. A descriptor may also carry no icon at all, which renders
//! nothing.

#![cfg(feature = "egui")]

use std::fmt;
use std::sync::Arc;

use eframe::egui;
use serde::{Deserialize, Serialize};

/// Simple RGB color independent of egui types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex form, e.g. `#1a2b3c`.
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<egui::Color32> for Rgb {
    fn from(c: egui::Color32) -> Self {
        Rgb(c.r(), c.g(), c.b())
    }
}

/// Fill color and edge length an icon is asked to render at.
#[derive(Clone, Copy, Debug)]
pub struct IconPaint {
    /// Tint applied to the icon.
    pub fill: egui::Color32,
    /// Edge length of the (square) icon area.
    pub size: f32,
}

/// Inline vector markup: the `<svg>` wrapper attributes plus its children,
/// kept verbatim so recoloring never touches the original geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorIcon {
    /// `viewBox` attribute, e.g. `"0 0 24 24"`.
    pub view_box: String,
    /// XML namespace, e.g. `"http://www.w3.org/2000/svg"`.
    pub xmlns: String,
    /// The `<svg>` element's children, verbatim markup.
    pub markup: String,
}

impl VectorIcon {
    pub fn new(
        view_box: impl Into<String>,
        xmlns: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        Self {
            view_box: view_box.into(),
            xmlns: xmlns.into(),
            markup: markup.into(),
        }
    }

    /// Re-wrap the children in an `<svg>` element carrying the original
    /// viewBox and namespace, with `fill` applied via a style attribute.
    pub fn to_svg(&self, fill: Rgb) -> String {
        format!(
            r#"<svg xmlns="{}" viewBox="{}" style="fill:{}">{}</svg>"#,
            self.xmlns,
            self.view_box,
            fill.to_css_hex(),
            self.markup,
        )
    }
}

/// Callback icon: paints itself into the given [`egui::Ui`] region.
pub type IconFactory = Arc<dyn Fn(&mut egui::Ui, IconPaint) + Send + Sync>;

/// The declared icon shape of a block type.
#[derive(Clone)]
pub enum BlockIcon {
    /// Named glyph resolved through the themed icon font (see [`glyph_char`]).
    Glyph(String),
    /// Inline vector markup re-wrapped with the target fill at render time.
    Vector(VectorIcon),
    /// Caller-supplied renderer invoked with fill color and size.
    Factory(IconFactory),
}

impl BlockIcon {
    pub fn glyph(name: impl Into<String>) -> Self {
        Self::Glyph(name.into())
    }

    pub fn vector(
        view_box: impl Into<String>,
        xmlns: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        Self::Vector(VectorIcon::new(view_box, xmlns, markup))
    }

    pub fn factory(f: impl Fn(&mut egui::Ui, IconPaint) + Send + Sync + 'static) -> Self {
        Self::Factory(Arc::new(f))
    }
}

impl fmt::Debug for BlockIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glyph(name) => f.debug_tuple("Glyph").field(name).finish(),
            Self::Vector(v) => f.debug_tuple("Vector").field(v).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Resolve a named glyph to its icon-font character.
///
/// The names follow the classic dash-icon vocabulary block authors already
/// use; unknown names resolve to `None` and the caller renders no icon.
pub fn glyph_char(name: &str) -> Option<&'static str> {
    use egui_phosphor::variants::regular;
    Some(match name {
        "editor-paragraph" => regular::PARAGRAPH,
        "heading" => regular::TEXT_H,
        "editor-ul" => regular::LIST_BULLETS,
        "editor-ol" => regular::LIST_NUMBERS,
        "editor-quote" => regular::QUOTES,
        "editor-code" => regular::CODE,
        "editor-table" => regular::TABLE,
        "format-image" => regular::IMAGE,
        "format-gallery" => regular::IMAGES,
        "format-video" => regular::VIDEO,
        "format-audio" => regular::MUSIC_NOTES,
        "media-document" => regular::FILE,
        "cover-image" => regular::IMAGE_SQUARE,
        "button" => regular::CURSOR_CLICK,
        "minus" => regular::MINUS,
        "image-flip-horizontal" => regular::ARROWS_LEFT_RIGHT,
        "arrows-vertical" => regular::ARROWS_VERTICAL,
        "admin-page" => regular::FILE_DASHED,
        "embed-generic" => regular::GLOBE,
        "html" => regular::FILE_HTML,
        "shortcode" => regular::BRACKETS_SQUARE,
        "text" => regular::TEXT_T,
        "smiley" => regular::SMILEY,
        "warning" => regular::WARNING,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_css_hex() {
        assert_eq!(Rgb(0, 0, 0).to_css_hex(), "#000000");
        assert_eq!(Rgb(26, 43, 60).to_css_hex(), "#1a2b3c");
        assert_eq!(Rgb(255, 255, 255).to_css_hex(), "#ffffff");
    }

    #[test]
    fn test_vector_to_svg_preserves_wrapper_and_applies_fill() {
        let icon = VectorIcon::new("0 0 24 24", "http://www.w3.org/2000/svg", "<path/>");
        let svg = icon.to_svg(Rgb(16, 32, 48));
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains("<path/>"));
        assert!(svg.contains(r#"style="fill:#102030""#));
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(
            glyph_char("smiley"),
            Some(egui_phosphor::variants::regular::SMILEY)
        );
        assert!(glyph_char("editor-paragraph").is_some());
        assert_eq!(glyph_char("no-such-glyph"), None);
    }

    #[test]
    fn test_block_icon_debug_does_not_probe_factory() {
        let icon = BlockIcon::factory(|_, _| {});
        assert_eq!(format!("{icon:?}"), "Factory(..)");
    }
}
