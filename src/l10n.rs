//! Localized message formatting.
//!
//! Translations live in `locales/*.yml` and are resolved through
//! `rust-i18n` with named placeholders, so locales are free to reorder
//! words around the interpolated title.

use rust_i18n::t;

/// Accessibility label announced for a picker tile, e.g. "Paragraph block".
///
/// `title` is the block type's display title and is expected to be
/// localized already; only the surrounding message is translated here.
pub fn block_accessibility_label(title: &str) -> String {
    t!("picker.block_accessibility_label", title = title).into_owned()
}
