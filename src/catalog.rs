//! Core content-block catalog.
//!
//! The standard blocks every editor ships with, organized by category.
//! Each entry specifies the unique block name, a display title, a short
//! description, and an icon. [`install_core_blocks`] registers the whole
//! set, including the reserved sentinel for unknown content.

#![cfg(feature = "egui")]

use indexmap::IndexMap;

use crate::icon::BlockIcon;
use crate::registry::{BlockTypeDescriptor, BlockTypeRegistry, RegistryError};

/// Name of the reserved descriptor standing in for unknown content.
/// Registered by [`install_core_blocks`] and never shown in the picker.
pub const UNREGISTERED_TYPE: &str = "core/missing";

const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

/// Helper to create a catalog entry concisely.
fn entry(
    name: &str,
    title: &str,
    category: &str,
    description: &str,
    icon: BlockIcon,
) -> BlockTypeDescriptor {
    BlockTypeDescriptor {
        name: name.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        icon: Some(icon),
    }
}

/// Register the standard content blocks plus the unregistered-type
/// sentinel into `registry`.
pub fn install_core_blocks(registry: &mut BlockTypeRegistry) -> Result<(), RegistryError> {
    // ── Text ─────────────────────────────────────────────────────────────
    let cat = "text";
    registry.register(entry("core/paragraph", "Paragraph", cat, "Start with the basic building block of all narrative", BlockIcon::glyph("editor-paragraph")))?;
    registry.register(entry("core/heading", "Heading", cat, "Introduce new sections and organize content", BlockIcon::glyph("heading")))?;
    registry.register(entry("core/list", "List", cat, "Numbered or bulleted list", BlockIcon::glyph("editor-ul")))?;
    registry.register(entry("core/quote", "Quote", cat, "Give quoted text visual emphasis", BlockIcon::glyph("editor-quote")))?;
    registry.register(entry("core/pullquote", "Pullquote", cat, "Highlight a quote from the surrounding content", BlockIcon::glyph("editor-quote")))?;
    registry.register(entry("core/preformatted", "Preformatted", cat, "Text that respects your spacing and tabs", BlockIcon::glyph("text")))?;
    registry.register(entry("core/code", "Code", cat, "Display code snippets with spacing preserved", BlockIcon::glyph("editor-code")))?;
    registry.register(entry("core/table", "Table", cat, "Insert a table for sharing data", BlockIcon::glyph("editor-table")))?;

    // ── Media ────────────────────────────────────────────────────────────
    let cat = "media";
    registry.register(entry("core/image", "Image", cat, "Insert an image to make a visual statement", BlockIcon::glyph("format-image")))?;
    registry.register(entry("core/gallery", "Gallery", cat, "Display multiple images in a gallery", BlockIcon::glyph("format-gallery")))?;
    registry.register(entry("core/audio", "Audio", cat, "Embed an audio player", BlockIcon::glyph("format-audio")))?;
    registry.register(entry("core/video", "Video", cat, "Embed a video player", BlockIcon::glyph("format-video")))?;
    registry.register(entry("core/file", "File", cat, "Add a link to a downloadable file", BlockIcon::glyph("media-document")))?;
    registry.register(entry("core/cover", "Cover", cat, "Image or video with a text overlay", BlockIcon::glyph("cover-image")))?;

    // ── Design ───────────────────────────────────────────────────────────
    let cat = "design";
    registry.register(entry("core/button", "Button", cat, "Prompt visitors to take action", BlockIcon::glyph("button")))?;
    registry.register(entry(
        "core/separator",
        "Separator",
        cat,
        "Create a break between ideas or sections",
        BlockIcon::vector("0 0 24 24", SVG_XMLNS, r#"<path d="M4 11h16v2H4z"/>"#),
    ))?;
    registry.register(entry("core/spacer", "Spacer", cat, "Add white space between blocks", BlockIcon::glyph("arrows-vertical")))?;
    registry.register(entry(
        "core/more",
        "More",
        cat,
        "Content before this block is shown in the excerpt",
        BlockIcon::vector("0 0 24 24", SVG_XMLNS, r#"<path d="M2 9v2h20V9H2zm0 6h8v-2H2v2zm12 0h8v-2h-8v2z"/>"#),
    ))?;
    registry.register(entry("core/nextpage", "Page Break", cat, "Separate your content into multiple pages", BlockIcon::glyph("admin-page")))?;

    // ── Embeds ───────────────────────────────────────────────────────────
    let cat = "embed";
    registry.register(entry("core/embed", "Embed", cat, "Embed content from an external source", BlockIcon::glyph("embed-generic")))?;
    registry.register(entry("core/html", "Custom HTML", cat, "Add custom HTML markup", BlockIcon::glyph("html")))?;
    registry.register(entry("core/shortcode", "Shortcode", cat, "Insert additional custom elements", BlockIcon::glyph("shortcode")))?;

    // Reserved placeholder for content no registered block can handle.
    registry.register(entry(UNREGISTERED_TYPE, "Unsupported", "text", "A block that is not available on this editor", BlockIcon::glyph("warning")))?;
    registry.set_unregistered_type_handler(UNREGISTERED_TYPE);

    Ok(())
}

/// The offered descriptors grouped by category, in registration order.
pub fn blocks_by_category(
    registry: &BlockTypeRegistry,
) -> IndexMap<String, Vec<BlockTypeDescriptor>> {
    let mut map: IndexMap<String, Vec<BlockTypeDescriptor>> = IndexMap::new();
    for descriptor in registry.available_block_types().iter() {
        map.entry(descriptor.category.clone())
            .or_default()
            .push(descriptor.clone());
    }
    map
}
