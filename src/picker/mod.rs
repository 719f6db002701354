//! Block picker bottom sheet (feature = "egui").
//!
//! The inserter surface of a block editor: a modal sheet anchored to the
//! bottom of the screen that lays the registered block types out in a
//! responsive grid of tappable tiles. It supports:
//!
//! - **Responsive columns**: the column count derives from the sheet width
//!   and the fixed tile footprint, recomputed every frame
//! - **Grid re-mount on column change**: the grid's identity includes the
//!   column count, so resizes re-mount rather than re-flow
//! - **Icon shapes**: glyph, inline vector, and factory icons, tinted with
//!   the style's fill color
//! - **Accessibility**: every tile reports a button role and a localized
//!   "<title> block" label
//! - **Dismissal**: backdrop tap and Escape are forwarded to the caller

#![cfg(feature = "egui")]

pub mod style;
pub mod ui;

pub use style::PickerStyle;
pub use ui::{BlockPicker, PickerResponse, grid_identity};
