//! Block picker bottom sheet for block-based content editors.
//!
//! This crate provides the inserter surface of a block editor: a registry
//! of content-block descriptors, a catalog of core blocks, and an egui
//! bottom sheet that lays the registered types out in a responsive grid
//! and reports the user's selection to the host.
//!
//! The binary `blocksheet` runs a small demo editor shell.

pub mod l10n;
pub mod layout;

// GUI functionality lives behind the `egui` feature flag (on by default).
// Disabling it leaves only the feature-independent layout and l10n helpers.
pub mod catalog;
pub mod icon;
pub mod picker;
pub mod registry;

rust_i18n::i18n!("locales", fallback = "en");
