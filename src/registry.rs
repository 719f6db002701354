//! Block type registry.
//!
//! This module provides the registry of content-block descriptors the
//! picker draws from: registration and removal, the reserved
//! "unregistered type" sentinel, and a memoized view of the types that are
//! actually offered to the user. A process-global registry handle is
//! available for applications; tests use isolated [`BlockTypeRegistry`]
//! instances.

#![cfg(feature = "egui")]

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use serde::Serialize;
use thiserror::Error;

use crate::icon::BlockIcon;

/// Errors raised by descriptor registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Block names are `namespace/block`: lowercase ASCII alphanumerics and
    /// dashes, each segment starting with a letter.
    #[error("invalid block name {0:?} (expected \"namespace/block\")")]
    InvalidName(String),
    /// A descriptor with this name is already registered.
    #[error("block type {0:?} is already registered")]
    AlreadyRegistered(String),
}

/// A registered kind of content block.
///
/// Descriptors are supplied by the host application and immutable once
/// registered; the picker only reads them.
#[derive(Clone, Debug, Serialize)]
pub struct BlockTypeDescriptor {
    /// Unique id in `namespace/block` form, e.g. `"core/paragraph"`.
    pub name: String,
    /// Display label, already localized by the caller.
    pub title: String,
    /// Picker grouping, e.g. `"text"` or `"media"`.
    pub category: String,
    /// Short description of what the block does.
    pub description: String,
    /// Declared icon shape; `None` renders no icon.
    #[serde(skip)]
    pub icon: Option<BlockIcon>,
}

/// Order-preserving registry of block type descriptors.
///
/// Registration order is the order the picker renders tiles in, so the
/// backing map is an [`IndexMap`]. The filtered "available" view is
/// memoized keyed by a version counter that every mutation bumps, which
/// keeps the view correct even if types are (un)registered while a picker
/// is open.
#[derive(Debug, Default)]
pub struct BlockTypeRegistry {
    entries: IndexMap<String, BlockTypeDescriptor>,
    unregistered_handler: Option<String>,
    version: u64,
    available: RwLock<Option<(u64, Arc<[BlockTypeDescriptor]>)>>,
}

impl BlockTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn valid_name(name: &str) -> bool {
        fn segment_ok(s: &str) -> bool {
            s.starts_with(|c: char| c.is_ascii_lowercase())
                && s.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }
        match name.split_once('/') {
            Some((namespace, block)) => {
                !block.contains('/') && segment_ok(namespace) && segment_ok(block)
            }
            None => false,
        }
    }

    /// Register a descriptor. Fails on a malformed or duplicate name.
    pub fn register(&mut self, descriptor: BlockTypeDescriptor) -> Result<(), RegistryError> {
        if !Self::valid_name(&descriptor.name) {
            return Err(RegistryError::InvalidName(descriptor.name.clone()));
        }
        if self.entries.contains_key(&descriptor.name) {
            return Err(RegistryError::AlreadyRegistered(descriptor.name.clone()));
        }
        self.entries.insert(descriptor.name.clone(), descriptor);
        self.version += 1;
        Ok(())
    }

    /// Remove a descriptor, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<BlockTypeDescriptor> {
        let removed = self.entries.shift_remove(name);
        if removed.is_some() {
            self.version += 1;
        }
        removed
    }

    /// Look up a descriptor by its unique name.
    pub fn get(&self, name: &str) -> Option<&BlockTypeDescriptor> {
        self.entries.get(name)
    }

    /// All registered descriptors in registration order, sentinel included.
    pub fn block_types(&self) -> Vec<BlockTypeDescriptor> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Monotonic counter bumped by every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Declare which registered name stands in for unknown content.
    /// That descriptor is excluded from [`available_block_types`].
    ///
    /// [`available_block_types`]: Self::available_block_types
    pub fn set_unregistered_type_handler(&mut self, name: impl Into<String>) {
        self.unregistered_handler = Some(name.into());
        self.version += 1;
    }

    /// Name of the reserved unregistered-type descriptor, if declared.
    pub fn unregistered_type_handler(&self) -> Option<&str> {
        self.unregistered_handler.as_deref()
    }

    /// The descriptors offered to the user: everything registered, minus
    /// the unregistered-type sentinel, in registration order.
    ///
    /// The snapshot is memoized keyed by [`version`](Self::version), so
    /// repeated per-frame calls are cheap and any registry change is
    /// reflected on the next call.
    pub fn available_block_types(&self) -> Arc<[BlockTypeDescriptor]> {
        if let Ok(cache) = self.available.read() {
            if let Some((cached_version, list)) = cache.as_ref() {
                if *cached_version == self.version {
                    return Arc::clone(list);
                }
            }
        }
        let list: Arc<[BlockTypeDescriptor]> = self
            .entries
            .values()
            .filter(|d| Some(d.name.as_str()) != self.unregistered_handler.as_deref())
            .cloned()
            .collect();
        if let Ok(mut cache) = self.available.write() {
            *cache = Some((self.version, Arc::clone(&list)));
        }
        list
    }
}

static REGISTRY: OnceCell<RwLock<BlockTypeRegistry>> = OnceCell::new();

/// Get a handle to the process-global block type registry.
///
/// The returned [`RwLock`] guards a [`BlockTypeRegistry`]. Callers may
/// acquire a read lock to render from it or a write lock to (un)register
/// types at runtime.
pub fn get_block_type_registry() -> &'static RwLock<BlockTypeRegistry> {
    REGISTRY.get_or_init(|| RwLock::new(BlockTypeRegistry::new()))
}

/// Register a descriptor in the global registry.
pub fn register_block_type(descriptor: BlockTypeDescriptor) -> Result<(), RegistryError> {
    let mut registry = get_block_type_registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.register(descriptor)
}

/// Remove a descriptor from the global registry.
pub fn unregister_block_type(name: &str) -> Option<BlockTypeDescriptor> {
    let mut registry = get_block_type_registry()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.unregister(name)
}
