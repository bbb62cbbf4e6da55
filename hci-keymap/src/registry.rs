//! The keymap registry.
//!
//! Keymaps are all known up front. They are registered through a
//! [`RegistryBuilder`], which checks each one, and the builder is then turned
//! into a [`Registry`]. A registry cannot be changed once built, so lookups
//! need no locking and anything holding a `&Registry` knows registration has
//! finished.

use alloc::collections::BTreeMap;

use crate::error::KeymapError;
use crate::keymap::Keymap;
use crate::layouts;
use crate::log::{debug, warn};

/// Collects keymaps before the registry is put into use.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    keymaps: BTreeMap<&'static str, Keymap>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keymap.
    ///
    /// The keymap is refused if its name is empty or already taken, or if
    /// either table remaps code 0 or remaps a code twice.
    pub fn register(&mut self, keymap: Keymap) -> Result<(), KeymapError> {
        keymap.validate()?;
        if self.keymaps.contains_key(keymap.name) {
            return Err(KeymapError::DuplicateName(keymap.name));
        }
        debug!(
            "registered keymap {} ({} basic, {} altgr)",
            keymap.name,
            keymap.basic.len(),
            keymap.altgr.len()
        );
        self.keymaps.insert(keymap.name, keymap);
        Ok(())
    }

    /// Finish registration.
    pub fn build(self) -> Registry {
        Registry {
            keymaps: self.keymaps,
        }
    }
}

/// The registered keymaps, by name.
#[derive(Debug)]
pub struct Registry {
    keymaps: BTreeMap<&'static str, Keymap>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry holding every built-in layout.
    pub fn builtin() -> Registry {
        let mut builder = RegistryBuilder::new();
        for keymap in layouts::ALL {
            if let Err(err) = builder.register(*keymap) {
                warn!("skipping built-in keymap {}: {}", keymap.name, err);
            }
        }
        builder.build()
    }

    /// Look up a keymap by its exact name.
    pub fn find_keymap(&self, name: &str) -> Result<&Keymap, KeymapError> {
        self.keymaps.get(name).ok_or(KeymapError::NotFound)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keymaps.contains_key(name)
    }

    /// Keymap names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keymaps.keys().copied()
    }

    /// Keymaps, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Keymap> + '_ {
        self.keymaps.values()
    }

    pub fn len(&self) -> usize {
        self.keymaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keymaps.is_empty()
    }
}

/// The process-wide registry of built-in keymaps.
///
/// Built on first use. Every caller, on any thread, sees the same fully
/// built registry.
#[cfg(feature = "std")]
pub fn registry() -> &'static Registry {
    use std::sync::OnceLock;

    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::builtin)
}
