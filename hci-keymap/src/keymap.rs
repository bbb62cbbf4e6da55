//! Keymaps and code resolution.

use crate::error::{KeymapError, TableKind};
use crate::table::RemapTable;

/// A named keyboard layout.
///
/// The name is the locale tag users select the layout by, such as "fr". The
/// `basic` table applies to ordinary keystrokes and `altgr` to those typed
/// with AltGr held. Codes that neither table mentions are left alone.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Keymap {
    pub name: &'static str,
    pub basic: RemapTable,
    pub altgr: RemapTable,
}

impl Keymap {
    pub const fn new(name: &'static str, basic: RemapTable, altgr: RemapTable) -> Self {
        Keymap { name, basic, altgr }
    }

    /// The table used for the given AltGr state.
    #[inline]
    pub fn table(&self, altgr: bool) -> &RemapTable {
        if altgr {
            &self.altgr
        } else {
            &self.basic
        }
    }

    /// Translate `code` through this keymap.
    ///
    /// Codes with no entry in the selected table come back unchanged.
    #[inline]
    pub fn resolve(&self, code: u8, altgr: bool) -> u8 {
        self.table(altgr).lookup(code).unwrap_or(code)
    }

    /// Both tables, tagged with which one they are.
    pub fn tables(&self) -> [(TableKind, &RemapTable); 2] {
        [(TableKind::Basic, &self.basic), (TableKind::AltGr, &self.altgr)]
    }

    /// Check the name and both tables.
    pub fn validate(&self) -> Result<(), KeymapError> {
        if self.name.is_empty() {
            return Err(KeymapError::EmptyName);
        }
        for (kind, table) in self.tables() {
            table.validate(self.name, kind)?;
        }
        Ok(())
    }
}

/// Translate `code` through `keymap`.
///
/// With no keymap, every code maps to itself. This never fails, allocates,
/// or blocks, so it is safe to call from a keyboard interrupt handler.
#[inline]
pub fn resolve(code: u8, altgr: bool, keymap: Option<&Keymap>) -> u8 {
    match keymap {
        Some(keymap) => keymap.resolve(code, altgr),
        None => code,
    }
}
