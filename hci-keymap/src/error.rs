//! Keymap errors.

use core::fmt;

/// Which of a keymap's two tables.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableKind {
    Basic,
    AltGr,
}

impl TableKind {
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Basic => "basic",
            TableKind::AltGr => "altgr",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from looking up or registering keymaps.
///
/// Resolving a code never fails, so everything here comes from the registry.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// No keymap is registered under the requested name.
    NotFound,
    /// A keymap with this name is already registered.
    DuplicateName(&'static str),
    /// Keymaps must have a name to be found by.
    EmptyName,
    /// A table entry remaps code 0, which is reserved for the end of table.
    ZeroSource {
        keymap: &'static str,
        table: TableKind,
    },
    /// A table remaps the same code more than once.
    DuplicateSource {
        keymap: &'static str,
        table: TableKind,
        code: u8,
    },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::NotFound => write!(f, "keymap not found"),
            KeymapError::DuplicateName(name) => write!(f, "keymap {:?} already registered", name),
            KeymapError::EmptyName => write!(f, "keymap has an empty name"),
            KeymapError::ZeroSource { keymap, table } => {
                write!(f, "keymap {:?}: {} table remaps code 0", keymap, table)
            }
            KeymapError::DuplicateSource { keymap, table, code } => write!(
                f,
                "keymap {:?}: {} table remaps {:#04x} more than once",
                keymap, table, code
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeymapError {}
