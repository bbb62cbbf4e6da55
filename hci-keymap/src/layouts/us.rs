//! US.

use crate::keymap::Keymap;
use crate::table::RemapTable;

/// Keystrokes already arrive as US characters, so there is nothing to remap.
pub const US: Keymap = Keymap::new("us", RemapTable::empty(), RemapTable::empty());
