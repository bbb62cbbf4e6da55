//! Polish (programmer's).
//!
//! Letters already sit where a US keyboard puts them, so only the extra key on
//! 102-key keyboards needs moving.

use crate::keymap::Keymap;
use crate::table::{RemapEntry, RemapTable};

const BASIC: &[RemapEntry] = &[
    RemapEntry::new(0xdc, 0x3c), // Pseudo-'\\' => '<'
    RemapEntry::new(0xfc, 0x3e), // Pseudo-'|' => '>'
];

pub const PL: Keymap = Keymap::new("pl", RemapTable::new(BASIC), RemapTable::empty());
