//! Console keymaps
//!
//! Keyboards attached to the boot console deliver characters as if they were
//! typed on a US layout. A keymap describes how to translate those characters
//! into what the user actually meant on their own layout. Each keymap carries
//! two small remapping tables: the basic one, and one consulted while AltGr is
//! held. Anything not in a table passes through unchanged.
//!
//! The pieces:
//!
//! - [`table`]: remap entries and tables.
//! - [`keymap`]: a named pair of tables, and the [`resolve`] lookup.
//! - [`registry`]: the set of known keymaps, looked up by name.
//! - [`layouts`]: the keymaps built into the firmware.
//! - [`console`]: the active keymap of a console, and full keystroke remapping.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// #![deny(missing_docs)]

extern crate alloc;

pub mod console;
pub mod error;
pub mod keymap;
pub mod layouts;
pub mod registry;
pub mod table;

pub use console::{Console, KeyFlags, Keystroke};
pub use error::{KeymapError, TableKind};
pub use keymap::{resolve, Keymap};
pub use registry::{Registry, RegistryBuilder};
pub use table::{CodeName, RemapEntry, RemapTable};

#[cfg(feature = "std")]
pub use registry::registry;

#[cfg(test)]
mod testlog;

#[cfg(not(feature = "defmt"))]
mod log {
    pub use log::{debug, info, trace, warn};
}

#[cfg(feature = "defmt")]
mod log {
    pub use defmt::{debug, info, trace, warn};
}
