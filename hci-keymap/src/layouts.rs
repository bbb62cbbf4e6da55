//! Built-in keyboard layouts.
//!
//! These tables come from a generator working off the platform keyboard
//! definitions, and should be regenerated rather than edited by hand.

use crate::keymap::Keymap;

pub use self::fr::FR;
pub use self::pl::PL;
pub use self::us::US;

mod fr;
mod pl;
mod us;

/// The keymap a console starts with, and falls back to.
pub const DEFAULT: Keymap = US;

/// Every built-in keymap.
pub const ALL: &[Keymap] = &[US, FR, PL];
