//! Console keystroke remapping
//!
//! The keyboard driver hands the console a character as it would appear on a
//! US layout, along with a few flags describing the modifier state. The
//! console owns the active keymap and turns that into the character the user
//! meant.
//!
//! Letters need some care. The driver may already have applied CapsLock
//! before the layout was taken into account, which is wrong if the layout
//! moves a letter onto a non-letter key or the other way round. Such
//! keystrokes carry [`KeyFlags::CAPSLOCK_UNDO`]: the case change is undone,
//! the key is remapped, and CapsLock is applied again to the result. Ctrl is
//! applied after remapping for the same reason, so that Ctrl with the key
//! labelled 'A' on a French keyboard gives Ctrl-A.

use bitflags::bitflags;

use crate::error::KeymapError;
use crate::keymap::Keymap;
use crate::layouts;
use crate::log::{info, trace, warn};
use crate::registry::Registry;

/// Flipping this bit changes the case of an ASCII letter.
const CASE_TOGGLE: u8 = 0x20;

/// Remapped output is always plain ASCII.
const ASCII_MASK: u8 = 0x7f;

/// Ctrl turns a letter into its control code.
const CTRL_MASK: u8 = 0x1f;

bitflags! {
    /// Modifier state accompanying a keystroke.
    ///
    /// These sit above the character in the raw 16-bit form of a keystroke.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
    pub struct KeyFlags: u16 {
        /// Ctrl is held.
        const CTRL = 0x0100;
        /// CapsLock is on.
        const CAPSLOCK = 0x0200;
        /// The character already had CapsLock applied to it.
        const CAPSLOCK_UNDO = 0x0400;
        /// AltGr is held.
        const ALTGR = 0x0800;

        /// CapsLock is on and was already applied.
        const CAPSLOCK_REDO = Self::CAPSLOCK.bits() | Self::CAPSLOCK_UNDO.bits();
    }
}

/// A character from the keyboard driver, with its modifier state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Keystroke {
    pub code: u8,
    pub flags: KeyFlags,
}

impl Keystroke {
    pub fn new(code: u8, flags: KeyFlags) -> Self {
        Keystroke { code, flags }
    }

    /// A keystroke with no modifiers.
    pub fn plain(code: u8) -> Self {
        Keystroke::new(code, KeyFlags::empty())
    }

    /// Decode the raw form: character in the low byte, flags above it.
    /// Unknown flag bits are dropped.
    pub fn from_raw(raw: u16) -> Self {
        Keystroke {
            code: (raw & 0xff) as u8,
            flags: KeyFlags::from_bits_truncate(raw & !0xff),
        }
    }

    pub fn into_raw(self) -> u16 {
        self.flags.bits() | u16::from(self.code)
    }
}

impl From<u16> for Keystroke {
    fn from(raw: u16) -> Self {
        Keystroke::from_raw(raw)
    }
}

/// The keyboard side of a console.
#[derive(Clone, Debug)]
pub struct Console {
    active: Keymap,
}

impl Default for Console {
    fn default() -> Self {
        Console::new()
    }
}

impl Console {
    /// A console using the default keymap.
    pub fn new() -> Self {
        Console {
            active: layouts::DEFAULT,
        }
    }

    pub fn with_keymap(keymap: Keymap) -> Self {
        Console { active: keymap }
    }

    /// The keymap keystrokes are currently remapped through.
    pub fn active(&self) -> &Keymap {
        &self.active
    }

    /// Change the active keymap. `None` goes back to the default.
    pub fn set(&mut self, keymap: Option<Keymap>) {
        self.active = keymap.unwrap_or(layouts::DEFAULT);
        info!("console keymap is now {}", self.active.name);
    }

    /// Activate the registered keymap called `name`.
    ///
    /// If there is no such keymap, the active one stays as it was.
    pub fn select(&mut self, registry: &Registry, name: &str) -> Result<(), KeymapError> {
        let keymap = *registry.find_keymap(name)?;
        self.set(Some(keymap));
        Ok(())
    }

    /// Activate the registered keymap called `name`, or the default keymap if
    /// there is none by that name.
    pub fn select_or_default(&mut self, registry: &Registry, name: &str) {
        match registry.find_keymap(name) {
            Ok(keymap) => self.set(Some(*keymap)),
            Err(err) => {
                warn!("keymap {}: {}, using {}", name, err, layouts::DEFAULT.name);
                self.set(None);
            }
        }
    }

    /// Remap a keystroke through the active keymap.
    pub fn remap(&self, key: Keystroke) -> u8 {
        let mut mapped = key.code;

        if key.flags.contains(KeyFlags::CAPSLOCK_UNDO) && mapped.is_ascii_alphabetic() {
            mapped ^= CASE_TOGGLE;
        }

        mapped = self.active.resolve(mapped, key.flags.contains(KeyFlags::ALTGR));

        if mapped.is_ascii_alphabetic() {
            if key.flags.contains(KeyFlags::CTRL) {
                mapped &= CTRL_MASK;
            } else if key.flags.contains(KeyFlags::CAPSLOCK) {
                mapped ^= CASE_TOGGLE;
            }
        }

        // Drops the pseudo key bit along with anything else outside ASCII.
        mapped &= ASCII_MASK;

        trace!("{} mapped {:#x} => {:#x}", self.active.name, key.into_raw(), mapped);
        mapped
    }

    pub fn remap_raw(&self, raw: u16) -> u8 {
        self.remap(Keystroke::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testlog;

    fn french() -> Console {
        Console::with_keymap(layouts::FR)
    }

    #[test]
    fn plain_keys() {
        testlog::setup();
        let con = french();
        assert_eq!(con.remap(Keystroke::plain(b'q')), b'a');
        assert_eq!(con.remap(Keystroke::plain(b'Q')), b'A');
        assert_eq!(con.remap(Keystroke::plain(b'1')), b'&');
        assert_eq!(con.remap(Keystroke::plain(b'e')), b'e');
    }

    #[test]
    fn altgr() {
        let con = french();
        assert_eq!(con.remap(Keystroke::new(b'7', KeyFlags::ALTGR)), b'`');
        assert_eq!(con.remap(Keystroke::new(b'0', KeyFlags::ALTGR)), b'@');
        // AltGr never consults the basic table.
        assert_eq!(con.remap(Keystroke::new(b'q', KeyFlags::ALTGR)), b'q');
    }

    #[test]
    fn ctrl_after_remap() {
        let con = french();
        assert_eq!(con.remap(Keystroke::new(b'q', KeyFlags::CTRL)), 0x01);
        assert_eq!(con.remap(Keystroke::new(b'w', KeyFlags::CTRL)), 0x1a);
        // Already a control code from the driver.
        assert_eq!(con.remap(Keystroke::new(0x11, KeyFlags::CTRL)), 0x01);
        // Not a letter once remapped, so Ctrl has nothing to act on.
        assert_eq!(con.remap(Keystroke::new(b'1', KeyFlags::CTRL)), b'&');
    }

    #[test]
    fn capslock() {
        let con = french();
        assert_eq!(con.remap(Keystroke::new(b'q', KeyFlags::CAPSLOCK)), b'A');
        // Driver already made it upper case: undo, remap, redo.
        assert_eq!(con.remap(Keystroke::new(b'Q', KeyFlags::CAPSLOCK_REDO)), b'A');
        // ';' becomes 'm' on AZERTY, and CapsLock applies to the result.
        assert_eq!(con.remap(Keystroke::new(b';', KeyFlags::CAPSLOCK)), b'M');
        // 'm' lands on ',' which CapsLock leaves alone.
        assert_eq!(con.remap(Keystroke::new(b'M', KeyFlags::CAPSLOCK_REDO)), b',');
        assert_eq!(con.remap(Keystroke::new(b'1', KeyFlags::CAPSLOCK)), b'&');
    }

    #[test]
    fn pseudo_keys() {
        let us = Console::new();
        assert_eq!(us.remap(Keystroke::plain(0xdc)), b'\\');
        assert_eq!(us.remap(Keystroke::plain(0xfc)), b'|');

        let fr = french();
        assert_eq!(fr.remap(Keystroke::plain(0xdc)), b'<');
        assert_eq!(fr.remap(Keystroke::plain(0xfc)), b'>');
        assert_eq!(fr.remap(Keystroke::new(0xdc, KeyFlags::ALTGR)), b'|');

        let pl = Console::with_keymap(layouts::PL);
        assert_eq!(pl.remap(Keystroke::plain(0xdc)), b'<');
    }

    #[test]
    fn raw_form() {
        let key = Keystroke::from_raw(0x0837);
        assert_eq!(key, Keystroke::new(0x37, KeyFlags::ALTGR));
        assert_eq!(key.into_raw(), 0x0837);
        assert_eq!(Keystroke::from(0xf071).flags, KeyFlags::empty());
        assert_eq!(french().remap_raw(0x0837), b'`');
        assert_eq!(french().remap_raw(0x0171), 0x01);
    }

    #[test]
    fn selecting() {
        testlog::setup();
        let registry = Registry::builtin();
        let mut con = Console::default();
        assert_eq!(con.active().name, "us");

        con.select(&registry, "fr").unwrap();
        assert_eq!(con.active().name, "fr");

        assert_eq!(con.select(&registry, "xx"), Err(KeymapError::NotFound));
        assert_eq!(con.active().name, "fr");

        con.select_or_default(&registry, "pl");
        assert_eq!(con.active().name, "pl");
        con.select_or_default(&registry, "xx");
        assert_eq!(con.active().name, "us");

        con.set(Some(layouts::FR));
        con.set(None);
        assert_eq!(con.active(), &layouts::US);
    }
}
