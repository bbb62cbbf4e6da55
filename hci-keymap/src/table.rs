//! Remap tables
//!
//! A remap table is a short list of `from => to` pairs. Tables are tiny (the
//! largest built-in one has under fifty entries) and are consulted once per
//! keystroke, so a linear scan is all the lookup there is.
//!
//! Generated tables used to end in a `(0, 0)` entry. Tables here carry their
//! length instead; [`RemapTable::until_sentinel`] accepts the old form. Code 0
//! is still never a valid source, which [`RemapTable::validate`] checks.

use core::fmt;
use core::slice;

use crate::error::{KeymapError, TableKind};

/// The bit marking a pseudo key, a key with no ASCII meaning of its own.
pub const PSEUDO: u8 = 0x80;

/// A single remapping: the code `from` is replaced with `to`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemapEntry {
    pub from: u8,
    pub to: u8,
}

impl RemapEntry {
    pub const fn new(from: u8, to: u8) -> Self {
        RemapEntry { from, to }
    }

    /// The `(0, 0)` end of table marker.
    pub const fn is_sentinel(&self) -> bool {
        self.from == 0 && self.to == 0
    }
}

impl fmt::Display for RemapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", CodeName(self.from), CodeName(self.to))
    }
}

/// An ordered table of remappings. The first entry matching a code wins.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemapTable(&'static [RemapEntry]);

impl RemapTable {
    pub const fn new(entries: &'static [RemapEntry]) -> Self {
        RemapTable(entries)
    }

    /// A table that remaps nothing.
    pub const fn empty() -> Self {
        RemapTable(&[])
    }

    /// Build a table from sentinel terminated data.
    ///
    /// Everything from the first `(0, 0)` entry on is dropped. Data without a
    /// sentinel is taken whole.
    pub const fn until_sentinel(entries: &'static [RemapEntry]) -> Self {
        let mut len = 0;
        while len < entries.len() {
            if entries[len].is_sentinel() {
                break;
            }
            len += 1;
        }
        RemapTable(entries.split_at(len).0)
    }

    /// Find the replacement for `code`, if this table has one.
    #[inline]
    pub fn lookup(&self, code: u8) -> Option<u8> {
        self.0.iter().find(|entry| entry.from == code).map(|entry| entry.to)
    }

    pub fn contains(&self, code: u8) -> bool {
        self.lookup(code).is_some()
    }

    pub fn entries(&self) -> &'static [RemapEntry] {
        self.0
    }

    pub fn iter(&self) -> slice::Iter<'static, RemapEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that no entry remaps code 0, and that no code is remapped twice.
    ///
    /// `keymap` and `table` only serve to describe the failure.
    pub fn validate(&self, keymap: &'static str, table: TableKind) -> Result<(), KeymapError> {
        for (pos, entry) in self.0.iter().enumerate() {
            if entry.from == 0 {
                return Err(KeymapError::ZeroSource { keymap, table });
            }
            if self.0[..pos].iter().any(|prior| prior.from == entry.from) {
                return Err(KeymapError::DuplicateSource {
                    keymap,
                    table,
                    code: entry.from,
                });
            }
        }
        Ok(())
    }
}

impl IntoIterator for RemapTable {
    type Item = &'static RemapEntry;
    type IntoIter = slice::Iter<'static, RemapEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Human readable name for a code, in the style tables are annotated with.
///
/// Control codes for letters show as `Ctrl-A`, printable characters are
/// quoted, and pseudo keys show the character they stand in for.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct CodeName(pub u8);

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.0;
        match code {
            0x01..=0x1a => write!(f, "Ctrl-{}", char::from(b'@' + code)),
            0x20..=0x7e => write_quoted(f, code),
            _ if code & PSEUDO != 0 && (0x20..=0x7e).contains(&(code & !PSEUDO)) => {
                f.write_str("Pseudo-")?;
                write_quoted(f, code & !PSEUDO)
            }
            _ => write!(f, "{:#04x}", code),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, code: u8) -> fmt::Result {
    match code {
        b'\\' => f.write_str("'\\\\'"),
        b'\'' => f.write_str("'\\''"),
        _ => write!(f, "'{}'", char::from(code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    static SAMPLE: [RemapEntry; 4] = [
        RemapEntry::new(0x61, 0x71),
        RemapEntry::new(0x71, 0x61),
        RemapEntry::new(0, 0),
        RemapEntry::new(0x7a, 0x77),
    ];

    #[test]
    fn lookup_first_match() {
        static DUP: [RemapEntry; 2] = [RemapEntry::new(0x41, 0x51), RemapEntry::new(0x41, 0x52)];
        let table = RemapTable::new(&DUP);
        assert_eq!(table.lookup(0x41), Some(0x51));
        assert_eq!(table.lookup(0x42), None);
    }

    #[test]
    fn sentinel_truncates() {
        let table = RemapTable::until_sentinel(&SAMPLE);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(0x7a), None);
        assert_eq!(table.lookup(0x61), Some(0x71));

        static NONE: [RemapEntry; 1] = [RemapEntry::new(0x31, 0x26)];
        assert_eq!(RemapTable::until_sentinel(&NONE).len(), 1);
        assert!(RemapTable::until_sentinel(&SAMPLE[2..]).is_empty());
    }

    #[test]
    fn validate_rejects_bad_tables() {
        assert_eq!(RemapTable::until_sentinel(&SAMPLE).validate("t", TableKind::Basic), Ok(()));
        assert_eq!(
            RemapTable::new(&SAMPLE).validate("t", TableKind::Basic),
            Err(KeymapError::ZeroSource {
                keymap: "t",
                table: TableKind::Basic
            })
        );

        static DUP: [RemapEntry; 3] = [
            RemapEntry::new(0x41, 0x51),
            RemapEntry::new(0x42, 0x52),
            RemapEntry::new(0x41, 0x53),
        ];
        assert_eq!(
            RemapTable::new(&DUP).validate("t", TableKind::AltGr),
            Err(KeymapError::DuplicateSource {
                keymap: "t",
                table: TableKind::AltGr,
                code: 0x41
            })
        );
    }

    #[test]
    fn code_names() {
        assert_eq!(CodeName(0x01).to_string(), "Ctrl-A");
        assert_eq!(CodeName(0x1a).to_string(), "Ctrl-Z");
        assert_eq!(CodeName(0x1c).to_string(), "0x1c");
        assert_eq!(CodeName(b'q').to_string(), "'q'");
        assert_eq!(CodeName(b'\\').to_string(), "'\\\\'");
        assert_eq!(CodeName(b'\'').to_string(), "'\\''");
        assert_eq!(CodeName(0xdc).to_string(), "Pseudo-'\\\\'");
        assert_eq!(CodeName(0xfc).to_string(), "Pseudo-'|'");
        assert_eq!(CodeName(0x99).to_string(), "0x99");
        assert_eq!(RemapEntry::new(0x71, 0x61).to_string(), "'q' => 'a'");
    }
}
