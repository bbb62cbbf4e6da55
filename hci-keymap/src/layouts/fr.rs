//! French AZERTY.

use crate::keymap::Keymap;
use crate::table::{RemapEntry, RemapTable};

const BASIC: &[RemapEntry] = &[
    RemapEntry::new(0x01, 0x11), // Ctrl-A => Ctrl-Q
    RemapEntry::new(0x11, 0x01), // Ctrl-Q => Ctrl-A
    RemapEntry::new(0x17, 0x1a), // Ctrl-W => Ctrl-Z
    RemapEntry::new(0x1a, 0x17), // Ctrl-Z => Ctrl-W
    RemapEntry::new(0x1c, 0x2a), // 0x1c => '*'
    RemapEntry::new(0x1d, 0x24), // 0x1d => '$'
    RemapEntry::new(0x1e, 0x1c), // 0x1e => 0x1c
    RemapEntry::new(0x1f, 0x1d), // 0x1f => 0x1d
    RemapEntry::new(0x21, 0x31), // '!' => '1'
    RemapEntry::new(0x22, 0x25), // '"' => '%'
    RemapEntry::new(0x23, 0x33), // '#' => '3'
    RemapEntry::new(0x24, 0x34), // '$' => '4'
    RemapEntry::new(0x25, 0x35), // '%' => '5'
    RemapEntry::new(0x26, 0x37), // '&' => '7'
    RemapEntry::new(0x28, 0x39), // '(' => '9'
    RemapEntry::new(0x29, 0x30), // ')' => '0'
    RemapEntry::new(0x2a, 0x38), // '*' => '8'
    RemapEntry::new(0x2c, 0x3b), // ',' => ';'
    RemapEntry::new(0x2d, 0x29), // '-' => ')'
    RemapEntry::new(0x2e, 0x3a), // '.' => ':'
    RemapEntry::new(0x2f, 0x21), // '/' => '!'
    RemapEntry::new(0x31, 0x26), // '1' => '&'
    RemapEntry::new(0x33, 0x22), // '3' => '"'
    RemapEntry::new(0x34, 0x27), // '4' => '\''
    RemapEntry::new(0x35, 0x28), // '5' => '('
    RemapEntry::new(0x36, 0x2d), // '6' => '-'
    RemapEntry::new(0x38, 0x5f), // '8' => '_'
    RemapEntry::new(0x3a, 0x4d), // ':' => 'M'
    RemapEntry::new(0x3b, 0x6d), // ';' => 'm'
    RemapEntry::new(0x3c, 0x2e), // '<' => '.'
    RemapEntry::new(0x3e, 0x2f), // '>' => '/'
    RemapEntry::new(0x40, 0x32), // '@' => '2'
    RemapEntry::new(0x41, 0x51), // 'A' => 'Q'
    RemapEntry::new(0x4d, 0x3f), // 'M' => '?'
    RemapEntry::new(0x51, 0x41), // 'Q' => 'A'
    RemapEntry::new(0x57, 0x5a), // 'W' => 'Z'
    RemapEntry::new(0x5a, 0x57), // 'Z' => 'W'
    RemapEntry::new(0x5b, 0x5e), // '[' => '^'
    RemapEntry::new(0x5c, 0x2a), // '\\' => '*'
    RemapEntry::new(0x5d, 0x24), // ']' => '$'
    RemapEntry::new(0x5e, 0x36), // '^' => '6'
    RemapEntry::new(0x61, 0x71), // 'a' => 'q'
    RemapEntry::new(0x6d, 0x2c), // 'm' => ','
    RemapEntry::new(0x71, 0x61), // 'q' => 'a'
    RemapEntry::new(0x77, 0x7a), // 'w' => 'z'
    RemapEntry::new(0x7a, 0x77), // 'z' => 'w'
    RemapEntry::new(0xdc, 0x3c), // Pseudo-'\\' => '<'
    RemapEntry::new(0xfc, 0x3e), // Pseudo-'|' => '>'
];

const ALTGR: &[RemapEntry] = &[
    RemapEntry::new(0x25, 0x5b), // '%' => '['
    RemapEntry::new(0x26, 0x60), // '&' => '`'
    RemapEntry::new(0x29, 0x40), // ')' => '@'
    RemapEntry::new(0x2a, 0x5c), // '*' => '\\'
    RemapEntry::new(0x2b, 0x7d), // '+' => '}'
    RemapEntry::new(0x2d, 0x5d), // '-' => ']'
    RemapEntry::new(0x30, 0x40), // '0' => '@'
    RemapEntry::new(0x33, 0x23), // '3' => '#'
    RemapEntry::new(0x34, 0x7b), // '4' => '{'
    RemapEntry::new(0x35, 0x5b), // '5' => '['
    RemapEntry::new(0x36, 0x7c), // '6' => '|'
    RemapEntry::new(0x37, 0x60), // '7' => '`'
    RemapEntry::new(0x38, 0x5c), // '8' => '\\'
    RemapEntry::new(0x3d, 0x7d), // '=' => '}'
    RemapEntry::new(0x41, 0x40), // 'A' => '@'
    RemapEntry::new(0x5c, 0x60), // '\\' => '`'
    RemapEntry::new(0x5e, 0x7c), // '^' => '|'
    RemapEntry::new(0x5f, 0x5d), // '_' => ']'
    RemapEntry::new(0x61, 0x40), // 'a' => '@'
    RemapEntry::new(0xdc, 0x7c), // Pseudo-'\\' => '|'
];

pub const FR: Keymap = Keymap::new("fr", RemapTable::new(BASIC), RemapTable::new(ALTGR));
