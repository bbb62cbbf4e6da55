//! Parsing codes given on the command line.

/// Parse a code given as hex (`0x71`), decimal (`113`), or a character (`q`).
///
/// A lone digit is read as a decimal number; quote it (`'1'`) to mean the
/// character.
pub fn parse_code(text: &str) -> Result<u8, String> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).map_err(|e| format!("bad hex code {:?}: {}", text, e));
    }

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse().map_err(|e| format!("bad code {:?}: {}", text, e));
    }

    let inner = match text.as_bytes() {
        [b'\'', _, b'\''] => &text[1..2],
        _ => text,
    };
    match inner.as_bytes() {
        [ch] if ch.is_ascii() => Ok(*ch),
        _ => Err(format!("{:?} is not a code or a single ASCII character", text)),
    }
}
