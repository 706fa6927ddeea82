//! Decoding of `\uXXXX` runs left inside tokens scraped from inline JavaScript.

/// Cheap pre-check: does `s` contain at least one `\u` sequence?
pub fn has_unicode_escape(s: &str) -> bool {
    s.contains("\\u")
}

/// Decode `\u` followed by four hex digits into the character it encodes.
///
/// A surrogate pair written as two consecutive escapes is combined into one
/// character. Anything that does not decode (non-hex digits, a truncated run, a
/// lone surrogate) is copied through byte-for-byte, backslash included.
pub fn decode_unicode_escapes(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0usize;
    let mut plain_start = 0usize;

    while i < bytes.len() {
        if let Some(unit) = hex_unit_at(bytes, i) {
            let decoded = match unit {
                0xD800..=0xDBFF => hex_unit_at(bytes, i + 6)
                    .filter(|lo| (0xDC00..=0xDFFF).contains(lo))
                    .and_then(|lo| {
                        let cp = 0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(lo) - 0xDC00);
                        char::from_u32(cp).map(|c| (c, 12))
                    }),
                _ => char::from_u32(u32::from(unit)).map(|c| (c, 6)),
            };

            if let Some((ch, consumed)) = decoded {
                out.push_str(&s[plain_start..i]);
                out.push(ch);
                i += consumed;
                plain_start = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&s[plain_start..]);
    out
}

/// Decode only when the pre-check says there is something to do.
pub fn decode_if_escaped(s: String) -> String {
    if has_unicode_escape(&s) {
        decode_unicode_escapes(&s)
    } else {
        s
    }
}

fn hex_unit_at(bytes: &[u8], i: usize) -> Option<u16> {
    let run = bytes.get(i..i + 6)?;
    if run[0] != b'\\' || run[1] != b'u' {
        return None;
    }
    let digits = &run[2..];
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    // all four bytes are ASCII hex digits, so this is valid UTF-8
    let text = std::str::from_utf8(digits).ok()?;
    u16::from_str_radix(text, 16).ok()
}
