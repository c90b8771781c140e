//! Query Normalization
//!
//! Analysts type binary patterns with C-style escapes (`\n`, `\012`,
//! `\x0a`). The search daemon only understands the `\xHH` form, so every
//! query is rewritten into that canonical spelling before it leaves the
//! web tier.
//!
//! ## Rules
//!
//! | Input | Output |
//! |-------|--------|
//! | `\xHH` | `\xhh` (hex digits lowercased) |
//! | `\N`, `\NN`, `\NNN` (octal) | `\xHH` of the low byte |
//! | `\a \b \t \n \v \f \r \\` | `\x07 \x08 \x09 \x0a \x0b \x0c \x0d \x5c` |
//! | anything else | unchanged |
//!
//! The input is scanned once, left to right. A backslash is consumed
//! together with its escape, so the `n` of `\\n` is never seen as part of
//! `\n`, and octal digits are tried before the named escapes.

use serde::{Deserialize, Serialize};
use std::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Value Object: Canonical Query
///
/// A query string in the canonical escape form understood by the search
/// daemon. Constructing one always normalizes, and normalizing an already
/// canonical query yields the same bytes.
///
/// ## Example
///
/// ```rust
/// use psw_domain::value_objects::NormalizedQuery;
///
/// let query = NormalizedQuery::new("GET\\r\\n");
/// assert_eq!(query.as_str(), "GET\\x0d\\x0a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalize a raw user query
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// The canonical query text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical query as sent on the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Whether the query is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Rewrite every recognised escape in `raw` into `\xHH`
pub fn normalize(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        match decode_escape(&bytes[i + 1..]) {
            Some((value, consumed)) => {
                push_hex_token(&mut out, value);
                i += 1 + consumed;
            }
            None => {
                out.push(b'\\');
                i += 1;
            }
        }
    }

    // Only ASCII escape sequences were replaced by ASCII tokens, so the
    // multi-byte sequences of `raw` are still intact.
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Decode the escape following a backslash.
///
/// Returns the byte value and the number of bytes consumed after the
/// backslash, or `None` when the backslash starts no known escape.
fn decode_escape(rest: &[u8]) -> Option<(u8, usize)> {
    if let [b'x', hi, lo, ..] = rest {
        if let (Some(hi), Some(lo)) = (hex_value(*hi), hex_value(*lo)) {
            return Some(((hi << 4) | lo, 3));
        }
    }

    let octal_len = rest
        .iter()
        .take(3)
        .take_while(|b| (b'0'..=b'7').contains(*b))
        .count();
    if octal_len > 0 {
        let value = rest[..octal_len]
            .iter()
            .fold(0u32, |acc, b| acc * 8 + u32::from(b - b'0'));
        // `\777` wraps like the daemon's own `char(v)` conversion
        return Some(((value & 0xff) as u8, octal_len));
    }

    let value = match rest.first()? {
        b'a' => 0x07,
        b'b' => 0x08,
        b't' => b'\t',
        b'n' => b'\n',
        b'v' => 0x0b,
        b'f' => 0x0c,
        b'r' => b'\r',
        b'\\' => b'\\',
        _ => return None,
    };
    Some((value, 1))
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn push_hex_token(out: &mut Vec<u8>, value: u8) {
    out.extend_from_slice(b"\\x");
    out.push(HEX_DIGITS[usize::from(value >> 4)]);
    out.push(HEX_DIGITS[usize::from(value & 0x0f)]);
}
