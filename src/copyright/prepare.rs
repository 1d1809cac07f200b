//! Text preparation for the tokenizer.
//!
//! Holds the byte-level character classes used to split input and the
//! normalization applied before splitting. Normalization never changes the
//! length of the input, so token offsets stay valid for the caller's buffer.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::bytes::Regex;

/// Regex for the troff/man escape `\(co`, which renders as a copyright sign.
static ESCAPED_COPYRIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\\(co").unwrap());

/// Replacement for `\(co`. The trailing space pads it to the same length.
const COPYRIGHT_PAREN_C: &[u8] = b"(c) ";

/// Bytes that end a word and are emitted as single-byte tokens.
const SYMBOL_BYTES: &[u8] = b"~!`@#$%^&*()[]_+-=|}{:;'\"/\\.?><,";

/// Rewrite escapes so the tokenizer sees a plain `(c)`.
pub fn normalize(input: &[u8]) -> Cow<'_, [u8]> {
    ESCAPED_COPYRIGHT_RE.replace_all(input, COPYRIGHT_PAREN_C)
}

/// Whitespace bytes: space, newline, carriage return, tab.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t')
}

/// ASCII punctuation bytes that split words.
pub fn is_symbol(b: u8) -> bool {
    SYMBOL_BYTES.contains(&b)
}
