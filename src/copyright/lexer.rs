//! Tokenizer for copyright detection.
//!
//! Splits a normalized byte buffer into word and symbol tokens while keeping
//! the byte range of every token. Tokens come out untagged; the tagger fills
//! in the part of speech afterwards.
//!
//! Pipeline: raw bytes → normalize → split → untagged tokens

use super::prepare::{is_space, is_symbol, normalize};
use super::types::TaggedToken;

/// Split `input` into untagged tokens with byte offsets.
///
/// Whitespace ends the current word and is dropped. A symbol byte ends the
/// current word and becomes a one-byte token of its own. Every other byte,
/// including non-ASCII bytes, extends the current word.
pub fn tokenize(input: &[u8]) -> Vec<TaggedToken> {
    let prepared = normalize(input);
    let bytes = prepared.as_ref();

    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (pos, &b) in bytes.iter().enumerate() {
        if is_space(b) {
            flush_word(bytes, &mut word_start, pos, &mut tokens);
        } else if is_symbol(b) {
            flush_word(bytes, &mut word_start, pos, &mut tokens);
            tokens.push(make_token(bytes, pos, pos + 1));
        } else if word_start.is_none() {
            word_start = Some(pos);
        }
    }
    flush_word(bytes, &mut word_start, bytes.len(), &mut tokens);

    tokens
}

fn flush_word(
    bytes: &[u8],
    word_start: &mut Option<usize>,
    end: usize,
    tokens: &mut Vec<TaggedToken>,
) {
    if let Some(start) = word_start.take() {
        tokens.push(make_token(bytes, start, end));
    }
}

fn make_token(bytes: &[u8], start: usize, end: usize) -> TaggedToken {
    TaggedToken::new(String::from_utf8_lossy(&bytes[start..end]), start, end)
}
