//! Core types for copyright notice detection.
//!
//! This module defines:
//! - The POS tag enum ([`PosTag`]) with the 26 corpus tags in fixed order
//! - The [`TaggedToken`] struct linking token text to its tag and byte range
//! - The [`NoticeSpan`] byte range reported for each detected notice

use serde::{Serialize, Serializer};
use strum::{EnumString, IntoStaticStr};

/// Part-of-Speech tag for a token.
///
/// Declaration order is significant: it is the row/column order of the
/// transition matrix and the tie-break order when decoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, IntoStaticStr,
)]
pub enum PosTag {
    #[strum(serialize = "bos")]
    Bos, // beginning of sentence
    #[strum(serialize = "$")]
    Dollar,
    #[strum(serialize = "\"")]
    Quote,
    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = "--")]
    Dash,
    #[strum(serialize = ".")]
    Period, // sentence boundary: ". ? !"
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = "cc")]
    Cc, // coordinating conjunction: "and", "or"
    #[strum(serialize = "cd")]
    Cd, // cardinal number: "2004", "3.1"
    #[strum(serialize = "dt")]
    Dt, // determiner: "the", "all"
    #[strum(serialize = "fw")]
    Fw, // foreign word, also the unknown-word fallback
    #[strum(serialize = "jj")]
    Jj, // adjective
    #[strum(serialize = "ls")]
    Ls, // list item marker
    #[strum(serialize = "nn")]
    Nn, // common noun
    #[strum(serialize = "np")]
    Np, // proper noun
    #[strum(serialize = "pos")]
    Pos, // possessive ending
    #[strum(serialize = "pr")]
    Pr, // pronoun
    #[strum(serialize = "rb")]
    Rb, // adverb
    #[strum(serialize = "sym")]
    Sym, // symbol, including "©"
    #[strum(serialize = "to")]
    To,
    #[strum(serialize = "uh")]
    Uh, // interjection
    #[strum(serialize = "vb")]
    Vb, // verb
    #[strum(serialize = "md")]
    Md, // modal
    #[strum(serialize = "in")]
    In, // preposition: "by", "of", "in"
}

impl PosTag {
    /// Number of tags; the transition matrix is `COUNT x COUNT`.
    pub const COUNT: usize = 26;

    /// Every tag in enumeration order.
    pub const ALL: [PosTag; PosTag::COUNT] = [
        PosTag::Bos,
        PosTag::Dollar,
        PosTag::Quote,
        PosTag::LParen,
        PosTag::RParen,
        PosTag::Comma,
        PosTag::Dash,
        PosTag::Period,
        PosTag::Colon,
        PosTag::Cc,
        PosTag::Cd,
        PosTag::Dt,
        PosTag::Fw,
        PosTag::Jj,
        PosTag::Ls,
        PosTag::Nn,
        PosTag::Np,
        PosTag::Pos,
        PosTag::Pr,
        PosTag::Rb,
        PosTag::Sym,
        PosTag::To,
        PosTag::Uh,
        PosTag::Vb,
        PosTag::Md,
        PosTag::In,
    ];

    /// Position of this tag in [`PosTag::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The corpus label for this tag (e.g. `"np"`, `"--"`).
    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PosTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A token with its POS tag and source location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedToken {
    /// The token text (e.g., "Copyright", "2004", "(").
    pub text: String,
    /// The assigned POS tag; `None` until tagged, or when no tag scored above zero.
    pub tag: Option<PosTag>,
    /// Byte offset of the first byte of this token in the input.
    pub byte_start: usize,
    /// Byte offset one past the last byte of this token.
    pub byte_end: usize,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, byte_start: usize, byte_end: usize) -> Self {
        Self {
            text: text.into(),
            tag: None,
            byte_start,
            byte_end,
        }
    }

    pub fn with_tag(mut self, tag: PosTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn has_tag(&self, tag: PosTag) -> bool {
        self.tag == Some(tag)
    }
}

/// Half-open byte range `[start, end)` of a detected notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoticeSpan {
    pub start: usize,
    pub end: usize,
}

impl NoticeSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
