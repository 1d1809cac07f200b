//! Copyright notice detection.
//!
//! Finds copyright notices in arbitrary text using a four-stage pipeline:
//! 1. Tokenizing (normalization, byte-preserving word/symbol split)
//! 2. POS tagging with a bigram model trained from a labeled corpus
//! 3. Merging numbers and proper nouns split by the tokenizer
//! 4. Recognizing notice shapes with a finite automaton

mod compress;
mod corpus;
mod detector;
mod dfa;
mod lexer;
mod model;
mod prepare;
mod tagger;
mod types;

pub use compress::{compress_numbers, compress_proper_nouns};
pub use corpus::{CorpusCounts, LoadError, load_corpus, parse_corpus};
pub use detector::CopyrightTagger;
pub use dfa::{NoticeDfa, NoticeState, NoticeSymbol};
pub use lexer::tokenize;
pub use model::{EmissionDictionary, TagProbability, TransitionMatrix};
pub use tagger::{guess_unknown_tag, tag_tokens};
pub use types::{NoticeSpan, PosTag, TaggedToken};
