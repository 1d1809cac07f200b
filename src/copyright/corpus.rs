//! Loader for the hand-labeled training corpus.
//!
//! The corpus is a flat text of `word|~|tag` records separated by three
//! spaces. Line breaks around a record are ignored. Loading produces raw
//! counts only; [`super::model`] turns them into probabilities.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::types::PosTag;

/// Separator between records.
const RECORD_SEPARATOR: &str = "   ";

/// Separator between the word and its tag inside a record.
const FIELD_SEPARATOR: &str = "|~|";

/// Errors raised while loading a corpus. Any of these aborts construction.
#[derive(Debug)]
pub enum LoadError {
    /// The corpus file could not be read
    Io { path: PathBuf, source: io::Error },

    /// A record lacks the `|~|` separator or has an empty word
    MalformedRecord { index: usize, record: String },

    /// A record's tag is not one of the known labels
    UnknownTag { index: usize, tag: String },

    /// The corpus holds no records
    Empty,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read corpus {}: {}", path.display(), source)
            }
            Self::MalformedRecord { index, record } => {
                write!(f, "Malformed corpus record #{}: '{}'", index, record)
            }
            Self::UnknownTag { index, tag } => {
                write!(f, "Unknown tag '{}' in corpus record #{}", tag, index)
            }
            Self::Empty => write!(f, "Corpus contains no records"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Raw counts gathered from a corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusCounts {
    /// Per word: how often each tag was seen, in first-seen order.
    pub words: HashMap<String, Vec<(PosTag, u32)>>,
    /// `transitions[prev][next]`: how often tag `next` followed tag `prev`.
    pub transitions: [[u32; PosTag::COUNT]; PosTag::COUNT],
    /// Number of records read.
    pub records: usize,
}

impl CorpusCounts {
    fn record(&mut self, word: &str, prev: PosTag, tag: PosTag) {
        let entry = self.words.entry(word.to_string()).or_default();
        match entry.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, count)) => *count += 1,
            None => entry.push((tag, 1)),
        }
        self.transitions[prev.index()][tag.index()] += 1;
        self.records += 1;
    }
}

/// Read and parse the corpus file at `path`.
pub fn load_corpus(path: &Path) -> Result<CorpusCounts, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&text)
}

/// Parse corpus text into counts.
///
/// The first record's transition is counted from the sentence boundary tag.
pub fn parse_corpus(text: &str) -> Result<CorpusCounts, LoadError> {
    let mut counts = CorpusCounts::default();
    let mut prev = PosTag::Period;

    for (index, raw) in text.split(RECORD_SEPARATOR).enumerate() {
        let record = raw.trim();
        if record.is_empty() {
            continue;
        }

        let (word, label) = match record.split_once(FIELD_SEPARATOR) {
            Some((word, label)) if !word.is_empty() => (word, label),
            _ => {
                return Err(LoadError::MalformedRecord {
                    index,
                    record: record.to_string(),
                });
            }
        };

        let tag = PosTag::from_str(label).map_err(|_| LoadError::UnknownTag {
            index,
            tag: label.to_string(),
        })?;

        counts.record(word, prev, tag);
        prev = tag;
    }

    if counts.records == 0 {
        return Err(LoadError::Empty);
    }

    Ok(counts)
}
