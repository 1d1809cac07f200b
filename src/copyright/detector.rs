//! Copyright notice detector.
//!
//! Runs the full pipeline: bytes → tokens → POS tags → merged numbers and
//! proper nouns → notice automaton. Three drivers walk the automaton:
//! - [`CopyrightTagger::is_match`]: yes/no, with early exit
//! - [`CopyrightTagger::extract`]: the notice text, tokens joined by spaces
//! - [`CopyrightTagger::find_all_index`]: byte spans of every notice

use std::path::Path;

use log::debug;

use super::compress::{compress_numbers, compress_proper_nouns};
use super::corpus::{CorpusCounts, LoadError, load_corpus, parse_corpus};
use super::dfa::{NoticeDfa, NoticeState};
use super::lexer::tokenize;
use super::model::{EmissionDictionary, TransitionMatrix};
use super::tagger::tag_tokens;
use super::types::{NoticeSpan, TaggedToken};

/// Inputs shorter than this never match.
const MIN_MATCH_BYTES: usize = 15;

/// A capture needs more than this many tokens to count as a notice.
const MIN_NOTICE_TOKENS: usize = 3;

/// Trained tagger plus the notice automaton.
///
/// Immutable once built, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct CopyrightTagger {
    dictionary: EmissionDictionary,
    transitions: TransitionMatrix,
    dfa: NoticeDfa,
}

/// Token indices of one capture and the byte offset where it ends.
struct Capture {
    tokens: Vec<usize>,
    end: usize,
}

impl CopyrightTagger {
    /// Build a tagger from the corpus file at `path`.
    pub fn from_corpus_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let counts = load_corpus(path)?;
        debug!(
            "Loaded {} corpus records ({} distinct words) from {:?}",
            counts.records,
            counts.words.len(),
            path
        );
        Ok(Self::from_counts(&counts))
    }

    /// Build a tagger from corpus text.
    pub fn from_corpus_str(text: &str) -> Result<Self, LoadError> {
        Ok(Self::from_counts(&parse_corpus(text)?))
    }

    pub fn from_counts(counts: &CorpusCounts) -> Self {
        Self {
            dictionary: EmissionDictionary::from_counts(counts),
            transitions: TransitionMatrix::from_counts(counts),
            dfa: NoticeDfa::new(),
        }
    }

    /// Tokenize and tag `input`, then merge split numbers and proper nouns.
    pub fn tag(&self, input: &[u8]) -> Vec<TaggedToken> {
        let mut tokens = tokenize(input);
        tag_tokens(&mut tokens, &self.dictionary, &self.transitions);
        compress_proper_nouns(compress_numbers(tokens))
    }

    /// Whether `input` appears to contain a copyright notice.
    ///
    /// The input is cut after every `". "` and each piece is tagged on its
    /// own, so a notice spanning such a cut is judged in two halves.
    pub fn is_match(&self, input: &[u8]) -> bool {
        if input.len() < MIN_MATCH_BYTES {
            return false;
        }
        SentenceWindows::new(input).any(|window| self.window_has_notice(window))
    }

    fn window_has_notice(&self, window: &[u8]) -> bool {
        let tokens = self.tag(window);

        let mut state = NoticeState::Reject;
        let mut run = 0usize;
        let mut pending = 0usize;
        let mut accepted = 0usize;

        for token in &tokens {
            if state == NoticeState::Accept {
                run = 0;
                accepted += pending;
                pending = 0;
            }

            state = self.dfa.step(state, token);

            if state.is_capture_boundary() {
                run = 1;
                if pending > MIN_NOTICE_TOKENS {
                    accepted += pending;
                }
                pending = 1;
            } else if state == NoticeState::Reject {
                run = 0;
                pending = 0;
            } else if state != NoticeState::Accept {
                run += 1;
                pending += 1;
            }

            if run > MIN_NOTICE_TOKENS {
                return true;
            }
        }

        if state.is_final_candidate() {
            accepted += pending;
        }
        accepted > MIN_NOTICE_TOKENS
    }

    /// Text of every notice in `input`, token texts joined by single spaces.
    ///
    /// Returns an empty string when nothing is found.
    pub fn extract(&self, input: &[u8]) -> String {
        let tokens = self.tag(input);
        self.capture_notices(&tokens)
            .iter()
            .flat_map(|capture| capture.tokens.iter())
            .map(|&i| tokens[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Byte ranges of every notice in `input`, in order, non-overlapping.
    pub fn find_all_index(&self, input: &[u8]) -> Vec<NoticeSpan> {
        let tokens = self.tag(input);
        self.capture_notices(&tokens)
            .into_iter()
            .map(|capture| NoticeSpan::new(tokens[capture.tokens[0]].byte_start, capture.end))
            .collect()
    }

    /// Walk the automaton over `tokens` and collect the captured notices.
    ///
    /// A rejected token is skipped but does not drop what was captured so far.
    fn capture_notices(&self, tokens: &[TaggedToken]) -> Vec<Capture> {
        let mut captures = Vec::new();
        let mut state = NoticeState::Reject;
        let mut pending: Vec<usize> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if state == NoticeState::Accept {
                push_capture(&mut captures, &mut pending, token.byte_start);
            }

            state = self.dfa.step(state, token);

            if state.is_capture_boundary() {
                if pending.len() > MIN_NOTICE_TOKENS {
                    push_capture(&mut captures, &mut pending, token.byte_start);
                }
                pending.clear();
                pending.push(i);
            } else if state != NoticeState::Reject {
                pending.push(i);
            }
        }

        if state.is_final_candidate() || pending.len() > MIN_NOTICE_TOKENS {
            if let Some(&last) = pending.last() {
                let end = tokens[last].byte_end;
                push_capture(&mut captures, &mut pending, end);
            }
        }

        captures
    }
}

fn push_capture(captures: &mut Vec<Capture>, pending: &mut Vec<usize>, end: usize) {
    if !pending.is_empty() {
        captures.push(Capture {
            tokens: std::mem::take(pending),
            end,
        });
    }
}

/// Splits input after each period that is followed by a space. The space
/// starts the next window.
struct SentenceWindows<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> SentenceWindows<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for SentenceWindows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.input.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let len = rest
            .windows(2)
            .position(|pair| pair == b". ")
            .map_or(rest.len(), |i| i + 1);
        self.pos += len;
        Some(&rest[..len])
    }
}
