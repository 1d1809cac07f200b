//! Part-of-speech tagging.
//!
//! Tags a token sequence with a greedy forward pass over a tag × token
//! score grid. Each column is scored from a single running predecessor
//! rather than from every cell of the previous column, so this is not a
//! full Viterbi decode. Words missing from the dictionary fall back to
//! [`guess_unknown_tag`].

use super::model::{EmissionDictionary, TagProbability, TransitionMatrix};
use super::types::{PosTag, TaggedToken};

/// Transition probability at or above which an unseen word takes the
/// transition's tag outright.
const CONFIDENT_TRANSITION: f32 = 0.7;

/// Penalty applied to heuristic guesses for unseen words.
const GUESS_PENALTY: f32 = 0.95;

/// Suffixes for the first heuristic pass, checked against the lowercased word.
const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ible", "ic", "ous", "al", "ful", "less"];
const ADVERB_SUFFIXES: &[&str] = &["ly"];
const VERB_SUFFIXES: &[&str] = &["ate", "fy", "ize"];

/// Noun suffixes, checked only after the capital-letter test.
const NOUN_SUFFIXES: &[&str] = &[
    "ion", "ess", "ment", "er", "or", "ist", "ism", "ship", "hood", "ology", "ty", "y",
];

/// Assign a tag to every token in place.
///
/// A token whose score column is all zeros keeps `tag == None`.
pub fn tag_tokens(
    tokens: &mut [TaggedToken],
    dictionary: &EmissionDictionary,
    transitions: &TransitionMatrix,
) {
    let mut best_tag = PosTag::Period;
    let mut best_prob = 1.0f32;
    // Only replaced by a strictly higher carried score; never reset per column.
    let mut running_tag = PosTag::ALL[0];
    let mut running_prob = 0.0f32;

    for token in tokens.iter_mut() {
        let mut column = [0.0f32; PosTag::COUNT];
        let lowercase = token.text.to_lowercase();
        let entry = dictionary
            .get(&token.text)
            .map(|tags| (tags, true))
            .or_else(|| dictionary.get(&lowercase).map(|tags| (tags, false)));
        let guess = entry.is_none().then(|| guess_unknown_tag(&token.text));

        for tag in PosTag::ALL {
            let transition = transitions.probability(best_tag, tag);
            let carried = best_prob * transition;

            match entry {
                Some((_, true)) if is_sentence_end(&token.text) => {
                    column[PosTag::Period.index()] = 1.0;
                }
                Some((tags, _)) => emit(&mut column, tags, tag, carried),
                None if transition >= CONFIDENT_TRANSITION => {
                    column[tag.index()] = carried;
                }
                None => {
                    if let Some(guess) = guess {
                        column[guess.index()] = carried * GUESS_PENALTY;
                    }
                }
            }

            if carried > running_prob {
                running_prob = carried;
                running_tag = tag;
            }
        }

        token.tag = best_in_column(&column);
        best_tag = running_tag;
        best_prob = running_prob;
    }
}

fn is_sentence_end(text: &str) -> bool {
    matches!(text, "." | "?" | "!")
}

fn emit(column: &mut [f32; PosTag::COUNT], tags: &[TagProbability], tag: PosTag, carried: f32) {
    for entry in tags.iter().filter(|entry| entry.tag == tag) {
        column[tag.index()] = carried * entry.probability;
    }
}

/// Highest-scoring tag; ties keep the earliest tag and zero never wins.
fn best_in_column(column: &[f32; PosTag::COUNT]) -> Option<PosTag> {
    let mut best = None;
    let mut best_score = 0.0f32;
    for (tag, &score) in PosTag::ALL.iter().zip(column) {
        if score > best_score {
            best_score = score;
            best = Some(*tag);
        }
    }
    best
}

/// Guess the tag of a word missing from the dictionary from its shape.
pub fn guess_unknown_tag(word: &str) -> PosTag {
    if word.bytes().any(|b| b.is_ascii_digit()) {
        return PosTag::Cd;
    }

    let lowercase = word.to_lowercase();
    let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| lowercase.ends_with(s));

    if ends_with_any(ADJECTIVE_SUFFIXES) {
        return PosTag::Jj;
    }
    if ends_with_any(ADVERB_SUFFIXES) {
        return PosTag::Rb;
    }
    if ends_with_any(VERB_SUFFIXES) {
        return PosTag::Vb;
    }
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        return PosTag::Np;
    }
    if ends_with_any(NOUN_SUFFIXES) {
        return PosTag::Nn;
    }

    PosTag::Fw
}
