//! Probability tables built from corpus counts.
//!
//! Both tables are built once and are read-only afterwards.

use std::collections::HashMap;

use super::corpus::CorpusCounts;
use super::types::PosTag;

/// Probability of a tag for a given word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagProbability {
    pub tag: PosTag,
    pub probability: f32,
}

/// Word → tag probabilities, keyed by exact spelling.
///
/// The probabilities of each word sum to 1.
#[derive(Debug, Clone, Default)]
pub struct EmissionDictionary {
    entries: HashMap<String, Vec<TagProbability>>,
}

impl EmissionDictionary {
    pub fn from_counts(counts: &CorpusCounts) -> Self {
        let entries = counts
            .words
            .iter()
            .map(|(word, tags)| {
                let total: u32 = tags.iter().map(|(_, count)| count).sum();
                let probabilities = tags
                    .iter()
                    .map(|&(tag, count)| TagProbability {
                        tag,
                        probability: count as f32 / total as f32,
                    })
                    .collect();
                (word.clone(), probabilities)
            })
            .collect();

        Self { entries }
    }

    /// Tag probabilities for `word`, matched case-sensitively.
    pub fn get(&self, word: &str) -> Option<&[TagProbability]> {
        self.entries
            .get(word)
            .map(Vec::as_slice)
            .filter(|tags| !tags.is_empty())
    }

}

/// Laplace-smoothed bigram transition probabilities.
///
/// `probability(a, b) = (count(a, b) + 1) / (26 + Σ count(a, *))`, so every
/// entry is strictly positive and every row sums to 1.
#[derive(Debug, Clone)]
pub struct TransitionMatrix {
    probabilities: [[f32; PosTag::COUNT]; PosTag::COUNT],
}

impl TransitionMatrix {
    pub fn from_counts(counts: &CorpusCounts) -> Self {
        let mut probabilities = [[0.0f32; PosTag::COUNT]; PosTag::COUNT];

        for (row, row_counts) in counts.transitions.iter().enumerate() {
            let total = PosTag::COUNT as f32 + row_counts.iter().sum::<u32>() as f32;
            for (col, &count) in row_counts.iter().enumerate() {
                probabilities[row][col] = (count as f32 + 1.0) / total;
            }
        }

        Self { probabilities }
    }

    /// Probability that `to` follows `from`.
    pub fn probability(&self, from: PosTag, to: PosTag) -> f32 {
        self.probabilities[from.index()][to.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copyright::corpus::parse_corpus;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_emission_probabilities_normalized() {
        let counts = parse_corpus("run|~|vb   run|~|nn   run|~|vb   run|~|vb").unwrap();
        let dict = EmissionDictionary::from_counts(&counts);
        let tags = dict.get("run").unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag, PosTag::Vb);
        assert!(approx_eq(tags[0].probability, 0.75));
        assert!(approx_eq(tags[1].probability, 0.25));
    }

    #[test]
    fn test_emission_lookup_is_case_sensitive() {
        let counts = parse_corpus("copyright|~|nn   ").unwrap();
        let dict = EmissionDictionary::from_counts(&counts);
        assert!(dict.get("copyright").is_some());
        assert!(dict.get("Copyright").is_none());
    }

    #[test]
    fn test_transition_laplace_smoothing() {
        let counts = parse_corpus("the|~|dt   dog|~|nn   the|~|dt   cat|~|nn").unwrap();
        let matrix = TransitionMatrix::from_counts(&counts);
        // dt row: dt→nn seen twice out of two transitions
        assert!(approx_eq(matrix.probability(PosTag::Dt, PosTag::Nn), 3.0 / 28.0));
        assert!(approx_eq(matrix.probability(PosTag::Dt, PosTag::Cd), 1.0 / 28.0));
        // unseen row is uniform
        assert!(approx_eq(matrix.probability(PosTag::Md, PosTag::Bos), 1.0 / 26.0));
    }

    #[test]
    fn test_transition_rows_sum_to_one() {
        let counts = parse_corpus("a|~|dt   b|~|nn   c|~|vb   .|~|.   d|~|np").unwrap();
        let matrix = TransitionMatrix::from_counts(&counts);
        for from in PosTag::ALL {
            let sum: f32 = PosTag::ALL.iter().map(|&to| matrix.probability(from, to)).sum();
            assert!((sum - 1.0).abs() < 1e-4, "row {from} sums to {sum}");
            for to in PosTag::ALL {
                assert!(matrix.probability(from, to) > 0.0);
            }
        }
    }
}
