//! Post-tagging token merges.
//!
//! The tokenizer splits on every period, so `3.1.2` arrives as five tokens
//! and `Foo Inc.` loses its trailing dot. These passes glue such pieces back
//! together before the notice automaton runs. Numbers are merged first, then
//! proper nouns.

use super::types::{PosTag, TaggedToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Interm,
    Reject,
    Accept,
}

fn next_number_state(state: NumberState, token: &TaggedToken) -> NumberState {
    use NumberState::*;

    match token.tag {
        Some(PosTag::Cd) => match state {
            Interm => Accept,
            Start | Reject | Accept => Start,
        },
        Some(PosTag::Period) if token.text == "." => match state {
            Start => Interm,
            Interm | Reject | Accept => Reject,
        },
        _ => Reject,
    }
}

/// Merge `cd . cd` sequences into a single `cd` token, repeatedly, so that
/// `3 . 1 . 2` becomes `3.1.2`. The merged token starts at its first piece.
pub fn compress_numbers(tokens: Vec<TaggedToken>) -> Vec<TaggedToken> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut state = NumberState::Reject;
    let mut number = String::new();
    let mut number_start = 0;
    let mut saved: Vec<TaggedToken> = Vec::new();

    for token in tokens {
        state = next_number_state(state, &token);

        match state {
            NumberState::Start => {
                out.append(&mut saved);
                number.clear();
                number.push_str(&token.text);
                number_start = token.byte_start;
                saved.push(token);
            }
            NumberState::Interm => {
                number.push('.');
                saved.push(token);
            }
            NumberState::Reject => {
                out.append(&mut saved);
                out.push(token);
            }
            NumberState::Accept => {
                number.push_str(&token.text);
                saved.clear();
                saved.push(
                    TaggedToken::new(number.clone(), number_start, token.byte_end)
                        .with_tag(PosTag::Cd),
                );
                state = NumberState::Start;
            }
        }
    }

    if state != NumberState::Reject {
        out.append(&mut saved);
    }

    out
}

/// Merge each maximal run of `np` tokens, plus one directly following `.`,
/// into a single `np` token. Texts are concatenated without separators.
pub fn compress_proper_nouns(tokens: Vec<TaggedToken>) -> Vec<TaggedToken> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Option<TaggedToken> = None;

    for token in tokens {
        match run.take() {
            Some(mut merged) if token.has_tag(PosTag::Np) => {
                merged.text.push_str(&token.text);
                merged.byte_end = token.byte_end;
                run = Some(merged);
            }
            Some(mut merged) if token.text == "." => {
                merged.text.push('.');
                merged.byte_end = token.byte_end;
                out.push(merged);
            }
            Some(merged) => {
                out.push(merged);
                out.push(token);
            }
            None if token.has_tag(PosTag::Np) => run = Some(token),
            None => out.push(token),
        }
    }
    out.extend(run);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, tag: PosTag, start: usize) -> TaggedToken {
        TaggedToken::new(text, start, start + text.len()).with_tag(tag)
    }

    fn texts(tokens: &[TaggedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_compress_simple_decimal() {
        let tokens = vec![
            tok("9", PosTag::Cd, 0),
            tok(".", PosTag::Period, 1),
            tok("3", PosTag::Cd, 2),
        ];
        let out = compress_numbers(tokens);
        assert_eq!(texts(&out), vec!["9.3"]);
        assert_eq!(out[0].tag, Some(PosTag::Cd));
        assert_eq!(out[0].byte_start, 0);
        assert_eq!(out[0].byte_end, 3);
    }

    #[test]
    fn test_compress_version_chain() {
        let tokens = vec![
            tok("version", PosTag::Nn, 0),
            tok("3", PosTag::Cd, 8),
            tok(".", PosTag::Period, 9),
            tok("1", PosTag::Cd, 10),
            tok(".", PosTag::Period, 11),
            tok("2", PosTag::Cd, 12),
            tok("or", PosTag::Cc, 14),
        ];
        let out = compress_numbers(tokens);
        assert_eq!(texts(&out), vec!["version", "3.1.2", "or"]);
        assert_eq!(out[1].byte_start, 8);
        assert_eq!(out[1].byte_end, 13);
    }

    #[test]
    fn test_compress_trailing_period_kept() {
        let tokens = vec![
            tok("2008", PosTag::Cd, 0),
            tok(".", PosTag::Period, 4),
            tok("All", PosTag::Dt, 6),
        ];
        let out = compress_numbers(tokens);
        assert_eq!(texts(&out), vec!["2008", ".", "All"]);
    }

    #[test]
    fn test_compress_period_at_end_of_input() {
        let tokens = vec![tok("2008", PosTag::Cd, 0), tok(".", PosTag::Period, 4)];
        let out = compress_numbers(tokens);
        assert_eq!(texts(&out), vec!["2008", "."]);
    }

    #[test]
    fn test_compress_adjacent_numbers_not_merged() {
        let tokens = vec![
            tok("2003", PosTag::Cd, 0),
            tok(",", PosTag::Comma, 4),
            tok("2008", PosTag::Cd, 6),
            tok("2009", PosTag::Cd, 11),
        ];
        let out = compress_numbers(tokens);
        assert_eq!(texts(&out), vec!["2003", ",", "2008", "2009"]);
    }

    #[test]
    fn test_compress_question_mark_rejects() {
        let tokens = vec![
            tok("3", PosTag::Cd, 0),
            tok("?", PosTag::Period, 1),
            tok("4", PosTag::Cd, 2),
        ];
        let out = compress_numbers(tokens);
        assert_eq!(texts(&out), vec!["3", "?", "4"]);
    }

    #[test]
    fn test_compress_numbers_passthrough() {
        let tokens = vec![tok("Copyright", PosTag::Nn, 0), tok("Acme", PosTag::Np, 10)];
        let out = compress_numbers(tokens.clone());
        assert_eq!(out, tokens);
        assert!(compress_numbers(Vec::new()).is_empty());
    }

    #[test]
    fn test_compress_proper_noun_run() {
        let tokens = vec![
            tok("Free", PosTag::Np, 0),
            tok("Software", PosTag::Np, 5),
            tok("Foundation", PosTag::Np, 14),
        ];
        let out = compress_proper_nouns(tokens);
        assert_eq!(texts(&out), vec!["FreeSoftwareFoundation"]);
        assert_eq!(out[0].tag, Some(PosTag::Np));
        assert_eq!(out[0].byte_start, 0);
        assert_eq!(out[0].byte_end, 24);
    }

    #[test]
    fn test_compress_proper_noun_takes_period() {
        let tokens = vec![
            tok("by", PosTag::In, 0),
            tok("Acme", PosTag::Np, 3),
            tok("Inc", PosTag::Np, 8),
            tok(".", PosTag::Period, 11),
            tok(".", PosTag::Period, 12),
        ];
        let out = compress_proper_nouns(tokens);
        assert_eq!(texts(&out), vec!["by", "AcmeInc.", "."]);
        assert_eq!(out[1].byte_start, 3);
        assert_eq!(out[1].byte_end, 12);
    }

    #[test]
    fn test_compress_proper_noun_run_ended_by_other_token() {
        let tokens = vec![
            tok("Acme", PosTag::Np, 0),
            tok(",", PosTag::Comma, 4),
            tok("Initech", PosTag::Np, 6),
        ];
        let out = compress_proper_nouns(tokens);
        assert_eq!(texts(&out), vec!["Acme", ",", "Initech"]);
    }

    #[test]
    fn test_compress_proper_noun_lone_period_untouched() {
        let tokens = vec![tok("2004", PosTag::Cd, 0), tok(".", PosTag::Period, 4)];
        let out = compress_proper_nouns(tokens.clone());
        assert_eq!(out, tokens);
    }
}
