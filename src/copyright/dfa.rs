//! Finite automaton recognizing copyright-notice shapes over tagged tokens.
//!
//! Input symbols come from [`NoticeSymbol::classify`]. The transition
//! function is an exhaustive match; [`NoticeDfa`] materializes it once into a
//! dense lookup table.

use super::types::{PosTag, TaggedToken};

/// Automaton states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeState {
    Start,   // saw "copyright"
    LParen,  // "(" outside a notice
    CChar,   // the "c" of "(c)"
    RParen,  // closing ")"
    Np,      // proper noun
    Comma,   // ","
    Cd,      // number or year
    Dash,    // year range dash
    In,      // preposition, e.g. "by"
    Dt,      // determiner
    Accept,  // a notice just completed
    Reject,  // dead state, also the initial state
    Sym,     // symbol
    Other,   // conjunction inside a holder list
    CSym,    // "©"
    LParenC, // "(" right after "copyright"
}

impl NoticeState {
    pub const COUNT: usize = 16;

    pub const ALL: [NoticeState; NoticeState::COUNT] = [
        NoticeState::Start,
        NoticeState::LParen,
        NoticeState::CChar,
        NoticeState::RParen,
        NoticeState::Np,
        NoticeState::Comma,
        NoticeState::Cd,
        NoticeState::Dash,
        NoticeState::In,
        NoticeState::Dt,
        NoticeState::Accept,
        NoticeState::Reject,
        NoticeState::Sym,
        NoticeState::Other,
        NoticeState::CSym,
        NoticeState::LParenC,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// States that may open a new notice: a pending capture either gets
    /// emitted or discarded when one of these is entered.
    pub fn is_capture_boundary(self) -> bool {
        matches!(self, Self::Start | Self::LParen | Self::CSym)
    }

    /// States that end a plausible notice when input runs out.
    pub fn is_final_candidate(self) -> bool {
        matches!(self, Self::Accept | Self::Cd | Self::Np)
    }
}

/// Automaton input symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeSymbol {
    Copyright,     // the word "copyright", any case
    CChar,         // the word "c", any case
    CopyrightSign, // any text containing "©"
    LParen,
    RParen,
    Comma,
    Dash,
    Period,
    Cd,
    Np,
    Dt,
    In,
    Sym,
    Cc,
    Other,
}

impl NoticeSymbol {
    pub const COUNT: usize = 15;

    pub const ALL: [NoticeSymbol; NoticeSymbol::COUNT] = [
        NoticeSymbol::Copyright,
        NoticeSymbol::CChar,
        NoticeSymbol::CopyrightSign,
        NoticeSymbol::LParen,
        NoticeSymbol::RParen,
        NoticeSymbol::Comma,
        NoticeSymbol::Dash,
        NoticeSymbol::Period,
        NoticeSymbol::Cd,
        NoticeSymbol::Np,
        NoticeSymbol::Dt,
        NoticeSymbol::In,
        NoticeSymbol::Sym,
        NoticeSymbol::Cc,
        NoticeSymbol::Other,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Map a tagged token to its input symbol.
    ///
    /// The literal words win over the tag. Untagged tokens and tags outside
    /// the automaton's alphabet become [`NoticeSymbol::Other`].
    pub fn classify(token: &TaggedToken) -> Self {
        let lowercase = token.text.to_lowercase();
        if lowercase == "copyright" {
            return Self::Copyright;
        }
        if lowercase == "c" {
            return Self::CChar;
        }
        if token.text.contains('©') {
            return Self::CopyrightSign;
        }

        match token.tag {
            Some(PosTag::LParen) => Self::LParen,
            Some(PosTag::RParen) => Self::RParen,
            Some(PosTag::Comma) => Self::Comma,
            Some(PosTag::Dash) => Self::Dash,
            Some(PosTag::Period) => Self::Period,
            Some(PosTag::Cd) => Self::Cd,
            Some(PosTag::Np) => Self::Np,
            Some(PosTag::Dt) => Self::Dt,
            Some(PosTag::In) => Self::In,
            Some(PosTag::Sym) => Self::Sym,
            Some(PosTag::Cc) => Self::Cc,
            _ => Self::Other,
        }
    }
}

/// The transition function. Every (state, symbol) pair has a successor.
pub fn transition(state: NoticeState, symbol: NoticeSymbol) -> NoticeState {
    use NoticeState::*;

    match symbol {
        NoticeSymbol::Copyright => Start,
        NoticeSymbol::CChar => match state {
            LParen | LParenC => CChar,
            _ => Reject,
        },
        NoticeSymbol::CopyrightSign => match state {
            Accept => Accept,
            _ => CSym,
        },
        NoticeSymbol::LParen => match state {
            Start => LParenC,
            Reject | CSym => LParen,
            _ => Reject,
        },
        NoticeSymbol::RParen => match state {
            CChar | Sym | CSym => RParen,
            _ => Reject,
        },
        NoticeSymbol::Cd => match state {
            Start | RParen | Np | Comma | Cd | Dash | Sym | Other | CSym => Cd,
            Accept => Accept,
            LParen | CChar | In | Dt | Reject | LParenC => Reject,
        },
        NoticeSymbol::Np => match state {
            Start | RParen | Np | Comma | Cd | Dash | In | Dt | Sym | Other | CSym => Np,
            Accept => Accept,
            LParen | CChar | Reject | LParenC => Reject,
        },
        NoticeSymbol::Dt => match state {
            Start | RParen | Np | Comma | Cd | Dash | In | Other | CSym => Dt,
            LParen | CChar | Dt | Accept | Reject | Sym | LParenC => Reject,
        },
        NoticeSymbol::In => match state {
            Np | Cd | Other | CSym => In,
            _ => Reject,
        },
        NoticeSymbol::Dash => match state {
            Np | Cd | Sym | CSym => Dash,
            _ => Reject,
        },
        NoticeSymbol::Comma => match state {
            Np | Cd | CSym => Comma,
            _ => Reject,
        },
        NoticeSymbol::Period => match state {
            Np | Cd => Accept,
            _ => Reject,
        },
        NoticeSymbol::Sym => match state {
            Start | Np | Cd | CSym => Sym,
            Accept => Accept,
            _ => Reject,
        },
        NoticeSymbol::Cc => match state {
            Np | Cd | In | Dt | CSym => Other,
            _ => Reject,
        },
        NoticeSymbol::Other => match state {
            Np | Cd => Accept,
            _ => Reject,
        },
    }
}

/// Dense transition table, indexed by symbol then state.
#[derive(Debug, Clone)]
pub struct NoticeDfa {
    table: [[NoticeState; NoticeState::COUNT]; NoticeSymbol::COUNT],
}

impl NoticeDfa {
    pub fn new() -> Self {
        let mut table = [[NoticeState::Reject; NoticeState::COUNT]; NoticeSymbol::COUNT];
        for symbol in NoticeSymbol::ALL {
            for state in NoticeState::ALL {
                table[symbol.index()][state.index()] = transition(state, symbol);
            }
        }
        Self { table }
    }

    pub fn next(&self, state: NoticeState, symbol: NoticeSymbol) -> NoticeState {
        self.table[symbol.index()][state.index()]
    }

    /// Classify `token` and step from `state`.
    pub fn step(&self, state: NoticeState, token: &TaggedToken) -> NoticeState {
        self.next(state, NoticeSymbol::classify(token))
    }
}

impl Default for NoticeDfa {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NoticeState::*;

    fn token(text: &str, tag: Option<PosTag>) -> TaggedToken {
        let t = TaggedToken::new(text, 0, text.len());
        match tag {
            Some(tag) => t.with_tag(tag),
            None => t,
        }
    }

    #[test]
    fn test_state_and_symbol_order() {
        for (i, state) in NoticeState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
        for (i, symbol) in NoticeSymbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn test_classify_literal_words_ignore_tag() {
        let t = token("COPYRIGHT", Some(PosTag::Np));
        assert_eq!(NoticeSymbol::classify(&t), NoticeSymbol::Copyright);
        let t = token("C", Some(PosTag::Np));
        assert_eq!(NoticeSymbol::classify(&t), NoticeSymbol::CChar);
        let t = token("c", None);
        assert_eq!(NoticeSymbol::classify(&t), NoticeSymbol::CChar);
    }

    #[test]
    fn test_classify_copyright_sign() {
        let t = token("©", Some(PosTag::Sym));
        assert_eq!(NoticeSymbol::classify(&t), NoticeSymbol::CopyrightSign);
        let t = token("©2004", Some(PosTag::Cd));
        assert_eq!(NoticeSymbol::classify(&t), NoticeSymbol::CopyrightSign);
    }

    #[test]
    fn test_classify_by_tag() {
        assert_eq!(
            NoticeSymbol::classify(&token("2004", Some(PosTag::Cd))),
            NoticeSymbol::Cd
        );
        assert_eq!(
            NoticeSymbol::classify(&token("-", Some(PosTag::Dash))),
            NoticeSymbol::Dash
        );
        assert_eq!(
            NoticeSymbol::classify(&token("and", Some(PosTag::Cc))),
            NoticeSymbol::Cc
        );
        assert_eq!(
            NoticeSymbol::classify(&token("rights", Some(PosTag::Nn))),
            NoticeSymbol::Other
        );
        assert_eq!(
            NoticeSymbol::classify(&token("???", None)),
            NoticeSymbol::Other
        );
    }

    #[test]
    fn test_copyright_resets_every_state() {
        for state in NoticeState::ALL {
            assert_eq!(transition(state, NoticeSymbol::Copyright), Start);
        }
    }

    #[test]
    fn test_paren_c_paren_path() {
        assert_eq!(transition(Start, NoticeSymbol::LParen), LParenC);
        assert_eq!(transition(LParenC, NoticeSymbol::CChar), CChar);
        assert_eq!(transition(CChar, NoticeSymbol::RParen), RParen);
        assert_eq!(transition(RParen, NoticeSymbol::Cd), Cd);
        // a bare "(c)" opens from the dead state
        assert_eq!(transition(Reject, NoticeSymbol::LParen), LParen);
        assert_eq!(transition(LParen, NoticeSymbol::CChar), CChar);
    }

    #[test]
    fn test_sign_transitions() {
        assert_eq!(transition(Accept, NoticeSymbol::CopyrightSign), Accept);
        for state in NoticeState::ALL.into_iter().filter(|s| *s != Accept) {
            assert_eq!(transition(state, NoticeSymbol::CopyrightSign), CSym);
        }
    }

    #[test]
    fn test_accepting_paths() {
        assert_eq!(transition(Np, NoticeSymbol::Period), Accept);
        assert_eq!(transition(Cd, NoticeSymbol::Period), Accept);
        assert_eq!(transition(Np, NoticeSymbol::Other), Accept);
        assert_eq!(transition(Cd, NoticeSymbol::Other), Accept);
        assert_eq!(transition(Accept, NoticeSymbol::Np), Accept);
        assert_eq!(transition(Accept, NoticeSymbol::Cd), Accept);
        assert_eq!(transition(Accept, NoticeSymbol::Sym), Accept);
        assert_eq!(transition(Accept, NoticeSymbol::Dt), Reject);
        assert_eq!(transition(Accept, NoticeSymbol::Other), Reject);
    }

    #[test]
    fn test_holder_list_transitions() {
        assert_eq!(transition(Cd, NoticeSymbol::In), In);
        assert_eq!(transition(In, NoticeSymbol::Np), Np);
        assert_eq!(transition(Np, NoticeSymbol::Comma), Comma);
        assert_eq!(transition(Comma, NoticeSymbol::Np), Np);
        assert_eq!(transition(Np, NoticeSymbol::Cc), Other);
        assert_eq!(transition(Other, NoticeSymbol::Np), Np);
        assert_eq!(transition(Cd, NoticeSymbol::Dash), Dash);
        assert_eq!(transition(Dash, NoticeSymbol::Cd), Cd);
        assert_eq!(transition(In, NoticeSymbol::Dt), Dt);
        assert_eq!(transition(Dt, NoticeSymbol::Dt), Reject);
    }

    #[test]
    fn test_reject_is_sticky_without_openers() {
        for symbol in NoticeSymbol::ALL {
            let next = transition(Reject, symbol);
            match symbol {
                NoticeSymbol::Copyright => assert_eq!(next, Start),
                NoticeSymbol::CopyrightSign => assert_eq!(next, CSym),
                NoticeSymbol::LParen => assert_eq!(next, LParen),
                _ => assert_eq!(next, Reject),
            }
        }
    }

    #[test]
    fn test_table_matches_function() {
        let dfa = NoticeDfa::new();
        for symbol in NoticeSymbol::ALL {
            for state in NoticeState::ALL {
                assert_eq!(dfa.next(state, symbol), transition(state, symbol));
            }
        }
    }

    #[test]
    fn test_step_classifies_token() {
        let dfa = NoticeDfa::default();
        let t = token("Copyright", Some(PosTag::Nn));
        assert_eq!(dfa.step(Reject, &t), Start);
    }
}
