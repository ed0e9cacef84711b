use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParenMatching, ParseResult},
    },
};

/// The closing partner of every `(` in a token sequence, found in one pass.
pub(in crate::interpreter::parser) struct Groups {
    partners: Vec<Option<usize>>,
    matching: ParenMatching,
}

impl Groups {
    /// Pairs the parentheses of `tokens`.
    ///
    /// Balanced matching pairs by depth. First-close matching pairs each `(`
    /// with the next `)` after it, regardless of nesting.
    pub(in crate::interpreter::parser) fn new(tokens: &[Token], matching: ParenMatching) -> Self {
        let mut partners = vec![None; tokens.len()];

        match matching {
            ParenMatching::Balanced => {
                let mut open = Vec::new();
                for (i, token) in tokens.iter().enumerate() {
                    match token.kind {
                        TokenKind::LParen => open.push(i),
                        TokenKind::RParen => {
                            if let Some(start) = open.pop() {
                                partners[start] = Some(i);
                            }
                        },
                        _ => {},
                    }
                }
            },
            ParenMatching::FirstClose => {
                let mut next_close = None;
                for (i, token) in tokens.iter().enumerate().rev() {
                    match token.kind {
                        TokenKind::RParen => next_close = Some(i),
                        TokenKind::LParen => partners[i] = next_close,
                        _ => {},
                    }
                }
            },
        }

        Self { partners, matching }
    }

    /// Finds the index of the `)` closing the `(` at `open` within a level
    /// that ends before `stop`.
    ///
    /// With [`ParenMatching::FirstClose`] a group without a `)` runs to
    /// `stop`, the end of the enclosing level.
    ///
    /// # Errors
    /// `ExpectedClosingParen` if balanced matching finds no partner.
    pub(in crate::interpreter::parser) fn closing(&self,
                                                  tokens: &[Token],
                                                  open: usize,
                                                  stop: usize)
                                                  -> ParseResult<usize> {
        match (self.partners.get(open).copied().flatten(), self.matching) {
            (Some(close), _) => Ok(close.min(stop)),
            (None, ParenMatching::FirstClose) => Ok(stop),
            (None, ParenMatching::Balanced) => {
                Err(ParseError::ExpectedClosingParen { position: tokens.get(open)
                                                                       .map_or(0, |t| t.position), })
            },
        }
    }
}
