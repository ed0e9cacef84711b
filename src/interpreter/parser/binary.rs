use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// The expression under construction at one nesting level.
///
/// States: awaiting the left operand (`left` empty), awaiting an operator
/// (`left` set, nothing pending) and awaiting the right operand (`left` set,
/// operator pending). A right operand completes the pending operation, which
/// then becomes the left operand of the next one.
#[derive(Debug, Default)]
pub(in crate::interpreter::parser) struct Assembly {
    left:    Option<Expr>,
    pending: Option<(BinaryOperator, usize)>,
}

impl Assembly {
    /// Places an operand into the left slot or completes the pending
    /// operation with it.
    pub(in crate::interpreter::parser) fn push_operand(&mut self,
                                                       operand: Expr,
                                                       position: usize)
                                                       -> ParseResult<()> {
        let left = match (self.left.take(), self.pending.take()) {
            (None, _) => operand,
            (Some(left), Some((op, op_position))) => Expr::BinaryOp { op,
                                                                      left: Box::new(left),
                                                                      right: Box::new(operand),
                                                                      position: op_position },
            (Some(_), None) => return Err(ParseError::MissingOperator { position }),
        };
        self.left = Some(left);
        Ok(())
    }

    /// Records the operator between the left and right operand.
    pub(in crate::interpreter::parser) fn push_operator(&mut self,
                                                        op: BinaryOperator,
                                                        token: &Token)
                                                        -> ParseResult<()> {
        if self.left.is_none() || self.pending.is_some() {
            return Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                     position: token.position, });
        }
        self.pending = Some((op, token.position));
        Ok(())
    }

    /// Returns the assembled tree once the level runs out of tokens.
    pub(in crate::interpreter::parser) fn finish(self, end: usize) -> ParseResult<Expr> {
        match (self.left, self.pending) {
            (Some(expr), None) => Ok(expr),
            _ => Err(ParseError::UnexpectedEndOfInput { position: end }),
        }
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Example
/// ```
/// use sumexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Minus), Some(BinaryOperator::Sub));
/// assert_eq!(token_to_binary_operator(TokenKind::Integer), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Integer | TokenKind::LParen | TokenKind::RParen => None,
    }
}
