use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{Assembly, token_to_binary_operator},
            group::Groups,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest parenthesis nesting the parser accepts.
///
/// Each group is parsed by a nested call, so the limit bounds the call stack
/// used for a single expression.
pub const MAX_NESTING_DEPTH: usize = 1024;

/// How a `(` is paired with its `)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ParenMatching {
    /// The `)` at the same nesting depth closes the group. Unmatched
    /// parentheses are errors.
    #[default]
    Balanced,
    /// The first `)` after the `(` closes the group, regardless of nesting.
    /// A `(` without any later `)` swallows the rest of the input, and a
    /// stray `)` is ignored.
    FirstClose,
}

/// Parses a token sequence with depth-balanced parenthesis matching.
///
/// Grammar: `expression := operand (("+" | "-") operand)*` where
/// `operand := integer | "(" expression ")"`. Operations associate to the
/// left.
///
/// # Example
/// ```
/// use sumexpr::interpreter::{evaluator::core::evaluate, lexer::lex, parser::core::parse};
///
/// let tokens = lex("(13+4)-(12+1)").unwrap();
/// let expr = parse(&tokens).unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), 4);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    parse_with(tokens, ParenMatching::default())
}

/// Parses a token sequence using the given parenthesis matching strategy.
///
/// # Errors
/// - `UnexpectedToken` for an operator without a left operand, two operators
///   in a row, or (when balanced) a stray `)`.
/// - `MissingOperator` for two operands in a row.
/// - `ExpectedClosingParen` for an unmatched `(` (when balanced).
/// - `UnexpectedEndOfInput` for empty input, empty groups or a trailing
///   operator.
/// - `LiteralTooLarge` for integers that do not fit into an `i64`.
/// - `NestingTooDeep` for groups nested deeper than [`MAX_NESTING_DEPTH`].
pub fn parse_with(tokens: &[Token], matching: ParenMatching) -> ParseResult<Expr> {
    let end = tokens.last().map_or(0, |t| t.position + t.text.len());
    let level = Level { tokens,
                        groups: Groups::new(tokens, matching),
                        matching };
    let expr = level.parse(0, tokens.len(), 0, end)?;
    debug!("parsed {} operators from {} tokens", expr.operator_count(), tokens.len());
    Ok(expr)
}

/// The state shared by all nesting levels of one parse.
struct Level<'a> {
    tokens:   &'a [Token],
    groups:   Groups,
    matching: ParenMatching,
}

impl Level<'_> {
    /// Parses the tokens in `start..stop` at nesting `depth`. `end` is the
    /// position reported when the level runs out of tokens.
    fn parse(&self, start: usize, stop: usize, depth: usize, end: usize) -> ParseResult<Expr> {
        let mut assembly = Assembly::default();
        let mut i = start;

        while i < stop
              && let Some(token) = self.tokens.get(i)
        {
            match token.kind {
                TokenKind::Integer => {
                    assembly.push_operand(integer_literal(token)?, token.position)?;
                    i += 1;
                },
                TokenKind::Plus | TokenKind::Minus => {
                    if let Some(op) = token_to_binary_operator(token.kind) {
                        assembly.push_operator(op, token)?;
                    }
                    i += 1;
                },
                TokenKind::LParen => {
                    if depth >= MAX_NESTING_DEPTH {
                        return Err(ParseError::NestingTooDeep { position: token.position });
                    }
                    let close = self.groups.closing(self.tokens, i, stop)?;
                    let inner_end = self.tokens.get(close).map_or(end, |t| t.position);
                    let inner = self.parse(i + 1, close, depth + 1, inner_end)?;
                    assembly.push_operand(inner, token.position)?;
                    i = close + 1;
                },
                TokenKind::RParen => match self.matching {
                    ParenMatching::Balanced => {
                        return Err(ParseError::UnexpectedToken { token:    token.text.clone(),
                                                                 position: token.position, });
                    },
                    ParenMatching::FirstClose => i += 1,
                },
            }
        }

        assembly.finish(end)
    }
}

/// Reads the value of an `Integer` token.
///
/// # Errors
/// `LiteralTooLarge` if the text does not fit into an `i64`.
pub fn integer_value(token: &Token) -> ParseResult<i64> {
    token.text
         .parse()
         .map_err(|_| ParseError::LiteralTooLarge { position: token.position })
}

fn integer_literal(token: &Token) -> ParseResult<Expr> {
    Ok(Expr::Literal { value:    integer_value(token)?,
                       position: token.position, })
}
