use std::collections::HashMap;

use log::{debug, trace};
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Maps single-letter variable names to their values.
pub type Variables = HashMap<char, i64>;

/// The kind of a lexical token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer, either a digit run or a resolved variable.
    ///
    /// A digit run's text is digits only. A resolved variable's text is the
    /// value in decimal, so a negative variable yields text such as `-5`.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// `text` is the exact substring matched, except for resolved variables where
/// it holds the decimal rendering of the variable's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The text of the token.
    pub text:     String,
    /// Byte offset in the source text.
    pub position: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }
}

/// Renders the token text in backticks so that stray whitespace is visible.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}`", self.text)
    }
}

/// Lists tokens in backticks, separated by single spaces.
///
/// # Example
/// ```
/// use sumexpr::interpreter::lexer::{TokenListing, lex};
///
/// let tokens = lex("1+(2)").unwrap();
/// assert_eq!(TokenListing(&tokens).to_string(), "`1` `+` `(` `2` `)`");
/// ```
pub struct TokenListing<'a>(pub &'a [Token]);

impl std::fmt::Display for TokenListing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Character classes recognised by the scanner.
///
/// Anything that is not a digit, an operator, a parenthesis or whitespace is
/// part of a name run; names are resolved against the variables afterwards.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Digits,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"[^0-9+\-() \t\r\n\f]+")]
    Name,
}

/// Tokenizes `input` without any variables defined.
///
/// Any name in the input is therefore reported as an error.
///
/// # Example
/// ```
/// use sumexpr::interpreter::lexer::lex;
///
/// let tokens = lex("123+4").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["123", "+", "4"]);
/// ```
pub fn lex(input: &str) -> ParseResult<Vec<Token>> {
    lex_with(input, &Variables::new())
}

/// Tokenizes `input`, resolving single-letter names through `variables`.
///
/// A resolved name becomes an `Integer` token carrying the variable's value.
///
/// # Errors
/// - `UnknownVariable` if a single-letter name is not in `variables`.
/// - `InvalidVariableName` if a name is longer than one letter.
pub fn lex_with(input: &str, variables: &Variables) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(input);

    while let Some(raw) = lexer.next() {
        let slice = lexer.slice();
        let position = lexer.span().start;
        let kind = match raw {
            Ok(RawToken::Digits) => TokenKind::Integer,
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => TokenKind::Minus,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Name) => {
                let token = resolve_variable(slice, position, variables)?;
                trace!("resolved {slice:?} to {}", token.text);
                tokens.push(token);
                continue;
            },
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         position });
            },
        };
        trace!("{kind:?} {slice:?} at {position}");
        tokens.push(Token::new(kind, slice, position));
    }

    debug!("lexed {} tokens from {input:?}", tokens.len());
    Ok(tokens)
}

fn resolve_variable(name: &str, position: usize, variables: &Variables) -> ParseResult<Token> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => {
            variables.get(&letter)
                     .map(|value| Token::new(TokenKind::Integer, value.to_string(), position))
                     .ok_or(ParseError::UnknownVariable { name: letter,
                                                          position })
        },
        _ => Err(ParseError::InvalidVariableName { name: name.to_string(),
                                                   position }),
    }
}
