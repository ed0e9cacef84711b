use crate::interpreter::parser::core::MAX_NESTING_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that is not allowed at this point of the expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset in the source text.
        position: usize,
    },
    /// An opening parenthesis `(` has no matching `)`.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// Two operands followed each other without an operator in between.
    MissingOperator {
        /// Byte offset of the second operand.
        position: usize,
    },
    /// A single-letter variable is not defined.
    UnknownVariable {
        /// The name of the variable.
        name:     char,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A name longer than one letter was used where a variable was expected.
    InvalidVariableName {
        /// The offending name.
        name:     String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// Byte offset in the source text.
        position: usize,
    },
    /// Parentheses were nested deeper than the parser accepts.
    NestingTooDeep {
        /// Byte offset of the first `(` beyond the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset in the source text the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::MissingOperator { position }
            | Self::UnknownVariable { position, .. }
            | Self::InvalidVariableName { position, .. }
            | Self::LiteralTooLarge { position }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::MissingOperator { position } => write!(f,
                                                         "Error at position {position}: Expected '+' or '-' between operands."),

            Self::UnknownVariable { name, position } => {
                write!(f, "Error at position {position}: Unknown variable '{name}'.")
            },

            Self::InvalidVariableName { name, position } => write!(f,
                                                                   "Error at position {position}: '{name}' is not a valid variable name. Variables are single letters."),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },

            Self::NestingTooDeep { position } => write!(f,
                                                        "Error at position {position}: Parentheses are nested deeper than {MAX_NESTING_DEPTH} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
