/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: unexpected tokens, unbalanced parentheses, unresolved
/// variables and literals that do not fit into an `i64`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating an expression
/// tree, currently arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure while turning source text into a value.
///
/// Wraps the phase specific errors so that `?` can be used across lexing,
/// parsing and evaluation in a single function.
pub enum CalcError {
    /// Lexing or parsing failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns the byte offset in the source text the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
