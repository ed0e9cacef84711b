#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Arithmetic operation overflowed.
    Overflow {
        /// Byte offset of the operator in the source text.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset in the source text the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
