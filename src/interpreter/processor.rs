use log::debug;

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::binary::eval_binary,
        lexer::{Token, TokenKind, Variables, lex_with},
        parser::{binary::token_to_binary_operator, core::integer_value},
    },
};

/// Evaluates flat additive expressions over single-letter variables.
///
/// Grammar: `operand (("+" | "-") operand)*` with
/// `operand := integer | variable`. There are no parentheses. The value is
/// accumulated left to right without building a tree.
///
/// The variables may be changed freely between calculations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionProcessor {
    /// Values of the single-letter variables usable in expressions.
    pub variables: Variables,
}

impl ExpressionProcessor {
    /// Creates a processor without any variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with the given variables.
    #[must_use]
    pub fn with_variables(variables: Variables) -> Self {
        Self { variables }
    }

    /// Evaluates `expression`, reporting why it failed if it does.
    ///
    /// # Errors
    /// - Any lexing error, e.g. unknown or multi-letter variables.
    /// - `UnexpectedToken` for parentheses or misplaced operators.
    /// - `MissingOperator` for two operands in a row.
    /// - `UnexpectedEndOfInput` for empty input or a trailing operator.
    /// - `Overflow` if the running total leaves the `i64` range.
    pub fn try_calculate(&self, expression: &str) -> Result<i64, CalcError> {
        let tokens = lex_with(expression, &self.variables)?;
        let end = expression.len();
        let mut tokens = tokens.iter();

        let first = tokens.next()
                          .ok_or(ParseError::UnexpectedEndOfInput { position: end })?;
        let mut value = operand_value(first)?;

        while let Some(token) = tokens.next() {
            let op = match token.kind {
                TokenKind::Integer => {
                    return Err(ParseError::MissingOperator { position: token.position }.into());
                },
                kind => token_to_binary_operator(kind).ok_or_else(|| unexpected(token))?,
            };
            let operand = tokens.next()
                                .ok_or(ParseError::UnexpectedEndOfInput { position: end })?;
            value = eval_binary(op, value, operand_value(operand)?, token.position)?;
        }

        Ok(value)
    }

    /// Evaluates `expression`, yielding `0` on any failure.
    ///
    /// A failed calculation cannot be told apart from an expression that
    /// evaluates to zero; use [`try_calculate`](Self::try_calculate) when the
    /// difference matters.
    ///
    /// # Example
    /// ```
    /// use sumexpr::interpreter::processor::ExpressionProcessor;
    ///
    /// let mut processor = ExpressionProcessor::new();
    /// processor.variables.insert('x', 5);
    ///
    /// assert_eq!(processor.calculate("1+x"), 6);
    /// assert_eq!(processor.calculate("1+xy"), 0);
    /// assert_eq!(processor.calculate("1+y"), 0);
    /// ```
    #[must_use]
    pub fn calculate(&self, expression: &str) -> i64 {
        self.try_calculate(expression).unwrap_or_else(|e| {
                                          debug!("calculation of {expression:?} yields 0: {e}");
                                          0
                                      })
    }
}

/// Evaluates `expression` once against `variables`, yielding `0` on any
/// failure.
#[must_use]
pub fn calculate(expression: &str, variables: &Variables) -> i64 {
    ExpressionProcessor::with_variables(variables.clone()).calculate(expression)
}

fn operand_value(token: &Token) -> Result<i64, ParseError> {
    match token.kind {
        TokenKind::Integer => integer_value(token),
        _ => Err(unexpected(token)),
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken { token:    token.text.clone(),
                                  position: token.position, }
}
