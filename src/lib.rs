//! # sumexpr
//!
//! sumexpr is an interpreter for additive integer expressions written in Rust.
//! It lexes, parses and evaluates expressions made of integers, `+`, `-`,
//! parentheses and single-letter variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::evaluate,
        lexer::{TokenListing, lex},
        parser::core::{ParenMatching, parse_with},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as an owned tree. The tree is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal and binary operation nodes.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees back into parenthesised infix text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression. Every error carries the byte position in the
/// source text it refers to.
///
/// # Responsibilities
/// - Defines error enums for each phase (lexer and parser, evaluator).
/// - Wraps them in `CalcError` so phases compose with `?`.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates the process of turning text into values.
///
/// This module ties together lexing, parsing, evaluation and the fused
/// fail-soft processor.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for both the strict and the fail-soft variant.
pub mod interpreter;

pub use crate::interpreter::{lexer::Variables, processor::ExpressionProcessor};

/// Lexes, parses and evaluates `source` in one go.
///
/// Variables are not available here; use [`ExpressionProcessor`] for those.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use sumexpr::{calc, interpreter::parser::core::ParenMatching};
///
/// assert_eq!(calc("(13+4)-(12+1)", ParenMatching::Balanced).unwrap(), 4);
///
/// // Operator without a right operand.
/// assert!(calc("1+", ParenMatching::Balanced).is_err());
/// ```
pub fn calc(source: &str, matching: ParenMatching) -> Result<i64, CalcError> {
    let tokens = lex(source)?;
    let expr = parse_with(&tokens, matching)?;
    Ok(evaluate(&expr)?)
}

/// Returns a transcript of the evaluation of `source`.
///
/// The first line lists the tokens in backticks separated by single spaces,
/// the second line reads `<source> = <value>`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use sumexpr::{describe, interpreter::parser::core::ParenMatching};
///
/// let transcript = describe("12-(3+4)", ParenMatching::Balanced).unwrap();
/// assert_eq!(transcript, "`12` `-` `(` `3` `+` `4` `)`\n12-(3+4) = 5");
/// ```
pub fn describe(source: &str, matching: ParenMatching) -> Result<String, CalcError> {
    let tokens = lex(source)?;
    let value = evaluate(&parse_with(&tokens, matching)?)?;

    Ok(format!("{}\n{source} = {value}", TokenListing(&tokens)))
}
