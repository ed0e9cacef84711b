/// The evaluator module folds expression trees into integers.
///
/// The evaluator traverses the AST bottom-up and applies each operator with
/// overflow checks. It has no state of its own.
///
/// # Responsibilities
/// - Evaluates literal and binary operation nodes.
/// - Reports arithmetic overflow with the operator position.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw text in a single left-to-right pass and produces
/// integer, operator and parenthesis tokens. Single-letter names are resolved
/// against caller supplied variables while scanning.
///
/// # Responsibilities
/// - Groups digit runs into single integer tokens.
/// - Resolves variables and rejects unknown or multi-letter names.
/// - Records the byte position of each token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the token sequence, recursing into parenthesised groups,
/// and assembles left-associative binary operations.
///
/// # Responsibilities
/// - Converts tokens into owned `Expr` trees.
/// - Pairs parentheses, either depth-balanced or with the first-close scan.
/// - Reports malformed token sequences with their position.
pub mod parser;
/// The processor module evaluates flat expressions with variables.
///
/// It fuses lexing and left-to-right accumulation for the restricted grammar
/// without parentheses and offers a fail-soft entry point that yields zero on
/// any error.
pub mod processor;
