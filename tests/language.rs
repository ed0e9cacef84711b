use std::fs;

use sumexpr::{
    ExpressionProcessor, Variables, calc, describe,
    ast::{BinaryOperator, Expr},
    error::{CalcError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{TokenKind, TokenListing, lex, lex_with},
        parser::core::{MAX_NESTING_DEPTH, ParenMatching, parse, parse_with},
        processor::calculate,
    },
};
use walkdir::WalkDir;

#[test]
fn demo_files_evaluate_as_stated() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_cases(&content) {
            count += 1;
            match calc(&source, ParenMatching::Balanced) {
                Ok(value) => assert_eq!(value, expected, "{source} in {path:?}"),
                Err(e) => panic!("Demo {source} in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No demo expressions found in demos");
}

/// Reads `expression = expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, i64)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (source, expected) =
                   line.rsplit_once('=')
                       .unwrap_or_else(|| panic!("Demo line without '=': {line}"));
               let expected = expected.trim()
                                      .parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"));
               (source.trim().to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match calc(src, ParenMatching::Balanced) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = calc(src, ParenMatching::Balanced) {
        panic!("Expression {src} evaluated to {value} but was expected to fail")
    }
}

fn variables(pairs: &[(char, i64)]) -> Variables {
    pairs.iter().copied().collect()
}

#[test]
fn basic_arithmetic() {
    assert_value("5", 5);
    assert_value("1+2", 3);
    assert_value("8-5", 3);
    assert_value("3-8", -5);
    assert_value("123+4", 127);
    assert_value(" 7 - 10 ", -3);
}

#[test]
fn chains_associate_to_the_left() {
    assert_value("10-2+3", 11);
    assert_value("10-2-3", 5);
    assert_value("1+2+3+4-10", 0);
}

#[test]
fn parenthesised_groups() {
    assert_value("(13+4)-(12+1)", 4);
    assert_value("(5)", 5);
    assert_value("10-(2+3)", 5);
    assert_value("((1+2))", 3);
    assert_value("1-(2-(3-4))", -2);
    assert_value("5-((1)+2)", 2);
}

#[test]
fn malformed_expressions_fail() {
    assert_failure("");
    assert_failure("+1");
    assert_failure("1++2");
    assert_failure("1+");
    assert_failure("1 2");
    assert_failure("(1+2");
    assert_failure(")1");
    assert_failure("()");
    assert_failure("(1+2)3");
    assert_failure("1+x");
}

#[test]
fn lexer_groups_digit_runs() {
    let tokens = lex("123+4").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();

    assert_eq!(texts, ["123", "+", "4"]);
    assert_eq!(kinds, [TokenKind::Integer, TokenKind::Plus, TokenKind::Integer]);
    assert_eq!(positions, [0, 3, 4]);
}

#[test]
fn lexer_skips_whitespace_and_keeps_positions() {
    let tokens = lex(" 1 +  (2)").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(positions, [1, 3, 6, 7, 8]);
    assert_eq!(kinds,
               [TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::LParen,
                TokenKind::Integer,
                TokenKind::RParen]);
}

#[test]
fn lexer_resolves_variables() {
    let tokens = lex_with("x-1", &variables(&[('x', 42)])).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[0].position, 0);
}

#[test]
fn lexer_rejects_unresolved_names() {
    assert_eq!(lex("1+x"),
               Err(ParseError::UnknownVariable { name:     'x',
                                                 position: 2, }));
    assert_eq!(lex("1+xy"),
               Err(ParseError::InvalidVariableName { name:     "xy".to_string(),
                                                     position: 2, }));
}

#[test]
fn parser_reports_positions() {
    assert_eq!(parse(&lex("+1").unwrap()),
               Err(ParseError::UnexpectedToken { token:    "+".to_string(),
                                                 position: 0, }));
    assert_eq!(parse(&lex("1 2").unwrap()),
               Err(ParseError::MissingOperator { position: 2 }));
    assert_eq!(parse(&lex("(1+2").unwrap()),
               Err(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(parse(&lex("1+").unwrap()),
               Err(ParseError::UnexpectedEndOfInput { position: 2 }));
    assert_eq!(parse(&lex("99999999999999999999").unwrap()),
               Err(ParseError::LiteralTooLarge { position: 0 }));
}

#[test]
fn parsed_trees_render_in_infix_form() {
    let expr = parse(&lex("(13+4)-(12+1)").unwrap()).unwrap();
    assert_eq!(expr.to_string(), "((13 + 4) - (12 + 1))");
    assert_eq!(expr.operator_count(), 3);

    let expr = parse(&lex("10-2+3").unwrap()).unwrap();
    assert_eq!(expr.to_string(), "((10 - 2) + 3)");
}

#[test]
fn overflow_is_a_runtime_error() {
    assert_eq!(calc("9223372036854775807+1", ParenMatching::Balanced),
               Err(CalcError::Runtime(RuntimeError::Overflow { position: 19 })));
    assert_value("9223372036854775807-1+1", i64::MAX);
}

#[test]
fn first_close_matching_pairs_with_the_next_paren() {
    let tokens = lex("5-((1)+2)").unwrap();
    let balanced = parse_with(&tokens, ParenMatching::Balanced).unwrap();
    let first_close = parse_with(&tokens, ParenMatching::FirstClose).unwrap();

    assert_eq!(balanced.to_string(), "(5 - (1 + 2))");
    assert_eq!(first_close.to_string(), "((5 - 1) + 2)");
    assert_eq!(calc("5-((1)+2)", ParenMatching::FirstClose).unwrap(), 6);
}

#[test]
fn first_close_matching_tolerates_unbalanced_input() {
    assert_eq!(calc("(1+2", ParenMatching::FirstClose).unwrap(), 3);
    assert_eq!(calc(")1", ParenMatching::FirstClose).unwrap(), 1);
    assert_eq!(calc("((1+2))", ParenMatching::FirstClose).unwrap(), 3);
    assert_eq!(calc("(13+4)-(12+1)", ParenMatching::FirstClose).unwrap(), 4);
}

#[test]
fn transcript_lists_tokens_and_result() {
    let transcript = describe("(13+4)-(12+1)", ParenMatching::Balanced).unwrap();
    assert_eq!(transcript,
               "`(` `13` `+` `4` `)` `-` `(` `12` `+` `1` `)`\n(13+4)-(12+1) = 4");
}

#[test]
fn processor_substitutes_variables() {
    assert_eq!(calculate("1+x", &variables(&[('x', 5)])), 6);
    assert_eq!(calculate("x+y-3", &variables(&[('x', 5), ('y', 7)])), 9);
    assert_eq!(calculate("1-x", &variables(&[('x', -5)])), 6);
    assert_eq!(calculate("10-2+3", &Variables::new()), 11);
    assert_eq!(calculate("1 + 2", &Variables::new()), 3);
}

#[test]
fn processor_yields_zero_on_failure() {
    let vars = Variables::new();

    assert_eq!(calculate("1+xy", &vars), 0);
    assert_eq!(calculate("1+x", &vars), 0);
    assert_eq!(calculate("", &vars), 0);
    assert_eq!(calculate("(1)", &vars), 0);
    assert_eq!(calculate("1+", &vars), 0);
    assert_eq!(calculate("9223372036854775807+1", &vars), 0);
}

#[test]
fn processor_reports_failures_explicitly() {
    let processor = ExpressionProcessor::new();

    assert_eq!(processor.try_calculate("1+"),
               Err(CalcError::Parse(ParseError::UnexpectedEndOfInput { position: 2 })));
    assert_eq!(processor.try_calculate("1 2"),
               Err(CalcError::Parse(ParseError::MissingOperator { position: 2 })));
    assert_eq!(processor.try_calculate("+1"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { token:    "+".to_string(),
                                                                  position: 0, })));
    assert_eq!(processor.try_calculate("1++2"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { token:    "+".to_string(),
                                                                  position: 2, })));
    assert_eq!(processor.try_calculate("(1)"),
               Err(CalcError::Parse(ParseError::UnexpectedToken { token:    "(".to_string(),
                                                                  position: 0, })));
    assert_eq!(processor.try_calculate("9223372036854775807+1"),
               Err(CalcError::Runtime(RuntimeError::Overflow { position: 19 })));
}

#[test]
fn processor_variables_change_between_calls() {
    let mut processor = ExpressionProcessor::new();
    processor.variables.insert('a', 1);
    assert_eq!(processor.calculate("a+a"), 2);

    processor.variables.insert('a', 10);
    assert_eq!(processor.calculate("a+a"), 20);

    processor.variables.clear();
    assert_eq!(processor.calculate("a+a"), 0);
}

fn nested(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    assert_value(&nested(MAX_NESTING_DEPTH, "1"), 1);
    assert_value(&nested(MAX_NESTING_DEPTH, "7-2+1"), 6);
    assert_eq!(calc(&nested(MAX_NESTING_DEPTH, "3"), ParenMatching::FirstClose), Ok(3));
}

#[test]
fn nesting_beyond_the_limit_fails_cleanly() {
    let source = nested(100_000, "1");

    for matching in [ParenMatching::Balanced, ParenMatching::FirstClose] {
        let err = calc(&source, matching).unwrap_err();
        assert_eq!(err,
                   CalcError::Parse(ParseError::NestingTooDeep { position: MAX_NESTING_DEPTH }));
        assert_eq!(err.position(), MAX_NESTING_DEPTH);
    }
}

#[test]
fn long_chains_evaluate() {
    let source = vec!["1"; 1_000_000].join("+");
    assert_value(&source, 1_000_000);

    let expr = parse(&lex(&source).unwrap()).unwrap();
    assert_eq!(expr.operator_count(), 999_999);
    assert_eq!(evaluate(&expr), Ok(1_000_000));
    assert!(expr.to_string().ends_with(" + 1) + 1)"));
    assert_eq!(expr, parse(&lex(&source).unwrap()).unwrap());
}

#[test]
fn deep_right_leaning_trees_evaluate() {
    let mut expr = Expr::Literal { value:    0,
                                   position: 0, };
    for _ in 0..1_000_000 {
        expr = Expr::BinaryOp { op:       BinaryOperator::Sub,
                                left:     Box::new(Expr::Literal { value:    1,
                                                                   position: 0, }),
                                right:    Box::new(expr),
                                position: 0, };
    }

    // 1-(1-(1-(...-0))) alternates between 1 and 0.
    assert_eq!(evaluate(&expr), Ok(0));
    assert_eq!(expr.operator_count(), 1_000_000);
}

#[test]
fn errors_report_their_position() {
    let err = calc("1+(2-", ParenMatching::Balanced).unwrap_err();
    assert_eq!(err.position(), 2);

    let err = ExpressionProcessor::new().try_calculate("12+ab").unwrap_err();
    assert_eq!(err.position(), 3);
}

#[test]
fn token_listing_matches_transcript() {
    let tokens = lex("(13+4)-(12+1)").unwrap();
    let transcript = describe("(13+4)-(12+1)", ParenMatching::Balanced).unwrap();

    assert_eq!(transcript.lines().next(), Some(TokenListing(&tokens).to_string().as_str()));
    assert_eq!(TokenListing(&[]).to_string(), "");
}

#[test]
fn negative_variables_resolve_to_signed_text() {
    let tokens = lex_with("x", &variables(&[('x', -5)])).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].text, "-5");
}
