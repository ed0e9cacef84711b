use proptest::prelude::*;
use sumexpr::{
    ExpressionProcessor, Variables, calc,
    interpreter::{
        lexer::lex,
        parser::core::{ParenMatching, parse_with},
        processor::calculate,
    },
};

/// A flat expression over small operands together with its value.
fn flat_expression() -> impl Strategy<Value = (String, i64)> {
    let rest = prop::collection::vec((any::<bool>(), 0i64..10_000), 0..12);
    (0i64..10_000, rest).prop_map(|(first, rest)| {
        let mut source = first.to_string();
        let mut value = first;
        for (add, operand) in rest {
            source.push(if add { '+' } else { '-' });
            source.push_str(&operand.to_string());
            value = if add { value + operand } else { value - operand };
        }
        (source, value)
    })
}

proptest! {
    #[test]
    fn literals_evaluate_to_themselves(a in 0..=i64::MAX) {
        prop_assert_eq!(calculate(&a.to_string(), &Variables::new()), a);
    }

    #[test]
    fn two_operands_add_and_subtract(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000) {
        prop_assert_eq!(calculate(&format!("{a}+{b}"), &Variables::new()), a + b);
        prop_assert_eq!(calculate(&format!("{a}-{b}"), &Variables::new()), a - b);
    }

    #[test]
    fn strict_and_soft_variants_agree((source, value) in flat_expression()) {
        prop_assert_eq!(calc(&source, ParenMatching::Balanced), Ok(value));
        prop_assert_eq!(ExpressionProcessor::new().calculate(&source), value);
    }

    #[test]
    fn variables_substitute_like_literals(x in -1_000i64..1_000, y in 0i64..1_000) {
        let vars: Variables = [('x', x)].into_iter().collect();
        prop_assert_eq!(calculate(&format!("x+{y}"), &vars), x + y);
        prop_assert_eq!(calculate(&format!("{y}-x"), &vars), y - x);
    }

    #[test]
    fn wrapping_in_parentheses_keeps_the_value((source, value) in flat_expression()) {
        prop_assert_eq!(calc(&format!("({source})"), ParenMatching::Balanced), Ok(value));
        prop_assert_eq!(calc(&format!("0+({source})"), ParenMatching::Balanced), Ok(value));
    }

    #[test]
    fn nesting_keeps_the_value((source, value) in flat_expression(), depth in 0usize..500) {
        let nested = format!("{}{source}{}", "(".repeat(depth), ")".repeat(depth));
        prop_assert_eq!(calc(&nested, ParenMatching::Balanced), Ok(value));
        prop_assert_eq!(calc(&nested, ParenMatching::FirstClose), Ok(value));

        let trailing = format!("{nested}+0");
        prop_assert_eq!(calc(&trailing, ParenMatching::Balanced), Ok(value));
    }

    #[test]
    fn long_flat_chains_agree(operands in prop::collection::vec(0i64..1_000, 1..5_000)) {
        let source = operands.iter().map(ToString::to_string).collect::<Vec<_>>().join("-");
        let value = operands[1..].iter().fold(operands[0], |total, operand| total - operand);

        prop_assert_eq!(calc(&source, ParenMatching::Balanced), Ok(value));
        prop_assert_eq!(ExpressionProcessor::new().calculate(&source), value);
    }

    #[test]
    fn lexing_and_parsing_are_deterministic(source in "[0-9+()-]{0,24}") {
        let first = lex(&source);
        let second = lex(&source);
        prop_assert_eq!(&first, &second);

        if let Ok(tokens) = first {
            for matching in [ParenMatching::Balanced, ParenMatching::FirstClose] {
                prop_assert_eq!(parse_with(&tokens, matching), parse_with(&tokens, matching));
            }
        }
    }
}
