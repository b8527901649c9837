use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use proptest::prelude::*;
use rpncalc::{
    EvaluationError, Token, calc, interpreter::{converter::to_postfix, operator::Operator},
    is_valid, tokenize,
};

/// Numbers and operators, ignoring parentheses.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Item {
    Number(OrderedFloat<f64>),
    Operator(char),
}

fn multiset(tokens: &[Token]) -> BTreeMap<Item, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        let item = match *token {
            Token::Number(value) => Item::Number(OrderedFloat(value)),
            Token::Operator(symbol) => Item::Operator(symbol),
            Token::LeftParen | Token::RightParen => continue,
        };
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn signed_number() -> impl Strategy<Value = String> {
    (prop::sample::select(vec!["", "+", "-"]), 0u32..100_000, prop::option::of(0u32..1000))
        .prop_map(|(sign, whole, fraction)| match fraction {
            Some(fraction) => format!("{sign}{whole}.{fraction}"),
            None => format!("{sign}{whole}"),
        })
}

/// Strings of the shape `number (op number)*` with random spacing.
fn flat_expression() -> impl Strategy<Value = String> {
    (signed_number(),
     prop::collection::vec((" {0,2}", operator(), " {0,2}", signed_number()), 0..8))
        .prop_map(|(first, rest)| {
            let mut out = first;
            for (before, op, after, number) in rest {
                out.push_str(&before);
                out.push(op.symbol());
                out.push_str(&after);
                out.push_str(&number);
            }
            out
        })
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn simple_binary_expression_is_correct(a in 0.0f64..1e6, op in operator(), b in 0.0f64..1e3) {
        let src = format!("{a} {} {b}", op.symbol());
        let result = calc(&src);

        match op {
            Operator::Div if b == 0.0 => {
                prop_assert_eq!(result, Err(EvaluationError::DivisionByZero { dividend: a }));
            },
            Operator::Pow if !a.powf(b).is_finite() => {
                prop_assert_eq!(result, Err(EvaluationError::DomainError { base: a, exponent: b }));
            },
            _ => {
                let expected = match op {
                    Operator::Add => a + b,
                    Operator::Sub => a - b,
                    Operator::Mul => a * b,
                    Operator::Div => a / b,
                    Operator::Pow => a.powf(b),
                };
                let value = result.map_err(|e| TestCaseError::fail(format!("{src:?}: {e}")))?;
                prop_assert!(approx_eq(value, expected),
                             "{:?} gave {}, expected {}",
                             src,
                             value,
                             expected);
            },
        }
    }

    #[test]
    fn calc_is_idempotent(src in "[0-9+*/^() .-]{0,24}") {
        prop_assert_eq!(format!("{:?}", calc(&src)), format!("{:?}", calc(&src)));
    }

    #[test]
    fn validator_accepts_generated_flat_expressions(src in flat_expression()) {
        prop_assert!(is_valid(&src), "{:?} was rejected", src);
    }

    #[test]
    fn conversion_preserves_numbers_and_operators(src in flat_expression()) {
        prop_assume!(is_valid(&src));
        let tokens = tokenize(&src);
        let converted = to_postfix(&tokens);

        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(multiset(&converted), multiset(&tokens));
    }

    #[test]
    fn conversion_keeps_only_unclosed_parentheses(src in "[0-9()+*/^ -]{0,32}") {
        let tokens = tokenize(&src);
        let converted = to_postfix(&tokens);

        let mut depth = 0_usize;
        for token in &tokens {
            match token {
                Token::LeftParen => depth += 1,
                Token::RightParen => depth = depth.saturating_sub(1),
                _ => {},
            }
        }

        prop_assert_eq!(multiset(&converted), multiset(&tokens));
        prop_assert!(!converted.contains(&Token::RightParen));
        prop_assert_eq!(converted.iter().filter(|t| **t == Token::LeftParen).count(), depth);
    }
}
