//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions such as `(2 + 3) * 4 ^ 2`.
//! Input text is tokenized, reordered into postfix notation with the
//! shunting-yard algorithm and evaluated on a value stack.
//!
//! Every stage is a free function over borrowed input, so the pipeline holds
//! no state between calls.

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

use tracing::debug;

/// Provides the error type of the evaluation pipeline.
///
/// Only the evaluator can fail, so this module defines a single error enum
/// describing everything that can go wrong while computing a result.
///
/// # Responsibilities
/// - Names every failure mode: division by zero, missing operands, unknown
///   operators, non-finite powers and leftover values.
/// - Implements `Display` and `std::error::Error` for user feedback.
pub mod error;
/// Holds the four pipeline stages.
///
/// This module ties together the validator, lexer, converter and evaluator.
/// Each stage consumes the output of the previous one.
///
/// # Responsibilities
/// - Validates raw input by shape.
/// - Converts text to tokens and tokens to postfix order.
/// - Evaluates postfix sequences to a number.
pub mod interpreter;

pub use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::{EvalResult, evaluate},
        lexer::{Token, format_tokens, tokenize},
        validator::is_valid,
    },
};
use crate::interpreter::converter::to_postfix;

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized, converted to postfix order and evaluated. It is
/// not passed through [`is_valid`] first; call it yourself if you want the
/// shape check.
///
/// # Errors
/// Returns an [`EvaluationError`] if the expression cannot be evaluated, for
/// example on division by zero or an operator with a missing operand.
///
/// # Examples
/// ```
/// use rpncalc::{EvaluationError, calc};
///
/// assert_eq!(calc("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(calc("(2 + 3) * 4"), Ok(20.0));
///
/// // Exponentiation groups to the left.
/// assert_eq!(calc("2 ^ 3 ^ 2"), Ok(64.0));
///
/// assert_eq!(calc("10 / 0"),
///            Err(EvaluationError::DivisionByZero { dividend: 10.0 }));
/// ```
pub fn calc(expr: &str) -> EvalResult<f64> {
    let tokens = postfix(expr);
    debug!("calc {expr:?}: postfix [{}]", format_tokens(&tokens));
    evaluate(&tokens)
}

/// Returns the postfix form of an expression without evaluating it.
///
/// # Example
/// ```
/// use rpncalc::{format_tokens, postfix};
///
/// assert_eq!(format_tokens(&postfix("1 - 2 - 3")), "1 2 - 3 -");
/// ```
#[must_use]
pub fn postfix(expr: &str) -> Vec<Token> {
    to_postfix(&tokenize(expr))
}
