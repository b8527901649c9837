use tracing::trace;

use crate::{
    error::EvaluationError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates a postfix token sequence with a value stack.
///
/// Numbers are pushed. An operator pops its right operand `b`, then its left
/// operand `a`, and pushes `a op b`. Exactly one value must be left on the
/// stack at the end; it is the result.
///
/// # Errors
/// - `UnknownOperator` if a token is not a number or one of the five
///   operators. Parentheses are reported this way too.
/// - `StackUnderflow` if an operator has fewer than two operands.
/// - `DivisionByZero` if a divisor is zero.
/// - `DomainError` if an exponentiation is not a finite real number.
/// - `MalformedExpression` if zero or several values remain.
///
/// # Example
/// ```
/// use rpncalc::{
///     error::EvaluationError,
///     interpreter::{evaluator::evaluate, lexer::Token},
/// };
///
/// let postfix = [Token::Number(7.0), Token::Number(2.0), Token::Operator('-')];
/// assert_eq!(evaluate(&postfix), Ok(5.0));
///
/// let starved = [Token::Number(7.0), Token::Operator('-')];
/// assert_eq!(evaluate(&starved),
///            Err(EvaluationError::StackUnderflow { operator: '-' }));
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for &token in postfix {
        let op = match token {
            Token::Number(value) => {
                stack.push(value);
                continue;
            },
            Token::Operator(symbol) => {
                Operator::from_symbol(symbol).ok_or(EvaluationError::UnknownOperator { symbol })?
            },
            Token::LeftParen => return Err(EvaluationError::UnknownOperator { symbol: '(' }),
            Token::RightParen => return Err(EvaluationError::UnknownOperator { symbol: ')' }),
        };

        let underflow = EvaluationError::StackUnderflow { operator: op.symbol() };
        let b = stack.pop().ok_or_else(|| underflow.clone())?;
        let a = stack.pop().ok_or(underflow)?;
        let result = apply(op, a, b)?;
        trace!("{a} {} {b} = {result}", op.symbol());
        stack.push(result);
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        rest => Err(EvaluationError::MalformedExpression { remaining: rest.len() }),
    }
}

/// Applies a single binary operator to `a` and `b`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{evaluator::apply, operator::Operator};
///
/// assert_eq!(apply(Operator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert!(apply(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply(op: Operator, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero { dividend: a });
            }
            Ok(a / b)
        },
        Operator::Pow => {
            let result = a.powf(b);
            if result.is_finite() {
                Ok(result)
            } else {
                Err(EvaluationError::DomainError { base: a, exponent: b })
            }
        },
    }
}
