/// The converter module reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm: an auxiliary operator stack
/// resolves precedence and parentheses so that the evaluator never has to.
///
/// # Responsibilities
/// - Emits numbers in source order and operators once their operands are out.
/// - Applies the left-associative pop rule to every operator.
/// - Absorbs mismatched parentheses instead of failing.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator walks the postfix tokens with a value stack and is the only
/// stage of the pipeline that can fail.
///
/// # Responsibilities
/// - Applies the arithmetic operators to `f64` operands.
/// - Reports division by zero, non-finite powers, missing operands and
///   leftover values.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces numbers, operators and
/// parentheses. Anything else is dropped on the floor.
pub mod lexer;
/// Operator symbols and their precedence.
pub mod operator;
/// The validator module performs a cheap shape check on raw input.
///
/// It answers whether a string looks like `number (op number)*` without
/// tokenizing it. It is an optional pre-check and is not part of `calc`.
pub mod validator;
