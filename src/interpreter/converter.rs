use tracing::trace;

use crate::interpreter::{
    lexer::{Token, format_tokens},
    operator::symbol_precedence,
};

/// Converts an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm with an explicit operator stack:
///
/// - numbers go straight to the output,
/// - an operator first pops every stacked operator of greater or equal
///   precedence, then is pushed itself; all operators, `^` included, are
///   left-associative,
/// - `(` is pushed, and `)` pops operators until the matching `(`, which is
///   dropped.
///
/// Mismatched parentheses are tolerated. A `)` with no matching `(` is
/// ignored. A `(` that is never closed is flushed to the output along with the
/// remaining operators, where the evaluator rejects it. The conversion itself
/// never fails.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     converter::to_postfix,
///     lexer::{format_tokens, tokenize},
/// };
///
/// let postfix = to_postfix(&tokenize("(2 + 3) * 4 ^ 2"));
/// assert_eq!(format_tokens(&postfix), "2 3 + 4 2 ^ *");
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(symbol) => {
                let precedence = symbol_precedence(symbol);
                while let Some(&Token::Operator(top_symbol)) = stack.last()
                      && symbol_precedence(top_symbol) >= precedence
                {
                    stack.pop();
                    output.push(Token::Operator(top_symbol));
                }
                stack.push(token);
            },
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LeftParen {
                        break;
                    }
                    output.push(top);
                }
            },
        }
        trace!("after {token}: stack [{}]", format_tokens(&stack));
    }

    output.extend(stack.into_iter().rev());

    output
}
