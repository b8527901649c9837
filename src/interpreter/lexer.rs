use std::fmt;

use tracing::trace;
use logos::Logos;

/// Represents a lexical token of an arithmetic expression.
///
/// Tokens are plain values: they are `Copy`, never change once produced and
/// carry no source position.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// One of `+`, `-`, `*`, `/` or `^`.
    #[token("+", |_| '+')]
    #[token("-", |_| '-')]
    #[token("*", |_| '*')]
    #[token("/", |_| '/')]
    #[token("^", |_| '^')]
    Operator(char),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Splits an expression into tokens, in source order.
///
/// Whitespace, and any character that does not belong to a number, an
/// operator or a parenthesis, is dropped without producing a token. This
/// function therefore never fails; garbage in the input only shows up later as
/// an evaluation error.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * (1.5 + x)");
/// assert_eq!(tokens,
///            vec![Token::Number(2.0),
///                 Token::Operator('*'),
///                 Token::LeftParen,
///                 Token::Number(1.5),
///                 Token::Operator('+'),
///                 Token::RightParen]);
/// ```
#[must_use]
pub fn tokenize(expr: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expr);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => trace!("skipping unrecognized input {:?}", lexer.slice()),
        }
    }

    tokens
}

/// Renders a token sequence as space separated text, e.g. `2 3 4 * +`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::{format_tokens, tokenize};
///
/// assert_eq!(format_tokens(&tokenize("(1+2)*3")), "( 1 + 2 ) * 3");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float or is too long to be finite,
///   which makes logos report an error for it.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
}
