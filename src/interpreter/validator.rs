use std::{iter::Peekable, str::Chars};

use crate::interpreter::operator::Operator;

/// Checks whether `input` has the shape of a flat arithmetic expression.
///
/// The accepted shape is a signed decimal number followed by any number of
/// `operator number` pairs, with optional whitespace around every element:
///
/// `ws* number (ws* op ws* number)* ws*` where `number := [+-]? digit+ ("."
/// digit+)?` and `ws` is ASCII whitespace.
///
/// Parentheses are not part of this shape, so parenthesized input is rejected
/// here even though [`crate::calc`] evaluates it. Balance and nesting are
/// never checked.
///
/// # Example
/// ```
/// use rpncalc::interpreter::validator::is_valid;
///
/// assert!(is_valid(" 1.5 * -2 ^ 3 "));
/// assert!(!is_valid("1 +"));
/// assert!(!is_valid("(1 + 2)"));
/// ```
#[must_use]
pub fn is_valid(input: &str) -> bool {
    let mut chars = input.chars().peekable();

    skip_whitespace(&mut chars);
    if !consume_number(&mut chars) {
        return false;
    }

    loop {
        skip_whitespace(&mut chars);
        match chars.next() {
            None => return true,
            Some(c) if Operator::from_symbol(c).is_some() => {
                skip_whitespace(&mut chars);
                if !consume_number(&mut chars) {
                    return false;
                }
            },
            Some(_) => return false,
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(char::is_ascii_whitespace).is_some() {}
}

/// Consumes `[+-]? digit+ ("." digit+)?`, returning whether it matched.
fn consume_number(chars: &mut Peekable<Chars<'_>>) -> bool {
    chars.next_if(|&c| c == '+' || c == '-');

    if consume_digits(chars) == 0 {
        return false;
    }
    if chars.next_if_eq(&'.').is_some() {
        return consume_digits(chars) > 0;
    }
    true
}

fn consume_digits(chars: &mut Peekable<Chars<'_>>) -> usize {
    let mut count = 0;
    while chars.next_if(char::is_ascii_digit).is_some() {
        count += 1;
    }
    count
}
