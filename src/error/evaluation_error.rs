#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvaluationError {
    /// Tried to divide by zero.
    DivisionByZero {
        /// The left operand of the division.
        dividend: f64,
    },
    /// An operator was reached with fewer than two pending operands.
    StackUnderflow {
        /// The symbol of the operator that was starved.
        operator: char,
    },
    /// A token carried a symbol that is not one of `+ - * / ^`.
    UnknownOperator {
        /// The offending symbol.
        symbol: char,
    },
    /// An operation produced a result that is not a finite real number.
    DomainError {
        /// The base of the exponentiation.
        base:     f64,
        /// The exponent of the exponentiation.
        exponent: f64,
    },
    /// The value stack did not hold exactly one value after evaluation.
    MalformedExpression {
        /// How many values were left on the stack.
        remaining: usize,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Error: Division by zero ({dividend} / 0).")
            },
            Self::StackUnderflow { operator } => {
                write!(f, "Error: Operator '{operator}' is missing an operand.")
            },
            Self::UnknownOperator { symbol } => {
                write!(f, "Error: Unknown operator '{symbol}'.")
            },
            Self::DomainError { base, exponent } => {
                write!(f, "Error: {base} ^ {exponent} is not a finite real number.")
            },
            Self::MalformedExpression { remaining: 0 } => {
                write!(f, "Error: Expression is empty.")
            },
            Self::MalformedExpression { remaining } => {
                write!(f,
                       "Error: Malformed expression, {remaining} values left without an \
                        operator.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
