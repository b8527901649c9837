/// Evaluation errors.
///
/// Contains every error that can be raised while evaluating a postfix token
/// sequence. The validator, lexer and converter never fail, so this is the
/// only error type the library exposes.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
