use thiserror::Error;

/// Error type for the relaycalc crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A character outside of the accepted alphabet
    #[error("LexError: unexpected character in input: {character:?} at position {position}")]
    LexError {
        /// The offending character
        character: char,
        /// Its index in the input, whitespace removed
        position: usize,
    },
    /// Unmatched parenthesis or misplaced operator
    #[error("SyntaxError: {0}")]
    SyntaxError(String),
    /// The postfix sequence could not be reduced to a single value
    #[error("EvalError: {0}")]
    EvalError(String),
    /// Division with a right operand exactly equal to zero
    #[error("DivisionByZero: division by zero is not allowed")]
    DivisionByZero,
    /// A response was lost, duplicated or misaddressed
    #[error("ProtocolError: {0}")]
    ProtocolError(String),
}

/// Failure value returned by [`evaluate_text`](fn.evaluate_text.html)
pub type EvalFailure = Error;
