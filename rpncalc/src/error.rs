use thiserror::Error;

/// Every way an expression can be rejected.
///
/// Each phase fails on the first problem it finds and the error travels up
/// through [`crate::evaluate`] untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Source holds something other than digits, `+ - * /`, parens or spaces.
    #[error("invalid expression: unexpected {0:?}")]
    InvalidExpression(String),

    #[error("mismatched parentheses")]
    MismatchedParentheses,

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("invalid expression: not enough operands")]
    NotEnoughOperands,

    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown operator: {0}")]
    UnknownOperator(char),

    /// Evaluation left this many values on the stack instead of one.
    #[error("invalid expression: {0} results left on the stack")]
    IncorrectResultCount(usize),
}
