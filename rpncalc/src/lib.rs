//! Integer arithmetic evaluation: tokenize, reorder into Reverse Polish
//! Notation with the shunting-yard algorithm, then run it on a value stack.
//!
//! ```
//! assert_eq!(rpncalc::evaluate("(100 + 200) * 2"), Ok(600));
//! assert_eq!(rpncalc::evaluate("4 / 0"), Err(rpncalc::Error::DivisionByZero));
//! ```

use tracing::debug;

pub use error::Error;
pub use parser::{precedence, tokenize, RPNExpr, ShuntingParser, Token};

mod error;
pub mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;

mod rpnprint;

/// Evaluate an infix expression over non-negative integer literals,
/// `+ - * /` and parentheses. The first error from any phase is returned
/// as is.
pub fn evaluate(expr: &str) -> Result<i64, Error> {
    ShuntingParser::parse_str(expr)
        .and_then(|rpn| rpn.eval())
        .inspect_err(|e| debug!(error = %e, expr, "expression rejected"))
}
