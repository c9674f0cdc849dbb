use tracing::{debug, trace};

use crate::error::Error;
use crate::parser::{lexeme, RPNExpr, Token};

// a is the left operand, b the right one
fn apply(op: char, a: i64, b: i64) -> Result<i64, Error> {
    match op {
        '+' => Ok(a.wrapping_add(b)),
        '-' => Ok(a.wrapping_sub(b)),
        '*' => Ok(a.wrapping_mul(b)),
        '/' if b == 0 => Err(Error::DivisionByZero),
        '/' => Ok(a.wrapping_div(b)),
        _ => Err(Error::UnknownOperator(op)),
    }
}

impl RPNExpr {
    /// Run the expression on a value stack.
    ///
    /// Division truncates toward zero and arithmetic wraps on overflow.
    /// The stack has to end up holding exactly one value.
    pub fn eval(&self) -> Result<i64, Error> {
        let mut operands = Vec::new();

        for token in self.iter() {
            match *token {
                Token::Number(num) => operands.push(num),
                Token::Op(op) => {
                    if operands.len() < 2 {
                        return Err(Error::NotEnoughOperands);
                    }
                    let b = operands.pop().ok_or(Error::NotEnoughOperands)?;
                    let a = operands.pop().ok_or(Error::NotEnoughOperands)?;
                    let value = apply(op, a, b)?;
                    trace!(%op, a, b, value, "applied");
                    operands.push(value);
                }
                _ => return Err(Error::UnknownToken(lexeme(token))),
            }
        }

        match operands[..] {
            [value] => {
                debug!(rpn = %self, value, "evaluated");
                Ok(value)
            }
            _ => Err(Error::IncorrectResultCount(operands.len())),
        }
    }
}
