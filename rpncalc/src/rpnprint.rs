use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::parser::{lexeme, precedence, RPNExpr, Token};

#[derive(Debug, Clone)]
enum AST {
    Leaf(i64),
    Node {
        op: char,
        prec: usize,
        lhs: Box<AST>,
        rhs: Box<AST>,
    },
}

impl AST {
    fn prec(&self) -> usize {
        match self {
            AST::Leaf(_) => usize::MAX,
            AST::Node { prec, .. } => *prec,
        }
    }
}

impl RPNExpr {
    // Rebuild the operator tree, rejecting what evaluation would reject
    fn build_ast(&self) -> Result<AST, Error> {
        let mut nodes = Vec::new();
        for token in self.iter() {
            match *token {
                Token::Number(n) => nodes.push(AST::Leaf(n)),
                Token::Op(op) => {
                    if nodes.len() < 2 {
                        return Err(Error::NotEnoughOperands);
                    }
                    let prec = precedence(op).ok_or(Error::UnknownOperator(op))?;
                    let rhs = Box::new(nodes.pop().ok_or(Error::NotEnoughOperands)?);
                    let lhs = Box::new(nodes.pop().ok_or(Error::NotEnoughOperands)?);
                    nodes.push(AST::Node { op, prec, lhs, rhs });
                }
                _ => return Err(Error::UnknownToken(lexeme(token))),
            }
        }
        match nodes.len() {
            1 => nodes.pop().ok_or(Error::IncorrectResultCount(0)),
            n => Err(Error::IncorrectResultCount(n)),
        }
    }

    /// Render back to infix using as few parens as the grouping allows.
    ///
    /// Operators associate to the left, so a right operand of equal
    /// precedence keeps its parens: `2 - (3 - 4)` survives, `(2 - 3) - 4`
    /// prints as `2 - 3 - 4`.
    pub fn to_infix(&self) -> Result<String, Error> {
        fn printer(root: &AST) -> String {
            match root {
                AST::Leaf(n) => n.to_string(),
                AST::Node { op, prec, lhs, rhs } => {
                    let lh = if lhs.prec() < *prec {
                        format!("({})", printer(lhs))
                    } else {
                        printer(lhs)
                    };
                    let rh = if rhs.prec() <= *prec {
                        format!("({})", printer(rhs))
                    } else {
                        printer(rhs)
                    };
                    format!("{} {} {}", lh, op, rh)
                }
            }
        }

        Ok(printer(&self.build_ast()?))
    }
}

/// Space separated postfix, e.g. `3 4 2 * +`.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = self.iter().map(lexeme).collect::<Vec<String>>();
        write!(f, "{}", fields.join(" "))
    }
}

/// Parses the space separated form written by `Display`.
impl FromStr for RPNExpr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(|field| {
                let mut chars = field.chars();
                match (chars.next(), chars.next()) {
                    (Some(op), None) if precedence(op).is_some() => Ok(Token::Op(op)),
                    _ if field.bytes().all(|b| b.is_ascii_digit()) => field
                        .parse::<i64>()
                        .map(Token::Number)
                        .map_err(|_| Error::UnknownToken(field.to_string())),
                    _ => Err(Error::UnknownToken(field.to_string())),
                }
            })
            .collect::<Result<Vec<Token>, Error>>()
            .map(RPNExpr)
    }
}
