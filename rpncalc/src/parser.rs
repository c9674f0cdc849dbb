use std::ops::Deref;

use lexers::ArithTokenizer;
use tracing::{debug, trace};

use crate::error::Error;

pub use lexers::ArithToken as Token;

/// Binding strength of each binary operator, `None` for unknown symbols.
/// Equal precedence resolves left to right.
pub fn precedence(op: char) -> Option<usize> {
    match op {
        '+' | '-' => Some(1),
        '*' | '/' => Some(2),
        _ => None,
    }
}

pub(crate) fn lexeme(token: &Token) -> String {
    match token {
        Token::Number(n) => n.to_string(),
        Token::Op(op) => op.to_string(),
        Token::OParen => format!("("),
        Token::CParen => format!(")"),
        Token::Unknown(lexeme) => lexeme.clone(),
    }
}

/// Split `source` into tokens, failing on the first lexeme that isn't a
/// number, an operator or a paren.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    for token in ArithTokenizer::new(source.chars()) {
        if let Token::Unknown(lexeme) = token {
            debug!(%lexeme, "tokenizer rejected source");
            return Err(Error::InvalidExpression(lexeme));
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// An expression in postfix order, as produced by [`ShuntingParser`].
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, Error> {
        Self::parse(tokenize(expr)?)
    }

    /// Reorder infix tokens into postfix with Dijkstra's shunting-yard.
    ///
    /// Accepts any token source, so a raw [`ArithTokenizer`] stream works
    /// too; lexemes it couldn't classify surface as `UnknownToken`.
    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, Error> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            trace!(?token, depth = stack.len(), "shunting");
            match token {
                Token::Number(_) => out.push(token),
                Token::OParen => stack.push(token),
                Token::CParen => loop {
                    match stack.pop() {
                        Some(Token::OParen) => break, // peel matching OParen
                        Some(op) => out.push(op),
                        None => return Err(Error::MismatchedParentheses),
                    }
                },
                Token::Op(op) => {
                    let prec_rhs = precedence(op).ok_or_else(|| Error::UnknownToken(lexeme(&token)))?;
                    // an OParen on the stack stops the popping
                    while let Some(&Token::Op(top)) = stack.last() {
                        match precedence(top) {
                            Some(prec_lhs) if prec_lhs >= prec_rhs => {
                                stack.pop();
                                out.push(Token::Op(top));
                            }
                            _ => break,
                        }
                    }
                    stack.push(token);
                }
                Token::Unknown(lexeme) => return Err(Error::UnknownToken(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(Error::MismatchedParentheses),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!(%rpn, "converted to rpn");
        Ok(rpn)
    }
}
