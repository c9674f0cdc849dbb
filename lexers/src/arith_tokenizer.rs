#![deny(warnings)]

use crate::scanner::Scanner;

/// Lexical tokens of integer arithmetic.
///
/// `Unknown` carries any lexeme the tokenizer couldn't classify, it's left
/// to the consumer to decide how to reject it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ArithToken {
    Unknown(String),
    Number(i64),
    Op(char),
    OParen,
    CParen,
}

/// Splits a char stream into `ArithToken`s.
///
/// Digits are never signed: a `-` always comes out as `Op('-')`.
pub struct ArithTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer { src: Scanner::new(source) }
    }

    pub fn scanner(source: I) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }

    fn get_token(&mut self) -> Option<ArithToken> {
        self.src.ignore_ws();
        if let Some(op) = self.src.scan_arith_op() {
            match op {
                '(' => Some(ArithToken::OParen),
                ')' => Some(ArithToken::CParen),
                _ => Some(ArithToken::Op(op)),
            }
        } else if let Some(digits) = self.src.scan_digits() {
            // runs longer than i64 can hold are handed back as Unknown
            match digits.parse::<i64>() {
                Ok(n) => Some(ArithToken::Number(n)),
                Err(_) => Some(ArithToken::Unknown(digits)),
            }
        } else if self.src.next().is_some() {
            Some(ArithToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for ArithTokenizer<I> {
    type Item = ArithToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
