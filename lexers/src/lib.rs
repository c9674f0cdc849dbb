mod arith_tokenizer;
mod char_scanner;
mod scanner;

pub use arith_tokenizer::{ArithToken, ArithTokenizer};
pub use scanner::Scanner;
