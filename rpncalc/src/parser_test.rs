use crate::error::Error;
use crate::parser::{precedence, tokenize, RPNExpr, ShuntingParser, Token};
use lexers::ArithTokenizer;

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/(1-5)").unwrap();
    let expect = [
        Token::Number(3),
        Token::Number(4),
        Token::Number(2),
        Token::Op('*'),
        Token::Number(1),
        Token::Number(5),
        Token::Op('-'),
        Token::Op('/'),
        Token::Op('+'),
    ];
    assert_eq!(rpn.len(), expect.len());
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("(4+2*4)+ (4/2)").unwrap();
    let expect = RPNExpr(vec![
        Token::Number(4),
        Token::Number(2),
        Token::Number(4),
        Token::Op('*'),
        Token::Op('+'),
        Token::Number(4),
        Token::Number(2),
        Token::Op('/'),
        Token::Op('+'),
    ]);
    assert_eq!(rpn, expect);
}

#[test]
fn equal_precedence_pops_left_to_right() {
    let rpn = ShuntingParser::parse_str("4 - 2 + 2").unwrap();
    let expect = RPNExpr(vec![
        Token::Number(4),
        Token::Number(2),
        Token::Op('-'),
        Token::Number(2),
        Token::Op('+'),
    ]);
    assert_eq!(rpn, expect);

    let rpn = ShuntingParser::parse_str("8 / 4 * 2").unwrap();
    assert_eq!(rpn.to_string(), "8 4 / 2 *");
}

#[test]
fn single_number() {
    let rpn = ShuntingParser::parse_str("100").unwrap();
    assert_eq!(rpn, RPNExpr(vec![Token::Number(100)]));
}

#[test]
fn empty_input() {
    assert_eq!(ShuntingParser::parse_str(""), Ok(RPNExpr(vec![])));
    assert_eq!(ShuntingParser::parse_str(" \t "), Ok(RPNExpr(vec![])));
    assert_eq!(ShuntingParser::parse_str("()"), Ok(RPNExpr(vec![])));
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("(1 + 2");
    assert_eq!(rpn, Err(Error::MismatchedParentheses));

    let rpn = ShuntingParser::parse_str("1 + 2)");
    assert_eq!(rpn, Err(Error::MismatchedParentheses));

    let rpn = ShuntingParser::parse_str(")(");
    assert_eq!(rpn, Err(Error::MismatchedParentheses));

    let rpn = ShuntingParser::parse_str("((2)");
    assert_eq!(rpn, Err(Error::MismatchedParentheses));
}

#[test]
fn unknown_tokens() {
    // straight from the lexer, nothing filtered Unknown lexemes out
    let rpn = ShuntingParser::parse(ArithTokenizer::new("2 + a".chars()));
    assert_eq!(rpn, Err(Error::UnknownToken(format!("a"))));

    let rpn = ShuntingParser::parse(vec![Token::Number(2), Token::Op('%'), Token::Number(3)]);
    assert_eq!(rpn, Err(Error::UnknownToken(format!("%"))));

    // through parse_str the tokenizer gets there first
    let rpn = ShuntingParser::parse_str("2 + a");
    assert_eq!(rpn, Err(Error::InvalidExpression(format!("a"))));
}

#[test]
fn tokenizer() {
    let tokens = tokenize("(0-1)*2").unwrap();
    let expect = vec![
        Token::OParen,
        Token::Number(0),
        Token::Op('-'),
        Token::Number(1),
        Token::CParen,
        Token::Op('*'),
        Token::Number(2),
    ];
    assert_eq!(tokens, expect);
    assert_eq!(tokenize("  "), Ok(vec![]));
    assert_eq!(tokenize("1 + 2 ^ 3"), Err(Error::InvalidExpression(format!("^"))));
    assert_eq!(
        tokenize("1 + 99999999999999999999"),
        Err(Error::InvalidExpression(format!("99999999999999999999")))
    );
}

#[test]
fn tokenizer_is_repeatable() {
    let src = "(100 + 200) * 2 - 7 / 3";
    assert_eq!(tokenize(src), tokenize(src));
}

#[test]
fn precedence_table() {
    assert_eq!(precedence('+'), precedence('-'));
    assert_eq!(precedence('*'), precedence('/'));
    assert!(precedence('*') > precedence('+'));
    assert_eq!(precedence('('), None);
    assert_eq!(precedence('^'), None);
}
