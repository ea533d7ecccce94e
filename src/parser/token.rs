use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, map, opt, recognize, value};
use nom::error::VerboseError;
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;

use crate::error::{CalcError, Result};
use crate::expr::{BinOp, UnaryFn};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token {
    Open,
    Close,
    Op(BinOp),
    Func(UnaryFn),
    Var,
    Number(f64),
}

/// Scan the input into tokens. The exponential-call idiom `e^(…)` is
/// recognized up front as a single function-name token, so the rest of the
/// pipeline sees it like any other function.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    match all_consuming(many0(ws(token)))(input) {
        Ok((_, tokens)) => Ok(tokens),
        Err(e) => Err(CalcError::Parse(format!("{e:?}"))),
    }
}

fn token(input: &str) -> IResult<&str, Token, VerboseError<&str>> {
    alt((
        value(Token::Open, char('(')),
        value(Token::Close, char(')')),
        value(Token::Func(UnaryFn::Exp), tag("e^")),
        value(Token::Func(UnaryFn::Log), tag("log")),
        value(Token::Func(UnaryFn::Sin), tag("sin")),
        value(Token::Func(UnaryFn::Cos), tag("cos")),
        value(Token::Var, char('x')),
        value(Token::Op(BinOp::Add), char('+')),
        value(Token::Op(BinOp::Sub), char('-')),
        value(Token::Op(BinOp::Mul), char('*')),
        value(Token::Op(BinOp::Div), char('/')),
        value(Token::Op(BinOp::Pow), char('^')),
        number,
    ))(input)
}

fn number(input: &str) -> IResult<&str, Token, VerboseError<&str>> {
    map(
        recognize(pair(digit1, opt(preceded(char('.'), digit1)))),
        |s: &str| Token::Number(s.parse().unwrap()),
    )(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
