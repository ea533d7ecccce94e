//! Infix text to expression trees.
//!
//! The pipeline is tokenize, level, group, build: tokens are tagged with
//! their parenthesis depth, consecutive tokens of equal depth coalesce into
//! groups, and the groups are consumed recursively, with each level's flat
//! spine merged left to right. Precedence is carried entirely by the
//! grouping structure, which is exactly what the formatter emits.

mod token;

use std::iter::Peekable;

use crate::error::{CalcError, Result};
use crate::expr::{BinOp, Expr};
use token::{tokenize, Token};

pub fn parse_expr(input: &str) -> Result<Expr> {
    let tokens = tokenize(input)?;
    let leveled = level_tokens(tokens)?;
    let groups = group_tokens(leveled);
    parse_groups(&groups)
}

/// Tag every non-parenthesis token with its nesting depth, dropping the
/// parentheses themselves.
fn level_tokens(tokens: Vec<Token>) -> Result<Vec<(Token, i32)>> {
    let mut depth = 0;
    let mut leveled = Vec::new();
    for tok in tokens {
        match tok {
            Token::Open => depth += 1,
            Token::Close => {
                depth -= 1;
                if depth < 0 {
                    return Err(CalcError::Parse("unbalanced parentheses".into()));
                }
            }
            other => leveled.push((other, depth)),
        }
    }
    if depth != 0 {
        return Err(CalcError::Parse("unbalanced parentheses".into()));
    }
    Ok(leveled)
}

/// Coalesce consecutive equal-depth tokens into ordered groups.
fn group_tokens(leveled: Vec<(Token, i32)>) -> Vec<(Vec<Token>, i32)> {
    let mut groups: Vec<(Vec<Token>, i32)> = Vec::new();
    for (tok, depth) in leveled {
        match groups.last_mut() {
            Some((tokens, d)) if *d == depth => tokens.push(tok),
            _ => groups.push((vec![tok], depth)),
        }
    }
    groups
}

enum Item {
    Token(Token),
    Sub(Expr),
}

/// Consume a group sequence: tokens at the shallowest depth form the spine,
/// and each maximal deeper run parses recursively into one operand.
fn parse_groups(groups: &[(Vec<Token>, i32)]) -> Result<Expr> {
    let base = match groups.iter().map(|(_, depth)| *depth).min() {
        Some(depth) => depth,
        None => return Err(CalcError::Parse("empty expression".into())),
    };

    let mut items = Vec::new();
    let mut i = 0;
    while i < groups.len() {
        let (tokens, depth) = &groups[i];
        if *depth == base {
            items.extend(tokens.iter().map(|t| Item::Token(*t)));
            i += 1;
        } else {
            let mut j = i + 1;
            while j < groups.len() && groups[j].1 > base {
                j += 1;
            }
            items.push(Item::Sub(parse_groups(&groups[i..j])?));
            i = j;
        }
    }
    merge_items(items)
}

/// Fold a flat `operand (op operand)*` chain left to right. No precedence:
/// callers parenthesize, as the formatter always does.
fn merge_items(items: Vec<Item>) -> Result<Expr> {
    let mut items = items.into_iter().peekable();

    let negate = matches!(items.peek(), Some(Item::Token(Token::Op(BinOp::Sub))));
    if negate {
        items.next();
    }
    let mut acc = operand(&mut items)?;
    if negate {
        acc = Expr::Neg(acc.boxed());
    }

    while let Some(item) = items.next() {
        match item {
            Item::Token(Token::Op(op)) => {
                let rhs = operand(&mut items)?;
                acc = op.apply(acc, rhs);
            }
            _ => {
                return Err(CalcError::Parse(
                    "expected an operator between operands".into(),
                ))
            }
        }
    }
    Ok(acc)
}

fn operand<I>(items: &mut Peekable<I>) -> Result<Expr>
where
    I: Iterator<Item = Item>,
{
    match items.next() {
        Some(Item::Sub(expr)) => Ok(expr),
        Some(Item::Token(Token::Var)) => Ok(Expr::Variable),
        Some(Item::Token(Token::Number(value))) => Ok(Expr::Constant(value)),
        Some(Item::Token(Token::Func(func))) => match items.next() {
            Some(Item::Sub(arg)) => Ok(func.apply(arg)),
            _ => Err(CalcError::Parse(format!(
                "function {} is missing its parenthesized argument",
                func.name()
            ))),
        },
        _ => Err(CalcError::Parse("missing operand".into())),
    }
}
