// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! PEG-style recursive-descent parser for the selection query language, built with `nom`
//! combinators. Precedence (tightest to loosest): `not` > `and` > `or`; parentheses override.

use common::{MolError, Result};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{map, opt, recognize};
use nom::multi::many1;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

use crate::ast::{NumPropKind, NumSpec, Node};
use crate::number::{SelNumber, SelNumberRange};

type PResult<'a, T> = IResult<&'a str, T>;

fn ws<'a, T>(p: impl FnMut(&'a str) -> PResult<'a, T>) -> impl FnMut(&'a str) -> PResult<'a, T> {
    preceded(multispace0, p)
}

fn number_text(input: &str) -> PResult<&str> {
    recognize(tuple((
        opt(alt((char('-'), char('+')))),
        digit1,
        opt(pair(char('.'), digit1)),
    )))(input)
}

fn parse_number(input: &str) -> PResult<SelNumber> {
    map(ws(number_text), |text: &str| {
        SelNumber(text.parse::<f64>().unwrap_or(0.0))
    })(input)
}

fn int_text(input: &str) -> PResult<i64> {
    map(recognize(tuple((opt(alt((char('-'), char('+')))), digit1))), |text: &str| {
        text.parse::<i64>().unwrap_or(0)
    })(input)
}

fn parse_range(input: &str) -> PResult<SelNumberRange> {
    map(
        tuple((ws(int_text), ws(char(':')), ws(int_text))),
        |(first, _, last)| SelNumberRange { first, last },
    )(input)
}

fn parse_spec(input: &str) -> PResult<NumSpec> {
    alt((
        map(parse_range, NumSpec::Range),
        map(parse_number, NumSpec::Number),
    ))(input)
}

fn parse_numprop_kind(input: &str) -> PResult<NumPropKind> {
    ws(alt((
        map(tag("resid"), |_| NumPropKind::ResId),
        map(tag("index"), |_| NumPropKind::Index),
    )))(input)
}

fn parse_numprop(input: &str) -> PResult<Node> {
    map(pair(parse_numprop_kind, many1(parse_spec)), |(kind, specs)| {
        Node::NumProp(kind, specs)
    })(input)
}

fn parse_all(input: &str) -> PResult<Node> {
    map(ws(tag("all")), |_| Node::All)(input)
}

fn parse_parens(input: &str) -> PResult<Node> {
    delimited(ws(char('(')), parse_or, ws(char(')')))(input)
}

fn parse_atom(input: &str) -> PResult<Node> {
    alt((parse_not, parse_parens, parse_numprop, parse_all))(input)
}

fn parse_not(input: &str) -> PResult<Node> {
    map(preceded(ws(tag("not")), parse_atom), |child| Node::Not(Box::new(child)))(input)
}

fn parse_and(input: &str) -> PResult<Node> {
    let (input, first) = parse_atom(input)?;
    let (input, rest) = nom::multi::many0(preceded(ws(tag("and")), parse_atom))(input)?;
    Ok((
        input,
        rest.into_iter().fold(first, |acc, node| Node::And(Box::new(acc), Box::new(node))),
    ))
}

fn parse_or(input: &str) -> PResult<Node> {
    let (input, first) = parse_and(input)?;
    let (input, rest) = nom::multi::many0(preceded(ws(tag("or")), parse_and))(input)?;
    Ok((
        input,
        rest.into_iter().fold(first, |acc, node| Node::Or(Box::new(acc), Box::new(node))),
    ))
}

/// Parses a complete selection expression, rejecting trailing unparsed input.
pub fn parse(expression: &str) -> Result<Node> {
    match parse_or(expression) {
        Ok((remaining, node)) if remaining.trim().is_empty() => Ok(node),
        Ok((remaining, _)) => Err(parse_error(expression, remaining, "unexpected trailing input")),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(parse_error(expression, e.input, "could not parse selection expression"))
        }
        Err(nom::Err::Incomplete(_)) => Err(parse_error(expression, "", "incomplete selection expression")),
    }
}

fn parse_error(expression: &str, remaining: &str, message: &str) -> MolError {
    let column = expression.len() - remaining.len() + 1;
    log::debug!("selection parse error at column {column}: {message}");
    MolError::parse(message, expression, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all() {
        assert_eq!(parse("all").unwrap(), Node::All);
    }

    #[test]
    fn parses_resid_with_range_and_numbers() {
        let node = parse("resid 1 3 10:20").unwrap();
        match node {
            Node::NumProp(NumPropKind::ResId, specs) => assert_eq!(specs.len(), 3),
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn precedence_not_and_or() {
        // `not resid 1 and resid 2 or all` parses as `(((not resid 1) and resid 2) or all)`
        let node = parse("not resid 1 and resid 2 or all").unwrap();
        match node {
            Node::Or(left, right) => {
                assert_eq!(*right, Node::All);
                match *left {
                    Node::And(l, _) => assert!(matches!(*l, Node::Not(_))),
                    other => panic!("unexpected left: {other:?}"),
                }
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn parentheses_override_precedence() {
        let node = parse("not (resid 1 or resid 2)").unwrap();
        assert!(matches!(node, Node::Not(_)));
    }

    #[test]
    fn parse_error_reports_column() {
        let err = parse("resid 1 bnd 2").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("resid 1 bnd 2"));
        assert!(rendered.lines().last().unwrap().ends_with('^'));
    }
}
