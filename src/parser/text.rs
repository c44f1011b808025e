//! Text parser for the propositional sentence language
//!
//! Grammar, loosest binding first: `<=>`, `=>` (right associative), `|`,
//! `&`, then unary `~`, parentheses, the constants `$true`/`$false`, and
//! identifiers `[A-Za-z][A-Za-z0-9_]*`. Whitespace is insignificant.
//!
//! Atoms are interned while parsing, so a sentence is comparable with
//! everything previously parsed through the same interner.

use crate::error::{ResoluteError, Result};
use crate::logic::Interner;
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0},
    IResult,
};
use std::fs;
use std::path::Path;

use super::formula::Formula;

/// Parse a single sentence; the whole input must be consumed
pub fn parse_sentence(input: &str, interner: &mut Interner) -> Result<Formula> {
    match parse_formula(input, interner) {
        Ok((rest, formula)) => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                Ok(formula)
            } else {
                Err(ResoluteError::ParseError(format!(
                    "unexpected trailing input at '{}'",
                    truncate(rest)
                )))
            }
        }
        Err(e) => Err(ResoluteError::ParseError(format!(
            "in '{}': {}",
            truncate(input.trim()),
            e
        ))),
    }
}

/// Parse a knowledge-base listing: one sentence per line
///
/// Blank lines and lines starting with '%' are skipped.
pub fn parse_kb(input: &str, interner: &mut Interner) -> Result<Vec<Formula>> {
    let mut sentences = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        sentences.push(parse_sentence(line, interner)?);
    }
    Ok(sentences)
}

/// Read and parse a knowledge-base file
pub fn parse_kb_file<P: AsRef<Path>>(path: P, interner: &mut Interner) -> Result<Vec<Formula>> {
    let content = fs::read_to_string(path)?;
    parse_kb(&content, interner)
}

fn truncate(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// The binary levels thread the interner explicitly, so each level is a
// plain function rather than a combinator closure. Loosest level first.

fn parse_formula<'a>(input: &'a str, interner: &mut Interner) -> IResult<&'a str, Formula> {
    parse_iff(input, interner)
}

fn parse_iff<'a>(input: &'a str, interner: &mut Interner) -> IResult<&'a str, Formula> {
    let (input, left) = parse_implies(input, interner)?;
    let (input, _) = multispace0(input)?;

    if let Ok((input, _)) = tag::<_, _, nom::error::Error<_>>("<=>")(input) {
        let (input, right) = parse_iff(input, interner)?;
        Ok((input, Formula::Iff(Box::new(left), Box::new(right))))
    } else {
        Ok((input, left))
    }
}

fn parse_implies<'a>(input: &'a str, interner: &mut Interner) -> IResult<&'a str, Formula> {
    let (input, left) = parse_or(input, interner)?;
    let (input, _) = multispace0(input)?;

    if let Ok((input, _)) = tag::<_, _, nom::error::Error<_>>("=>")(input) {
        let (input, right) = parse_implies(input, interner)?;
        Ok((input, Formula::Implies(Box::new(left), Box::new(right))))
    } else {
        Ok((input, left))
    }
}

fn parse_or<'a>(input: &'a str, interner: &mut Interner) -> IResult<&'a str, Formula> {
    let (input, left) = parse_and(input, interner)?;
    let (input, _) = multispace0(input)?;

    if let Ok((input, _)) = char::<_, nom::error::Error<_>>('|')(input) {
        let (input, right) = parse_or(input, interner)?;
        Ok((input, Formula::Or(Box::new(left), Box::new(right))))
    } else {
        Ok((input, left))
    }
}

fn parse_and<'a>(input: &'a str, interner: &mut Interner) -> IResult<&'a str, Formula> {
    let (input, left) = parse_unary(input, interner)?;
    let (input, _) = multispace0(input)?;

    if let Ok((input, _)) = char::<_, nom::error::Error<_>>('&')(input) {
        let (input, right) = parse_and(input, interner)?;
        Ok((input, Formula::And(Box::new(left), Box::new(right))))
    } else {
        Ok((input, left))
    }
}

fn parse_unary<'a>(input: &'a str, interner: &mut Interner) -> IResult<&'a str, Formula> {
    let (input, _) = multispace0(input)?;

    // Negation
    if let Ok((input, _)) = char::<_, nom::error::Error<_>>('~')(input) {
        let (input, inner) = parse_unary(input, interner)?;
        return Ok((input, Formula::Not(Box::new(inner))));
    }

    // $true and $false (before identifiers)
    if let Ok((input, _)) = tag::<_, _, nom::error::Error<_>>("$true")(input) {
        return Ok((input, Formula::True));
    }
    if let Ok((input, _)) = tag::<_, _, nom::error::Error<_>>("$false")(input) {
        return Ok((input, Formula::False));
    }

    // Parenthesized formula
    if let Ok((input, _)) = char::<_, nom::error::Error<_>>('(')(input) {
        let (input, inner) = parse_formula(input, interner)?;
        let (input, _) = multispace0(input)?;
        let (input, _) = char(')')(input)?;
        return Ok((input, inner));
    }

    // Atomic proposition
    let (input, name) = parse_identifier(input)?;
    Ok((input, Formula::Atom(interner.intern(name))))
}

/// Identifier: alphanumeric/underscore word starting with a letter
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    let (rest, word) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    if word.starts_with(|c: char| c.is_alphabetic()) {
        Ok((rest, word))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Alpha,
        )))
    }
}
