//! Low-level nom parser functions for style values.
//!
//! Only string literals go through here: numbers arrive already typed from
//! the raw style input. The accepted grammar is `auto` or a percentage
//! (`[+-]? digits ('.' digits)? '%'`), with surrounding whitespace allowed.

use crate::dimension::Dimension;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style value parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Invalid percentage value: '{0}'")]
    InvalidPercentage(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Dimension Parsers ---

/// Parses a percentage literal such as `"50%"` into its numeric value (`50.0`).
pub fn parse_percentage(input: &str) -> IResult<&str, f32> {
    map((parse_f32, char('%')), |(value, _)| value).parse(input)
}

/// Parses a dimension literal: `"auto"` or a percentage.
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        map(tag_no_case("auto"), |_| Dimension::Auto),
        map(parse_percentage, Dimension::Percent),
    ))
    .parse(input)
}

/// Helper to run a nom parser over a whole (trimmed) input and convert its
/// result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, P>(mut parser: P, input: &'a str) -> Result<T, StyleParseError>
where
    P: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", value)) => Ok(value),
        Ok((rest, _)) => Err(StyleParseError::Parse(format!(
            "Unexpected trailing input '{}' in '{}'",
            rest, input
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Parses a size literal, reporting any mismatch as an invalid percentage.
pub fn parse_size_literal(input: &str) -> Result<Dimension, StyleParseError> {
    let trimmed = input.trim();
    if trimmed.len() < 2 && !trimmed.eq_ignore_ascii_case("auto") {
        return Err(StyleParseError::InvalidPercentage(trimmed.to_string()));
    }
    run_parser(parse_dimension, trimmed)
        .map_err(|_| StyleParseError::InvalidPercentage(trimmed.to_string()))
}
