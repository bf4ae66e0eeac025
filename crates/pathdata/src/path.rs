//! A `nom`-based tokenizer for template path data.
use crate::error::PathDataError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{preceded, terminated},
};
use std::fmt;

/// The close-path command every subpath must end with.
const CLOSE_PATH: &str = "Z";

/// One token of path data. Numbers keep their source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathToken<'a> {
    Command(&'a str),
    Number(&'a str),
}

impl<'a> PathToken<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            PathToken::Command(s) | PathToken::Number(s) => *s,
        }
    }

    pub fn is_close(&self) -> bool {
        matches!(self, PathToken::Command(CLOSE_PATH))
    }
}

impl fmt::Display for PathToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Main Public Parsers ---

/// Splits path data into tokens.
///
/// Single spaces between tokens are optional and skipped. Any content that is
/// neither a letter nor a decimal number fails with the unconsumed remainder.
pub fn tokenize(data: &str) -> Result<Vec<PathToken<'_>>, PathDataError> {
    match terminated(many0(preceded(spaces, token)), spaces).parse(data) {
        Ok(("", tokens)) => Ok(tokens),
        Ok((rem, _)) => Err(PathDataError::Unparseable {
            remainder: rem.to_string(),
        }),
        Err(_) => Err(PathDataError::Unparseable {
            remainder: data.to_string(),
        }),
    }
}

/// Groups tokens into closed subpaths, each joined with single spaces.
///
/// Every group runs up to and including a `Z` command; tokens left over after
/// the last `Z` are an error.
pub fn split_subpaths(tokens: &[PathToken<'_>]) -> Result<Vec<String>, PathDataError> {
    let mut subpaths = Vec::new();
    let mut rest = tokens;

    while !rest.is_empty() {
        let end = rest
            .iter()
            .position(PathToken::is_close)
            .ok_or(PathDataError::IncompleteSubpath {
                trailing: rest.len(),
            })?;
        let (group, tail) = rest.split_at(end + 1);
        subpaths.push(
            group
                .iter()
                .map(PathToken::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        );
        rest = tail;
    }

    Ok(subpaths)
}

/// Tokenizes `data` and splits it into closed subpaths.
pub fn parse_subpaths(data: &str) -> Result<Vec<String>, PathDataError> {
    split_subpaths(&tokenize(data)?)
}

// --- Combinators ---

fn spaces(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ').parse(input)
}

fn command(input: &str) -> IResult<&str, PathToken<'_>> {
    map(
        recognize(satisfy(|c: char| c.is_ascii_alphabetic())),
        PathToken::Command,
    )
    .parse(input)
}

fn number(input: &str) -> IResult<&str, PathToken<'_>> {
    map(
        recognize((opt(one_of("+-")), digit1, opt((char('.'), digit1)))),
        PathToken::Number,
    )
    .parse(input)
}

fn token(input: &str) -> IResult<&str, PathToken<'_>> {
    alt((command, number)).parse(input)
}
