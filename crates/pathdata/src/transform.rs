//! Parser for `matrix(a b c d e f)` transform literals.
use crate::error::TransformParseError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1},
    combinator::value,
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
};

/// A 2-D affine matrix in SVG parameter order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    /// True when the linear part is exactly the identity, leaving a pure
    /// translation.
    pub fn is_translation(&self) -> bool {
        self.a == 1.0 && self.b == 0.0 && self.c == 0.0 && self.d == 1.0
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.e, self.f)
    }
}

/// Parses a six-parameter `matrix(...)` literal. Parameters may be separated
/// by whitespace, commas, or both, and must be finite.
pub fn parse_matrix(input: &str) -> Result<Matrix, TransformParseError> {
    let params = match matrix_params(input.trim()) {
        Ok(("", params)) if params.iter().all(|p| p.is_finite()) => params,
        _ => return Err(TransformParseError::Malformed(input.to_string())),
    };

    match params.as_slice() {
        &[a, b, c, d, e, f] => Ok(Matrix { a, b, c, d, e, f }),
        _ => Err(TransformParseError::Arity {
            literal: input.to_string(),
            found: params.len(),
        }),
    }
}

// --- Combinators ---

fn separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1),
    ))
    .parse(input)
}

fn matrix_params(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        (tag("matrix("), multispace0),
        separated_list1(separator, double),
        (multispace0, char(')')),
    )
    .parse(input)
}
