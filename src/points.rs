//! The polygon `points` attribute: parsing with span-carrying errors and
//! the matching writer.

use glam::{DVec2, dvec2};
use miette::NamedSource;
use pest::Parser;
use pest_derive::Parser;

use crate::errors::FormatError;

#[derive(Parser)]
#[grammar = "points.pest"]
struct PointsParser;

/// Parse a `points` attribute value into an ordered vertex list.
///
/// Fails on the first token that is not exactly `number,number`.
pub fn parse_points(src: &str) -> Result<Vec<DVec2>, FormatError> {
    let list = PointsParser::parse(Rule::list, src)
        .map_err(|_| invalid_point(src, 0, src))?
        .next()
        .ok_or_else(|| invalid_point(src, 0, src))?;

    let mut points = Vec::new();
    for token in list.into_inner() {
        if token.as_rule() != Rule::token {
            continue;
        }
        let text = token.as_str();
        match parse_pair(text) {
            Some(point) => points.push(point),
            None => return Err(invalid_point(src, token.as_span().start(), text)),
        }
    }
    Ok(points)
}

fn parse_pair(token: &str) -> Option<DVec2> {
    let pair = PointsParser::parse(Rule::pair, token).ok()?.next()?;
    let mut numbers = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::number)
        .map(|p| p.as_str().parse::<f64>());
    let x = numbers.next()?.ok()?;
    let y = numbers.next()?.ok()?;
    // Very long exponents overflow to infinity
    (x.is_finite() && y.is_finite()).then(|| dvec2(x, y))
}

fn invalid_point(src: &str, offset: usize, token: &str) -> FormatError {
    FormatError::InvalidPoint {
        token: token.to_string(),
        src: NamedSource::new("points", src.to_string()),
        span: (offset, token.len()).into(),
    }
}

/// Write vertices as space-separated `x,y` pairs.
///
/// Uses the shortest representation that parses back to the same `f64`.
pub fn format_points(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
