//! Input parsing for box dimensions.

use thiserror::Error;

use crate::types::BoxDims;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected 6 integers, found {0}")]
    MissingToken(usize),

    #[error("invalid edge length '{0}'")]
    InvalidToken(String),

    #[error("invalid dimensions '{0}', expected LxWxH")]
    BadDimensions(String),
}

/// Reads two boxes from whitespace separated text: three edges for box A,
/// then three for box B. Anything after the sixth token is ignored.
///
/// Zero edges are accepted. Negative edges are not: a stack height below
/// zero could not be told apart from the `-1` printed for no fit.
pub fn parse_boxes(input: &str) -> Result<(BoxDims, BoxDims), InputError> {
    let mut tokens = input.split_whitespace();
    let mut edges = [0u32; 6];
    for (i, edge) in edges.iter_mut().enumerate() {
        let token = tokens.next().ok_or(InputError::MissingToken(i))?;
        *edge = parse_edge(token)?;
    }

    let extra = tokens.count();
    if extra > 0 {
        tracing::debug!(extra, "ignoring trailing input tokens");
    }

    let a = BoxDims::new(edges[0], edges[1], edges[2]);
    let b = BoxDims::new(edges[3], edges[4], edges[5]);
    Ok((a, b))
}

/// Parses a single `LxWxH` argument, e.g. `10x10x1`.
pub fn parse_dimensions(s: &str) -> Result<BoxDims, InputError> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 3 {
        return Err(InputError::BadDimensions(s.to_string()));
    }
    let mut edges = [0u32; 3];
    for (edge, part) in edges.iter_mut().zip(&parts) {
        *edge = part
            .parse::<u32>()
            .map_err(|_| InputError::BadDimensions(s.to_string()))?;
    }
    Ok(BoxDims { edges })
}

fn parse_edge(token: &str) -> Result<u32, InputError> {
    token
        .parse::<u32>()
        .map_err(|_| InputError::InvalidToken(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boxes_across_lines() {
        let (a, b) = parse_boxes("5 5 5\n10 10 1\n").unwrap();
        assert_eq!(a, BoxDims::new(5, 5, 5));
        assert_eq!(b, BoxDims::new(10, 10, 1));
    }

    #[test]
    fn test_parse_boxes_ignores_trailing_tokens() {
        let (a, b) = parse_boxes("1 2 3 4 5 6 7 junk").unwrap();
        assert_eq!(a, BoxDims::new(1, 2, 3));
        assert_eq!(b, BoxDims::new(4, 5, 6));
    }

    #[test]
    fn test_parse_boxes_too_few() {
        assert_eq!(parse_boxes("1 2 3 4"), Err(InputError::MissingToken(4)));
        assert_eq!(parse_boxes(""), Err(InputError::MissingToken(0)));
    }

    #[test]
    fn test_parse_boxes_bad_tokens() {
        assert_eq!(
            parse_boxes("1 2 three 4 5 6"),
            Err(InputError::InvalidToken("three".to_string()))
        );
        assert!(matches!(
            parse_boxes("1 2 3 4 5 99999999999"),
            Err(InputError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_parse_boxes_zero_edges() {
        let (a, b) = parse_boxes("0 0 0 3 3 3").unwrap();
        assert_eq!(a, BoxDims::new(0, 0, 0));
        assert_eq!(b, BoxDims::new(3, 3, 3));
        assert_eq!(crate::solver::Solver::new(a, b).solve().to_string(), "3");
    }

    #[test]
    fn test_parse_boxes_negative_edge() {
        assert_eq!(
            parse_boxes("1 1 1 -5 2 2"),
            Err(InputError::InvalidToken("-5".to_string()))
        );
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("10x10x1"), Ok(BoxDims::new(10, 10, 1)));
        assert!(matches!(
            parse_dimensions("10x10"),
            Err(InputError::BadDimensions(_))
        ));
        assert!(matches!(
            parse_dimensions("10xax1"),
            Err(InputError::BadDimensions(_))
        ));
        assert_eq!(parse_dimensions("0x1x1"), Ok(BoxDims::new(0, 1, 1)));
    }
}
