use crate::error::{Error, ParseError, Result};
use std::io::BufRead;

/// One input row: the x value and one y value per series
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    x: f64,
    ys: Vec<f64>,
}

impl Point {
    pub fn new(x: f64, ys: Vec<f64>) -> Point {
        Point { x, ys }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
}

/// Splits lines on a fixed separator and reads the fields as floats.
#[derive(Debug, Clone)]
pub struct Parser {
    separator: String,
}

impl Parser {
    pub fn new(separator: &str) -> Result<Parser> {
        if separator.is_empty() {
            return Err(Error::EmptySeparator);
        }
        Ok(Parser {
            separator: separator.to_string(),
        })
    }

    /// parses one line into a Point,
    /// the first field is x and all the following fields are the ys, in order.
    /// Empty fields (empty line, doubled separator) are parsing errors.
    pub fn parse(&self, line: &str) -> std::result::Result<Point, ParseError> {
        let line = line.trim_matches('\n');
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut fields = line.split(self.separator.as_str());
        let x = parse_field(fields.next().ok_or(ParseError::MissingX)?)?;
        let ys = fields
            .map(parse_field)
            .collect::<std::result::Result<Vec<f64>, ParseError>>()?;
        Ok(Point::new(x, ys))
    }
}

fn parse_field(field: &str) -> std::result::Result<f64, ParseError> {
    field.trim().parse().map_err(|source| ParseError::Float {
        field: field.to_string(),
        source,
    })
}

/// Reads all the lines from the input and parses them in order.
/// Fails on the first bad line and when a row has a different number of
/// columns than the first one.
pub fn read_points<R: BufRead>(parser: &Parser, input: R) -> Result<Vec<Point>> {
    let mut points: Vec<Point> = Vec::new();
    for (i, l) in input.lines().enumerate() {
        let line = i + 1;
        let l = l?;
        let point = parser
            .parse(&l)
            .map_err(|source| Error::Parse { line, source })?;
        if let Some(first) = points.first() {
            if first.ys().len() != point.ys().len() {
                return Err(Error::RaggedRow {
                    line,
                    expected: first.ys().len(),
                    found: point.ys().len(),
                });
            }
        }
        points.push(point);
    }
    log::info!("read {} points from the input", points.len());
    Ok(points)
}
