//! Loading point layers from level sources
//!
//! The point layer section of a level is a count line followed by that many
//! point lines:
//!
//! ```text
//! 2
//! spawn 0 0 ff0000
//! exit 100 100 00ff00
//! ```
//!
//! Each point line is `<id> <x> <y> <RRGGBB>`. Loading is all or nothing: the
//! first bad line fails the whole layer and nothing partially built escapes.

use super::{LayerPoint, PointId, PointIdError, PointLayer};
use crate::data::{parse_hex_rgb, ColorParseError, LineStream};
use bevy::log::{debug, warn};
use bevy::prelude::*;
use std::io::{self, BufRead};
use std::path::Path;
use std::str::SplitWhitespace;
use thiserror::Error;

/// Reasons a point layer could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read level source")]
    Io(#[from] io::Error),
    #[error("could not read amount of points: level source ended")]
    MissingCount,
    #[error("could not read amount of points from '{0}'")]
    Count(String),
    #[error("could not reserve room for {0} points")]
    Allocation(usize),
    #[error("could not read point #{index}: level source ended")]
    MissingPoint { index: usize },
    #[error("could not read point #{index} (line {line})")]
    Point {
        index: usize,
        line: usize,
        #[source]
        source: PointLineError,
    },
}

/// What was wrong with a single point line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointLineError {
    #[error("missing {0}")]
    MissingToken(&'static str),
    #[error("unexpected trailing token '{0}'")]
    TrailingToken(String),
    #[error("bad identifier")]
    Id(#[source] PointIdError),
    #[error("bad {axis} coordinate '{token}'")]
    Coordinate { axis: char, token: String },
    #[error("bad color")]
    Color(#[source] ColorParseError),
}

impl PointLayer {
    /// Read the point layer section from `stream`.
    ///
    /// Consumes the count line and exactly as many point lines as it
    /// announces; anything after them is left in the stream.
    pub fn from_line_stream<R: BufRead>(stream: &mut LineStream<R>) -> Result<Self, LoadError> {
        let count = match stream.next_line()? {
            Some(line) => parse_count(line)?,
            None => return Err(LoadError::MissingCount),
        };

        let mut points = Vec::new();
        points
            .try_reserve_exact(count)
            .map_err(|_| LoadError::Allocation(count))?;

        for index in 0..count {
            let line = stream
                .next_line()?
                .ok_or(LoadError::MissingPoint { index })?;
            let point = parse_point_line(line).map_err(|source| LoadError::Point {
                index,
                line: stream.line_number(),
                source,
            })?;
            points.push(point);
        }

        debug!("Loaded point layer with {} points", points.len());
        Ok(Self::from_points(points))
    }

    /// Load a point layer from in-memory level text
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        Self::from_line_stream(&mut LineStream::from_text(text))
    }

    /// Load a point layer from a level file, logging the failure if any
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let result =
            LineStream::open(path).map_err(LoadError::from).and_then(|mut stream| {
                Self::from_line_stream(&mut stream)
            });
        if let Err(error) = &result {
            warn!("Failed to load point layer from {:?}: {}", path, error_chain(error));
        }
        result
    }
}

fn parse_count(line: &str) -> Result<usize, LoadError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .parse()
            .map_err(|_| LoadError::Count(line.trim().to_string())),
        _ => Err(LoadError::Count(line.trim().to_string())),
    }
}

fn next_token<'a>(
    tokens: &mut SplitWhitespace<'a>,
    field: &'static str,
) -> Result<&'a str, PointLineError> {
    tokens.next().ok_or(PointLineError::MissingToken(field))
}

fn parse_coordinate(token: &str, axis: char) -> Result<f32, PointLineError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| PointLineError::Coordinate {
            axis,
            token: token.to_string(),
        })
}

fn parse_point_line(line: &str) -> Result<LayerPoint, PointLineError> {
    let mut tokens = line.split_whitespace();

    let id = PointId::new(next_token(&mut tokens, "identifier")?).map_err(PointLineError::Id)?;
    let x = parse_coordinate(next_token(&mut tokens, "x coordinate")?, 'x')?;
    let y = parse_coordinate(next_token(&mut tokens, "y coordinate")?, 'y')?;
    let color = parse_hex_rgb(next_token(&mut tokens, "color")?).map_err(PointLineError::Color)?;

    if let Some(extra) = tokens.next() {
        return Err(PointLineError::TrailingToken(extra.to_string()));
    }

    Ok(LayerPoint::new(Vec2::new(x, y), color, id))
}

/// Render an error and its sources on one line
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
