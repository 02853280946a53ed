//! Point identifiers
//!
//! Identifiers are short labels other level objects use to refer to a point.
//! They are bounded in size and may repeat within a layer.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Size of an identifier buffer in the level format, terminator included
pub const ID_MAX_SIZE: usize = 32;

/// Reasons an identifier token can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointIdError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier is {len} bytes long, at most {max} allowed")]
    TooLong { len: usize, max: usize },
    #[error("identifier '{0}' contains whitespace or control characters")]
    Invalid(String),
}

/// A bounded, whitespace-free point label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(String);

impl PointId {
    /// Longest identifier content, in bytes
    pub const MAX_LEN: usize = ID_MAX_SIZE - 1;

    pub fn new(id: impl Into<String>) -> Result<Self, PointIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PointIdError::Empty);
        }
        if id.len() > Self::MAX_LEN {
            return Err(PointIdError::TooLong {
                len: id.len(),
                max: Self::MAX_LEN,
            });
        }
        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(PointIdError::Invalid(id));
        }
        Ok(Self(id))
    }

    /// A fresh identifier of `MAX_LEN` random lowercase letters
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..Self::MAX_LEN)
            .map(|_| rng.gen_range('a'..='z'))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PointId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PointId {
    type Err = PointIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
