//! # Configuration Paths
//!
//! Typed addressing for positions inside a nested configuration document.
//! A path is an ordered sequence of segments, each either an object key or
//! an array index — never a pre-joined string, so key text containing the
//! display delimiter cannot corrupt addressing.
//!
//! ## Ordering Invariant
//!
//! Paths are totally ordered. Segments compare index-before-key at the same
//! position, indices numerically, keys lexicographically. Two paths are
//! equal iff they have the same length and pairwise-equal segments. The
//! derived `Ord` on `Segment` (variant order `Index` then `Key`) provides
//! exactly this, and the order is stable across calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter used when rendering a path as a display string.
pub const PATH_DELIM: &str = ".";

/// One step in a [`ConfigPath`].
///
/// Variant order is load-bearing: the derived `Ord` sorts every `Index`
/// before every `Key`, which keeps mixed-type comparison total and stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Position within an array.
    Index(usize),
    /// Key within an object.
    Key(String),
}

impl Segment {
    /// Rendered width of this segment in a display string, in characters.
    pub fn display_len(&self) -> usize {
        match self {
            Segment::Index(i) => i.to_string().len(),
            Segment::Key(k) => k.chars().count(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(i) => write!(f, "{i}"),
            Segment::Key(k) => write!(f, "{k}"),
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

/// An ordered sequence of [`Segment`]s locating one position in a
/// configuration document. The empty path addresses the document root.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ConfigPath(Vec<Segment>);

impl ConfigPath {
    /// The empty path addressing the document root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Access the segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with one more segment appended.
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Appends a segment in place.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(segment.into());
    }

    /// Best-effort conversion of a JSON-Pointer-style location into a path.
    ///
    /// Strips a leading `#` fragment marker and leading `/`, then splits on
    /// `/`. Segments that parse as a non-negative integer become array
    /// indices; everything else is kept as a key, escapes included. This is
    /// a direct re-interpretation of the pointer text, not a resolution
    /// against any document.
    pub fn from_json_pointer(pointer: &str) -> Self {
        let trimmed = pointer.strip_prefix('#').unwrap_or(pointer);
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Self::root();
        }
        let segments = trimmed
            .split('/')
            .map(|part| match part.parse::<usize>() {
                Ok(i) => Segment::Index(i),
                Err(_) => Segment::Key(part.to_string()),
            })
            .collect();
        Self(segments)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_DELIM}")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for ConfigPath {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Segment>> for ConfigPath {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}
