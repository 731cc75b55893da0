//! Dotted field paths built up during traversal.

use std::fmt;

/// A reusable buffer holding the path of the field being visited.
///
/// Segments are joined with `.`; the root path is empty and the first
/// segment carries no leading dot. `push` returns a [`Mark`] that `pop`
/// uses to restore the previous path, so the whole walk shares one
/// allocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldPath {
    buf: String,
    last_segment: usize,
}

/// The state to restore when leaving a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the mark is needed to pop the segment"]
pub struct Mark {
    len: usize,
    last_segment: usize,
}

impl FieldPath {
    /// Creates an empty (root) path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl fmt::Display) -> Mark {
        let mark = Mark {
            len: self.buf.len(),
            last_segment: self.last_segment,
        };
        if !self.buf.is_empty() {
            self.buf.push('.');
        }
        self.last_segment = self.buf.len();
        self.buf.push_str(&segment.to_string());
        mark
    }

    /// Restores the path to what it was before the matching `push`.
    pub fn pop(&mut self, mark: Mark) {
        self.buf.truncate(mark.len);
        self.last_segment = mark.last_segment;
    }

    /// The full dotted path.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// The last segment, which is the display name of the current field.
    pub fn last(&self) -> &str {
        &self.buf[self.last_segment..]
    }

    /// Returns true at the root.
    pub fn is_root(&self) -> bool {
        self.buf.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
