// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::RunId;

/// Rich error type for run store operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus contextual information about the
/// targeted run, the attempted range and, when relevant, the enclosing UTF-8
/// character span at the offending index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The run the operation was aimed at, if any.
    run: Option<RunId>,

    /// The start byte index of the caller-provided range.
    start: usize,

    /// The end byte index (exclusive) of the caller-provided range.
    end: usize,

    /// The length in bytes of the run's text at the time of failure.
    len: usize,

    /// Extra detail for boundary-related errors, when available.
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The run the failed operation targeted, if the operation had one.
    pub fn run(&self) -> Option<RunId> {
        self.run
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the run's text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    /// Returns `true` if this error means the selection no longer describes a
    /// valid span of a live run.
    ///
    /// Callers that tolerate stale selections treat these as a no-op.
    pub fn is_invalid_selection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownRun
                | ErrorKind::InvalidRange
                | ErrorKind::InvalidBounds
                | ErrorKind::NotOnCharBoundary
                | ErrorKind::EmptyRange
        )
    }

    fn new(kind: ErrorKind, run: Option<RunId>, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            run,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn unknown_run(run: RunId, start: usize, end: usize) -> Self {
        Self::new(ErrorKind::UnknownRun, Some(run), start, end, 0)
    }

    pub(crate) fn invalid_bounds(run: Option<RunId>, start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::InvalidBounds, run, start, end, len)
    }

    pub(crate) fn invalid_range(run: Option<RunId>, start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, run, start, end, len)
    }

    pub(crate) fn empty_range(run: Option<RunId>, start: usize, len: usize) -> Self {
        Self::new(ErrorKind::EmptyRange, run, start, start, len)
    }

    pub(crate) fn empty_run(run: RunId) -> Self {
        Self::new(ErrorKind::EmptyRun, Some(run), 0, 0, 0)
    }

    pub(crate) fn duplicate_run(run: RunId) -> Self {
        Self::new(ErrorKind::DuplicateRun, Some(run), 0, 0, 0)
    }

    /// The id source ran out while working on `run`.
    pub fn ids_exhausted(run: Option<RunId>) -> Self {
        Self::new(ErrorKind::IdsExhausted, run, 0, 0, 0)
    }

    pub(crate) fn not_on_char_boundary(
        text: &str,
        run: Option<RunId>,
        start: usize,
        end: usize,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let (char_start, char_end) = enclosing_char_span(text, index).unwrap_or((index, index));
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
            ..Self::new(ErrorKind::NotOnCharBoundary, run, start, end, text.len())
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(run) = self.run {
            write!(f, "run {run}: ")?;
        }
        match self.kind {
            ErrorKind::UnknownRun => write!(f, "no such run in document"),
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::EmptyRange => write!(f, "empty range at {}", self.start),
            ErrorKind::EmptyRun => write!(f, "run text is empty"),
            ErrorKind::DuplicateRun => write!(f, "run id appears more than once"),
            ErrorKind::IdsExhausted => write!(f, "no unused ids left"),
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                        self.start, self.end, which, b.index, b.char_start, b.char_end
                    )
                } else {
                    write!(
                        f,
                        "range {}..{} not on UTF-8 boundary",
                        self.start, self.end
                    )
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The run id does not identify a run currently in the document.
    UnknownRun,

    /// Provided range indices were out of bounds relative to the run's text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,

    /// The provided range had `start == end`, so nothing is selected.
    EmptyRange,

    /// A run was constructed with empty text.
    EmptyRun,

    /// Two runs in the same document share an id.
    DuplicateRun,

    /// The [`IdSource`](crate::IdSource) could not produce another id.
    IdsExhausted,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending index that was not on a UTF-8 character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

fn enclosing_char_span(text: &str, index: usize) -> Option<(usize, usize)> {
    if index > text.len() {
        return None;
    }
    if text.is_char_boundary(index) {
        return Some((index, index));
    }
    // A codepoint is at most 4 bytes, and index 0 is always a boundary.
    let start = (index.saturating_sub(3)..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))?;
    let end = (index + 1..=text.len().min(index + 3)).find(|&i| text.is_char_boundary(i))?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::enclosing_char_span;

    #[test]
    fn enclosing_span_of_multibyte_char() {
        // "é" is 2 bytes, "€" is 3 bytes.
        let t = "é€";
        assert_eq!(enclosing_char_span(t, 0), Some((0, 0)));
        assert_eq!(enclosing_char_span(t, 1), Some((0, 2)));
        assert_eq!(enclosing_char_span(t, 3), Some((2, 5)));
        assert_eq!(enclosing_char_span(t, 4), Some((2, 5)));
        assert_eq!(enclosing_char_span(t, 6), None);
    }
}
