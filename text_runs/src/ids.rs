// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Opaque identifier of a [`TextRun`](crate::TextRun).
///
/// Every run produced by a split gets a fresh id, so an id names one exact
/// piece of text for as long as that piece stays in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RunId(u64);

impl RunId {
    /// Wraps a raw id value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Opaque identifier of a comment.
///
/// Runs reference comments by id only; the comment record itself lives in a
/// separate collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommentId(u64);

impl CommentId {
    /// Wraps a raw id value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A source of fresh identifiers.
///
/// Splitting and comment creation draw ids from an `IdSource` passed in by the
/// caller, so tests can inject a deterministic source and assert exact output.
///
/// Both methods return `None` once the source has no unused ids left.
pub trait IdSource {
    /// Returns a run id that has not been returned before.
    fn next_run_id(&mut self) -> Option<RunId>;

    /// Returns a comment id that has not been returned before.
    fn next_comment_id(&mut self) -> Option<CommentId>;
}

impl<S: IdSource + ?Sized> IdSource for &mut S {
    fn next_run_id(&mut self) -> Option<RunId> {
        (**self).next_run_id()
    }

    fn next_comment_id(&mut self) -> Option<CommentId> {
        (**self).next_comment_id()
    }
}

/// Monotonic counters, one for runs and one for comments.
///
/// A counter that has handed out `u64::MAX` is exhausted and yields `None`
/// from then on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequentialIds {
    next_run: Option<u64>,
    next_comment: Option<u64>,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialIds {
    /// Creates a source whose first run id and first comment id are both `0`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            next_run: Some(0),
            next_comment: Some(0),
        }
    }

    /// Creates a source that continues after already-allocated ids.
    ///
    /// Use this when resuming from a restored document so that new ids never
    /// collide with ones already in use. A counter resumed after `u64::MAX`
    /// starts out exhausted.
    pub fn resume_after(last_run: Option<RunId>, last_comment: Option<CommentId>) -> Self {
        Self {
            next_run: last_run.map_or(Some(0), |id| id.get().checked_add(1)),
            next_comment: last_comment.map_or(Some(0), |id| id.get().checked_add(1)),
        }
    }

    /// Returns `true` if no more run ids can be produced.
    #[inline]
    pub fn runs_exhausted(&self) -> bool {
        self.next_run.is_none()
    }

    /// Returns `true` if no more comment ids can be produced.
    #[inline]
    pub fn comments_exhausted(&self) -> bool {
        self.next_comment.is_none()
    }
}

impl IdSource for SequentialIds {
    fn next_run_id(&mut self) -> Option<RunId> {
        let id = self.next_run?;
        self.next_run = id.checked_add(1);
        Some(RunId(id))
    }

    fn next_comment_id(&mut self) -> Option<CommentId> {
        let id = self.next_comment?;
        self.next_comment = id.checked_add(1);
        Some(CommentId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentId, IdSource, RunId, SequentialIds};
    use alloc::format;

    #[test]
    fn sequential_ids_are_independent_counters() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_run_id(), Some(RunId::new(0)));
        assert_eq!(ids.next_run_id(), Some(RunId::new(1)));
        assert_eq!(ids.next_comment_id(), Some(CommentId::new(0)));
        assert_eq!(ids.next_run_id(), Some(RunId::new(2)));
    }

    #[test]
    fn resume_skips_past_existing_ids() {
        let mut ids = SequentialIds::resume_after(Some(RunId::new(7)), None);
        assert_eq!(ids.next_run_id(), Some(RunId::new(8)));
        assert_eq!(ids.next_comment_id(), Some(CommentId::new(0)));
    }

    #[test]
    fn resume_after_max_is_exhausted() {
        let mut ids = SequentialIds::resume_after(Some(RunId::new(u64::MAX)), None);
        assert!(ids.runs_exhausted());
        assert!(!ids.comments_exhausted());
        assert_eq!(ids.next_run_id(), None);
        assert_eq!(ids.next_comment_id(), Some(CommentId::new(0)));
    }

    #[test]
    fn counter_hands_out_max_then_stops() {
        let mut ids =
            SequentialIds::resume_after(Some(RunId::new(u64::MAX - 2)), Some(CommentId::new(u64::MAX - 1)));
        assert_eq!(ids.next_run_id(), Some(RunId::new(u64::MAX - 1)));
        assert_eq!(ids.next_run_id(), Some(RunId::new(u64::MAX)));
        assert_eq!(ids.next_run_id(), None);
        assert_eq!(ids.next_comment_id(), Some(CommentId::new(u64::MAX)));
        assert_eq!(ids.next_comment_id(), None);
        assert!(ids.comments_exhausted());
    }

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(format!("{}", RunId::new(4)), "r4");
        assert_eq!(format!("{}", CommentId::new(9)), "c9");
    }
}
