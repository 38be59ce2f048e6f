// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

use log::debug;
use text_runs::{CommentId, Document, Error, IdSource, RunId};

use crate::{Author, Comment, CommentStore, Format, Timestamp};

/// A user-highlighted span inside a single run.
///
/// Runs never change their text once placed, so a selection whose run is
/// still in the document always describes the same text it was created from.
/// Once its run has been split or removed, applying the selection fails with
/// [`ErrorKind::UnknownRun`](text_runs::ErrorKind::UnknownRun).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    text: String,
    run: RunId,
    range: Range<usize>,
}

impl Selection {
    /// Resolves `start..end` inside run `run` of `document`.
    ///
    /// Fails if the run is unknown, the range is invalid, or `start == end`
    /// (nothing is selected).
    pub fn new(document: &Document, run: RunId, start: usize, end: usize) -> Result<Self, Error> {
        let range = start..end;
        let text = document.selected_text(run, range.clone())?;
        Ok(Self {
            text: text.into(),
            run,
            range,
        })
    }

    /// The selected text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The run containing the selection.
    #[inline]
    pub fn run(&self) -> RunId {
        self.run
    }

    /// The selected byte range, local to the run.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The start offset, local to the run.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The end offset (exclusive), local to the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }
}

/// Applies `format` to exactly the selected span.
///
/// The selection's run is split; the selected fragment gets the format merged
/// into its inherited attributes and the other fragments keep the original
/// attributes. Returns the id of the formatted fragment. On error the
/// document is unchanged.
pub fn apply_format(
    document: &mut Document,
    ids: &mut impl IdSource,
    selection: &Selection,
    format: &Format,
) -> Result<RunId, Error> {
    let id = document.split_with(ids, selection.run, selection.range(), |run| {
        format.apply_to(run.attributes_mut());
    })?;
    debug!("applied {format:?} to run {id}");
    Ok(id)
}

/// Attaches a new comment to exactly the selected span.
///
/// Creates the comment record with `anchor_text` set to the selected text,
/// tags the selected fragment of the split run with it, and appends it to
/// `comments`. An empty `body` is accepted. On error neither the document
/// nor the store is changed, and a stale or invalid selection is rejected
/// before a comment id is drawn from `ids`.
pub fn apply_comment(
    document: &mut Document,
    comments: &mut CommentStore,
    ids: &mut impl IdSource,
    selection: &Selection,
    author: &Author,
    timestamp: Timestamp,
    body: impl Into<String>,
) -> Result<CommentId, Error> {
    document.selected_text(selection.run, selection.range())?;
    let comment_id = ids
        .next_comment_id()
        .ok_or(Error::ids_exhausted(Some(selection.run)))?;
    let run = document.split_with(ids, selection.run, selection.range(), |run| {
        run.set_comment(Some(comment_id));
    })?;
    comments.push(Comment::new(
        comment_id,
        body.into(),
        timestamp,
        selection.text.clone(),
        author.clone(),
    ));
    debug!("attached comment {comment_id} to run {run}");
    Ok(comment_id)
}

/// Deletes a comment and every run reference to it.
///
/// Deleting an unknown comment is a no-op. Afterwards no run in `document`
/// references `id` and `comments` holds no record with that id.
pub fn delete_comment(
    document: &mut Document,
    comments: &mut CommentStore,
    id: CommentId,
) -> Option<Comment> {
    let removed = comments.remove(id);
    let cleared = document.clear_comment(id);
    if removed.is_some() || cleared > 0 {
        debug!("deleted comment {id}, cleared {cleared} run reference(s)");
    }
    removed
}
