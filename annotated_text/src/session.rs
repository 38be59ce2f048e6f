// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use log::{debug, warn};
use text_runs::{CommentId, Document, Error, IdSource, RunId, SequentialIds, TextRun};

use crate::{
    apply_comment, apply_format, delete_comment, Clock, Comment, CommentStore, Format, Selection,
    SessionConfig,
};

/// The editing state of one open document.
///
/// Owns the document, its comments, the active selection and the
/// capabilities (ids, clock) that operations draw on. Every `request_*`
/// call runs to completion before returning.
///
/// Requests are tolerant: a stale or invalid selection leaves the document
/// unchanged, logs a warning and yields `None`. Use the free functions
/// ([`apply_format`], [`apply_comment`], [`delete_comment`]) for strict
/// error reporting.
#[derive(Clone, Debug)]
pub struct EditorSession<C: Clock, I: IdSource = SequentialIds> {
    document: Document,
    comments: CommentStore,
    selection: Option<Selection>,
    hovered: Option<CommentId>,
    ids: I,
    clock: C,
    config: SessionConfig,
}

impl<C: Clock> EditorSession<C> {
    /// Opens `document` with no comment records and a sequential id source
    /// that continues after every run id and comment id in the document.
    ///
    /// Comment references already on the runs have no record in the new
    /// session; they are kept, logged as warnings, and reported by
    /// [`CommentStore::dangling_references`]. New comments never reuse their
    /// ids. Open a document that has comments with
    /// [`with_ids`](Self::with_ids) or `restore` instead.
    pub fn new(document: Document, config: SessionConfig, clock: C) -> Self {
        let ids = SequentialIds::resume_after(document.max_run_id(), document.max_comment_id());
        let comments = CommentStore::new();
        for (run, comment) in comments.dangling_references(&document) {
            warn!("run {run} references comment {comment}, which has no record");
        }
        if ids.runs_exhausted() {
            warn!("no run ids left; formatting and comments will be refused");
        }
        Self::with_ids(document, comments, config, clock, ids)
    }
}

impl<C: Clock, I: IdSource> EditorSession<C, I> {
    /// Opens `document` and `comments` with an explicit id source.
    ///
    /// `ids` must not produce ids already used in `document` or `comments`.
    pub fn with_ids(
        document: Document,
        comments: CommentStore,
        config: SessionConfig,
        clock: C,
        ids: I,
    ) -> Self {
        Self {
            document,
            comments,
            selection: None,
            hovered: None,
            ids,
            clock,
            config,
        }
    }

    /// The current document.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current comments, in creation order.
    #[inline]
    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    /// The active selection, if any.
    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The session settings.
    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Records the user's selection of `start..end` inside run `run`.
    ///
    /// Clears the selection and returns `None` when nothing usable is
    /// selected: `start == end`, an unknown run or invalid range, or
    /// whitespace-only text when blank selections are ignored.
    pub fn report_selection(&mut self, run: RunId, start: usize, end: usize) -> Option<&Selection> {
        self.selection = None;
        if start == end {
            return None;
        }
        let selection = match Selection::new(&self.document, run, start, end) {
            Ok(selection) => selection,
            Err(err) => {
                warn!("ignoring selection: {err}");
                return None;
            }
        };
        if self.config.ignores_blank_selections() && selection.text().trim().is_empty() {
            debug!("ignoring blank selection in run {run}");
            return None;
        }
        Some(&*self.selection.insert(selection))
    }

    /// Drops the active selection.
    #[inline]
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Applies `format` to the active selection, consuming it.
    ///
    /// Returns the id of the formatted run.
    pub fn request_format(&mut self, format: Format) -> Option<RunId> {
        let selection = self.selection.take()?;
        let result = apply_format(&mut self.document, &mut self.ids, &selection, &format);
        tolerate("format", result)
    }

    /// Applies the palette color at `index` to the active selection, consuming it.
    pub fn request_color(&mut self, index: usize) -> Option<RunId> {
        let Some(entry) = self.config.colors().get(index) else {
            warn!("no palette color at index {index}");
            self.selection = None;
            return None;
        };
        let format = Format::Color(entry.color.clone());
        self.request_format(format)
    }

    /// Attaches a comment with `body` to the active selection, consuming it.
    ///
    /// The comment is stamped with the configured author and the clock's time.
    pub fn request_comment(&mut self, body: impl Into<String>) -> Option<CommentId> {
        let selection = self.selection.take()?;
        let result = apply_comment(
            &mut self.document,
            &mut self.comments,
            &mut self.ids,
            &selection,
            self.config.comment_author(),
            self.clock.now(),
            body,
        );
        tolerate("comment", result)
    }

    /// Deletes a comment and clears every run reference to it.
    ///
    /// Returns the removed record, or `None` if there was no such comment.
    pub fn request_delete_comment(&mut self, id: CommentId) -> Option<Comment> {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        delete_comment(&mut self.document, &mut self.comments, id)
    }

    /// Replaces the body of an existing comment.
    ///
    /// Returns `false` if there is no such comment.
    pub fn request_edit_comment(&mut self, id: CommentId, body: impl Into<String>) -> bool {
        let edited = self.comments.update_text(id, body);
        if edited {
            debug!("edited comment {id}");
        }
        edited
    }

    /// Marks a comment as hovered, linking its runs and its side-panel entry.
    ///
    /// Unknown comments are treated as `None`.
    pub fn set_hovered_comment(&mut self, id: Option<CommentId>) {
        self.hovered = id.filter(|&id| self.comments.contains(id));
    }

    /// The hovered comment, if any.
    #[inline]
    pub fn hovered_comment(&self) -> Option<CommentId> {
        self.hovered
    }

    /// Returns `true` if `run` carries the hovered comment.
    pub fn is_highlighted(&self, run: &TextRun) -> bool {
        self.hovered.is_some() && run.comment() == self.hovered
    }
}

fn tolerate<T>(action: &str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("dropping {action} request: {err}");
            None
        }
    }
}
