// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serializable snapshots of a session's document and comments.

use alloc::vec::Vec;
use core::fmt;

use text_runs::{CommentId, Document, RunId, SequentialIds, TextRun};

use crate::{Clock, Comment, CommentStore, EditorSession, SessionConfig};

/// The persistent part of an [`EditorSession`]: runs in reading order plus comments.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    /// The document's runs, in reading order.
    pub runs: Vec<TextRun>,
    /// The comments, in creation order.
    pub comments: Vec<Comment>,
}

/// Why a [`Snapshot`] could not be restored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    /// The runs violate a document invariant (empty text or duplicate id).
    Runs(text_runs::Error),
    /// Two comments share an id.
    DuplicateComment(CommentId),
    /// A run references a comment that is not in the snapshot.
    DanglingComment {
        /// The referencing run.
        run: RunId,
        /// The missing comment.
        comment: CommentId,
    },
    /// The snapshot already uses the largest possible run or comment id, so
    /// no fresh ids could be handed out.
    IdsExhausted,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runs(err) => write!(f, "invalid runs: {err}"),
            Self::DuplicateComment(id) => write!(f, "comment {id} appears more than once"),
            Self::DanglingComment { run, comment } => {
                write!(f, "run {run} references missing comment {comment}")
            }
            Self::IdsExhausted => write!(f, "no unused run or comment ids left"),
        }
    }
}

impl core::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Runs(err) => Some(err),
            _ => None,
        }
    }
}

impl From<text_runs::Error> for SnapshotError {
    fn from(err: text_runs::Error) -> Self {
        Self::Runs(err)
    }
}

impl<C: Clock, I: text_runs::IdSource> EditorSession<C, I> {
    /// Captures the document and comments.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            runs: self.document().runs().to_vec(),
            comments: self.comments().iter().cloned().collect(),
        }
    }
}

impl<C: Clock> EditorSession<C> {
    /// Rebuilds a session from a snapshot.
    ///
    /// The snapshot is checked for the same invariants the operations
    /// maintain; new ids continue after the largest ids it contains, so a
    /// snapshot holding `u64::MAX` as a run or comment id is rejected.
    pub fn restore(
        snapshot: Snapshot,
        config: SessionConfig,
        clock: C,
    ) -> Result<Self, SnapshotError> {
        let document = Document::from_runs(snapshot.runs)?;
        let comments =
            CommentStore::from_comments(snapshot.comments).map_err(SnapshotError::DuplicateComment)?;
        if let Some(&(run, comment)) = comments.dangling_references(&document).first() {
            return Err(SnapshotError::DanglingComment { run, comment });
        }
        let ids = SequentialIds::resume_after(document.max_run_id(), comments.max_id());
        if ids.runs_exhausted() || ids.comments_exhausted() {
            return Err(SnapshotError::IdsExhausted);
        }
        Ok(Self::with_ids(document, comments, config, clock, ids))
    }
}
