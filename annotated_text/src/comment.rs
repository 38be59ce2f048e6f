// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use text_runs::{CommentId, Document, RunId};

use crate::Timestamp;

/// The person who wrote a comment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Short form shown in avatars.
    pub initials: String,
}

impl Author {
    /// Creates an author whose initials are the first character of `name`, uppercased.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let initials = name
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        Self { name, initials }
    }

    /// Creates an author with explicit initials.
    pub fn with_initials(name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initials: initials.into(),
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::new("Anonymous")
    }
}

/// A comment anchored to a span of document text.
///
/// `anchor_text` is a snapshot of the selected text at creation time and is
/// not updated by later edits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    id: CommentId,
    text: String,
    timestamp: Timestamp,
    anchor_text: String,
    author: Author,
}

impl Comment {
    pub(crate) fn new(
        id: CommentId,
        text: String,
        timestamp: Timestamp,
        anchor_text: String,
        author: Author,
    ) -> Self {
        Self {
            id,
            text,
            timestamp,
            anchor_text,
            author,
        }
    }

    /// The comment's id.
    #[inline]
    pub fn id(&self) -> CommentId {
        self.id
    }

    /// The comment body. May be empty.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// When the comment was created.
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The selected text the comment was attached to.
    #[inline]
    pub fn anchor_text(&self) -> &str {
        &self.anchor_text
    }

    /// Who wrote the comment.
    #[inline]
    pub fn author(&self) -> &Author {
        &self.author
    }
}

/// The comments of one document, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentStore {
    comments: Vec<Comment>,
}

impl CommentStore {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self {
            comments: Vec::new(),
        }
    }

    /// Builds a store from existing records, rejecting the first repeated id.
    pub(crate) fn from_comments(comments: Vec<Comment>) -> Result<Self, CommentId> {
        let mut seen = HashSet::with_capacity(comments.len());
        for comment in &comments {
            if !seen.insert(comment.id) {
                return Err(comment.id);
            }
        }
        Ok(Self { comments })
    }

    /// Returns the number of comments.
    #[inline]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Returns `true` if there are no comments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Iterates over the comments in creation order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Comment> {
        self.comments.iter()
    }

    /// Looks up a comment by id.
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    /// Returns `true` if a comment with this id exists.
    pub fn contains(&self, id: CommentId) -> bool {
        self.get(id).is_some()
    }

    /// The largest comment id in the store.
    pub fn max_id(&self) -> Option<CommentId> {
        self.comments.iter().map(Comment::id).max()
    }

    pub(crate) fn push(&mut self, comment: Comment) {
        debug_assert!(!self.contains(comment.id), "comment ids are unique");
        self.comments.push(comment);
    }

    /// Removes a comment record without touching any document.
    pub(crate) fn remove(&mut self, id: CommentId) -> Option<Comment> {
        let ix = self.comments.iter().position(|comment| comment.id == id)?;
        Some(self.comments.remove(ix))
    }

    /// Replaces the body of an existing comment. Anchoring is unaffected.
    ///
    /// Returns `false` if there is no such comment.
    pub fn update_text(&mut self, id: CommentId, text: impl Into<String>) -> bool {
        match self.comments.iter_mut().find(|comment| comment.id == id) {
            Some(comment) => {
                comment.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Returns the runs of `document` whose comment has no record in this store.
    ///
    /// This is empty whenever the document and store are only changed through
    /// this crate's operations.
    pub fn dangling_references(&self, document: &Document) -> Vec<(RunId, CommentId)> {
        let live: HashSet<CommentId> = self.comments.iter().map(Comment::id).collect();
        document
            .runs()
            .iter()
            .filter_map(|run| {
                let comment = run.comment()?;
                (!live.contains(&comment)).then_some((run.id(), comment))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CommentStore {
    type Item = &'a Comment;
    type IntoIter = core::slice::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
