// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{CommentId, Error, RunId};

/// A text color, stored as the CSS value it was picked with (e.g. `#e03131`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(String);

impl Color {
    /// The value that means "use the surrounding text color".
    pub const INHERIT: &'static str = "inherit";

    /// Creates a color from its CSS value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The color that defers to the surrounding text color.
    pub fn inherit() -> Self {
        Self::new(Self::INHERIT)
    }

    /// Returns `true` if this is [`Color::inherit`].
    pub fn is_inherit(&self) -> bool {
        self.0 == Self::INHERIT
    }

    /// The CSS value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A hyperlink target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Link(String);

impl Link {
    /// Creates a link to `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    /// The link target.
    pub fn href(&self) -> &str {
        &self.0
    }
}

/// The set of formatting attributes carried by a run.
///
/// Boolean attributes are either on or off. `color` and `link` hold at most
/// one value each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunAttributes {
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
    /// Underline decoration.
    pub underline: bool,
    /// Line-through decoration.
    pub strikethrough: bool,
    /// Inline code.
    pub code: bool,
    /// Inline equation.
    pub equation: bool,
    /// Text color, if one was applied.
    pub color: Option<Color>,
    /// Link target, if one was applied.
    pub link: Option<Link>,
}

impl RunAttributes {
    /// Returns `true` if no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A piece of document text sharing one attribute set and at most one comment.
///
/// The text of a run never changes after construction; a document replaces a
/// run with new runs instead of editing its text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    id: RunId,
    text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    attributes: RunAttributes,
    #[cfg_attr(feature = "serde", serde(default))]
    comment: Option<CommentId>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "A run is never empty once constructed."
)]
impl TextRun {
    /// Creates a plain run.
    ///
    /// Fails with [`ErrorKind::EmptyRun`](crate::ErrorKind::EmptyRun) if `text` is empty.
    pub fn new(id: RunId, text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::empty_run(id));
        }
        Ok(Self {
            id,
            text,
            attributes: RunAttributes::default(),
            comment: None,
        })
    }

    /// Replaces the attribute set.
    #[must_use]
    pub fn with_attributes(mut self, attributes: RunAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Replaces the comment reference.
    #[must_use]
    pub fn with_comment(mut self, comment: Option<CommentId>) -> Self {
        self.comment = comment;
        self
    }

    /// Builds a fragment of `self` with a new id, inheriting attributes and comment.
    pub(crate) fn fragment(&self, id: RunId, text: &str) -> Self {
        debug_assert!(!text.is_empty(), "fragments are never empty");
        Self {
            id,
            text: text.into(),
            attributes: self.attributes.clone(),
            comment: self.comment,
        }
    }

    /// The run's id.
    #[inline]
    pub fn id(&self) -> RunId {
        self.id
    }

    /// The run's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The length of the run's text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// The run's attributes.
    #[inline]
    pub fn attributes(&self) -> &RunAttributes {
        &self.attributes
    }

    /// Mutable access to the attributes, for a run that is not yet placed in a document.
    #[inline]
    pub fn attributes_mut(&mut self) -> &mut RunAttributes {
        &mut self.attributes
    }

    /// The comment this run is anchored to, if any.
    #[inline]
    pub fn comment(&self) -> Option<CommentId> {
        self.comment
    }

    /// Sets or clears the comment reference.
    #[inline]
    pub fn set_comment(&mut self, comment: Option<CommentId>) {
        self.comment = comment;
    }

    /// Returns `true` if both runs would render identically: same attributes, same comment.
    #[inline]
    pub fn same_format(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.comment == other.comment
    }
}
