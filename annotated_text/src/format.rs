// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_runs::{Color, Link, RunAttributes};

/// A formatting attribute that can be applied to a selection.
///
/// Boolean formats are additive and idempotent. [`Format::Color`] and
/// [`Format::Link`] replace any previous value instead of combining with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Bold weight.
    Bold,
    /// Italic style.
    Italic,
    /// Underline decoration.
    Underline,
    /// Line-through decoration.
    Strikethrough,
    /// Inline code.
    Code,
    /// Inline equation.
    Equation,
    /// Text color.
    Color(Color),
    /// Hyperlink.
    Link(Link),
}

impl Format {
    /// Merges this format into `attributes`, leaving every other attribute as is.
    pub fn apply_to(&self, attributes: &mut RunAttributes) {
        match self {
            Self::Bold => attributes.bold = true,
            Self::Italic => attributes.italic = true,
            Self::Underline => attributes.underline = true,
            Self::Strikethrough => attributes.strikethrough = true,
            Self::Code => attributes.code = true,
            Self::Equation => attributes.equation = true,
            Self::Color(color) => attributes.color = Some(color.clone()),
            Self::Link(link) => attributes.link = Some(link.clone()),
        }
    }

    /// Returns `true` if applying this format to `attributes` would change nothing.
    pub fn is_applied(&self, attributes: &RunAttributes) -> bool {
        match self {
            Self::Bold => attributes.bold,
            Self::Italic => attributes.italic,
            Self::Underline => attributes.underline,
            Self::Strikethrough => attributes.strikethrough,
            Self::Code => attributes.code,
            Self::Equation => attributes.equation,
            Self::Color(color) => attributes.color.as_ref() == Some(color),
            Self::Link(link) => attributes.link.as_ref() == Some(link),
        }
    }
}
