// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use text_runs::Color;

use crate::Author;

/// A named entry of the color menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteColor {
    /// Label shown to the user.
    pub name: String,
    /// The color applied when the entry is picked.
    pub color: Color,
}

impl PaletteColor {
    /// Creates a palette entry.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The built-in color menu: the inherited color followed by seven hues.
pub fn default_palette() -> Vec<PaletteColor> {
    [
        ("Default", Color::INHERIT),
        ("Red", "#e03131"),
        ("Orange", "#f76707"),
        ("Yellow", "#f59f00"),
        ("Green", "#37b24d"),
        ("Blue", "#1c7ed6"),
        ("Purple", "#7048e8"),
        ("Pink", "#f06595"),
    ]
    .into_iter()
    .map(|(name, value)| PaletteColor::new(name, Color::new(value)))
    .collect()
}

/// Settings for an [`EditorSession`](crate::EditorSession).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    author: Author,
    palette: Vec<PaletteColor>,
    ignore_blank_selections: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            author: Author::default(),
            palette: default_palette(),
            ignore_blank_selections: true,
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author stamped on new comments.
    #[must_use]
    pub fn author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    /// Replaces the color menu.
    #[must_use]
    pub fn palette(mut self, palette: Vec<PaletteColor>) -> Self {
        self.palette = palette;
        self
    }

    /// Whether a selection made only of whitespace counts as no selection.
    #[must_use]
    pub fn ignore_blank_selections(mut self, ignore: bool) -> Self {
        self.ignore_blank_selections = ignore;
        self
    }

    /// The author stamped on new comments.
    #[inline]
    pub fn comment_author(&self) -> &Author {
        &self.author
    }

    /// The color menu.
    #[inline]
    pub fn colors(&self) -> &[PaletteColor] {
        &self.palette
    }

    /// Returns `true` if whitespace-only selections are dropped.
    #[inline]
    pub fn ignores_blank_selections(&self) -> bool {
        self.ignore_blank_selections
    }
}

#[cfg(test)]
mod tests {
    use super::{default_palette, PaletteColor, SessionConfig};
    use crate::Author;
    use alloc::vec;
    use text_runs::Color;

    #[test]
    fn default_palette_starts_with_inherit() {
        let palette = default_palette();
        assert_eq!(palette.len(), 8);
        assert!(palette[0].color.is_inherit());
        assert_eq!(palette[1].color.as_str(), "#e03131");
    }

    #[test]
    fn builder_overrides() {
        let config = SessionConfig::new()
            .author(Author::new("Ada"))
            .palette(vec![PaletteColor::new("Ink", Color::new("#000"))])
            .ignore_blank_selections(false);
        assert_eq!(config.comment_author().initials, "A");
        assert_eq!(config.colors().len(), 1);
        assert!(!config.ignores_blank_selections());
    }
}
