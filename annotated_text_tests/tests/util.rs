// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annotated_text::{EditorSession, FixedClock, Format, SessionConfig, Timestamp};
use text_runs::{Color, Document, Link, SequentialIds, TextRun};

pub(crate) const NOW: Timestamp = Timestamp::from_millis(1_717_000_000_000);

/// The sample document used across scenarios: paragraphs separated by newline runs.
pub(crate) const SAMPLE: [&str; 5] = [
    "Rich text is stored as runs.",
    "\n\n",
    "Selecting a span splits exactly one run.",
    "\n",
    "Comments anchor to the selected run.",
];

pub(crate) fn document(texts: &[&str]) -> (Document, SequentialIds) {
    let mut ids = SequentialIds::new();
    let doc = Document::from_texts(&mut ids, texts.iter().copied()).unwrap();
    (doc, ids)
}

pub(crate) fn session(texts: &[&str]) -> EditorSession<FixedClock> {
    let (doc, _) = document(texts);
    EditorSession::new(doc, SessionConfig::new(), FixedClock(NOW))
}

pub(crate) fn texts(doc: &Document) -> Vec<&str> {
    doc.runs().iter().map(TextRun::text).collect()
}

/// Largest character boundary of `text` that is `<= index`.
pub(crate) fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Maps a small integer onto every [`Format`] variant.
pub(crate) fn format_from_index(index: usize) -> Format {
    match index % 8 {
        0 => Format::Bold,
        1 => Format::Italic,
        2 => Format::Underline,
        3 => Format::Strikethrough,
        4 => Format::Code,
        5 => Format::Equation,
        6 => Format::Color(Color::new("#e03131")),
        _ => Format::Link(Link::new("https://example.invalid")),
    }
}
