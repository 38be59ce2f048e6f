// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use log::debug;
use smallvec::SmallVec;

use crate::coalesce::CoalescedRuns;
use crate::range::validate_selection;
use crate::{CommentId, Error, IdSource, RunId, TextRun};

/// The result of splitting one run at a selection.
///
/// Holds the `before` fragment (if non-empty), the `selected` fragment and the
/// `after` fragment (if non-empty), in reading order. Every fragment has a
/// fresh id and inherits the original run's attributes and comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    runs: SmallVec<[TextRun; 3]>,
    selected: usize,
}

impl Split {
    /// Splits `run` at `range` without touching any document.
    ///
    /// `range` must be non-empty and lie on character boundaries of the run's text.
    /// Fails with [`ErrorKind::IdsExhausted`](crate::ErrorKind::IdsExhausted)
    /// if `ids` cannot supply a fresh id for every fragment.
    pub fn new<I: IdSource>(run: &TextRun, ids: &mut I, range: Range<usize>) -> Result<Self, Error> {
        let text = run.text();
        validate_selection(text, run.id(), &range)?;

        let before = &text[..range.start];
        let selected = &text[range.start..range.end];
        let after = &text[range.end..];

        let mut next_id = || ids.next_run_id().ok_or(Error::ids_exhausted(Some(run.id())));
        let mut runs = SmallVec::new();
        if !before.is_empty() {
            runs.push(run.fragment(next_id()?, before));
        }
        let selected_ix = runs.len();
        runs.push(run.fragment(next_id()?, selected));
        if !after.is_empty() {
            runs.push(run.fragment(next_id()?, after));
        }
        Ok(Self {
            runs,
            selected: selected_ix,
        })
    }

    /// All fragments, in reading order.
    #[inline]
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// The fragment covering the selected range.
    #[inline]
    pub fn selected(&self) -> &TextRun {
        &self.runs[self.selected]
    }

    /// Mutable access to the selected fragment, before it is placed.
    #[inline]
    pub fn selected_mut(&mut self) -> &mut TextRun {
        &mut self.runs[self.selected]
    }

    /// Consumes the split, yielding the fragments in reading order.
    #[inline]
    pub fn into_runs(self) -> SmallVec<[TextRun; 3]> {
        self.runs
    }
}

/// An ordered sequence of text runs making up a whole document.
///
/// Run order is reading order. Concatenating every run's text yields the
/// document text, and no operation on `Document` changes that text: splits
/// only change how it is segmented and annotated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    runs: Vec<TextRun>,
}

impl Document {
    /// Creates an empty document.
    #[inline]
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Creates a document with one plain run per string.
    ///
    /// Empty strings are skipped, as a run can never be empty. Fails only if
    /// `ids` runs out.
    pub fn from_texts<I, S>(ids: &mut impl IdSource, texts: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let runs = texts
            .into_iter()
            .map(Into::into)
            .filter(|text: &String| !text.is_empty())
            .map(|text| {
                let id = ids.next_run_id().ok_or(Error::ids_exhausted(None))?;
                TextRun::new(id, text)
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self { runs })
    }

    /// Creates a document from existing runs, checking the run invariants.
    ///
    /// Fails if a run is empty or if two runs share an id.
    pub fn from_runs(runs: Vec<TextRun>) -> Result<Self, Error> {
        let mut seen: Vec<RunId> = Vec::with_capacity(runs.len());
        for run in &runs {
            if run.text().is_empty() {
                return Err(Error::empty_run(run.id()));
            }
            seen.push(run.id());
        }
        seen.sort_unstable();
        if let Some(pair) = seen.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(Error::duplicate_run(pair[0]));
        }
        Ok(Self { runs })
    }

    /// The runs, in reading order.
    #[inline]
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Consumes the document, yielding its runs.
    #[inline]
    pub fn into_runs(self) -> Vec<TextRun> {
        self.runs
    }

    /// Returns the number of runs.
    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if there are no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Looks up a run by id.
    pub fn run(&self, id: RunId) -> Option<&TextRun> {
        self.runs.iter().find(|run| run.id() == id)
    }

    /// Returns the index of the run with the given id.
    pub fn position(&self, id: RunId) -> Option<usize> {
        self.runs.iter().position(|run| run.id() == id)
    }

    /// Returns the text of `range` inside run `id`.
    ///
    /// Fails exactly when [`split`](Self::split) would fail for the same
    /// arguments (barring id exhaustion), so this doubles as a check that a
    /// selection is usable.
    pub fn selected_text(&self, id: RunId, range: Range<usize>) -> Result<&str, Error> {
        let run = self
            .run(id)
            .ok_or_else(|| Error::unknown_run(id, range.start, range.end))?;
        validate_selection(run.text(), id, &range)?;
        Ok(&run.text()[range])
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.runs.iter().map(TextRun::text).collect()
    }

    /// The length of the full document text, in bytes.
    pub fn text_len(&self) -> usize {
        self.runs.iter().map(TextRun::len).sum()
    }

    /// The largest run id in the document.
    pub fn max_run_id(&self) -> Option<RunId> {
        self.runs.iter().map(TextRun::id).max()
    }

    /// The largest comment id referenced by any run.
    pub fn max_comment_id(&self) -> Option<CommentId> {
        self.runs.iter().filter_map(TextRun::comment).max()
    }

    /// Iterates over the runs that reference `comment`.
    pub fn runs_with_comment(&self, comment: CommentId) -> impl Iterator<Item = &TextRun> + '_ {
        self.runs
            .iter()
            .filter(move |run| run.comment() == Some(comment))
    }

    /// Clears every reference to `comment`, returning how many runs referenced it.
    pub fn clear_comment(&mut self, comment: CommentId) -> usize {
        let mut cleared = 0;
        for run in &mut self.runs {
            if run.comment() == Some(comment) {
                run.set_comment(None);
                cleared += 1;
            }
        }
        cleared
    }

    /// Splits the run `id` at `range`, returning the id of the selected fragment.
    ///
    /// The run is replaced in place by its `before`/`selected`/`after`
    /// fragments (empty `before`/`after` are omitted). On error the document
    /// is left unchanged.
    pub fn split(
        &mut self,
        ids: &mut impl IdSource,
        id: RunId,
        range: Range<usize>,
    ) -> Result<RunId, Error> {
        self.split_with(ids, id, range, |_| {})
    }

    /// Like [`split`](Self::split), but lets `edit` update the selected
    /// fragment before it is placed.
    ///
    /// `edit` may change the fragment's attributes and comment; its text and
    /// id are fixed.
    pub fn split_with<F>(
        &mut self,
        ids: &mut impl IdSource,
        id: RunId,
        range: Range<usize>,
        edit: F,
    ) -> Result<RunId, Error>
    where
        F: FnOnce(&mut TextRun),
    {
        let position = self
            .position(id)
            .ok_or_else(|| Error::unknown_run(id, range.start, range.end))?;
        let mut split = Split::new(&self.runs[position], ids, range.clone())?;
        edit(split.selected_mut());
        let selected = split.selected().id();
        let pieces = split.into_runs();
        debug!(
            "split run {id} at {}..{} into {} run(s), selected {selected}",
            range.start,
            range.end,
            pieces.len()
        );
        self.runs.splice(position..=position, pieces);
        Ok(selected)
    }

    /// Iterates over maximal groups of adjacent runs that render identically.
    ///
    /// This is a view for rendering; the runs themselves are not merged.
    pub fn coalesced_runs(&self) -> CoalescedRuns<'_> {
        CoalescedRuns::new(&self.runs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Split};
    use crate::{CommentId, ErrorKind, RunAttributes, RunId, SequentialIds, TextRun};
    use alloc::vec;
    use alloc::vec::Vec;

    fn texts(doc: &Document) -> Vec<&str> {
        doc.runs().iter().map(TextRun::text).collect()
    }

    #[test]
    fn split_in_the_middle() {
        let mut ids = SequentialIds::new();
        let mut doc = Document::from_texts(&mut ids, ["Hello world"]).unwrap();
        let selected = doc.split(&mut ids, RunId::new(0), 6..11).unwrap();
        assert_eq!(texts(&doc), ["Hello ", "world"]);
        assert_eq!(doc.runs()[1].id(), selected);
        assert_eq!(doc.text(), "Hello world");
    }

    #[test]
    fn split_emits_three_fragments_with_fresh_ids() {
        let mut ids = SequentialIds::new();
        let mut doc = Document::from_texts(&mut ids, ["abcdef"]).unwrap();
        let selected = doc.split(&mut ids, RunId::new(0), 2..4).unwrap();
        assert_eq!(texts(&doc), ["ab", "cd", "ef"]);
        let got: Vec<_> = doc.runs().iter().map(TextRun::id).collect();
        assert_eq!(got, [RunId::new(1), RunId::new(2), RunId::new(3)]);
        assert_eq!(selected, RunId::new(2));
        assert!(doc.run(RunId::new(0)).is_none());
    }

    #[test]
    fn split_whole_run_keeps_one_fragment() {
        let mut ids = SequentialIds::new();
        let mut doc = Document::from_texts(&mut ids, ["abc"]).unwrap();
        doc.split(&mut ids, RunId::new(0), 0..3).unwrap();
        assert_eq!(texts(&doc), ["abc"]);
        assert_eq!(doc.runs()[0].id(), RunId::new(1));
    }

    #[test]
    fn split_preserves_neighbours() {
        let mut ids = SequentialIds::new();
        let mut doc = Document::from_texts(&mut ids, ["one ", "two ", "three"]).unwrap();
        doc.split(&mut ids, RunId::new(1), 1..2).unwrap();
        assert_eq!(texts(&doc), ["one ", "t", "w", "o ", "three"]);
        assert_eq!(doc.runs()[0].id(), RunId::new(0));
        assert_eq!(doc.runs()[4].id(), RunId::new(2));
    }

    #[test]
    fn fragments_inherit_attributes_and_comment() {
        let run = TextRun::new(RunId::new(10), "abc")
            .unwrap()
            .with_attributes(RunAttributes {
                bold: true,
                ..RunAttributes::default()
            })
            .with_comment(Some(CommentId::new(1)));
        let mut ids = SequentialIds::new();
        let split = Split::new(&run, &mut ids, 1..2).unwrap();
        assert_eq!(split.runs().len(), 3);
        assert!(split.runs().iter().all(|piece| piece.same_format(&run)));
        assert_eq!(split.selected().text(), "b");
    }

    #[test]
    fn split_edit_only_touches_selected() {
        let mut ids = SequentialIds::new();
        let mut doc = Document::from_texts(&mut ids, ["abc"]).unwrap();
        doc.split_with(&mut ids, RunId::new(0), 1..2, |run| {
            run.attributes_mut().code = true;
        })
        .unwrap();
        let code: Vec<_> = doc.runs().iter().map(|r| r.attributes().code).collect();
        assert_eq!(code, [false, true, false]);
    }

    #[test]
    fn failed_split_leaves_document_unchanged() {
        let mut ids = SequentialIds::new();
        let mut doc = Document::from_texts(&mut ids, ["héllo"]).unwrap();
        let before = doc.clone();

        let err = doc.split(&mut ids, RunId::new(9), 0..1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownRun);
        let err = doc.split(&mut ids, RunId::new(0), 3..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyRange);
        let err = doc.split(&mut ids, RunId::new(0), 0..2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = doc.split(&mut ids, RunId::new(0), 0..9).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);

        assert_eq!(doc, before);
    }

    #[test]
    fn split_without_fresh_ids_fails_cleanly() {
        let runs = vec![TextRun::new(RunId::new(u64::MAX), "abc").unwrap()];
        let mut doc = Document::from_runs(runs).unwrap();
        let before = doc.clone();
        let mut ids = SequentialIds::resume_after(doc.max_run_id(), None);

        let err = doc.split(&mut ids, RunId::new(u64::MAX), 1..2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IdsExhausted);
        assert!(!err.is_invalid_selection());
        assert_eq!(doc, before);
    }

    #[test]
    fn from_texts_skips_empty_strings() {
        let mut ids = SequentialIds::new();
        let doc = Document::from_texts(&mut ids, ["a", "", "b"]).unwrap();
        assert_eq!(texts(&doc), ["a", "b"]);
        assert_eq!(doc.max_run_id(), Some(RunId::new(1)));
    }

    #[test]
    fn from_runs_rejects_duplicates() {
        let runs = vec![
            TextRun::new(RunId::new(1), "a").unwrap(),
            TextRun::new(RunId::new(1), "b").unwrap(),
        ];
        let err = Document::from_runs(runs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateRun);
    }

    #[test]
    fn clear_comment_counts_references() {
        let c = Some(CommentId::new(0));
        let runs = vec![
            TextRun::new(RunId::new(0), "a").unwrap().with_comment(c),
            TextRun::new(RunId::new(1), "b").unwrap(),
            TextRun::new(RunId::new(2), "c").unwrap().with_comment(c),
        ];
        let mut doc = Document::from_runs(runs).unwrap();
        assert_eq!(doc.max_comment_id(), Some(CommentId::new(0)));
        assert_eq!(doc.runs_with_comment(CommentId::new(0)).count(), 2);
        assert_eq!(doc.clear_comment(CommentId::new(0)), 2);
        assert_eq!(doc.runs_with_comment(CommentId::new(0)).count(), 0);
        assert_eq!(doc.clear_comment(CommentId::new(0)), 0);
    }
}
