// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{CommentId, RunAttributes, RunId, TextRun};

/// A group of adjacent runs that render identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoalescedRun<'a> {
    /// The byte range of the group in the full document text.
    pub range: Range<usize>,
    /// The index range of the grouped runs in the document.
    pub runs: Range<usize>,
    /// The id of the first run in the group.
    pub first: RunId,
    /// The attributes shared by every run in the group.
    pub attributes: &'a RunAttributes,
    /// The comment shared by every run in the group.
    pub comment: Option<CommentId>,
}

/// An iterator over [`CoalescedRun`]s of a document.
///
/// Created by [`Document::coalesced_runs`](crate::Document::coalesced_runs).
#[derive(Clone, Debug)]
pub struct CoalescedRuns<'a> {
    runs: &'a [TextRun],
    index: usize,
    offset: usize,
    pending: Option<CoalescedRun<'a>>,
}

impl<'a> CoalescedRuns<'a> {
    pub(crate) fn new(runs: &'a [TextRun]) -> Self {
        Self {
            runs,
            index: 0,
            offset: 0,
            pending: None,
        }
    }

    fn next_single(&mut self) -> Option<CoalescedRun<'a>> {
        let run = self.runs.get(self.index)?;
        let start = self.offset;
        self.offset += run.len();
        self.index += 1;
        Some(CoalescedRun {
            range: start..self.offset,
            runs: self.index - 1..self.index,
            first: run.id(),
            attributes: run.attributes(),
            comment: run.comment(),
        })
    }
}

impl<'a> Iterator for CoalescedRuns<'a> {
    type Item = CoalescedRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = self.pending.take().or_else(|| self.next_single())?;

        while let Some(next) = self.next_single() {
            if next.attributes == group.attributes && next.comment == group.comment {
                group.range.end = next.range.end;
                group.runs.end = next.runs.end;
                continue;
            }
            self.pending = Some(next);
            break;
        }

        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CommentId, Document, RunAttributes, RunId, TextRun};
    use alloc::vec;
    use alloc::vec::Vec;

    fn bold() -> RunAttributes {
        RunAttributes {
            bold: true,
            ..RunAttributes::default()
        }
    }

    #[test]
    fn coalesces_adjacent_equal_runs() {
        let runs = vec![
            TextRun::new(RunId::new(0), "ab").unwrap(),
            TextRun::new(RunId::new(1), "cd").unwrap(),
            TextRun::new(RunId::new(2), "e").unwrap().with_attributes(bold()),
            TextRun::new(RunId::new(3), "f").unwrap().with_attributes(bold()),
            TextRun::new(RunId::new(4), "g").unwrap(),
        ];
        let doc = Document::from_runs(runs).unwrap();
        let groups: Vec<_> = doc.coalesced_runs().collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].range, 0..4);
        assert_eq!(groups[0].runs, 0..2);
        assert_eq!(groups[1].range, 4..6);
        assert_eq!(groups[1].first, RunId::new(2));
        assert!(groups[1].attributes.bold);
        assert_eq!(groups[2].range, 6..7);
    }

    #[test]
    fn comment_breaks_a_group() {
        let runs = vec![
            TextRun::new(RunId::new(0), "ab").unwrap(),
            TextRun::new(RunId::new(1), "cd")
                .unwrap()
                .with_comment(Some(CommentId::new(0))),
        ];
        let doc = Document::from_runs(runs).unwrap();
        let groups: Vec<_> = doc.coalesced_runs().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].comment, Some(CommentId::new(0)));
    }

    #[test]
    fn empty_document_has_no_groups() {
        assert_eq!(Document::new().coalesced_runs().count(), 0);
    }
}
