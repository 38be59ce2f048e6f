// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, RunId};

/// Checks that `range` is a usable byte range into `text`.
///
/// - `start <= end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on UTF-8 codepoint boundaries
///
/// An empty range passes; callers that need a non-empty selection check that
/// separately (see [`validate_selection`]).
pub fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    check(text, None, range)
}

/// Checks that `range` selects at least one character of the run's `text`.
///
/// This is [`validate_range`] plus the rule that `start == end` means nothing
/// is selected, which is reported as [`ErrorKind::EmptyRange`](crate::ErrorKind::EmptyRange).
pub fn validate_selection(text: &str, run: RunId, range: &Range<usize>) -> Result<(), Error> {
    check(text, Some(run), range)?;
    if range.start == range.end {
        return Err(Error::empty_range(Some(run), range.start, text.len()));
    }
    Ok(())
}

#[inline]
fn check(text: &str, run: Option<RunId>, range: &Range<usize>) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(run, range.start, range.end, text_len));
    }
    if range.end > text_len {
        return Err(Error::invalid_bounds(run, range.start, range.end, text_len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(
            text,
            run,
            range.start,
            range.end,
            Endpoint::Start,
            range.start,
        ));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(
            text,
            run,
            range.start,
            range.end,
            Endpoint::End,
            range.end,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_range, validate_selection};
    use crate::{Endpoint, ErrorKind, RunId};
    use alloc::string::ToString;

    #[test]
    fn validates_ok_ranges() {
        let t = "Hello!";
        assert!(validate_range(t, &(0..0)).is_ok());
        assert!(validate_range(t, &(0..6)).is_ok());
        assert!(validate_selection(t, RunId::new(1), &(1..3)).is_ok());
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_start_greater_than_end() {
        let err = validate_range("Hello!", &(4..3)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.start(), 4);
        assert_eq!(err.end(), 3);
        assert_eq!(err.len(), 6);
        assert!(err.to_string().contains("start > end"));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let err = validate_range("Hello!", &(0..7)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.len(), 6);
        assert!(err.to_string().contains("len 6"));
    }

    #[test]
    fn rejects_empty_selection() {
        let run = RunId::new(3);
        let err = validate_selection("Hello!", run, &(2..2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyRange);
        assert_eq!(err.run(), Some(run));
        assert!(err.is_invalid_selection());
    }

    #[test]
    fn rejects_not_on_char_boundary() {
        // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
        let t = "éclair";
        let err = validate_range(t, &(1..2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::Start);
        assert_eq!((b.char_start, b.char_end), (0, 2));

        let err = validate_range(t, &(0..1)).unwrap_err();
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::End);
        assert_eq!(b.index, 1);
        assert!(err.to_string().contains("char 0..2"));
    }
}
