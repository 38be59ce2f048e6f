// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Runs is a Rust crate for storing a document as an ordered sequence of
//! attributed text runs and splitting those runs without losing text.
//!
//! A [`Document`] owns its [`TextRun`]s. Each run carries a [`RunAttributes`]
//! set and an optional [`CommentId`]. The only structural edit is
//! [`Document::split`], which replaces one run with up to three fragments
//! (before / selected / after) whose texts concatenate to the original:
//!
//! ```
//! use text_runs::{Document, RunId, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! let mut doc = Document::from_texts(&mut ids, ["Hello world"]).unwrap();
//! let world = doc.split(&mut ids, RunId::new(0), 6..11).unwrap();
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.run(world).unwrap().text(), "world");
//! assert_eq!(doc.text(), "Hello world");
//! ```
//!
//! Ids are drawn from an [`IdSource`] supplied by the caller.
//!
//! ## Indices
//!
//! All offsets are **byte indices** into UTF-8 text and must lie on character
//! boundaries.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `serde`: `Serialize`/`Deserialize` for runs, attributes and ids.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod coalesce;
mod document;
mod error;
mod ids;
mod range;
mod run;

pub use crate::coalesce::{CoalescedRun, CoalescedRuns};
pub use crate::document::{Document, Split};
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::ids::{CommentId, IdSource, RunId, SequentialIds};
pub use crate::range::{validate_range, validate_selection};
pub use crate::run::{Color, Link, RunAttributes, TextRun};
