// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection-scoped formatting and comment anchoring built on [`text_runs`].
//!
//! - [`apply_format`] splits the selected run and merges a [`Format`] into
//!   the selected fragment.
//! - [`apply_comment`] splits the selected run, tags the selected fragment
//!   with a new [`Comment`] and records it in a [`CommentStore`].
//! - [`delete_comment`] removes a comment together with every run reference.
//! - [`EditorSession`] owns a document, its comments and the active
//!   [`Selection`], and exposes the inbound calls a UI layer makes.
//!
//! ## Example
//!
//! ```
//! use annotated_text::{EditorSession, FixedClock, Format, SessionConfig, Timestamp};
//! use text_runs::{Document, RunId, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! let document = Document::from_texts(&mut ids, ["Hello world"]).unwrap();
//! let clock = FixedClock(Timestamp::from_millis(1_700_000_000_000));
//! let mut session = EditorSession::new(document, SessionConfig::new(), clock);
//!
//! session.report_selection(RunId::new(0), 6, 11);
//! let world = session.request_format(Format::Bold).unwrap();
//!
//! let runs = session.document().runs();
//! assert_eq!(runs[0].text(), "Hello ");
//! assert!(!runs[0].attributes().bold);
//! assert_eq!(runs[1].id(), world);
//! assert!(runs[1].attributes().bold);
//! assert!(session.selection().is_none());
//! ```
//!
//! ## Errors
//!
//! The free functions are strict: they return a [`text_runs::Error`] and
//! leave the document and comments untouched on failure. [`EditorSession`]
//! is tolerant: a stale selection becomes a logged no-op.
//!
//! ## Comments across later splits
//!
//! A split copies the comment reference to every fragment, so formatting
//! inside a commented span keeps the whole span tagged. The comment's
//! `anchor_text` stays the text selected at creation time.
//!
//! ## Features
//!
//! - `std` (enabled by default): Provides [`SystemClock`].
//! - `serde`: Provides [`Snapshot`](snapshot::Snapshot) and serialization for comments.
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

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "serde")]
pub mod snapshot;

mod clock;
mod comment;
mod config;
mod engine;
mod format;
mod session;


pub use clock::{Clock, FixedClock, Timestamp};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use comment::{Author, Comment, CommentStore};
pub use config::{default_palette, PaletteColor, SessionConfig};
pub use engine::{apply_comment, apply_format, delete_comment, Selection};
pub use format::Format;
pub use session::EditorSession;
