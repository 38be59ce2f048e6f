// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `text_runs` and `annotated_text`.
//!
//! - The `util` module contains helpers shared by the other modules.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests.
//! - Put a new test in the module matching its topic: `scenarios` for end-to-end editing
//!   stories, `properties` for randomized invariants, `snapshot` for persistence.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `comment_delete_clears_runs` rather than `clears_runs_on_comment_delete`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod util;
