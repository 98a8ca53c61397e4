// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how fused results get their numbers.
//!
//! The key insight is that RRF only ever looks at ranks. Ranks from a dense
//! retriever and a keyword retriever are directly comparable, so nothing needs
//! normalizing. Each source contributes `1 / (k + rank)` and the contributions
//! add up.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_scored, fuse};
