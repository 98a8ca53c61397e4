// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The step-by-step walkthrough of a fusion.
//!
//! Split in two so each half is testable without the other:
//!
//! - [`state`]: `StepState` and its transitions. No rendering, no engine calls.
//! - [`view`]: `render(state, store)`, a pure function from state to a view
//!   model. Calls the engine every time.
//!
//! The front end (the CLI's `walk` loop) owns one `StepState`, feeds user
//! events to its transitions, and prints whatever `render` returns.

pub mod state;
pub mod view;

pub use state::{parse_k_input, PresenterError, Step, StepState};
pub use view::{
    breakdown_formula, format_k, format_score, render, render_step, BreakdownRow, RankedRow,
    RankingColumn, View,
};
