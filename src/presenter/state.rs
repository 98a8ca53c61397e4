// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The walkthrough's state machine.
//!
//! Three steps in a line, no branches:
//!
//! ```text
//! RankingsView ──next──▶ BreakdownView ──next──▶ FinalRankingView
//!      ◀──previous──            ◀──previous──
//! ```
//!
//! `next` at the end and `previous` at the start are no-ops, not errors.
//! `set_k` never validates: whatever the user typed is what the engine sees,
//! and the engine reports what it can't score.

use crate::scoring::DEFAULT_K;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One stage of the walkthrough.
///
/// Ordered: `RankingsView < BreakdownView < FinalRankingView`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Each source's raw ranking.
    RankingsView,
    /// Per-item score arithmetic.
    BreakdownView,
    /// The fused ranking.
    FinalRankingView,
}

impl Step {
    /// All steps in walkthrough order.
    pub const ALL: [Step; 3] = [Step::RankingsView, Step::BreakdownView, Step::FinalRankingView];

    /// The last step.
    pub const LAST: Step = Step::FinalRankingView;

    /// Zero-based position in the walkthrough.
    pub fn index(self) -> usize {
        match self {
            Step::RankingsView => 0,
            Step::BreakdownView => 1,
            Step::FinalRankingView => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    /// Heading shown for the step.
    pub fn title(self) -> &'static str {
        match self {
            Step::RankingsView => "Initial Rankings",
            Step::BreakdownView => "RRF Calculation",
            Step::FinalRankingView => "Final Ranking",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error from presenter navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterError {
    /// A jump to a step index that doesn't exist.
    InvalidStep { index: usize },
}

impl fmt::Display for PresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresenterError::InvalidStep { index } => write!(
                f,
                "no step {} (steps are 0..={})",
                index,
                Step::LAST.index()
            ),
        }
    }
}

impl std::error::Error for PresenterError {}

/// The presenter's only mutable state: where the user is, and which `k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepState {
    step: Step,
    k: f64,
}

impl StepState {
    /// `(RankingsView, k = 60)`.
    pub fn new() -> Self {
        Self {
            step: Step::RankingsView,
            k: DEFAULT_K,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Advance one step; no-op on the last step.
    pub fn next(&mut self) {
        let index = (self.step.index() + 1).min(Step::LAST.index());
        self.move_to(Step::ALL[index]);
    }

    /// Go back one step; no-op on the first step.
    pub fn previous(&mut self) {
        let index = self.step.index().saturating_sub(1);
        self.move_to(Step::ALL[index]);
    }

    /// Jump straight to a step.
    pub fn jump_to(&mut self, step: Step) {
        self.move_to(step);
    }

    /// Jump to a step by index. Out-of-range indices leave the state alone.
    pub fn jump_to_index(&mut self, index: usize) -> Result<(), PresenterError> {
        let step = Step::from_index(index).ok_or(PresenterError::InvalidStep { index })?;
        self.move_to(step);
        Ok(())
    }

    /// Replace `k`. Not validated; the step is unchanged.
    pub fn set_k(&mut self, k: f64) {
        debug!(from = self.k, to = k, "set k");
        self.k = k;
    }

    /// Back to `(RankingsView, k = 60)` from anywhere.
    pub fn reset(&mut self) {
        debug!(step = self.step.index(), k = self.k, "reset");
        *self = Self::new();
    }

    /// Whether `previous` would move.
    pub fn can_go_back(&self) -> bool {
        self.step != Step::RankingsView
    }

    /// Whether `next` would move.
    pub fn can_go_forward(&self) -> bool {
        self.step != Step::LAST
    }

    fn move_to(&mut self, step: Step) {
        if step != self.step {
            debug!(from = self.step.index(), to = step.index(), "step");
            self.step = step;
        }
    }
}

impl Default for StepState {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn the text of the `k` input into a number the way a numeric input does.
///
/// Surrounding whitespace is ignored, empty text is `0`, and text that isn't a
/// number is `NaN`. The result goes to [`StepState::set_k`] as-is.
pub fn parse_k_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
