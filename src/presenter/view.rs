// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pure view models: what each step shows, without deciding how it looks.
//!
//! [`render`] dispatches on the current step and recomputes everything from
//! the store and `k` on every call. Nothing is cached, so there is nothing to
//! invalidate when `k` changes.
//!
//! A score that can't be computed doesn't abort the render. The breakdown marks
//! that item `undefined` and the final ranking carries the error, so the user
//! keeps their place and can fix `k`.

use super::state::{Step, StepState};
use crate::scoring::{fuse, score_all};
use crate::store::RankingStore;
use crate::types::{FusionError, Rank};
use serde::Serialize;

/// One source's ranking, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingColumn {
    pub source: String,
    pub items: Vec<String>,
}

/// One item's score arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub item: String,
    /// Ranks in source order, one per term.
    pub ranks: Vec<Rank>,
    /// The fused score, or `None` when it is undefined.
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FusionError>,
    /// `1/(k + r1) + 1/(k + r2) + ... = total`
    pub formula: String,
}

/// One line of the fused ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    /// 1-based.
    pub position: usize,
    pub item: String,
    pub score: f64,
}

/// What the current step shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Rankings {
        columns: Vec<RankingColumn>,
    },
    Breakdown {
        k: f64,
        rows: Vec<BreakdownRow>,
    },
    FinalRanking {
        k: f64,
        rows: Vec<RankedRow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<FusionError>,
    },
}

impl View {
    pub fn step(&self) -> Step {
        match self {
            View::Rankings { .. } => Step::RankingsView,
            View::Breakdown { .. } => Step::BreakdownView,
            View::FinalRanking { .. } => Step::FinalRankingView,
        }
    }

    pub fn title(&self) -> &'static str {
        self.step().title()
    }
}

/// Build the view model for the state's current step.
pub fn render(state: &StepState, store: &RankingStore) -> View {
    render_step(state.step(), state.k(), store)
}

/// Build the view model for any step at any `k`.
pub fn render_step(step: Step, k: f64, store: &RankingStore) -> View {
    match step {
        Step::RankingsView => render_rankings(store),
        Step::BreakdownView => render_breakdown(store, k),
        Step::FinalRankingView => render_final(store, k),
    }
}

fn render_rankings(store: &RankingStore) -> View {
    let columns = store
        .source_ids()
        .zip(store.sources())
        .map(|(source, name)| RankingColumn {
            source: name.clone(),
            items: store
                .ranking_of(source)
                .unwrap_or_default()
                .iter()
                .map(|&item| store.items()[item.index()].clone())
                .collect(),
        })
        .collect();
    View::Rankings { columns }
}

fn render_breakdown(store: &RankingStore, k: f64) -> View {
    let rows = score_all(store, k)
        .into_iter()
        .map(|(item, outcome)| {
            let ranks: Vec<Rank> = store
                .source_ids()
                .filter_map(|source| store.rank_of(source, item).ok())
                .collect();
            let (score, error) = match outcome {
                Ok(score) => (Some(score), None),
                Err(e) => (None, Some(e)),
            };
            BreakdownRow {
                item: store.items()[item.index()].clone(),
                formula: breakdown_formula(k, &ranks, score),
                ranks,
                score,
                error,
            }
        })
        .collect();
    View::Breakdown { k, rows }
}

fn render_final(store: &RankingStore, k: f64) -> View {
    match fuse(store, k) {
        Ok(fused) => View::FinalRanking {
            k,
            rows: fused
                .into_iter()
                .enumerate()
                .map(|(i, scored)| RankedRow {
                    position: i + 1,
                    item: scored.label,
                    score: scored.score,
                })
                .collect(),
            error: None,
        },
        Err(e) => View::FinalRanking {
            k,
            rows: Vec::new(),
            error: Some(e),
        },
    }
}

/// `k` the way a person typed it: `60`, not `60.0`.
pub fn format_k(k: f64) -> String {
    format!("{}", k)
}

/// Scores to four decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// `1/(60 + 1) + 1/(60 + 2) = 0.0325`, or `... = undefined` without a score.
pub fn breakdown_formula(k: f64, ranks: &[Rank], score: Option<f64>) -> String {
    let k = format_k(k);
    let terms: Vec<String> = ranks
        .iter()
        .map(|rank| format!("1/({} + {})", k, rank))
        .collect();
    let total = score.map_or_else(|| "undefined".to_string(), format_score);
    format!("{} = {}", terms.join(" + "), total)
}
