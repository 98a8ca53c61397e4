// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind reciprocal rank fusion.
//!
//! ```text
//! score(item, k) = Σ_s 1 / (k + rank_s(item))
//! ```
//!
//! Summed over every source, in source enumeration order. The order doesn't
//! change the value in exact arithmetic, but it does in f64, and explanations
//! must reproduce scores bit-for-bit, so there is exactly one summation loop.
//!
//! # The smoothing constant
//!
//! `k` dampens rank differences. With `k = 0`, rank 1 is worth twice rank 2.
//! With `k = 60`, rank 1 is worth `62/61 ≈ 1.016` times rank 2. Larger `k`
//! flattens the distribution, smaller `k` sharpens it.
//!
//! # Undefined scores
//!
//! Ranks start at 1, so for any `k > -1` every denominator is positive. The
//! `k` here comes from user input though, and `k = -r` for any rank `r` in use
//! divides by zero. That comes back as [`FusionError::DivisionByZero`], and a
//! NaN or infinite `k` as [`FusionError::NonFiniteK`]. Neither is silently
//! turned into `inf` or `NaN`.

use crate::store::RankingStore;
use crate::types::{FusionError, ItemId, Rank, ScoreBreakdown, ScoreTerm, SourceId};
use crate::verify::contracts::{check_breakdown_consistent, check_score_positive};
use tracing::warn;

/// Default smoothing constant (Cormack, Clarke & Büttcher, SIGIR 2009).
pub const DEFAULT_K: f64 = 60.0;

/// One source's contribution: `1 / (k + rank)`.
///
/// Fails when `k + rank == 0` or `k` is not finite. The ids are only used to
/// label the error.
pub fn rrf_term(k: f64, rank: Rank, source: SourceId, item: ItemId) -> Result<f64, FusionError> {
    if !k.is_finite() {
        return Err(FusionError::NonFiniteK { k });
    }
    let denominator = k + f64::from(rank);
    if denominator == 0.0 {
        return Err(FusionError::DivisionByZero {
            source,
            item,
            rank,
            k,
        });
    }
    Ok(1.0 / denominator)
}

/// Fused RRF score of one item.
///
/// Pure and deterministic: the same store, item and `k` always give the same bits.
pub fn score(store: &RankingStore, item: ItemId, k: f64) -> Result<f64, FusionError> {
    let mut total = 0.0;
    for source in store.source_ids() {
        let rank = store.rank_of(source, item)?;
        total += rrf_term(k, rank, source, item)?;
    }
    check_score_positive(total, k);
    Ok(total)
}

/// Per-source breakdown of one item's score.
///
/// `total` equals [`score`] for the same inputs, bit-for-bit.
pub fn explain(store: &RankingStore, item: ItemId, k: f64) -> Result<ScoreBreakdown, FusionError> {
    let label = store.item_label(item)?.to_string();

    let mut terms = Vec::with_capacity(store.source_count());
    let mut total = 0.0;
    for source in store.source_ids() {
        let rank = store.rank_of(source, item)?;
        let contribution = rrf_term(k, rank, source, item)?;
        total += contribution;
        terms.push(ScoreTerm {
            source,
            source_label: store.source_label(source)?.to_string(),
            rank,
            contribution,
        });
    }

    let breakdown = ScoreBreakdown {
        item,
        label,
        k,
        terms,
        total,
    };
    check_breakdown_consistent(&breakdown, store.source_count());
    Ok(breakdown)
}

/// Score every item, in item order, keeping failures per item.
///
/// Lets a view show "undefined" for the items whose score fails while still
/// showing the rest.
pub fn score_all(store: &RankingStore, k: f64) -> Vec<(ItemId, Result<f64, FusionError>)> {
    store
        .item_ids()
        .map(|item| {
            let result = score(store, item, k);
            if let Err(e) = &result {
                warn!(item = item.index(), k, error = %e, "score undefined");
            }
            (item, result)
        })
        .collect()
}
