// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fused ranking: how scored items get sorted.
//!
//! Descending by fused score. Exact ties keep the store's item enumeration
//! order, which falls out of a stable sort over items scored in that order.
//! No title or id tiebreaker is layered on top: two items with bit-equal
//! scores are tied, and the earlier item wins.
//!
//! Ties are not hypothetical. In the demo dataset Doc A is ranked (1, 2, 3)
//! and Doc B (3, 1, 2). Their scores sum the same three terms in a different
//! order, and at `k = 60` the results are bit-equal.

use super::core::score;
use crate::store::RankingStore;
use crate::types::{FusionError, ScoredItem};
use crate::verify::contracts::{check_fused_permutation, check_fused_sorted};
use std::cmp::Ordering;
use tracing::debug;

/// Compare two scored items for ranking: higher score first.
///
/// Returns `Equal` for equal scores so a stable sort keeps input order.
/// Scores are finite (the engine never produces NaN), so `partial_cmp`
/// only falls back to `Equal` for inputs that didn't come from [`score`].
pub fn compare_scored(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Fuse every source's ranking into one.
///
/// Scores every item in item order, then stable-sorts by descending score.
/// Returns exactly N items, a permutation of the store's items. Fails with
/// the first item's error, in item order.
pub fn fuse(store: &RankingStore, k: f64) -> Result<Vec<ScoredItem>, FusionError> {
    let mut fused = store
        .item_ids()
        .map(|item| {
            Ok(ScoredItem {
                item,
                label: store.item_label(item)?.to_string(),
                score: score(store, item, k)?,
            })
        })
        .collect::<Result<Vec<_>, FusionError>>()?;

    // sort_by is stable: equal scores keep item order
    fused.sort_by(compare_scored);

    check_fused_sorted(&fused);
    check_fused_permutation(&fused, store.item_count());

    debug!(
        k,
        item_count = fused.len(),
        top = fused.first().map(|s| s.label.as_str()).unwrap_or(""),
        "fused ranking"
    );
    Ok(fused)
}
