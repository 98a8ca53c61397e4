// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the fusion engine.
//!
//! Debug-mode assertions over what the engine hands back. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the properties the tests check, so a regression trips in the
//!    first test that touches the engine, not just the one aimed at it
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Property                                        |
//! |-------------------------------|-------------------------------------------------|
//! | `check_score_positive`        | `k > 0` ⇒ every fused score is `> 0`            |
//! | `check_fused_sorted`          | Descending score, item order on exact ties      |
//! | `check_fused_permutation`     | Every item exactly once                         |
//! | `check_breakdown_consistent`  | One term per source, total = Σ terms in order   |

use crate::scoring::DEFAULT_K;
use crate::types::{ScoreBreakdown, ScoredItem};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default smoothing constant must keep every denominator positive.
const _: () = {
    // INVARIANT: ranks start at 1, so k > 0 means k + rank > 1
    assert!(DEFAULT_K > 0.0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a score under a positive `k` is positive and finite.
///
/// # Panics (debug builds only)
/// Panics if `k > 0` and the score is not a positive finite number.
#[inline]
pub fn check_score_positive(score: f64, k: f64) {
    if k > 0.0 {
        debug_assert!(
            score.is_finite() && score > 0.0,
            "Contract violation: score {} must be positive for k {}",
            score,
            k
        );
    }
}

/// Check that a breakdown's total is the in-order sum of its terms.
///
/// # Panics (debug builds only)
/// Panics if the term count is wrong or the total drifted from the terms.
#[inline]
pub fn check_breakdown_consistent(breakdown: &ScoreBreakdown, source_count: usize) {
    debug_assert_eq!(
        breakdown.terms.len(),
        source_count,
        "Contract violation: breakdown for '{}' has {} terms, expected {}",
        breakdown.label,
        breakdown.terms.len(),
        source_count
    );

    let sum = breakdown
        .terms
        .iter()
        .fold(0.0, |acc, term| acc + term.contribution);
    debug_assert!(
        sum.to_bits() == breakdown.total.to_bits(),
        "Contract violation: breakdown total {} != in-order sum {} for '{}'",
        breakdown.total,
        sum,
        breakdown.label
    );
}

// ============================================================================
// FUSED RANKING CONTRACTS
// ============================================================================

/// Check that a fused ranking is sorted by descending score with a stable
/// tie-break (equal scores keep item enumeration order).
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_fused_sorted(fused: &[ScoredItem]) {
    for i in 1..fused.len() {
        let prev = &fused[i - 1];
        let curr = &fused[i];

        debug_assert!(
            prev.score > curr.score || (prev.score == curr.score && prev.item < curr.item),
            "Contract violation: fused[{}] ('{}', {}) must precede fused[{}] ('{}', {})",
            i,
            curr.label,
            curr.score,
            i - 1,
            prev.label,
            prev.score
        );
    }
}

/// Check that a fused ranking contains every item exactly once.
///
/// # Panics (debug builds only)
/// Panics on a wrong length, an out-of-range item, or a repeated item.
#[inline]
pub fn check_fused_permutation(fused: &[ScoredItem], item_count: usize) {
    debug_assert_eq!(
        fused.len(),
        item_count,
        "Contract violation: fused ranking has {} items, expected {}",
        fused.len(),
        item_count
    );

    let mut seen = vec![false; item_count];
    for scored in fused {
        let idx = scored.item.index();
        debug_assert!(
            idx < item_count,
            "Contract violation: fused item {} >= item count {}",
            idx,
            item_count
        );
        if idx < item_count {
            debug_assert!(
                !seen[idx],
                "Contract violation: item '{}' appears twice in fused ranking",
                scored.label
            );
            seen[idx] = true;
        }
    }
}
