// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for rankfuse's integer primitives.
//!
//! This standalone crate extracts the rank table inversion and the step
//! navigation arithmetic and proves them for every input up to a small bound.
//! Floating-point scoring stays with proptest and the fuzzers.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `invert_ranks` never panics on any rank vector
//! 2. **Inverse**: an accepted vector and its ordering undo each other
//! 3. **Completeness**: every permutation of `1..=N` is accepted
//! 4. **Clamping**: `next`/`previous` never leave `0..=LAST_STEP`

/// Index of the last presenter step.
pub const LAST_STEP: usize = 2;

/// Largest table the proofs unroll.
pub const MAX_ITEMS: usize = 4;

// ============================================================================
// RANK INVERSION (mirrors ValidatedRankTable::new in src/verify/types.rs)
// ============================================================================

/// Turn `ranks[item] = rank` into `ordering[rank - 1] = item`.
///
/// `None` if any rank is outside `1..=N` or appears twice.
pub fn invert_ranks(ranks: &[u32]) -> Option<Vec<usize>> {
    let n = ranks.len();
    let mut ordering: Vec<Option<usize>> = vec![None; n];
    for (item, &rank) in ranks.iter().enumerate() {
        if rank == 0 || rank as usize > n {
            return None;
        }
        let slot = &mut ordering[rank as usize - 1];
        if slot.is_some() {
            return None;
        }
        *slot = Some(item);
    }
    ordering.into_iter().collect()
}

// ============================================================================
// STEP NAVIGATION (mirrors StepState in src/presenter/state.rs)
// ============================================================================

pub fn next_step(index: usize) -> usize {
    if index < LAST_STEP {
        index + 1
    } else {
        index
    }
}

pub fn previous_step(index: usize) -> usize {
    index.saturating_sub(1)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_ranks() -> Vec<u32> {
        let n: usize = kani::any();
        kani::assume(n <= MAX_ITEMS);
        let mut ranks = Vec::with_capacity(n);
        for _ in 0..n {
            ranks.push(kani::any());
        }
        ranks
    }

    /// Proof: invert_ranks never panics, whatever the ranks.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_invert_no_panic() {
        let ranks = any_ranks();
        let _ = invert_ranks(&ranks);
    }

    /// Proof: an accepted vector is a permutation and the ordering is its inverse.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_invert_is_inverse() {
        let ranks = any_ranks();
        if let Some(ordering) = invert_ranks(&ranks) {
            assert_eq!(ordering.len(), ranks.len());
            for (position, &item) in ordering.iter().enumerate() {
                assert!(item < ranks.len());
                assert_eq!(ranks[item] as usize, position + 1);
            }
        }
    }

    /// Proof: every rank in range and pairwise distinct means accepted.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_permutations_accepted() {
        let ranks = any_ranks();
        let n = ranks.len();
        for i in 0..n {
            kani::assume(ranks[i] >= 1 && ranks[i] as usize <= n);
            for j in 0..i {
                kani::assume(ranks[i] != ranks[j]);
            }
        }
        assert!(invert_ranks(&ranks).is_some());
    }

    /// Proof: navigation stays in range and moves by at most one.
    #[kani::proof]
    fn verify_navigation_clamped() {
        let index: usize = kani::any();
        kani::assume(index <= LAST_STEP);

        let next = next_step(index);
        let previous = previous_step(index);
        assert!(next <= LAST_STEP);
        assert!(next == index || next == index + 1);
        assert!(previous == index || previous + 1 == index);
        assert_eq!(next == index, index == LAST_STEP);
        assert_eq!(previous == index, index == 0);
    }
}

// ============================================================================
// STANDARD TESTS (run without Kani)
// ============================================================================
