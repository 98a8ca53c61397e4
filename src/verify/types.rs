// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make malformed rank tables unrepresentable.
//!
//! A rank table is only meaningful if every source ranks every item exactly
//! once. Instead of hoping every caller checked that, wrap the raw ranks in
//! [`ValidatedRankTable`]. It checks at construction and guarantees it forever
//! after, so `rank()` and `ordering()` can index without bounds anxiety.
//!
//! # What's Guaranteed
//!
//! | Property            | Check                                      |
//! |---------------------|--------------------------------------------|
//! | Non-empty           | N ≥ 1 items, M ≥ 1 sources                 |
//! | Unique labels       | No duplicate item or source labels         |
//! | Complete            | Every source has exactly N ranks           |
//! | In range            | Every rank is in `1..=N`                   |
//! | Permutation         | No rank appears twice within one source    |
//!
//! # Example
//!
//! ```
//! use rankfuse::verify::ValidatedRankTable;
//!
//! let table = ValidatedRankTable::new(2, vec![vec![1, 2], vec![2, 1]]).unwrap();
//! assert_eq!(table.item_count(), 2);
//! assert_eq!(table.source_count(), 2);
//! ```

use crate::types::{ItemId, Rank};
use std::collections::HashSet;
use std::fmt;

/// Error type for rank table invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The item set is empty.
    EmptyItems,
    /// The source set is empty.
    EmptySources,
    /// Two items share a label.
    DuplicateItem { label: String },
    /// Two sources share a label.
    DuplicateSource { label: String },
    /// Source labels and per-source rank vectors disagree in number.
    SourceCountMismatch { labels: usize, rankings: usize },
    /// A source does not rank exactly N items.
    RankCountMismatch {
        source: usize,
        expected: usize,
        actual: usize,
    },
    /// A rank falls outside `1..=N`.
    RankOutOfRange {
        source: usize,
        rank: Rank,
        item_count: usize,
    },
    /// A source assigns the same rank to two items.
    DuplicateRank { source: usize, rank: Rank },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyItems => write!(f, "ranking needs at least one item"),
            InvariantError::EmptySources => write!(f, "ranking needs at least one source"),
            InvariantError::DuplicateItem { label } => {
                write!(f, "duplicate item label '{}'", label)
            }
            InvariantError::DuplicateSource { label } => {
                write!(f, "duplicate source label '{}'", label)
            }
            InvariantError::SourceCountMismatch { labels, rankings } => {
                write!(
                    f,
                    "{} source labels but {} rank vectors",
                    labels, rankings
                )
            }
            InvariantError::RankCountMismatch {
                source,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "source {} ranks {} items, expected {}",
                    source, actual, expected
                )
            }
            InvariantError::RankOutOfRange {
                source,
                rank,
                item_count,
            } => {
                write!(
                    f,
                    "source {} assigns rank {} outside 1..={}",
                    source, rank, item_count
                )
            }
            InvariantError::DuplicateRank { source, rank } => {
                write!(f, "source {} assigns rank {} more than once", source, rank)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that labels are unique, reporting the first repeat.
pub fn check_unique_labels<'a>(
    labels: impl IntoIterator<Item = &'a str>,
) -> Result<(), &'a str> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label) {
            return Err(label);
        }
    }
    Ok(())
}

/// A rank table where each source's ranks are a permutation of `1..=N`.
///
/// Stores both directions: `ranks[s][i]` is the rank source `s` gives item `i`,
/// and `orderings[s][r - 1]` is the item source `s` put at rank `r`.
///
/// # Invariants (enforced at construction)
/// - `ranks.len() == orderings.len() ≥ 1`
/// - `ranks[s].len() == item_count ≥ 1` for every `s`
/// - `ranks[s]` is a permutation of `1..=item_count`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRankTable {
    item_count: usize,
    ranks: Vec<Vec<Rank>>,
    orderings: Vec<Vec<ItemId>>,
}

impl ValidatedRankTable {
    /// Validate per-source rank vectors against `item_count`.
    ///
    /// Returns the first violation found, checking sources in order.
    pub fn new(item_count: usize, ranks: Vec<Vec<Rank>>) -> Result<Self, InvariantError> {
        if item_count == 0 {
            return Err(InvariantError::EmptyItems);
        }
        if ranks.is_empty() {
            return Err(InvariantError::EmptySources);
        }

        let mut orderings = Vec::with_capacity(ranks.len());
        for (source, source_ranks) in ranks.iter().enumerate() {
            if source_ranks.len() != item_count {
                return Err(InvariantError::RankCountMismatch {
                    source,
                    expected: item_count,
                    actual: source_ranks.len(),
                });
            }

            let mut ordering: Vec<Option<ItemId>> = vec![None; item_count];
            for (item, &rank) in source_ranks.iter().enumerate() {
                if rank == 0 || rank as usize > item_count {
                    return Err(InvariantError::RankOutOfRange {
                        source,
                        rank,
                        item_count,
                    });
                }
                let slot = &mut ordering[rank as usize - 1];
                if slot.is_some() {
                    return Err(InvariantError::DuplicateRank { source, rank });
                }
                *slot = Some(ItemId(item));
            }

            // N distinct ranks in 1..=N fill every slot (pigeonhole).
            orderings.push(ordering.into_iter().flatten().collect());
        }

        Ok(Self {
            item_count,
            ranks,
            orderings,
        })
    }

    /// Number of ranked items (N).
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of sources (M).
    #[inline]
    pub fn source_count(&self) -> usize {
        self.ranks.len()
    }

    /// Rank that `source` assigns to `item`, if both indices are in bounds.
    #[inline]
    pub fn rank(&self, source: usize, item: usize) -> Option<Rank> {
        self.ranks.get(source).and_then(|r| r.get(item)).copied()
    }

    /// Items of `source` in rank order (rank 1 first).
    #[inline]
    pub fn ordering(&self, source: usize) -> Option<&[ItemId]> {
        self.orderings.get(source).map(Vec::as_slice)
    }

    /// Raw per-source rank vectors, in item order.
    pub fn ranks(&self) -> &[Vec<Rank>] {
        &self.ranks
    }
}
