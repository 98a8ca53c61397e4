// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of rank fusion.
//!
//! Items are the things being ranked, sources are whoever ranked them, and a
//! rank is a 1-based position in one source's list. Everything the engine
//! produces (scores, breakdowns, fused rankings) is derived from those three
//! and thrown away after use.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Rank**: `1 ≤ rank ≤ N` where N is the number of items.
//! - **RankTable**: every source ranks every item exactly once, so its ranks
//!   form a permutation of `1..=N`.
//! - **ScoredItem**: `score` is finite. A score that would be infinite or NaN
//!   comes back as a [`FusionError`] instead.
//!
//! Construction through [`RankingStore::new`](crate::RankingStore::new) checks
//! all of this once, so lookups afterwards never see a malformed table.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe indices
// =============================================================================

/// Type-safe item identifier: the item's position in the store's enumeration.
///
/// Prevents accidentally passing a source index where an item index is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Get the underlying index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ItemId {
    fn from(id: usize) -> Self {
        ItemId(id)
    }
}

/// Type-safe source identifier: the source's position in the store's enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SourceId(pub usize);

impl SourceId {
    /// Get the underlying index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for SourceId {
    fn from(id: usize) -> Self {
        SourceId(id)
    }
}

/// A 1-based position in one source's ranking.
pub type Rank = u32;

// =============================================================================
// DERIVED VALUES
// =============================================================================

/// One item with its fused score. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub item: ItemId,
    pub label: String,
    pub score: f64,
}

/// One source's contribution to an item's fused score: `1 / (k + rank)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTerm {
    pub source: SourceId,
    pub source_label: String,
    pub rank: Rank,
    pub contribution: f64,
}

/// Why an item scored what it scored.
///
/// `terms` are in source enumeration order. `total` is the same summation
/// [`score`](crate::score) performs, so the two agree bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub item: ItemId,
    pub label: String,
    pub k: f64,
    pub terms: Vec<ScoreTerm>,
    pub total: f64,
}

// =============================================================================
// DATASET CONFIGURATION
// =============================================================================

/// Serialized form of a ranking dataset.
///
/// `sources[s].ranks[i]` is the rank source `s` assigns to `items[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    pub items: Vec<String>,
    pub sources: Vec<SourceRanking>,
}

/// One source's rank assignments, in item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRanking {
    pub name: String,
    pub ranks: Vec<Rank>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// What kind of entity a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Item,
    Source,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Item => write!(f, "item"),
            EntityKind::Source => write!(f, "source"),
        }
    }
}

/// Errors from rank lookups and score computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum FusionError {
    /// Lookup of an unknown item or source (by index or by label).
    NotFound { kind: EntityKind, key: String },
    /// `k + rank == 0` for some (source, item) pair, so `1 / (k + rank)` is undefined.
    DivisionByZero {
        source: SourceId,
        item: ItemId,
        rank: Rank,
        k: f64,
    },
    /// `k` is NaN or infinite, so no score it produces means anything.
    NonFiniteK { k: f64 },
}

impl FusionError {
    pub(crate) fn item_not_found(key: impl ToString) -> Self {
        FusionError::NotFound {
            kind: EntityKind::Item,
            key: key.to_string(),
        }
    }

    pub(crate) fn source_not_found(key: impl ToString) -> Self {
        FusionError::NotFound {
            kind: EntityKind::Source,
            key: key.to_string(),
        }
    }
}

impl fmt::Display for FusionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FusionError::NotFound { kind, key } => write!(f, "{} '{}' not found", kind, key),
            FusionError::DivisionByZero {
                source,
                item,
                rank,
                k,
            } => write!(
                f,
                "division by zero: k {} + rank {} == 0 (source {}, item {})",
                k, rank, source.0, item.0
            ),
            FusionError::NonFiniteK { k } => write!(f, "k must be a finite number, got {}", k),
        }
    }
}

impl std::error::Error for FusionError {}
