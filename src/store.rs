// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking store: who ranked what, fixed at start-up.
//!
//! Labels for items and sources plus a [`ValidatedRankTable`]. There are no
//! mutation methods. Build one with [`RankingStore::new`], from a
//! [`RankingConfig`], or take the built-in [`RankingStore::demo`] dataset.

use crate::types::{FusionError, ItemId, Rank, RankingConfig, SourceId, SourceRanking};
use crate::verify::{check_unique_labels, InvariantError, ValidatedRankTable};

/// Items of the built-in dataset, in enumeration order.
pub const DEMO_ITEMS: [&str; 5] = ["Doc A", "Doc B", "Doc C", "Doc D", "Doc E"];

/// Sources of the built-in dataset with the rank each assigns to `DEMO_ITEMS[i]`.
pub const DEMO_RANKINGS: [(&str, [Rank; 5]); 3] = [
    ("Dense", [1, 3, 2, 5, 4]),
    ("Sparse", [2, 1, 4, 3, 5]),
    ("Hybrid", [3, 2, 1, 5, 4]),
];

/// Read-only items, sources, and the rank each source assigns each item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingStore {
    items: Vec<String>,
    sources: Vec<String>,
    table: ValidatedRankTable,
}

impl RankingStore {
    /// Build a store, validating labels and the rank table.
    ///
    /// `ranks[s][i]` is the rank source `s` assigns to `items[i]`.
    pub fn new(
        items: Vec<String>,
        sources: Vec<String>,
        ranks: Vec<Vec<Rank>>,
    ) -> Result<Self, InvariantError> {
        if items.is_empty() {
            return Err(InvariantError::EmptyItems);
        }
        if sources.is_empty() {
            return Err(InvariantError::EmptySources);
        }
        check_unique_labels(items.iter().map(String::as_str)).map_err(|label| {
            InvariantError::DuplicateItem {
                label: label.to_string(),
            }
        })?;
        check_unique_labels(sources.iter().map(String::as_str)).map_err(|label| {
            InvariantError::DuplicateSource {
                label: label.to_string(),
            }
        })?;
        if ranks.len() != sources.len() {
            return Err(InvariantError::SourceCountMismatch {
                labels: sources.len(),
                rankings: ranks.len(),
            });
        }

        let table = ValidatedRankTable::new(items.len(), ranks)?;
        Ok(Self {
            items,
            sources,
            table,
        })
    }

    /// Build a store from its serialized form.
    pub fn from_config(config: RankingConfig) -> Result<Self, InvariantError> {
        let (sources, ranks) = config
            .sources
            .into_iter()
            .map(|s| (s.name, s.ranks))
            .unzip();
        Self::new(config.items, sources, ranks)
    }

    /// The built-in five-document, three-retriever dataset.
    pub fn demo() -> Self {
        Self {
            items: DEMO_ITEMS.iter().map(|s| s.to_string()).collect(),
            sources: DEMO_RANKINGS.iter().map(|(s, _)| s.to_string()).collect(),
            table: demo_table(),
        }
    }

    /// Serialized form of this store; round-trips through [`from_config`](Self::from_config).
    pub fn to_config(&self) -> RankingConfig {
        RankingConfig {
            items: self.items.clone(),
            sources: self
                .sources
                .iter()
                .zip(self.table.ranks())
                .map(|(name, ranks)| SourceRanking {
                    name: name.clone(),
                    ranks: ranks.clone(),
                })
                .collect(),
        }
    }

    /// Item labels in enumeration order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Source labels in enumeration order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Item ids in enumeration order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId)
    }

    /// Source ids in enumeration order.
    pub fn source_ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        (0..self.sources.len()).map(SourceId)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Rank `source` assigns to `item`.
    ///
    /// Fails with `NotFound` for an id outside the store. Ids produced by this
    /// store never fail.
    pub fn rank_of(&self, source: SourceId, item: ItemId) -> Result<Rank, FusionError> {
        if source.index() >= self.sources.len() {
            return Err(FusionError::source_not_found(source.index()));
        }
        self.table
            .rank(source.index(), item.index())
            .ok_or_else(|| FusionError::item_not_found(item.index()))
    }

    pub fn item_label(&self, item: ItemId) -> Result<&str, FusionError> {
        self.items
            .get(item.index())
            .map(String::as_str)
            .ok_or_else(|| FusionError::item_not_found(item.index()))
    }

    pub fn source_label(&self, source: SourceId) -> Result<&str, FusionError> {
        self.sources
            .get(source.index())
            .map(String::as_str)
            .ok_or_else(|| FusionError::source_not_found(source.index()))
    }

    /// Look an item up by label (exact match).
    pub fn item_by_label(&self, label: &str) -> Result<ItemId, FusionError> {
        self.items
            .iter()
            .position(|l| l == label)
            .map(ItemId)
            .ok_or_else(|| FusionError::item_not_found(label))
    }

    /// Look a source up by label (exact match).
    pub fn source_by_label(&self, label: &str) -> Result<SourceId, FusionError> {
        self.sources
            .iter()
            .position(|l| l == label)
            .map(SourceId)
            .ok_or_else(|| FusionError::source_not_found(label))
    }

    /// Items of `source` in rank order (rank 1 first).
    pub fn ranking_of(&self, source: SourceId) -> Result<&[ItemId], FusionError> {
        self.table
            .ordering(source.index())
            .ok_or_else(|| FusionError::source_not_found(source.index()))
    }
}

impl Default for RankingStore {
    fn default() -> Self {
        Self::demo()
    }
}

fn demo_table() -> ValidatedRankTable {
    let ranks = DEMO_RANKINGS.iter().map(|(_, r)| r.to_vec()).collect();
    match ValidatedRankTable::new(DEMO_ITEMS.len(), ranks) {
        Ok(table) => table,
        // The constants are permutations of 1..=5; the unit tests pin that.
        Err(e) => unreachable!("built-in demo dataset is malformed: {}", e),
    }
}
