// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explainable Reciprocal Rank Fusion.
//!
//! Merges several rankings of the same items into one consensus ranking by
//! summing `1 / (k + rank)` per source, and explains every number it produces.
//! A small step-by-step presenter walks through the computation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  store.rs   │────▶│  scoring/    │────▶│  presenter/      │
//! │(RankingStore│     │ (score,      │     │ (StepState,      │
//! │ items, ranks│     │  explain,    │     │  render → View)  │
//! │  rank_of)   │     │  fuse)       │     │                  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                         │
//! │  (ValidatedRankTable - rank table invariants,       │
//! │   contracts - debug checks on engine output)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use rankfuse::{fuse, score, RankingStore, DEFAULT_K};
//!
//! let store = RankingStore::demo();
//! let doc_a = store.item_by_label("Doc A").unwrap();
//!
//! let s = score(&store, doc_a, DEFAULT_K).unwrap();
//! assert_eq!(s, 1.0 / 61.0 + 1.0 / 62.0 + 1.0 / 63.0);
//!
//! let fused = fuse(&store, DEFAULT_K).unwrap();
//! assert_eq!(fused[0].label, "Doc A");
//! ```

// Module declarations
pub mod presenter;
mod scoring;
mod store;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use presenter::{render, Step, StepState, View};
pub use scoring::{compare_scored, explain, fuse, rrf_term, score, score_all, DEFAULT_K};
pub use store::{RankingStore, DEMO_ITEMS, DEMO_RANKINGS};
pub use types::{
    EntityKind, FusionError, ItemId, Rank, RankingConfig, ScoreBreakdown, ScoreTerm, ScoredItem,
    SourceId, SourceRanking,
};
pub use verify::{InvariantError, ValidatedRankTable};
