// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`ValidatedRankTable`) that make malformed rank
//!    tables unrepresentable. If you hold one, every source ranks every item
//!    exactly once.
//!
//! 2. **Runtime contracts** that panic in debug builds when the engine's output
//!    breaks an invariant. Zero-cost in release, but catch bugs during development.
//!
//! Use both. The wrapper catches bad input at load time. The contracts catch
//! algorithmic errors when tests run.

mod types;
pub mod contracts;

pub use types::*;
