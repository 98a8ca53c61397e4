// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rankfuse command-line interface.
//!
//! Four subcommands: `show` to print one presenter step, `fuse` for the final
//! ranking, `explain` for one item's score term by term, and `walk` to step
//! through all three interactively. Every command works on the built-in demo
//! rankings unless `--data` points at a JSON rank table.

pub mod display;
pub mod walk;

use clap::{Parser, Subcommand, ValueEnum};
use rankfuse::{Step, DEFAULT_K};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rankfuse",
    about = "Explainable Reciprocal Rank Fusion",
    version
)]
pub struct Cli {
    /// JSON rank table: {"items": [...], "sources": [{"name", "ranks"}]}
    ///
    /// Defaults to the built-in demo (five documents ranked by Dense, Sparse
    /// and Hybrid retrievers).
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one step of the walkthrough
    Show {
        /// Which step to print
        #[arg(long, value_enum, default_value = "rankings")]
        step: StepArg,

        /// Smoothing constant added to every rank
        #[arg(short, long, default_value_t = DEFAULT_K, allow_negative_numbers = true)]
        k: f64,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the fused ranking
    Fuse {
        /// Smoothing constant added to every rank
        #[arg(short, long, default_value_t = DEFAULT_K, allow_negative_numbers = true)]
        k: f64,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how one item's score adds up
    Explain {
        /// Item label, e.g. "Doc A"
        item: String,

        /// Smoothing constant added to every rank
        #[arg(short, long, default_value_t = DEFAULT_K, allow_negative_numbers = true)]
        k: f64,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step through the fusion interactively (reads commands from stdin)
    Walk,
}

/// Step names as they appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepArg {
    Rankings,
    Breakdown,
    Final,
}

impl From<StepArg> for Step {
    fn from(arg: StepArg) -> Step {
        match arg {
            StepArg::Rankings => Step::RankingsView,
            StepArg::Breakdown => Step::BreakdownView,
            StepArg::Final => Step::FinalRankingView,
        }
    }
}
