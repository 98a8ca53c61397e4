// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use rankfuse::presenter::render_step;
use rankfuse::{explain, fuse, RankingConfig, RankingStore};

mod cli;
use cli::display::{draw_score_breakdown, draw_view};
use cli::{Cli, Commands};

/// Log filter variable, e.g. `RANKFUSE_LOG=rankfuse=debug`.
const LOG_ENV: &str = "RANKFUSE_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match &cli.data {
        Some(path) => load_store(path)?,
        None => RankingStore::demo(),
    };

    match cli.command {
        Commands::Show { step, k, json } => {
            let view = render_step(step.into(), k, &store);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", draw_view(&view));
            }
        }
        Commands::Fuse { k, json } => {
            let fused = fuse(&store, k)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fused)?);
            } else {
                for (position, scored) in fused.iter().enumerate() {
                    println!("{}. {} (Score: {:.4})", position + 1, scored.label, scored.score);
                }
            }
        }
        Commands::Explain { item, k, json } => {
            let id = store.item_by_label(&item)?;
            let breakdown = explain(&store, id, k)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print!("{}", draw_score_breakdown(&breakdown));
            }
        }
        Commands::Walk => {
            let stdin = io::stdin();
            cli::walk::run_walk(&store, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}

/// Read and validate a JSON rank table.
fn load_store(path: &Path) -> Result<RankingStore> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: RankingConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    let store = RankingStore::from_config(config)
        .with_context(|| format!("invalid rank table in {}", path.display()))?;
    tracing::debug!(
        items = store.item_count(),
        sources = store.source_count(),
        path = %path.display(),
        "loaded rank table"
    );
    Ok(store)
}
