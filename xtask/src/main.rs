//! Custom cargo commands for rankfuse.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Seconds per fuzz target in `cargo xtask fuzz`.
const FUZZ_SECONDS: &str = "30";

const FUZZ_TARGETS: &[&str] = &["score_calculation", "rank_table_validation"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (fmt + tests + release tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for {}s (needs cargo-fuzz and nightly)
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("rankfuse Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking formatting...");
    run_cargo(&["fmt", "--all", "--check"])?;
    println!("✓ Formatting clean\n");

    // Contracts are debug_assert!, so this run has them on
    println!("[2/4] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running Rust tests (release, contracts off)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run each fuzz target for a fixed time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, FUZZ_SECONDS);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--"])
            .arg(format!("-max_total_time={}", FUZZ_SECONDS))
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
