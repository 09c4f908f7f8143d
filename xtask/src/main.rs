//! Custom cargo commands for the gallop crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (crate + kani-proofs harness tests)
//!   cargo xtask check     - Quick check (check, test, clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run a fuzz target (default: lower_bound_differential)
//!   cargo xtask kani      - Run Kani model checking proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["lower_bound_differential", "group_equals"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref(), args.next().as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify                 Run full verification suite (markers + tests + clippy + proofs)
  test                   Run all Rust tests
  check                  Quick check (cargo check + test + clippy)
  bench                  Run benchmarks
  fuzz [TARGET] [SECS]   Run a fuzz target (needs cargo-fuzz and nightly)
  kani                   Run Kani proofs (needs cargo-kani)

Fuzz targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Gallop Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running proof harness tests...");
    run_cargo_in(&project_root()?.join("kani-proofs"), &["test", "--quiet"])?;
    println!("✓ Proof harnesses agree with linear scan\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nRun `cargo xtask kani` for the model-checked proofs.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo_in(&project_root()?.join("kani-proofs"), &["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

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

/// Run one fuzz target for a bounded time
fn fuzz(target: Option<&str>, seconds: Option<&str>) -> Result<()> {
    let target = target.unwrap_or(FUZZ_TARGETS[0]);
    if !FUZZ_TARGETS.contains(&target) {
        bail!(
            "Unknown fuzz target '{}' (expected one of: {})",
            target,
            FUZZ_TARGETS.join(", ")
        );
    }
    let seconds: u64 = seconds
        .unwrap_or("60")
        .parse()
        .context("Fuzz duration must be a number of seconds")?;

    let max_time = format!("-max_total_time={}", seconds);
    run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])
}

/// Run Kani proofs
fn kani() -> Result<()> {
    run_cargo_in(&project_root()?.join("kani-proofs"), &["kani"])
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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed in {}", args, dir.display());
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
