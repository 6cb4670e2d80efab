//! Custom cargo commands for the wiki search crate.
//!
//! Usage:
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - Quick check (native build, tests, clippy)
//!   cargo xtask build-wasm  - Build the browser package into pkg/
//!   cargo xtask verify      - check + wasm32 clippy + wasm build

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("build-wasm") => build_wasm()?,
        Some("verify") => verify()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test        Run all Rust tests
  check       Quick check (cargo check + test + clippy)
  build-wasm  Build the wasm package with wasm-pack, then shrink it with wasm-opt
  verify      Full suite: check, clippy for wasm32, wasm build
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check, native target only
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

/// Build `pkg/` for `<script type="module">` use.
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--", "--features", "wasm"])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (install with `cargo install wasm-pack`)")?;
    if !status.success() {
        bail!("wasm-pack build failed");
    }

    let wasm = root.join("pkg/wiki_search_bg.wasm");
    match Command::new("wasm-opt")
        .arg("-Os")
        .arg(&wasm)
        .arg("-o")
        .arg(&wasm)
        .status()
    {
        Ok(status) if status.success() => println!("✓ wasm-opt applied"),
        Ok(_) => bail!("wasm-opt failed on {}", wasm.display()),
        Err(_) => println!("  (wasm-opt not found, skipping size pass)"),
    }

    let size = std::fs::metadata(&wasm)
        .with_context(|| format!("Failed to stat {}", wasm.display()))?
        .len();
    println!("✓ {} ({} KB)", wasm.display(), size / 1024);
    Ok(())
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Wiki Search Verification Suite");
    println!("==========================================\n");

    println!("[1/3] Native checks...");
    check()?;
    println!();

    println!("[2/3] Clippy for {}...", WASM_TARGET);
    run_cargo(&[
        "clippy",
        "--quiet",
        "--target",
        WASM_TARGET,
        "--features",
        "wasm",
        "--",
        "-D",
        "warnings",
    ])?;
    println!("✓ Browser bindings clean\n");

    println!("[3/3] Building wasm package...");
    build_wasm()?;

    println!("\n==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
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
