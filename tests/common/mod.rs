//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get an smtgen command
pub fn smtgen() -> Command {
    Command::new(cargo::cargo_bin!("smtgen"))
}

/// Generate a small line dataset in a temp directory, returning its path
pub fn generate_line_dataset(tmp: &TempDir, samples: u32, seed: u64) -> PathBuf {
    let output = tmp.path().join("data.csv");
    smtgen()
        .current_dir(tmp.path())
        .args([
            "generate",
            "line",
            "--samples",
            &samples.to_string(),
            "--seed",
            &seed.to_string(),
            "--output",
        ])
        .arg(&output)
        .assert()
        .success();
    output
}
