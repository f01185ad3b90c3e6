//! Test harness for structura integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

pub use structura::test_utils::TestDir;

/// Run the structura binary inside `dir`.
pub fn run_structura(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_structura");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run structura");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Read a listing file written by structura.
pub fn read_listing(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read listing")
}

/// Split a listing into (indent width, name) pairs.
pub fn parse_lines(listing: &str) -> Vec<(usize, String)> {
    listing
        .lines()
        .map(|line| {
            let name = line.trim_start_matches(' ');
            (line.len() - name.len(), name.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.txt", "hello");
        assert!(file_path.exists());
    }

    #[test]
    fn test_parse_lines() {
        let parsed = parse_lines("root/\n    a.txt\n        b/\n");
        assert_eq!(
            parsed,
            vec![
                (0, "root/".to_string()),
                (4, "a.txt".to_string()),
                (8, "b/".to_string()),
            ]
        );
    }
}
