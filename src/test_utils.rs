//! Test utilities for building input documents.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::DEFAULT_INPUT;

/// A temporary working directory holding a JSON input document.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a working directory with `json` written to `structure.json`.
    pub fn new(json: &str) -> Self {
        let tree = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        tree.write_input(DEFAULT_INPUT, json);
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the default input document.
    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join(DEFAULT_INPUT)
    }

    /// Write another document next to the default one.
    pub fn write_input(&self, name: &str, json: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, json).expect("Failed to write input document");
        path
    }
}

/// JSON for a directory with `width` children per level, `depth` levels deep.
///
/// Every level holds files plus one subdirectory named `dir`, so
/// `dir/dir/...` paths navigate all the way down.
pub fn generated_tree_json(depth: usize, width: usize) -> String {
    let mut children: Vec<String> = (0..width)
        .map(|i| {
            format!(
                r#"{{"name":"file{i}.rs","size":{size},"permissions":"-rw-r--r--","time_modified":{time}}}"#,
                size = i * 1000,
                time = 1_700_000_000 + (i * 7919) % 100_000,
            )
        })
        .collect();
    if depth > 0 {
        children.push(generated_dir_json("dir", depth - 1, width));
    }
    format!(
        r#"{{"name":"root","size":4096,"permissions":"drwxr-xr-x","time_modified":1700000000,"contents":[{}]}}"#,
        children.join(",")
    )
}

fn generated_dir_json(name: &str, depth: usize, width: usize) -> String {
    generated_tree_json(depth, width).replacen(r#""name":"root""#, &format!(r#""name":"{}""#, name), 1)
}
