#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv_infer::sink::SchemaSink;
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// One observed sink call, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Notified(String),
    Wrote(String, PathBuf),
}

/// Sink that records every interaction instead of performing I/O.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub interactions: Vec<Interaction>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaSink for RecordingSink {
    fn notify(&mut self, schema: &str) {
        self.interactions.push(Interaction::Notified(schema.to_string()));
    }

    fn write(&mut self, schema: &str, destination: &Path) -> std::io::Result<()> {
        self.interactions
            .push(Interaction::Wrote(schema.to_string(), destination.to_path_buf()));
        Ok(())
    }
}
