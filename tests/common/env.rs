//! Test environment builder for isolated Stagehand testing.
//!
//! A `TestEnv` is a temp workspace laid out the way Stagehand expects by
//! default: a `Config/` tree of component sources and a `Programs/` tree
//! of versioned install directories. Commands run with the workspace as
//! their working directory, so default root resolution is exercised too.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a Stagehand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated workspace with Config/ and Programs/ trees.
pub struct TestEnv {
    /// Temporary workspace the command runs in
    pub root: TempDir,
    /// Path to the stagehand binary
    bin: PathBuf,
}

impl TestEnv {
    /// Create a workspace with empty Config/ and Programs/ roots
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp workspace");
        std::fs::create_dir_all(root.path().join("Config")).unwrap();
        std::fs::create_dir_all(root.path().join("Programs")).unwrap();
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stagehand")),
        }
    }

    /// Create a workspace without the default roots
    pub fn bare() -> Self {
        let root = TempDir::new().expect("failed to create temp workspace");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stagehand")),
        }
    }

    /// Path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Path under the Programs/ root
    pub fn programs_path(&self, relative: &str) -> PathBuf {
        self.path("Programs").join(relative)
    }

    /// Write a component source file under Config/, creating parents
    pub fn write_source(&self, relative: &str, content: &str) {
        let path = self.path("Config").join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Create a versioned install directory under Programs/
    pub fn add_install_dir(&self, name: &str) -> PathBuf {
        let dir = self.programs_path(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a file at a workspace-root-relative path
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Run stagehand from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("STAGEHAND_CONFIG_ROOT")
            .env_remove("STAGEHAND_PROGRAMS_ROOT")
            .env_remove("STAGEHAND_BACKUP")
            .output()
            .expect("failed to execute stagehand");

        output_to_result(output)
    }

    /// Run stagehand with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("NO_COLOR", "1");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("failed to execute stagehand");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Sorted (relative path, content) snapshot of a directory tree.
///
/// Used to prove dry-run leaves the programs tree byte-identical.
pub fn tree_snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries = Vec::new();
    collect(dir, dir, &mut entries);
    entries.sort();
    entries
}

fn collect(root: &Path, current: &Path, entries: &mut Vec<(String, Vec<u8>)>) {
    for entry in std::fs::read_dir(current).unwrap() {
        let path = entry.unwrap().path();
        let relative = path
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .into_owned();
        if path.is_dir() {
            entries.push((format!("{relative}/"), Vec::new()));
            collect(root, &path, entries);
        } else {
            entries.push((relative, std::fs::read(&path).unwrap()));
        }
    }
}
