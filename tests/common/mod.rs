// Shared test helpers for integration tests.
// Each test gets its own temporary git repository as working directory.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const CONFIG_FILE: &str = ".commithelperrc.json";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_commithelper"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A temporary git repository checked out on `branch` (unborn, no commits).
pub struct Repo {
    pub dir: TempDir,
}

impl Repo {
    pub fn on_branch(branch: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        git(dir.path(), &["init", "-q"]);
        git(
            dir.path(),
            &["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")],
        );
        Repo { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_config(self, config_json: &str) -> Self {
        std::fs::write(self.path().join(CONFIG_FILE), config_json)
            .expect("failed to write config");
        self
    }

    /// Writes a commit message file inside the repo and returns its path.
    pub fn message_file(&self, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, content).expect("failed to write message file");
        path
    }

    /// Runs the binary inside the repo. Returns (stdout, stderr, exit_code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        run_in(self.path(), args)
    }
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

/// Runs the binary in `dir` with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_in(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .current_dir(dir)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}
