//! Temporary git repository helper for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TempGitRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    /// Create a new temporary git repository whose unborn branch is `branch`
    pub fn new(branch: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().to_path_buf();

        let repo = Self {
            _temp_dir: temp_dir,
            path,
        };

        repo.git_ok(&["init"]);
        repo.git_ok(&["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")]);
        repo.git_ok(&["config", "user.name", "Test User"]);
        repo.git_ok(&["config", "user.email", "test@example.com"]);
        // Disable commit signing to avoid environment-specific failures
        repo.git_ok(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a file to the repository
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(file_path, content).expect("Failed to write file");
    }

    /// Write, stage and commit files in one commit
    pub fn commit_files(&self, files: &[&str], message: &str) {
        for file in files {
            self.write_file(file, &format!("{file} @ {message}\n"));
            self.git_ok(&["add", file]);
        }
        self.git_ok(&["commit", "-m", message]);
    }

    /// Delete a file and commit the deletion
    pub fn commit_removal(&self, file: &str, message: &str) {
        self.git_ok(&["rm", file]);
        self.git_ok(&["commit", "-m", message]);
    }

    /// Create a branch at HEAD and switch to it
    pub fn checkout_new(&self, branch: &str) {
        self.git_ok(&["checkout", "-b", branch]);
    }

    /// Full SHA of a revision
    pub fn rev_parse(&self, rev: &str) -> String {
        let out = self.git(&["rev-parse", rev]);
        assert!(out.status.success(), "git rev-parse {rev} failed");
        String::from_utf8_lossy(&out.stdout).trim().to_string()
    }

    /// Run a git command and return output
    pub fn git(&self, args: &[&str]) -> std::process::Output {
        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .expect("Failed to run git command")
    }

    fn git_ok(&self, args: &[&str]) {
        let out = self.git(args);
        assert!(
            out.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&out.stderr)
        );
    }
}
