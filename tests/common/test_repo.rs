//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository for building commit histories.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository in a temporary directory.
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };

        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.name", "Test Committer"]);
        repo.git(&["config", "user.email", "committer@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Append to a file in the repository, creating it if needed.
    pub fn append_file(&self, name: &str, content: &str) {
        let existing = std::fs::read_to_string(self.path().join(name)).unwrap_or_default();
        self.write_file(name, &format!("{existing}{content}"));
    }

    /// Stage everything and commit it as `author`, returning the commit ID.
    pub fn commit(&self, message: &str, author: &str) -> String {
        self.git(&["add", "-A"]);
        let author_arg = format!("{author} <author@example.com>");
        self.git(&[
            "commit",
            "-q",
            "--allow-empty",
            "--author",
            &author_arg,
            "-m",
            message,
        ]);
        self.head()
    }

    /// Get the full ID of HEAD.
    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }
}
