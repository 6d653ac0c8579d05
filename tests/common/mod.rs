//! Shared testing utilities for tag-replacer tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory all test files live in.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `name` inside the work directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir().join(name)
    }

    /// Write `content` to `name` and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read `name` back as text.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("Failed to read test file")
    }

    /// Build a command for invoking the compiled `tag-replacer` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("tag-replacer").expect("Failed to locate tag-replacer binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Assert that `name` was not created.
    pub fn assert_not_written(&self, name: &str) {
        assert!(!self.path(name).exists(), "{} should not have been written", name);
    }
}

/// Sets environment variables for the lifetime of the guard and restores them on drop.
///
/// Tests using this must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        Self { saved: Vec::new() }
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.saved.push((name.to_string(), env::var_os(name)));
        unsafe {
            env::set_var(name, value);
        }
        self
    }

    pub fn unset(mut self, name: &str) -> Self {
        self.saved.push((name.to_string(), env::var_os(name)));
        unsafe {
            env::remove_var(name);
        }
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => unsafe {
                    env::set_var(&name, value);
                },
                None => unsafe {
                    env::remove_var(&name);
                },
            }
        }
    }
}
