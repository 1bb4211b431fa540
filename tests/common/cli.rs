//! Harness for running the `dotrc` binary against a scratch project and home.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temp project directory (cwd) plus a temp `HOME`.
pub struct DotrcWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl DotrcWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().join("project");
        let home = temp.path().join("home");
        fs::create_dir_all(&root).expect("create project dir");
        fs::create_dir_all(&home).expect("create home dir");
        // cwd as seen by the child is canonical (e.g. /private/var on macOS)
        let root = fs::canonicalize(&root).expect("canonicalize project dir");
        let home = fs::canonicalize(&home).expect("canonicalize home dir");
        Self {
            _temp: temp,
            root,
            home,
        }
    }

    /// Write a file relative to the project root.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.join(rel);
        fs::write(&path, contents).expect("write project file");
        path
    }

    /// Write a file relative to the fake home directory.
    pub fn write_home(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.home.join(rel);
        fs::write(&path, contents).expect("write home file");
        path
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("read file")
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

/// Run `dotrc` in the workspace root with `HOME` pointed at the fake home.
pub fn run_dotrc<I, S>(workspace: &DotrcWorkspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_dotrc_with_stdin(workspace, args, "", label)
}

pub fn run_dotrc_with_stdin<I, S>(
    workspace: &DotrcWorkspace,
    args: I,
    stdin: &str,
    label: &str,
) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("dotrc")
        .expect("dotrc binary")
        .args(args)
        .current_dir(&workspace.root)
        .env("HOME", &workspace.home)
        .env("USERPROFILE", &workspace.home)
        .env_remove("DOTRC_SCOPES")
        .env_remove("DOTRC_FORMAT")
        .env_remove("DOTRC_LOG")
        .write_stdin(stdin.to_string())
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run dotrc: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
