//! Publishes the pages through the `git` executable.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Mise à jour des graphiques";

/// A local working tree.
#[derive(Debug, Clone)]
pub struct Repo {
    path: PathBuf,
}

impl Repo {
    /// Opens the working tree at `path`, failing if it is not one.
    ///
    /// The path is made absolute so files given relative to the current
    /// directory still resolve inside the tree.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repo {
            path: path
                .canonicalize()
                .with_context(|| format!("`{}` is not a git working tree", path.display()))?,
        };
        repo.run(["rev-parse", "--is-inside-work-tree"])
            .with_context(|| format!("`{}` is not a git working tree", path.display()))?;

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stages the given files.
    pub fn add(&self, files: &[PathBuf]) -> Result<()> {
        let files = files
            .iter()
            .map(|f| self.relative(f))
            .collect::<Result<Vec<_>>>()?;

        let mut args = vec![OsStr::new("add"), OsStr::new("--")];
        args.extend(files.iter().map(|f| f.as_os_str()));
        self.run(args)?;

        Ok(())
    }

    /// Output of `git status`.
    pub fn status(&self) -> Result<String> {
        self.run(["status"])
    }

    /// Commits the index. A commit is recorded even when nothing changed.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(["commit", "--allow-empty", "-m", message])?;

        Ok(())
    }

    /// Output of `git log -1`.
    pub fn last_commit_log(&self) -> Result<String> {
        self.run(["log", "-1"])
    }

    /// Pushes the current branch to the branch of the same name on `remote`.
    pub fn push(&self, remote: &str) -> Result<()> {
        self.run(["push", remote, "HEAD"])?;

        Ok(())
    }

    fn relative(&self, file: &Path) -> Result<PathBuf> {
        let file = file
            .canonicalize()
            .with_context(|| format!("Failed to stage `{}`", file.display()))?;

        Ok(match file.strip_prefix(&self.path) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => file,
        })
    }

    fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_os_string()).collect();
        debug!(repo = %self.path.display(), ?args, "Running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(&args)
            .output()
            .context("Failed to run git")?;

        if !output.status.success() {
            return Err(anyhow!(
                "git {} failed ({}): {}",
                args.iter()
                    .map(|a| a.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

// -- Tests -------------------------------------------------------------------
