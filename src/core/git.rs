//! Git steps used by the project flows.
//!
//! Each helper builds one git command line and hands it to a
//! [`CommandRunner`]; the return value is the command that ran, so the flows
//! can report what they did.

use std::path::Path;

use crate::error::Result;
use crate::utils::command::CommandRunner;
use crate::utils::shell::command_line;

fn git(runner: &mut dyn CommandRunner, cwd: &Path, args: &[&str]) -> Result<String> {
    let command = command_line("git", args);
    runner.run(&command, cwd)?;
    Ok(command)
}

/// Shallow-clone `url` into `target_dir` (relative to `cwd`).
pub fn clone_shallow(
    runner: &mut dyn CommandRunner,
    cwd: &Path,
    url: &str,
    target_dir: &str,
) -> Result<String> {
    git(runner, cwd, &["clone", "--depth", "1", url, target_dir])
}

pub fn rename_branch(
    runner: &mut dyn CommandRunner,
    cwd: &Path,
    from: &str,
    to: &str,
) -> Result<String> {
    git(runner, cwd, &["branch", "-m", from, to])
}

pub fn rename_remote(
    runner: &mut dyn CommandRunner,
    cwd: &Path,
    from: &str,
    to: &str,
) -> Result<String> {
    git(runner, cwd, &["remote", "rename", from, to])
}

/// Create `branch` at the current position and switch to it.
pub fn checkout_new_branch(
    runner: &mut dyn CommandRunner,
    cwd: &Path,
    branch: &str,
) -> Result<String> {
    git(runner, cwd, &["checkout", "-b", branch])
}

pub fn checkout(runner: &mut dyn CommandRunner, cwd: &Path, branch: &str) -> Result<String> {
    git(runner, cwd, &["checkout", branch])
}

pub fn pull_rebase(
    runner: &mut dyn CommandRunner,
    cwd: &Path,
    remote: &str,
    branch: &str,
) -> Result<String> {
    git(runner, cwd, &["pull", "--rebase", remote, branch])
}

/// Squash-merge `branch` into the current branch. Leaves the result staged but
/// uncommitted.
pub fn merge_squash(runner: &mut dyn CommandRunner, cwd: &Path, branch: &str) -> Result<String> {
    git(runner, cwd, &["merge", "--squash", branch])
}

pub fn submodule_update(runner: &mut dyn CommandRunner, cwd: &Path) -> Result<String> {
    git(runner, cwd, &["submodule", "update", "--init", "--recursive"])
}

pub fn add_all(runner: &mut dyn CommandRunner, cwd: &Path) -> Result<String> {
    git(runner, cwd, &["add", "."])
}
