//! Update flow: pull the latest engine and squash it into the game branch.

use serde::Serialize;
use std::path::Path;

use crate::defaults::EngineDefaults;
use crate::error::{Error, Result};
use crate::git;
use crate::utils::command::CommandRunner;
use crate::utils::validation;

#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub project_path: String,
    pub commands: Vec<String>,
}

/// Bring the engine branch of an existing project up to date and squash-merge
/// it into the game branch.
///
/// `project_path` must already be resolved (see `utils::resolve::resolve_path`).
/// The merged changes are staged, never committed.
pub fn update_engine_for_project(
    project_path: &Path,
    defaults: &EngineDefaults,
    runner: &mut dyn CommandRunner,
) -> Result<UpdateReport> {
    let project_dir = validation::require_dir(project_path, |path: &Path| {
        Error::project_path_not_found(path.display().to_string())
    })?;

    let mut commands = Vec::new();

    crate::log_status!("update", "Updating {} branch...", defaults.engine_branch);
    commands.push(git::checkout(runner, project_dir, &defaults.engine_branch)?);
    commands.push(git::pull_rebase(
        runner,
        project_dir,
        &defaults.engine_remote,
        &defaults.upstream_branch,
    )?);

    crate::log_status!(
        "update",
        "Merging changes into the game's {} branch...",
        defaults.game_branch
    );
    commands.push(git::checkout(runner, project_dir, &defaults.game_branch)?);
    commands.push(git::merge_squash(runner, project_dir, &defaults.engine_branch)?);
    commands.push(git::submodule_update(runner, project_dir)?);
    commands.push(git::add_all(runner, project_dir)?);

    Ok(UpdateReport {
        project_path: project_dir.display().to_string(),
        commands,
    })
}

pub fn next_steps(defaults: &EngineDefaults) -> Vec<String> {
    vec![format!(
        "Engine branch was updated and merged into your game's {} branch, now you need to make sure everything is working and commit the changes.",
        defaults.game_branch
    )]
}
