//! New-project flow: clone the engine, rebrand it, drop in the game templates.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::defaults::{self, EngineDefaults, ENGINE_REPO_URL};
use crate::error::Result;
use crate::git;
use crate::project::validate_project_name;
use crate::templates::{self, CopiedTemplate};
use crate::utils::command::CommandRunner;
use crate::utils::{io, validation};

#[derive(Debug, Clone)]
pub struct NewProjectOptions {
    /// Directory the project directory is created in
    pub workspace: PathBuf,
    /// Directory holding `game/`, `game_lib/` and `game_tests/`
    pub templates_root: PathBuf,
    pub engine_repo: String,
    pub defaults: EngineDefaults,
}

impl NewProjectOptions {
    pub fn new(workspace: impl Into<PathBuf>, templates_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            templates_root: templates_root.into(),
            engine_repo: ENGINE_REPO_URL.to_string(),
            defaults: EngineDefaults::default(),
        }
    }

    /// Clone from another repository instead of the upstream engine.
    pub fn with_engine_repo(mut self, url: impl Into<String>) -> Self {
        self.engine_repo = url.into();
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProjectReport {
    pub project_name: String,
    pub project_path: String,
    pub settings_file: String,
    pub engine_repo: String,
    pub commands: Vec<String>,
    pub templates: Vec<CopiedTemplate>,
}

/// Create a new game project named `project_name` under `options.workspace`.
///
/// Stops at the first failing step and leaves whatever was already created
/// in place.
pub fn create_new_project(
    project_name: &str,
    options: &NewProjectOptions,
    runner: &mut dyn CommandRunner,
) -> Result<NewProjectReport> {
    let project_name = validate_project_name(project_name)?;
    let d = &options.defaults;

    let clone_dir = options.workspace.join(&d.clone_dir);
    let project_dir = options.workspace.join(project_name);
    validation::require_absent(&project_dir)?;
    validation::require_absent(&clone_dir)?;

    let mut commands = Vec::new();

    crate::log_status!("new", "Cloning {} repository...", d.clone_dir);
    commands.push(git::clone_shallow(
        runner,
        &options.workspace,
        &options.engine_repo,
        &d.clone_dir,
    )?);

    crate::log_status!("new", "Renaming directory to {}...", project_name);
    io::rename(&clone_dir, &project_dir, "rename cloned engine directory")?;

    let settings_file = write_settings(&project_dir, &d.settings_file, project_name)?;

    crate::log_status!("new", "Renaming engine's branch/origin...");
    commands.push(git::rename_branch(
        runner,
        &project_dir,
        &d.upstream_branch,
        &d.engine_branch,
    )?);
    commands.push(git::rename_remote(
        runner,
        &project_dir,
        &d.origin_remote,
        &d.engine_remote,
    )?);
    commands.push(git::checkout_new_branch(runner, &project_dir, &d.game_branch)?);

    crate::log_status!("new", "Copying game templates...");
    let copied = templates::copy_templates(&options.templates_root, &project_dir, project_name)?;

    crate::log_status!("new", "Pulling submodules...");
    commands.push(git::submodule_update(runner, &project_dir)?);

    Ok(NewProjectReport {
        project_name: project_name.to_string(),
        project_path: project_dir.display().to_string(),
        settings_file: settings_file.display().to_string(),
        engine_repo: options.engine_repo.clone(),
        commands,
        templates: copied,
    })
}

fn write_settings(project_dir: &Path, file_name: &str, project_name: &str) -> Result<PathBuf> {
    let path = project_dir.join(file_name);
    io::write_file(
        &path,
        &defaults::settings_line(project_name),
        "write engine settings",
    )?;
    Ok(path)
}

/// Follow-up instructions once a project has been created.
pub fn next_steps(defaults: &EngineDefaults) -> Vec<String> {
    vec![
        "Everything is ready, you now need to commit the changes - this will be the first commit of your game.".to_string(),
        format!(
            "After that you would need to setup your remote (git remote add {} <url>) to push your changes.",
            defaults.origin_remote
        ),
        format!(
            "This way you should have 2 branches and 2 origins: {game} (your game's {game}) and {engine} (engine's {upstream}), {origin} (your game's origin) and {engine_remote} (engine's origin).",
            game = defaults.game_branch,
            engine = defaults.engine_branch,
            upstream = defaults.upstream_branch,
            origin = defaults.origin_remote,
            engine_remote = defaults.engine_remote,
        ),
    ]
}
