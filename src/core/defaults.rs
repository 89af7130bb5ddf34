use serde::Serialize;

/// Upstream engine repository every new project is cloned from.
pub const ENGINE_REPO_URL: &str = "https://github.com/Flone-dnb/low-end-engine.git";

/// Fixed names shared by the new-project and update flows.
///
/// None of these are user-configurable; they describe the layout the engine
/// repository ships with and the layout a generated project is expected to keep.
#[derive(Debug, Clone, Serialize)]
pub struct EngineDefaults {
    /// Directory `git clone` creates before it gets renamed to the project name
    pub clone_dir: String,
    /// CMake include written at the project root
    pub settings_file: String,
    /// Local branch tracking the engine's history
    pub engine_branch: String,
    /// Local branch holding the game's history
    pub game_branch: String,
    /// Default branch of the upstream engine repository
    pub upstream_branch: String,
    /// Remote the engine clone's `origin` is renamed to
    pub engine_remote: String,
    /// Remote name the clone starts with (and the one left free for the game)
    pub origin_remote: String,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            clone_dir: "low-end-engine".to_string(),
            settings_file: "engine_settings.cmake".to_string(),
            engine_branch: "engine".to_string(),
            game_branch: "master".to_string(),
            upstream_branch: "master".to_string(),
            engine_remote: "origin_engine".to_string(),
            origin_remote: "origin".to_string(),
        }
    }
}

/// Content of the settings file for a project.
pub fn settings_line(project_name: &str) -> String {
    format!("set(GAME_PROJECT_NAME \"{}\")\n", project_name)
}
