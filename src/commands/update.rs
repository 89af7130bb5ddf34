use serde::Serialize;

use project_manager::defaults::EngineDefaults;
use project_manager::resolve;
use project_manager::update::{self, UpdateReport};
use project_manager::utils::command::ShellRunner;

use super::CmdResult;

pub struct UpdateArgs {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub report: UpdateReport,
    pub next_steps: Vec<String>,
}

pub fn run(args: UpdateArgs) -> CmdResult<UpdateOutput> {
    let project_path = resolve::resolve_path(&args.path, &resolve::current_dir()?);
    let defaults = EngineDefaults::default();

    let report = update::update_engine_for_project(&project_path, &defaults, &mut ShellRunner)?;

    Ok((
        UpdateOutput {
            command: "update",
            report,
            next_steps: update::next_steps(&defaults),
        },
        0,
    ))
}
