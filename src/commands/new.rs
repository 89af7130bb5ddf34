use serde::Serialize;

use project_manager::defaults::EngineDefaults;
use project_manager::resolve;
use project_manager::scaffold::{self, NewProjectOptions, NewProjectReport};
use project_manager::templates;
use project_manager::utils::command::ShellRunner;

use super::CmdResult;

pub struct NewArgs {
    pub name: String,
    pub templates: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewOutput {
    pub command: &'static str,
    #[serde(flatten)]
    pub report: NewProjectReport,
    pub next_steps: Vec<String>,
}

pub fn run(args: NewArgs) -> CmdResult<NewOutput> {
    let workspace = resolve::current_dir()?;
    let templates_root = match args.templates {
        Some(dir) => resolve::resolve_path(&dir, &workspace),
        None => templates::default_templates_root(&resolve::executable_dir()?),
    };

    let options = NewProjectOptions::new(workspace, templates_root);
    let report = scaffold::create_new_project(&args.name, &options, &mut ShellRunner)?;

    Ok((
        NewOutput {
            command: "new",
            report,
            next_steps: scaffold::next_steps(&EngineDefaults::default()),
        },
        0,
    ))
}
