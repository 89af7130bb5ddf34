use serde::Serialize;

pub type CmdResult<T> = project_manager::Result<(T, i32)>;

pub mod new;
pub mod update;

pub(crate) enum Command {
    New(new::NewArgs),
    Update(update::UpdateArgs),
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    New(new::NewOutput),
    Update(update::UpdateOutput),
}

impl CommandOutput {
    pub fn next_steps(&self) -> &[String] {
        match self {
            CommandOutput::New(output) => &output.next_steps,
            CommandOutput::Update(output) => &output.next_steps,
        }
    }
}

pub(crate) fn run(command: Command) -> CmdResult<CommandOutput> {
    match command {
        Command::New(args) => {
            let (output, exit_code) = new::run(args)?;
            Ok((CommandOutput::New(output), exit_code))
        }
        Command::Update(args) => {
            let (output, exit_code) = update::run(args)?;
            Ok((CommandOutput::Update(output), exit_code))
        }
    }
}
