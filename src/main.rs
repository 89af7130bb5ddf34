use clap::{ArgGroup, Parser};

mod commands;
mod output;

use commands::{new, update, Command};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "project-manager")]
#[command(version = VERSION)]
#[command(about = "Create or update a game project.")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .multiple(false)
        .args(["new", "update"])
))]
struct Cli {
    /// Create a new project with the given name.
    #[arg(long, value_name = "PROJECT_NAME")]
    new: Option<String>,

    /// Path to existing project directory to update the engine version.
    #[arg(long, value_name = "PROJECT_PATH")]
    update: Option<String>,

    /// Directory holding the game, game_lib and game_tests templates
    /// (defaults to the directory of this executable, then the bundled templates)
    #[arg(long, value_name = "DIR", requires = "new", conflicts_with = "update")]
    templates: Option<String>,

    /// Print a JSON response instead of plain text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_command(self) -> Option<Command> {
        match (self.new, self.update) {
            (Some(name), None) => Some(Command::New(new::NewArgs {
                name,
                templates: self.templates,
            })),
            (None, Some(path)) => Some(Command::Update(update::UpdateArgs { path })),
            _ => None,
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    // The "mode" group guarantees exactly one of --new / --update.
    let Some(command) = cli.into_command() else {
        return std::process::ExitCode::from(2);
    };

    let (result, exit_code) = output::map_cmd_result(commands::run(command));

    if json {
        output::print_json_result(result);
    } else {
        output::print_plain_result(result);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
