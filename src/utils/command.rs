//! Command execution primitives with consistent error handling.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{CommandFailedDetails, Error, Result};

/// Runs shell command lines on behalf of the project flows.
///
/// Every git and shell mutation the flows perform goes through this trait.
/// A failed command is always an error; implementations never retry.
pub trait CommandRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()>;
}

/// Runs commands through the host shell with inherited stdio.
///
/// Blocks until the child exits. There is no timeout: a hung child hangs
/// the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()> {
        crate::log_status!("run", "{}", command);

        let exit_code = run_interactive(command, cwd);
        require_exit_success(exit_code, command, cwd)
    }
}

fn shell_command(command: &str) -> Command {
    #[cfg(windows)]
    let cmd = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    };

    #[cfg(not(windows))]
    let cmd = {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };

    cmd
}

/// Execute a shell command in `cwd` with stdin/stdout/stderr passed through.
///
/// Returns the exit code, or -1 when the process could not be spawned or was
/// terminated by a signal.
pub fn run_interactive(command: &str, cwd: &Path) -> i32 {
    let status = shell_command(command)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(s) => s.code().unwrap_or(-1),
        Err(_) => -1,
    }
}

/// Require a command to have exited with status 0.
pub fn require_exit_success(exit_code: i32, command: &str, cwd: &Path) -> Result<()> {
    if exit_code == 0 {
        Ok(())
    } else {
        Err(Error::command_failed(CommandFailedDetails {
            command: command.to_string(),
            exit_code,
            cwd: cwd.display().to_string(),
        }))
    }
}
