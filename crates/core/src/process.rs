use starbase_styles::{Style, Stylize, color};
use std::collections::BTreeMap;
use std::io;
use std::process::{Output, Stdio};
use thiserror::Error;
use tokio::process::Command;
use tracing::trace;

#[derive(Error, Debug, miette::Diagnostic)]
pub enum ProcessError {
    #[diagnostic(code(julia_setup::process::command_failed))]
    #[error("Failed to execute command {}.", .command.style(Style::Shell))]
    FailedCommand {
        command: String,
        #[source]
        error: Box<io::Error>,
    },

    #[diagnostic(code(julia_setup::process::command_failed))]
    #[error(
        "Command {} returned a {code} exit code.\n{}",
        .command.style(Style::Shell),
        .stderr.style(Style::MutedLight),
    )]
    FailedCommandNonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

pub struct ProcessResult {
    pub command: String,
    pub exit_code: i32,
    pub stderr: String,
    pub stdout: String,
}

/// Render a command as a single shell-quoted line, for logging and errors.
pub fn format_command_line(command: &Command) -> String {
    let inner = command.as_std();
    let args = inner
        .get_args()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>();

    if args.is_empty() {
        return inner.get_program().to_string_lossy().to_string();
    }

    format!(
        "{} {}",
        inner.get_program().to_string_lossy(),
        shell_words::join(args)
    )
}

async fn spawn_command(command: &mut Command) -> io::Result<Output> {
    let child = command.spawn()?;
    let output = child.wait_with_output().await?;

    Ok(output)
}

pub async fn exec_command(command: &mut Command) -> Result<ProcessResult, ProcessError> {
    let command_line = format_command_line(command);
    let inner = command.as_std();

    trace!(
        cwd = ?inner.get_current_dir(),
        env = ?inner.get_envs()
            .filter_map(|(key, val)| val.map(|v| (key, v.to_string_lossy())))
            .collect::<BTreeMap<_, _>>(),
        "Running command {}", color::shell(&command_line)
    );

    let output = spawn_command(command)
        .await
        .map_err(|error| ProcessError::FailedCommand {
            command: command_line.clone(),
            error: Box::new(error),
        })?;

    let stderr = String::from_utf8(output.stderr).unwrap_or_default();
    let stdout = String::from_utf8(output.stdout).unwrap_or_default();
    let code = output.status.code().unwrap_or(-1);

    trace!(
        code,
        stderr = if stderr.len() > 250 {
            "<truncated>"
        } else {
            &stderr
        },
        stdout = if stdout.len() > 250 {
            "<truncated>"
        } else {
            &stdout
        },
        "Ran command {}",
        color::shell(&command_line)
    );

    Ok(ProcessResult {
        command: command_line,
        stderr,
        stdout,
        exit_code: code,
    })
}

pub async fn exec_command_piped(command: &mut Command) -> Result<ProcessResult, ProcessError> {
    exec_command(command.stderr(Stdio::piped()).stdout(Stdio::piped())).await
}

/// Fail when the command did not exit cleanly. Termination by signal
/// (no exit code) is reported as `-1`.
pub fn handle_exec(result: ProcessResult) -> Result<ProcessResult, ProcessError> {
    if result.exit_code != 0 {
        return Err(ProcessError::FailedCommandNonZeroExit {
            command: result.command,
            code: result.exit_code,
            stderr: result.stderr,
        });
    }

    Ok(result)
}
