//! System command runner
//!
//! Spawns external programs with `std::process::Command`.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::domain::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec, OutputMode};

/// Runs commands on the local machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(spec: &CommandSpec, source: io::Error) -> CommandError {
        CommandError::Spawn {
            program: spec.program.clone(),
            source,
        }
    }

    fn wait_error(spec: &CommandSpec, source: io::Error) -> CommandError {
        CommandError::Wait {
            program: spec.program.clone(),
            source,
        }
    }

    fn capture(spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let output = Self::command(spec)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn inherit(spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(CommandOutput {
            code: status.code(),
            ..CommandOutput::default()
        })
    }

    /// Both streams are echoed to our stderr line by line while being
    /// collected, so stdout stays free for the command's own result.
    fn tee(spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let mut child = Self::command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Self::spawn_error(spec, e))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (stdout, stderr) = thread::scope(|scope| {
            let out = scope.spawn(move || stdout.map(echo_lines).unwrap_or_default());
            let err = scope.spawn(move || stderr.map(echo_lines).unwrap_or_default());
            (
                out.join().unwrap_or_default(),
                err.join().unwrap_or_default(),
            )
        });

        let status = child.wait().map_err(|e| Self::wait_error(spec, e))?;

        Ok(CommandOutput {
            code: status.code(),
            stdout,
            stderr,
        })
    }
}

/// Drain `stream` to EOF. Bytes are echoed as they come; the collected copy
/// is decoded lossily, so a non-UTF-8 line never stops the read (a closed
/// pipe would kill the child with SIGPIPE).
fn echo_lines<R: Read>(stream: R) -> String {
    let mut reader = BufReader::new(stream);
    let mut collected = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                let mut echo = io::stderr().lock();
                let _ = echo.write_all(&line);
                if !line.ends_with(b"\n") {
                    let _ = echo.write_all(b"\n");
                }
                collected.push_str(&String::from_utf8_lossy(&line));
                if !collected.ends_with('\n') {
                    collected.push('\n');
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "output stream read failed");
                break;
            }
        }
    }
    collected
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        tracing::debug!(command = %spec.display_redacted(), mode = ?spec.output, "running");

        let output = match spec.output {
            OutputMode::Capture => Self::capture(spec),
            OutputMode::Inherit => Self::inherit(spec),
            OutputMode::Tee => Self::tee(spec),
        }?;

        tracing::debug!(program = %spec.program, code = ?output.code, "finished");
        Ok(output)
    }
}
