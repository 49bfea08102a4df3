//! CommandRunner port - abstraction over spawning external programs
//!
//! Every external tool (build tool, deploy tool, cloud CLI) is invoked through
//! this trait so use cases and adapters can be tested without the real tools.

use std::path::PathBuf;

/// How the child's stdout/stderr are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Capture both streams (for parsing)
    #[default]
    Capture,
    /// Let the child write straight to the terminal; nothing is captured
    Inherit,
    /// Echo the child's output to stderr and capture it as well
    Tee,
}

/// A fully described external invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub cwd: Option<PathBuf>,
    pub output: OutputMode,
    /// Substrings replaced by `***` whenever the command line is logged
    pub secrets: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secrets.push(secret);
        }
        self
    }

    /// Command line for logs, with secrets masked
    pub fn display_redacted(&self) -> String {
        let mut line = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        for secret in &self.secrets {
            line = line.replace(secret.as_str(), "***");
        }
        line
    }
}

/// Result of a finished external invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the child was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Last non-empty line of stderr (or stdout), for one-line error messages
    pub fn summary(&self) -> String {
        let pick = |s: &str| {
            s.lines()
                .rev()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .map(str::to_string)
        };
        pick(&self.stderr)
            .or_else(|| pick(&self.stdout))
            .unwrap_or_else(|| match self.code {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            })
    }

    /// Whether either stream contains `needle`
    pub fn mentions(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }
}

/// Errors spawning a command (not non-zero exits: those are `CommandOutput`)
#[derive(Debug)]
pub enum CommandError {
    /// Program could not be started
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// Waiting for the program failed
    Wait {
        program: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Spawn { program, source } => {
                write!(f, "failed to start {}: {}", program, source)
            }
            CommandError::Wait { program, source } => {
                write!(f, "failed waiting for {}: {}", program, source)
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Spawn { source, .. } | CommandError::Wait { source, .. } => Some(source),
        }
    }
}

impl From<CommandError> for crate::error::StackpilotError {
    fn from(err: CommandError) -> Self {
        let program = match &err {
            CommandError::Spawn { program, .. } | CommandError::Wait { program, .. } => {
                program.clone()
            }
        };
        crate::error::StackpilotError::CommandFailed {
            program,
            message: err.to_string(),
        }
    }
}

/// Runs external commands
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        (**self).run(spec)
    }
}
