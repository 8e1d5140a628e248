//! # Command Executor
//!
//! Runs one external program per call and classifies why it failed.
//!
//! Commands are always a program plus a discrete argument vector. Nothing goes
//! through a shell, so arguments are never globbed or interpolated.

use std::fmt;
use std::io::{self, ErrorKind};
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use netaudit_common::error::CommandFailure;
use secrecy::{ExposeSecret, SecretString};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::observer::{AuditEvent, AuditObserver};

/// A program invocation. Optional secret input is piped to the process exactly once.
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    input: Option<SecretString>,
    lookup: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            input: None,
            lookup: false,
        }
    }

    /// `which <tool>`. A failure only means the tool is absent, not that anything broke.
    pub fn lookup(tool: impl Into<String>) -> Self {
        let mut spec = Self::new("which").arg(tool);
        spec.lookup = true;
        spec
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

    /// Attaches input for the process' stdin. A trailing newline is added when piped.
    pub fn with_secret_input(mut self, input: SecretString) -> Self {
        self.input = Some(input);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Hands the secret input over to the caller, leaving none behind.
    pub fn take_input(&mut self) -> Option<SecretString> {
        self.input.take()
    }

    /// The command line as it would be typed. Never contains the input.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("input", &self.input.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Executes commands on behalf of the section pipelines.
///
/// One call spawns exactly one process. Implementations never retry.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, spec: CommandSpec) -> Result<CommandOutput, CommandFailure>;
}

/// Runs commands as child processes of the current process.
pub struct SystemRunner {
    timeout: Option<Duration>,
    observer: Arc<dyn AuditObserver>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>, observer: Arc<dyn AuditObserver>) -> Self {
        Self { timeout, observer }
    }

    async fn execute(&self, spec: &mut CommandSpec) -> Result<CommandOutput, CommandFailure> {
        let program = spec.program.clone();
        let input = spec.take_input();

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command
            .spawn()
            .map_err(|err| classify_io_error(&program, err))?;

        if let Some(input) = input {
            if let Some(mut stdin) = child.stdin.take() {
                let written = write_secret(&mut stdin, &input).await;
                drop(stdin);
                // The child may exit before reading its input, which is its own failure to report.
                if let Err(err) = written {
                    if err.kind() != ErrorKind::BrokenPipe {
                        return Err(classify_io_error(&program, err));
                    }
                }
            }
        }

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| CommandFailure::Timeout {
                    program: program.clone(),
                    limit,
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|err| classify_io_error(&program, err))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(CommandFailure::NonZeroExit {
                program,
                exit_code: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, mut spec: CommandSpec) -> Result<CommandOutput, CommandFailure> {
        let command_line = spec.command_line();
        self.observer.record(&AuditEvent::CommandStarted {
            command: &command_line,
        });

        let started = Instant::now();
        let result = self.execute(&mut spec).await;

        match &result {
            Ok(_) => self.observer.record(&AuditEvent::CommandCompleted {
                command: &command_line,
                elapsed: started.elapsed(),
            }),
            Err(_) if spec.lookup => self.observer.record(&AuditEvent::ToolMissing {
                tool: spec.args.first().map_or("", String::as_str),
            }),
            Err(failure) => self.observer.record(&AuditEvent::CommandFailed {
                command: &command_line,
                failure,
            }),
        }
        result
    }
}

async fn write_secret(
    stdin: &mut tokio::process::ChildStdin,
    input: &SecretString,
) -> io::Result<()> {
    stdin.write_all(input.expose_secret().as_bytes()).await?;
    stdin.write_all(b"\n").await?;
    stdin.flush().await
}

fn classify_io_error(program: &str, err: io::Error) -> CommandFailure {
    match err.kind() {
        ErrorKind::NotFound => CommandFailure::NotFound {
            program: program.to_string(),
        },
        ErrorKind::PermissionDenied => CommandFailure::PermissionDenied {
            program: program.to_string(),
            detail: err.to_string(),
        },
        _ => CommandFailure::Io {
            program: program.to_string(),
            detail: err.to_string(),
        },
    }
}

/// Checks whether `tool` resolves on the execution path using `which`.
///
/// Any failure, including `which` itself being absent, counts as "not available".
pub async fn tool_available(runner: &dyn CommandRunner, tool: &str) -> bool {
    runner.run(CommandSpec::lookup(tool)).await.is_ok()
}
