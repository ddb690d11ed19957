//! Command execution channels.
//!
//! An [`Executor`] takes a command line and an optional shell selector and
//! returns whatever the command printed. It knows nothing about `ip`; the
//! operations in [`crate::node`] decide whether the output is acceptable.
//!
//! Two channels are provided:
//!
//! - [`LocalShell`] runs commands on this host through `<shell> -c`.
//! - [`DryRun`] records commands without running them.

use std::process::Command;

use crate::error::Result;

/// Shell used by [`LocalShell`] when no selector is given.
pub const DEFAULT_SHELL: &str = "sh";

/// Runs command lines and captures their output.
pub trait Executor {
    /// Run `command`, optionally through the named shell, and return its output.
    fn execute(&mut self, command: &str, shell: Option<&str>) -> Result<String>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn execute(&mut self, command: &str, shell: Option<&str>) -> Result<String> {
        (**self).execute(command, shell)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn execute(&mut self, command: &str, shell: Option<&str>) -> Result<String> {
        (**self).execute(command, shell)
    }
}

/// Runs commands on the local host.
///
/// Output is stdout followed by stderr, the way a console session would show
/// it. The exit status is not inspected: `ip` reports failures on stderr, and
/// write operations already reject any output.
#[derive(Debug, Clone, Default)]
pub struct LocalShell {
    default_shell: Option<String>,
}

impl LocalShell {
    /// Create a local executor using [`DEFAULT_SHELL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `shell` when the caller gives no selector.
    pub fn with_default_shell(mut self, shell: impl Into<String>) -> Self {
        self.default_shell = Some(shell.into());
        self
    }
}

impl Executor for LocalShell {
    fn execute(&mut self, command: &str, shell: Option<&str>) -> Result<String> {
        let shell = shell
            .or(self.default_shell.as_deref())
            .unwrap_or(DEFAULT_SHELL);

        let output = Command::new(shell).arg("-c").arg(command).output()?;
        tracing::trace!(%shell, status = ?output.status, "command finished");

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}

/// Records commands instead of running them; every command prints nothing.
#[derive(Debug, Clone, Default)]
pub struct DryRun {
    commands: Vec<String>,
}

impl DryRun {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Consume the recorder, returning the commands.
    pub fn into_commands(self) -> Vec<String> {
        self.commands
    }
}

impl Executor for DryRun {
    fn execute(&mut self, command: &str, _shell: Option<&str>) -> Result<String> {
        self.commands.push(command.to_string());
        Ok(String::new())
    }
}
