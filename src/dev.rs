//! Development environment orchestration.
//! Starts the code generator, the live-reload watcher and the frontend dev
//! server side by side and blocks until all of them exit.

use std::fmt;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};

use crate::error::{Error, Result};

/// An external program plus its arguments, resolved through `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl DevCommand {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for DevCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// `templ generate`, `air` and `npm run dev`.
pub fn default_commands() -> Vec<DevCommand> {
    vec![
        DevCommand::new("templ", ["generate"]),
        DevCommand::new("air", Vec::<String>::new()),
        DevCommand::new("npm", ["run", "dev"]),
    ]
}

/// Starts every command in `project_dir` with inherited stdio, then waits
/// for all of them. Exit codes are not inspected.
///
/// # Errors
/// * `Error::LaunchError` if a command cannot be started. Commands that were
///   already running are killed and reaped first.
pub fn run_dev<P: AsRef<Path>>(project_dir: P, commands: &[DevCommand]) -> Result<()> {
    let project_dir = project_dir.as_ref();
    let mut children: Vec<(&DevCommand, Child)> = Vec::with_capacity(commands.len());

    for command in commands {
        debug!("Starting '{}' in {}", command, project_dir.display());
        let spawned = Command::new(&command.program)
            .args(&command.args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();

        match spawned {
            Ok(child) => children.push((command, child)),
            Err(source) => {
                stop_all(&mut children);
                return Err(Error::LaunchError {
                    program: command.program.clone(),
                    source,
                });
            }
        }
    }

    for (command, child) in &mut children {
        match child.wait() {
            Ok(status) => info!("'{command}' exited with {status}"),
            Err(e) => warn!("Failed to wait for '{command}': {e}"),
        }
    }

    Ok(())
}

fn stop_all(children: &mut [(&DevCommand, Child)]) {
    for (command, child) in children.iter_mut() {
        debug!("Stopping '{command}'");
        if let Err(e) = child.kill() {
            warn!("Failed to stop '{command}': {e}");
        }
        if let Err(e) = child.wait() {
            warn!("Failed to reap '{command}': {e}");
        }
    }
}
