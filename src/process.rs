//! Runs login, remote-command and credential-init actions as subprocesses.

use crate::command_path::{self, KINIT, RLOGIN, RSH};
use crate::{log_debug, log_error, log_info, log_warn};
use std::{
    fmt, io,
    process::{Command, ExitStatus, Stdio},
};

/// A fully assembled external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCommand {
    program: String,
    args: Vec<String>,
}

impl PreparedCommand {
    fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for PreparedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

pub fn build_login_command(identity: &str, hostname: &str) -> PreparedCommand {
    PreparedCommand::new(RLOGIN, vec!["-l".to_string(), identity.to_string(), hostname.to_string()])
}

pub fn build_remote_command(identity: &str, hostname: &str, command_text: &str) -> PreparedCommand {
    PreparedCommand::new(
        RSH,
        vec!["-l".to_string(), identity.to_string(), hostname.to_string(), command_text.to_string()],
    )
}

pub fn build_init_command() -> PreparedCommand {
    PreparedCommand::new(KINIT, Vec::new())
}

/// Result of one action as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Test mode: the command was recorded but not started.
    Skipped,
    /// The process ran; `None` when it was terminated by a signal.
    Exited(Option<i32>),
}

/// Executes launcher actions. Callers release the terminal before calling in.
///
/// In test mode nothing is spawned. Every prepared command is kept in
/// [`ActionRunner::history`] either way.
#[derive(Debug, Default)]
pub struct ActionRunner {
    test_mode: bool,
    history: Vec<PreparedCommand>,
}

impl ActionRunner {
    pub fn new(test_mode: bool) -> Self {
        Self {
            test_mode,
            history: Vec::new(),
        }
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn history(&self) -> &[PreparedCommand] {
        &self.history
    }

    pub fn login(&mut self, identity: &str, hostname: &str) -> io::Result<ActionOutcome> {
        self.run(build_login_command(identity, hostname))
    }

    /// Run `command_text` on every host in turn. A host that exits non-zero
    /// does not stop the remaining hosts; failing to start the program does.
    pub fn remote_command<S: AsRef<str>>(&mut self, identity: &str, hostnames: &[S], command_text: &str) -> io::Result<Vec<ActionOutcome>> {
        let mut outcomes = Vec::with_capacity(hostnames.len());
        for hostname in hostnames {
            outcomes.push(self.run(build_remote_command(identity, hostname.as_ref(), command_text))?);
        }
        Ok(outcomes)
    }

    pub fn init_credentials(&mut self) -> io::Result<ActionOutcome> {
        self.run(build_init_command())
    }

    fn run(&mut self, command: PreparedCommand) -> io::Result<ActionOutcome> {
        log_debug!("do command - {}", command);
        self.history.push(command.clone());

        if self.test_mode {
            log_info!("Test mode, not executing: {}", command);
            return Ok(ActionOutcome::Skipped);
        }

        let status = spawn_and_wait(&command)?;
        let code = status.code();
        if status.success() {
            log_info!("{} exited successfully", command.program);
        } else {
            log_warn!("{} exited with status {:?}", command.program, code);
        }
        Ok(ActionOutcome::Exited(code))
    }
}

fn spawn_and_wait(command: &PreparedCommand) -> io::Result<ExitStatus> {
    let program = command_path::resolve_known_command_path(&command.program).map_err(|err| {
        log_error!("Failed to resolve {}: {}", command.program, err);
        err
    })?;

    Command::new(&program)
        .args(&command.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| {
            log_error!("Failed to execute {}: {}", command.program, err);
            err
        })
}

#[cfg(test)]
#[path = "test/process.rs"]
mod tests;
