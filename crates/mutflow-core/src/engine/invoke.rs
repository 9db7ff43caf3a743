use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// A single external tool invocation: a program plus its arguments.
///
/// Running a `ToolCommand` is a blocking call with no timeout; the caller
/// suspends until the child terminates, and a non-zero exit status is an
/// error. Commands are built up-front so callers can inspect or log the full
/// command line before anything is spawned.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn arg_path(self, flag: &str, path: &Path) -> Self {
        self.arg(flag).arg(path)
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Spawns the command, waits for it to terminate, and checks its status.
    pub fn run(&self) -> Result<(), InvokeError> {
        debug!("Invoking external tool: {}", self);

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| InvokeError::Launch {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !status.success() {
            return Err(InvokeError::Failed {
                program: self.program.to_string_lossy().into_owned(),
                status,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
