//! Errors raised while driving external tools.

use std::io;

use thiserror::Error;

/// Failure while spawning or waiting on an external tool process.
#[must_use = "errors must not be silently ignored"]
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool process could not be started at all.
    #[error("failed to spawn '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but exited unsuccessfully. `code` is `None` when the
    /// process was killed by a signal.
    #[error("'{program}' exited with status {code:?}")]
    ExitStatus {
        program: String,
        code: Option<i32>,
    },
}

impl ToolError {
    pub(crate) fn spawn(program: &str, source: io::Error) -> Self {
        Self::Spawn {
            program: program.to_owned(),
            source,
        }
    }

    pub(crate) fn exit_status(program: &str, code: Option<i32>) -> Self {
        Self::ExitStatus {
            program: program.to_owned(),
            code,
        }
    }
}
