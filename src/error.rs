use std::process::ExitStatus;

use thiserror::Error;

/// Failures of the external checker invocation. All fatal; no retries.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    NonZeroExit { command: String, status: ExitStatus },

    #[error("`{command}` produced non-UTF-8 output: {source}")]
    BadEncoding {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
