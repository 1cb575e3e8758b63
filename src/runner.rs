use std::process::Stdio;

use tokio::process::Command;

use crate::error::ToolError;

/// Run the external license checker and capture its stdout as UTF-8 text.
///
/// stdout is piped and collected; stderr is inherited so the checker's own
/// progress output stays visible on the terminal. The call blocks the run
/// until the subprocess exits — no timeout, no retry.
pub async fn capture_output(program: &str, args: &[String]) -> Result<String, ToolError> {
    let rendered = render_command(program, args);

    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await
        .map_err(|source| ToolError::Launch {
            command: rendered.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::NonZeroExit {
            command: rendered,
            status: output.status,
        });
    }

    String::from_utf8(output.stdout).map_err(|source| ToolError::BadEncoding {
        command: rendered,
        source,
    })
}

/// Human-readable form of the command for error messages.
fn render_command(program: &str, args: &[String]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}
