// ABOUTME: Single image pull via the container engine.
// ABOUTME: Always produces an outcome record, even when the engine fails to launch.

use crate::types::ImageRef;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Exit code recorded when the pull process could not be launched or was
/// killed before reporting one.
pub const LAUNCH_FAILURE_CODE: i32 = -1;

/// Terminal result of one pull invocation.
#[derive(Debug, Clone)]
pub struct PullOutcome {
    pub exit_code: i32,
    pub stderr: String,
}

impl PullOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run `<engine> pull <image>` to completion.
///
/// Blocks (asynchronously) for the full duration of the pull. Never errors:
/// an engine that cannot be launched yields [`LAUNCH_FAILURE_CODE`] and the
/// spawn error text as stderr.
pub async fn pull_image(engine: &Path, image: &ImageRef) -> PullOutcome {
    let output = Command::new(engine)
        .arg("pull")
        .arg(image.as_str())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) => {
            let outcome = PullOutcome {
                exit_code: output.status.code().unwrap_or(LAUNCH_FAILURE_CODE),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            };
            if outcome.succeeded() {
                tracing::debug!(%image, "pull succeeded");
            } else {
                tracing::debug!(%image, code = outcome.exit_code, "pull failed");
            }
            outcome
        }
        Err(e) => {
            tracing::debug!(%image, error = %e, "failed to launch pull process");
            PullOutcome {
                exit_code: LAUNCH_FAILURE_CODE,
                stderr: e.to_string(),
            }
        }
    }
}
