use std::{
    io,
    process::{ExitStatus, Stdio},
};

use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

use crate::invocation::Invocation;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

impl DispatchError {
    /// Exit code to hand back to the caller: the child's own code when it has
    /// one, otherwise 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed { status, .. } => status.code().filter(|code| *code != 0).unwrap_or(1),
            Self::Spawn { .. } => 1,
        }
    }
}

/// Run the invocation in the foreground with inherited stdio and wait for it.
pub async fn execute(invocation: &Invocation) -> Result<(), DispatchError> {
    let mut command = Command::new(&invocation.program);
    command
        .args(&invocation.args)
        .envs(invocation.env.iter().map(|(key, value)| (key, value)))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    info!(command = %invocation, "running toolchain command");

    let status = command
        .status()
        .await
        .map_err(|source| DispatchError::Spawn {
            command: invocation.program.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        warn!(command = %invocation, %status, "toolchain command failed");
        Err(DispatchError::Failed {
            command: invocation.to_string(),
            status,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation {
            env: vec![("DEVKIT_PROBE".to_owned(), "forwarded".to_owned())],
            program: "sh".to_owned(),
            args: vec!["-c".to_owned(), script.to_owned()],
        }
    }

    #[tokio::test]
    async fn successful_command_returns_ok() {
        execute(&sh(r#"test "$DEVKIT_PROBE" = forwarded"#))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failing_command_keeps_its_exit_code() {
        let err = execute(&sh("exit 3")).await.unwrap_err();
        assert!(matches!(err, DispatchError::Failed { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let invocation = Invocation {
            env: Vec::new(),
            program: "devkit-definitely-not-installed".to_owned(),
            args: Vec::new(),
        };

        let err = execute(&invocation).await.unwrap_err();
        assert!(matches!(err, DispatchError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
