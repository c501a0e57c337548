//! Permission gateway that asks on the console.
//!
//! Stands in for the OS permission dialogs when the shell runs headless.

use async_trait::async_trait;
use tracing::debug;

use sb_core::permission::{PermissionKind, PermissionStatus};
use sb_core::ports::{PermissionError, PermissionGatewayPort};

use crate::console::ConsoleIo;

pub struct ConsolePermissionGateway {
    console: ConsoleIo,
}

impl ConsolePermissionGateway {
    pub fn new(console: ConsoleIo) -> Self {
        Self { console }
    }

    async fn ask(&self, kind: PermissionKind) -> Result<PermissionStatus, PermissionError> {
        let answer = self
            .console
            .ask(format!("[system] Allow SafeBuddy to use {kind}? [y/n]"))
            .await
            .map_err(|e| PermissionError::RequestFailure(e.to_string()))?
            .ok_or_else(|| PermissionError::RequestFailure("console input closed".into()))?;

        let status = parse_answer(&answer);
        debug!(permission = %kind, answer = %answer, status = ?status, "console permission answer");
        Ok(status)
    }
}

/// Anything that is not a clear yes or no leaves the permission undetermined.
fn parse_answer(answer: &str) -> PermissionStatus {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" | "allow" => PermissionStatus::Granted,
        "n" | "no" | "deny" | "don't allow" => PermissionStatus::Denied,
        _ => PermissionStatus::Undetermined,
    }
}

#[async_trait]
impl PermissionGatewayPort for ConsolePermissionGateway {
    async fn request_location(&self) -> Result<PermissionStatus, PermissionError> {
        self.ask(PermissionKind::Location).await
    }

    async fn request_notifications(&self) -> Result<PermissionStatus, PermissionError> {
        self.ask(PermissionKind::Notifications).await
    }
}
