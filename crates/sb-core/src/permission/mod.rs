//! Permission outcomes as seen by the onboarding flow.

use serde::{Deserialize, Serialize};

/// Capability a permission request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    Location,
    Notifications,
}

impl std::fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Location => write!(f, "location"),
            Self::Notifications => write!(f, "notifications"),
        }
    }
}

/// Raw status reported by a platform permission API.
///
/// Some platforms report a third, undetermined status (the user dismissed the
/// dialog). The onboarding flow never sees it; see [`PermissionOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Two-valued result the onboarding transition table consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionOutcome {
    Granted,
    Denied,
}

impl PermissionOutcome {
    /// Collapse a gateway result: anything but an explicit grant is a denial.
    pub fn normalize<E>(result: &Result<PermissionStatus, E>) -> Self {
        match result {
            Ok(PermissionStatus::Granted) => PermissionOutcome::Granted,
            Ok(PermissionStatus::Denied) | Ok(PermissionStatus::Undetermined) | Err(_) => {
                PermissionOutcome::Denied
            }
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionOutcome::Granted)
    }
}

impl From<PermissionStatus> for PermissionOutcome {
    fn from(status: PermissionStatus) -> Self {
        Self::normalize::<()>(&Ok(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_grant_is_granted() {
        assert_eq!(
            PermissionOutcome::from(PermissionStatus::Granted),
            PermissionOutcome::Granted
        );
        assert_eq!(
            PermissionOutcome::from(PermissionStatus::Denied),
            PermissionOutcome::Denied
        );
        assert_eq!(
            PermissionOutcome::from(PermissionStatus::Undetermined),
            PermissionOutcome::Denied
        );
    }

    #[test]
    fn gateway_failure_normalizes_to_denied() {
        let result: Result<PermissionStatus, &str> = Err("bridge unavailable");
        assert_eq!(PermissionOutcome::normalize(&result), PermissionOutcome::Denied);
    }
}
