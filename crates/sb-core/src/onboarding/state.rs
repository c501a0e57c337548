use serde::Serialize;

use crate::permission::PermissionKind;

/// Position of the onboarding cursor.
///
/// There is no "completed" value: finishing onboarding is a transition out
/// of the machine, see [`super::OnboardingNext::Exited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Location permission; cannot be skipped.
    AwaitingLocation,
    /// Notification permission; skippable.
    AwaitingNotifications,
}

impl OnboardingStep {
    /// Permission the step is waiting on.
    pub fn permission(&self) -> PermissionKind {
        match self {
            Self::AwaitingLocation => PermissionKind::Location,
            Self::AwaitingNotifications => PermissionKind::Notifications,
        }
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingLocation => write!(f, "awaiting_location"),
            Self::AwaitingNotifications => write!(f, "awaiting_notifications"),
        }
    }
}

/// Whether a permission request for the current step is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPhase {
    Idle,
    Requesting,
}

/// In-memory onboarding session. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub request: RequestPhase,
}

impl OnboardingState {
    /// A fresh session at the location step.
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::AwaitingLocation,
            request: RequestPhase::Idle,
        }
    }

    pub fn is_requesting(&self) -> bool {
        self.request == RequestPhase::Requesting
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}
