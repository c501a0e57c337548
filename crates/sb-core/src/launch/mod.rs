//! First-launch detection vocabulary.
//!
//! The persisted flag answers "has the app been opened on this install
//! before", not "has onboarding been completed". An onboarding session that
//! is interrupted is abandoned; the next launch sees the flag and goes
//! straight to the main shell.

use crate::onboarding::OnboardingState;

/// Persisted launch marker.
pub struct LaunchFlag;

impl LaunchFlag {
    /// Key under which the marker is stored.
    pub const KEY: &'static str = "hasLaunched";

    /// Value written on first launch.
    pub const VALUE: &'static str = "true";

    /// Any stored value, whatever its content, means the app ran before.
    pub fn is_launched(stored: Option<&str>) -> bool {
        stored.is_some()
    }
}

/// What the launch gate decided for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchDecision {
    /// Flag was absent: a fresh onboarding session starts here.
    FirstLaunch(OnboardingState),
    /// Flag was present, or could not be read.
    ReturningUser,
}

impl LaunchDecision {
    pub fn is_first_launch(&self) -> bool {
        matches!(self, LaunchDecision::FirstLaunch(_))
    }
}

/// What the host should render while the gate is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStatus {
    /// The flag read has not resolved yet: render a neutral loading state.
    Checking,
    Resolved(LaunchDecision),
}
