use crate::navigation::{NavigationMode, Route};
use crate::onboarding::OnboardingPrompt;

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Ask the platform for location permission.
    RequestLocation,

    /// Ask the platform for notification permission.
    RequestNotifications,

    /// Move the router.
    Navigate { route: Route, mode: NavigationMode },

    /// Surface a prompt; the user's answer comes back as an event.
    ShowPrompt(OnboardingPrompt),
}
