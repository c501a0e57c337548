use crate::permission::PermissionOutcome;

/// Inputs of the onboarding transition table.
///
/// User taps and the answers to prompts arrive here just like permission
/// results do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingEvent {
    // Location step
    GrantLocation,
    LocationResolved(PermissionOutcome),

    // Notification step
    GrantNotifications,
    NotificationsResolved(PermissionOutcome),
    SkipForNow,

    // Answers to the notification denial prompt
    DenialSkip,
    DenialTryAgain,
}

impl OnboardingEvent {
    /// Whether the event starts a permission round trip.
    pub fn starts_request(&self) -> bool {
        matches!(
            self,
            Self::GrantLocation | Self::GrantNotifications | Self::DenialTryAgain
        )
    }
}
