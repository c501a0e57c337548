use serde::Serialize;

/// Answer offered by a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptChoice {
    Acknowledge,
    Skip,
    TryAgain,
}

impl PromptChoice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Acknowledge => "OK",
            Self::Skip => "Skip",
            Self::TryAgain => "Try Again",
        }
    }
}

/// Prompts the onboarding flow can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingPrompt {
    /// Location was denied. Blocking; the only answer is acknowledgement.
    LocationRequired,
    /// Notifications were denied. The user may skip or try again.
    NotificationsDenied,
}

impl OnboardingPrompt {
    pub fn title(&self) -> &'static str {
        "Permission Required"
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::LocationRequired => "GPS access is needed for safety features",
            Self::NotificationsDenied => "Notifications are needed for safety alerts",
        }
    }

    pub fn choices(&self) -> &'static [PromptChoice] {
        match self {
            Self::LocationRequired => &[PromptChoice::Acknowledge],
            Self::NotificationsDenied => &[PromptChoice::Skip, PromptChoice::TryAgain],
        }
    }
}
