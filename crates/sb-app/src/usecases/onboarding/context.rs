use tokio::sync::Mutex;

use sb_core::navigation::Route;
use sb_core::onboarding::{OnboardingPrompt, OnboardingState};

/// Mutable part of an onboarding session.
#[derive(Debug)]
pub(crate) struct OnboardingSession {
    /// `None` once the flow has exited.
    pub(crate) state: Option<OnboardingState>,
    /// Route the flow exited to.
    pub(crate) exit: Option<Route>,
    /// Prompt waiting for an answer.
    pub(crate) pending_prompt: Option<OnboardingPrompt>,
}

/// Shared onboarding context.
///
/// The lock only guards bookkeeping. It is never held across a permission
/// request, so a second tap while a request is in flight can observe
/// `RequestPhase::Requesting` and be dropped.
pub(crate) struct OnboardingContext {
    session: Mutex<OnboardingSession>,
}

impl OnboardingContext {
    pub(crate) fn new(initial_state: OnboardingState) -> Self {
        Self {
            session: Mutex::new(OnboardingSession {
                state: Some(initial_state),
                exit: None,
                pending_prompt: None,
            }),
        }
    }

    pub(crate) async fn lock(&self) -> tokio::sync::MutexGuard<'_, OnboardingSession> {
        self.session.lock().await
    }
}
