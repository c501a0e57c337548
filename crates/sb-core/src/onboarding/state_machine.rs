//! Onboarding state machine.
//!
//! Defines a pure state transition function for the first-run permission flow.
//! Location is a hard requirement with no skip. Notifications are optional:
//! "skip for now" goes straight to the main shell, while skipping after a
//! denial still routes through the feature tour.

use tracing::warn;

use crate::navigation::{NavigationMode, Route};
use crate::onboarding::{OnboardingAction, OnboardingEvent, OnboardingPrompt, OnboardingStep};
use crate::permission::PermissionOutcome;

/// Where a transition leaves the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingNext {
    /// Still onboarding, at this step.
    Step(OnboardingStep),
    /// Onboarding is over; the last action navigates out.
    Exited,
}

/// Pure onboarding state machine: no side effects.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        step: OnboardingStep,
        event: OnboardingEvent,
    ) -> (OnboardingNext, Vec<OnboardingAction>) {
        use OnboardingStep::*;

        match (step, event) {
            // ===== Location =====
            (AwaitingLocation, OnboardingEvent::GrantLocation) => (
                OnboardingNext::Step(AwaitingLocation),
                vec![OnboardingAction::RequestLocation],
            ),
            (AwaitingLocation, OnboardingEvent::LocationResolved(PermissionOutcome::Granted)) => (
                OnboardingNext::Step(AwaitingNotifications),
                vec![OnboardingAction::Navigate {
                    route: Route::OnboardingNotifications,
                    mode: NavigationMode::Push,
                }],
            ),
            (AwaitingLocation, OnboardingEvent::LocationResolved(PermissionOutcome::Denied)) => (
                OnboardingNext::Step(AwaitingLocation),
                vec![OnboardingAction::ShowPrompt(
                    OnboardingPrompt::LocationRequired,
                )],
            ),

            // ===== Notifications =====
            (AwaitingNotifications, OnboardingEvent::GrantNotifications)
            | (AwaitingNotifications, OnboardingEvent::DenialTryAgain) => (
                OnboardingNext::Step(AwaitingNotifications),
                vec![OnboardingAction::RequestNotifications],
            ),
            (
                AwaitingNotifications,
                OnboardingEvent::NotificationsResolved(PermissionOutcome::Granted),
            )
            | (AwaitingNotifications, OnboardingEvent::DenialSkip) => (
                OnboardingNext::Exited,
                vec![OnboardingAction::Navigate {
                    route: Route::FeatureTour,
                    mode: NavigationMode::Replace,
                }],
            ),
            (
                AwaitingNotifications,
                OnboardingEvent::NotificationsResolved(PermissionOutcome::Denied),
            ) => (
                OnboardingNext::Step(AwaitingNotifications),
                vec![OnboardingAction::ShowPrompt(
                    OnboardingPrompt::NotificationsDenied,
                )],
            ),
            (AwaitingNotifications, OnboardingEvent::SkipForNow) => (
                OnboardingNext::Exited,
                vec![OnboardingAction::Navigate {
                    route: Route::main_shell(),
                    mode: NavigationMode::Replace,
                }],
            ),

            // ===== Invalid =====
            (step, event) => {
                warn!(?step, ?event, "invalid onboarding transition");
                (OnboardingNext::Step(step), vec![])
            }
        }
    }
}
