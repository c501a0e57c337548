//! Onboarding orchestrator.
//!
//! This module coordinates the onboarding state machine and its side effects:
//! permission requests, prompts and navigation.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use sb_core::navigation::{NavigationMode, Route};
use sb_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingNext, OnboardingPrompt, OnboardingState,
    OnboardingStateMachine, OnboardingStep, RequestPhase,
};
use sb_core::permission::{PermissionKind, PermissionOutcome};
use sb_core::ports::{NavigationPort, PermissionGatewayPort, PromptPort};

use crate::usecases::onboarding::context::OnboardingContext;

/// Result of feeding one input into the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Still onboarding, now at this step.
    Step(OnboardingStep),
    /// Onboarding finished and navigated to this route.
    Exited(Route),
    /// The input did not apply: wrong step, request already in flight,
    /// no matching prompt, or the flow already exited.
    Ignored,
}

/// Helper for constructing the orchestrator with explicit dependency fields.
pub struct OnboardingOrchestratorDeps {
    pub permissions: Arc<dyn PermissionGatewayPort>,
    pub navigation: Arc<dyn NavigationPort>,
    pub prompts: Arc<dyn PromptPort>,
}

/// Orchestrator that drives one onboarding session.
///
/// It never touches the launch flag: that belongs to the launch gate.
pub struct OnboardingOrchestrator {
    context: OnboardingContext,
    permissions: Arc<dyn PermissionGatewayPort>,
    navigation: Arc<dyn NavigationPort>,
    prompts: Arc<dyn PromptPort>,
}

impl OnboardingOrchestrator {
    pub fn new(
        initial_state: OnboardingState,
        permissions: Arc<dyn PermissionGatewayPort>,
        navigation: Arc<dyn NavigationPort>,
        prompts: Arc<dyn PromptPort>,
    ) -> Self {
        Self {
            context: OnboardingContext::new(initial_state),
            permissions,
            navigation,
            prompts,
        }
    }

    /// Construct an orchestrator from dependency bundle.
    pub fn from_deps(initial_state: OnboardingState, deps: OnboardingOrchestratorDeps) -> Self {
        let OnboardingOrchestratorDeps {
            permissions,
            navigation,
            prompts,
        } = deps;

        Self::new(initial_state, permissions, navigation, prompts)
    }

    /// "Agree to GPS info".
    pub async fn grant_location(&self) -> DispatchOutcome {
        self.dispatch(OnboardingEvent::GrantLocation).await
    }

    /// "Agree to notifications".
    pub async fn grant_notifications(&self) -> DispatchOutcome {
        self.dispatch(OnboardingEvent::GrantNotifications).await
    }

    /// "Skip for now" on the notification step. Bypasses the feature tour.
    pub async fn skip_for_now(&self) -> DispatchOutcome {
        self.dispatch(OnboardingEvent::SkipForNow).await
    }

    /// "Skip" on the notification denial prompt.
    pub async fn choose_skip(&self) -> DispatchOutcome {
        if !self.take_prompt(OnboardingPrompt::NotificationsDenied).await {
            debug!("skip chosen without an open denial prompt, ignoring");
            return DispatchOutcome::Ignored;
        }
        self.dispatch(OnboardingEvent::DenialSkip).await
    }

    /// "Try Again" on the notification denial prompt.
    pub async fn choose_try_again(&self) -> DispatchOutcome {
        if !self.take_prompt(OnboardingPrompt::NotificationsDenied).await {
            debug!("try again chosen without an open denial prompt, ignoring");
            return DispatchOutcome::Ignored;
        }
        self.dispatch(OnboardingEvent::DenialTryAgain).await
    }

    /// "OK" on the location requirement prompt. Changes nothing but the
    /// prompt bookkeeping; the user stays on the location step.
    pub async fn acknowledge_prompt(&self) -> DispatchOutcome {
        if !self.take_prompt(OnboardingPrompt::LocationRequired).await {
            return DispatchOutcome::Ignored;
        }
        self.snapshot().await
    }

    pub async fn current_step(&self) -> Option<OnboardingStep> {
        self.context.lock().await.state.as_ref().map(|s| s.step)
    }

    pub async fn state(&self) -> Option<OnboardingState> {
        self.context.lock().await.state.clone()
    }

    pub async fn is_active(&self) -> bool {
        self.context.lock().await.state.is_some()
    }

    pub async fn pending_prompt(&self) -> Option<OnboardingPrompt> {
        self.context.lock().await.pending_prompt
    }

    async fn dispatch(&self, event: OnboardingEvent) -> DispatchOutcome {
        let span = info_span!("usecase.onboarding.dispatch", event = ?event);
        async {
            let mut pending_events = vec![event];
            let mut initial = true;

            while let Some(event) = pending_events.pop() {
                let actions = match self.apply(event).await {
                    Some(actions) => actions,
                    None if initial => return DispatchOutcome::Ignored,
                    None => break,
                };
                initial = false;

                for action in actions {
                    debug!(?action, "onboarding executing action");
                    match action {
                        OnboardingAction::RequestLocation => {
                            let outcome = self.request_permission(PermissionKind::Location).await;
                            pending_events.push(OnboardingEvent::LocationResolved(outcome));
                        }
                        OnboardingAction::RequestNotifications => {
                            let outcome =
                                self.request_permission(PermissionKind::Notifications).await;
                            pending_events.push(OnboardingEvent::NotificationsResolved(outcome));
                        }
                        OnboardingAction::Navigate { route, mode } => {
                            self.navigate(route, mode).await;
                        }
                        OnboardingAction::ShowPrompt(prompt) => {
                            self.show_prompt(prompt).await;
                        }
                    }
                }
            }

            self.snapshot().await
        }
        .instrument(span)
        .await
    }

    /// Run one transition under the lock and record its bookkeeping.
    ///
    /// Returns `None` when the event does not apply.
    async fn apply(&self, event: OnboardingEvent) -> Option<Vec<OnboardingAction>> {
        let mut guard = self.context.lock().await;
        let session = &mut *guard;

        let Some(state) = session.state.as_mut() else {
            debug!(?event, "onboarding already exited, ignoring event");
            return None;
        };

        if event.starts_request() && state.is_requesting() {
            debug!(?event, step = %state.step, "permission request already in flight, ignoring");
            return None;
        }

        if matches!(
            event,
            OnboardingEvent::LocationResolved(_) | OnboardingEvent::NotificationsResolved(_)
        ) {
            state.request = RequestPhase::Idle;
        }

        let from = state.step;
        let (next, actions) = OnboardingStateMachine::transition(from, event);
        if actions.is_empty() {
            return None;
        }

        let requests = actions.iter().any(|action| {
            matches!(
                action,
                OnboardingAction::RequestLocation | OnboardingAction::RequestNotifications
            )
        });
        if requests {
            state.request = RequestPhase::Requesting;
            session.pending_prompt = None;
        }

        match next {
            OnboardingNext::Step(step) => {
                if step != from {
                    info!(from = %from, to = %step, "onboarding step advanced");
                }
                state.step = step;
                if let Some(prompt) = actions.iter().find_map(|action| match action {
                    OnboardingAction::ShowPrompt(prompt) => Some(*prompt),
                    _ => None,
                }) {
                    session.pending_prompt = Some(prompt);
                }
            }
            OnboardingNext::Exited => {
                let exit = actions.iter().find_map(|action| match action {
                    OnboardingAction::Navigate { route, .. } => Some(*route),
                    _ => None,
                });
                info!(from = %from, exit = ?exit, "onboarding exited");
                session.state = None;
                session.exit = exit;
                session.pending_prompt = None;
            }
        }

        Some(actions)
    }

    async fn request_permission(&self, kind: PermissionKind) -> PermissionOutcome {
        let result = match kind {
            PermissionKind::Location => self.permissions.request_location().await,
            PermissionKind::Notifications => self.permissions.request_notifications().await,
        };
        if let Err(err) = &result {
            warn!(permission = %kind, error = %err, "permission request failed, treating as denied");
        }

        let outcome = PermissionOutcome::normalize(&result);
        info!(permission = %kind, outcome = ?outcome, "permission request resolved");
        outcome
    }

    async fn navigate(&self, route: Route, mode: NavigationMode) {
        if let Err(err) = self.navigation.navigate(route, mode).await {
            error!(route = %route, mode = ?mode, error = %err, "onboarding navigation failed");
        }
    }

    /// Presentation only. `apply` already recorded the prompt.
    async fn show_prompt(&self, prompt: OnboardingPrompt) {
        self.prompts.present(prompt).await;
    }

    async fn take_prompt(&self, expected: OnboardingPrompt) -> bool {
        let mut session = self.context.lock().await;
        if session.pending_prompt == Some(expected) {
            session.pending_prompt = None;
            true
        } else {
            false
        }
    }

    async fn snapshot(&self) -> DispatchOutcome {
        let session = self.context.lock().await;
        match (&session.state, session.exit) {
            (Some(state), _) => DispatchOutcome::Step(state.step),
            (None, Some(route)) => DispatchOutcome::Exited(route),
            (None, None) => DispatchOutcome::Ignored,
        }
    }
}
