//! Launch gate.
//!
//! Runs once per process start and decides whether this launch opens an
//! onboarding session or goes straight to the main shell.

mod launch_flag;

pub use launch_flag::LaunchFlagRepository;

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info, info_span, warn, Instrument};

use sb_core::launch::{GateStatus, LaunchDecision};
use sb_core::navigation::{NavigationMode, Route};
use sb_core::onboarding::OnboardingState;
use sb_core::ports::{KeyValueStorePort, NavigationPort};

pub struct LaunchGate {
    launch_flag: LaunchFlagRepository,
    navigation: Arc<dyn NavigationPort>,
    decision: OnceCell<LaunchDecision>,
}

impl LaunchGate {
    pub fn new(store: Arc<dyn KeyValueStorePort>, navigation: Arc<dyn NavigationPort>) -> Self {
        Self {
            launch_flag: LaunchFlagRepository::new(store),
            navigation,
            decision: OnceCell::new(),
        }
    }

    /// What the host should render right now.
    pub fn status(&self) -> GateStatus {
        match self.decision.get() {
            Some(decision) => GateStatus::Resolved(decision.clone()),
            None => GateStatus::Checking,
        }
    }

    /// Run the gate. `current` is the route the host is showing.
    ///
    /// Only the first call does any work; later and concurrent calls get the
    /// same decision without touching the store or the router again.
    pub async fn run(&self, current: Route) -> LaunchDecision {
        self.decision
            .get_or_init(|| {
                let span = info_span!("usecase.launch_gate.run", current = %current);
                self.decide(current).instrument(span)
            })
            .await
            .clone()
    }

    async fn decide(&self, current: Route) -> LaunchDecision {
        let launched = match self.launch_flag.has_launched().await {
            Ok(launched) => launched,
            Err(err) => {
                // Fail open so a returning user is never trapped in onboarding.
                error!(error = %err, "launch flag read failed, treating install as launched");
                true
            }
        };

        if launched {
            info!("returning user, skipping onboarding");
            return LaunchDecision::ReturningUser;
        }

        if let Err(err) = self.launch_flag.mark_launched().await {
            warn!(
                error = %err,
                "failed to persist launch flag, onboarding will be shown again next launch"
            );
        }

        let state = OnboardingState::new();
        info!(step = %state.step, "first launch, starting onboarding");

        if current.is_main_shell() {
            if let Err(err) = self
                .navigation
                .navigate(Route::OnboardingLocation, NavigationMode::Replace)
                .await
            {
                error!(error = %err, "failed to redirect into onboarding");
            }
        }

        LaunchDecision::FirstLaunch(state)
    }
}
