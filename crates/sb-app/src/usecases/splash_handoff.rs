//! Use case for leaving the splash screen

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use sb_core::launch::LaunchDecision;
use sb_core::navigation::{NavigationMode, Route};
use sb_core::ports::NavigationPort;

pub const DEFAULT_SPLASH_HANDOFF: Duration = Duration::from_millis(1500);

/// Moves off the splash screen after a short delay.
///
/// The target comes from the launch gate's decision, so the splash never
/// navigates before the launch flag has been read.
pub struct SplashHandoff {
    navigation: Arc<dyn NavigationPort>,
    delay: Duration,
}

impl SplashHandoff {
    pub fn new(navigation: Arc<dyn NavigationPort>, delay: Duration) -> Self {
        Self { navigation, delay }
    }

    /// Hand-off with the configured delay in milliseconds; zero means the default.
    pub fn from_millis(navigation: Arc<dyn NavigationPort>, handoff_ms: u64) -> Self {
        let delay = if handoff_ms == 0 {
            DEFAULT_SPLASH_HANDOFF
        } else {
            Duration::from_millis(handoff_ms)
        };
        Self::new(navigation, delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn execute(&self, decision: &LaunchDecision) -> Result<Route> {
        let span = info_span!(
            "usecase.splash_handoff.execute",
            first_launch = decision.is_first_launch()
        );

        async {
            tokio::time::sleep(self.delay).await;

            let target = match decision {
                LaunchDecision::FirstLaunch(_) => Route::OnboardingLocation,
                LaunchDecision::ReturningUser => Route::main_shell(),
            };
            self.navigation
                .navigate(target, NavigationMode::Replace)
                .await?;

            info!(route = %target, "left splash screen");
            Ok(target)
        }
        .instrument(span)
        .await
    }
}
