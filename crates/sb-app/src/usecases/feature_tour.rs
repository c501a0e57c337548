//! Use case for leaving the feature tour

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use sb_core::feature_tour::{FeatureHighlight, FEATURE_TOUR};
use sb_core::navigation::{NavigationMode, Route};
use sb_core::ports::NavigationPort;

/// The tour's "Start" action.
///
/// ## Behavior
/// - Replaces the tour with the main shell on its map tab, so back
///   navigation cannot return into onboarding.
pub struct FinishFeatureTour {
    navigation: Arc<dyn NavigationPort>,
}

impl FinishFeatureTour {
    pub fn new(navigation: Arc<dyn NavigationPort>) -> Self {
        Self { navigation }
    }

    /// Slides shown before the "Start" button.
    pub fn highlights(&self) -> &'static [FeatureHighlight] {
        &FEATURE_TOUR
    }

    pub async fn execute(&self) -> Result<Route> {
        let span = info_span!("usecase.finish_feature_tour.execute");

        async {
            let target = Route::main_shell();
            self.navigation
                .navigate(target, NavigationMode::Replace)
                .await?;

            info!(route = %target, "feature tour finished");
            Ok(target)
        }
        .instrument(span)
        .await
    }
}
