//! Interactive first-run session.
//!
//! Drives the launch gate, the splash hand-off, the onboarding
//! orchestrator and the feature tour against the console adapters. End of
//! input at any question abandons the session the way closing the app would.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, warn, Instrument};

use sb_app::usecases::{
    DispatchOutcome, FinishFeatureTour, LaunchGate, OnboardingOrchestrator,
    OnboardingOrchestratorDeps, SplashHandoff,
};
use sb_app::app_paths::AppPaths;
use sb_core::config::AppConfig;
use sb_core::launch::{GateStatus, LaunchDecision};
use sb_core::navigation::Route;
use sb_core::onboarding::PromptChoice;
use sb_platform::ConsoleIo;

use super::wiring::{wire_dependencies, ShellDeps};
use crate::adapters::ConsoleNavigator;
use crate::screens::{self, StepAction};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub decision: LaunchDecision,
    pub final_route: Route,
    /// `false` when input ran out before the main shell was reached.
    pub reached_main_shell: bool,
}

/// Run one session on stdin/stdout.
pub async fn run_app(config: AppConfig, paths: AppPaths) -> Result<()> {
    let deps = wire_dependencies(&config, paths, ConsoleIo::stdio());
    info!(
        flag_store = %deps.paths.flag_store_path.display(),
        "starting SafeBuddy shell"
    );

    let report = run_session(deps).await?;
    if report.reached_main_shell {
        info!(route = %report.final_route, "session reached the main shell");
    } else {
        warn!(route = %report.final_route, "session ended before the main shell");
    }
    Ok(())
}

pub async fn run_session(deps: ShellDeps) -> Result<SessionReport> {
    let span = info_span!("shell.session");
    drive_session(deps).instrument(span).await
}

async fn drive_session(deps: ShellDeps) -> Result<SessionReport> {
    let ShellDeps {
        store,
        permissions,
        navigation,
        prompts,
        console,
        splash_handoff_ms,
        ..
    } = deps;

    console.say(screens::SPLASH_TEXT).await?;

    let gate = LaunchGate::new(store, navigation.clone());
    if gate.status() == GateStatus::Checking {
        console.say("...").await?;
    }
    let decision = gate.run(navigation.current().await).await;

    if let Err(err) = SplashHandoff::from_millis(navigation.clone(), splash_handoff_ms)
        .execute(&decision)
        .await
    {
        warn!(error = %err, "splash hand-off navigation failed");
    }

    let onboarding = match &decision {
        LaunchDecision::FirstLaunch(state) => Some(state.clone()),
        LaunchDecision::ReturningUser => None,
    };

    if let Some(state) = onboarding {
        let orchestrator = OnboardingOrchestrator::from_deps(
            state,
            OnboardingOrchestratorDeps {
                permissions,
                navigation: navigation.clone(),
                prompts,
            },
        );

        if let Some(Route::FeatureTour) = drive_onboarding(&orchestrator, &console).await? {
            run_feature_tour(&navigation, &console).await?;
        }
    }

    let final_route = navigation.current().await;
    Ok(SessionReport {
        decision,
        final_route,
        reached_main_shell: final_route.is_main_shell(),
    })
}

/// Feed console answers into the orchestrator until it exits.
///
/// Returns the exit route, or `None` when input ran out first.
async fn drive_onboarding(
    orchestrator: &OnboardingOrchestrator,
    console: &ConsoleIo,
) -> Result<Option<Route>> {
    let mut shown = None;

    loop {
        if let Some(prompt) = orchestrator.pending_prompt().await {
            let choices = prompt.choices();
            let labels: Vec<&str> = choices.iter().map(|c| c.label()).collect();
            let Some(answer) = console.ask(screens::menu(&labels)).await? else {
                return Ok(None);
            };
            let Some(choice) = screens::pick_choice(choices, &answer) else {
                console.say("Please pick one of the options.").await?;
                continue;
            };

            let outcome = match choice {
                PromptChoice::Acknowledge => orchestrator.acknowledge_prompt().await,
                PromptChoice::Skip => orchestrator.choose_skip().await,
                PromptChoice::TryAgain => orchestrator.choose_try_again().await,
            };
            if let DispatchOutcome::Exited(route) = outcome {
                return Ok(Some(route));
            }
            continue;
        }

        let Some(step) = orchestrator.current_step().await else {
            return Ok(None);
        };
        if shown != Some(step) {
            console.say(screens::step_body(step)).await?;
            shown = Some(step);
        }

        let actions = screens::step_actions(step);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let Some(answer) = console.ask(screens::menu(&labels)).await? else {
            return Ok(None);
        };
        let Some(action) = screens::pick_action(step, &answer) else {
            console.say("Please pick one of the options.").await?;
            continue;
        };

        let outcome = match action {
            StepAction::GrantLocation => orchestrator.grant_location().await,
            StepAction::GrantNotifications => orchestrator.grant_notifications().await,
            StepAction::SkipForNow => orchestrator.skip_for_now().await,
        };
        if let DispatchOutcome::Exited(route) = outcome {
            return Ok(Some(route));
        }
    }
}

async fn run_feature_tour(navigation: &Arc<ConsoleNavigator>, console: &ConsoleIo) -> Result<()> {
    let tour = FinishFeatureTour::new(navigation.clone());
    console
        .say(screens::render_highlights(tour.highlights()))
        .await?;

    loop {
        let Some(answer) = console.ask(screens::menu(&[screens::TOUR_START])).await? else {
            return Ok(());
        };
        if answer == "1" || answer.eq_ignore_ascii_case(screens::TOUR_START) {
            if let Err(err) = tour.execute().await {
                warn!(error = %err, "leaving the feature tour failed");
            }
            return Ok(());
        }
    }
}
