//! SafeBuddy Application Orchestration Layer
//!
//! This crate contains the first-run use cases: the launch gate, the
//! onboarding orchestrator and the screens they hand over to.

pub mod app_paths;
pub mod usecases;

pub use usecases::{
    DispatchOutcome, FinishFeatureTour, LaunchFlagRepository, LaunchGate, OnboardingOrchestrator,
    OnboardingOrchestratorDeps, SplashHandoff,
};
