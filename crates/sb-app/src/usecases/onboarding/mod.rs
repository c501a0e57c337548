//! Onboarding use cases.
//!
//! This module exposes the onboarding orchestrator.

mod context;
pub mod orchestrator;

pub use orchestrator::{DispatchOutcome, OnboardingOrchestrator, OnboardingOrchestratorDeps};
