//! First-run use cases
//!
//! [process start]
//!        ↓
//! LaunchGate          → reads `hasLaunched`, opens an onboarding session
//!        ↓
//! SplashHandoff       → leaves the splash screen once the gate has decided
//!        ↓
//! OnboardingOrchestrator → location, then notifications
//!        ↓
//! FinishFeatureTour   → main shell

pub mod feature_tour;
pub mod launch_gate;
pub mod onboarding;
pub mod splash_handoff;

pub use feature_tour::FinishFeatureTour;
pub use launch_gate::{LaunchFlagRepository, LaunchGate};
pub use onboarding::{DispatchOutcome, OnboardingOrchestrator, OnboardingOrchestratorDeps};
pub use splash_handoff::SplashHandoff;
