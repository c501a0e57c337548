//! Onboarding domain module.
//!
//! This module defines the first-run permission flow: a two-step cursor and a
//! pure transition table. Side effects are returned as actions and executed
//! by the application layer.

pub mod action;
pub mod event;
pub mod prompt;
pub mod state;
pub mod state_machine;

pub use action::OnboardingAction;
pub use event::OnboardingEvent;
pub use prompt::{OnboardingPrompt, PromptChoice};
pub use state::{OnboardingState, OnboardingStep, RequestPhase};
pub use state_machine::{OnboardingNext, OnboardingStateMachine};
