//! # sb-core
//!
//! Core domain models and first-run onboarding logic for SafeBuddy.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod config;
pub mod feature_tour;
pub mod launch;
pub mod navigation;
pub mod onboarding;
pub mod permission;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use launch::{GateStatus, LaunchDecision, LaunchFlag};
pub use navigation::{MainShellTab, NavigationMode, Route};
pub use onboarding::{OnboardingState, OnboardingStep, RequestPhase};
pub use permission::{PermissionKind, PermissionOutcome, PermissionStatus};
