//! Console renditions of the first-run screens.

use sb_core::feature_tour::FeatureHighlight;
use sb_core::onboarding::{OnboardingStep, PromptChoice};

/// Buttons on an onboarding step screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    GrantLocation,
    GrantNotifications,
    SkipForNow,
}

impl StepAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::GrantLocation => "Agree to GPS info",
            Self::GrantNotifications => "Agree to notifications",
            Self::SkipForNow => "Skip for now",
        }
    }
}

pub fn step_actions(step: OnboardingStep) -> &'static [StepAction] {
    match step {
        OnboardingStep::AwaitingLocation => &[StepAction::GrantLocation],
        OnboardingStep::AwaitingNotifications => {
            &[StepAction::GrantNotifications, StepAction::SkipForNow]
        }
    }
}

pub fn step_body(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::AwaitingLocation => {
            "What is SafeBuddy\n\
             SafeBuddy is a universal platform for sexual misconduct prevention.\n\
             Please allow full access to GPS info so that you can swiftly report \
             cases in case of emergency.\n\
             We, SafeBuddy, promise to not exploit this data."
        }
        OnboardingStep::AwaitingNotifications => {
            "(2) If you would like personalized notifications of your nearest danger \
             hot spots, please agree to the notifications."
        }
    }
}

pub const SPLASH_TEXT: &str = "SafeBuddy";

pub const TOUR_HEADER: &str =
    "Hi! Welcome to SafeBuddy\nHere is an explanation of the main features:";

pub const TOUR_START: &str = "START";

pub fn render_highlights(highlights: &[FeatureHighlight]) -> String {
    let mut out = String::from(TOUR_HEADER);
    for highlight in highlights {
        out.push_str(&format!("\n\n  {}\n  {}", highlight.title, highlight.description));
    }
    out
}

/// Numbered menu line, e.g. `[1] Skip  [2] Try Again >`.
pub fn menu(labels: &[&str]) -> String {
    let mut out = labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("[{}] {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(" >");
    out
}

/// Match an answer against a menu by number or by label, ignoring case.
pub fn pick<T: Copy>(options: &[T], label: impl Fn(&T) -> &'static str, answer: &str) -> Option<T> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }
    options
        .iter()
        .find(|option| label(option).eq_ignore_ascii_case(answer))
        .copied()
}

pub fn pick_choice(choices: &[PromptChoice], answer: &str) -> Option<PromptChoice> {
    pick(choices, |c| c.label(), answer)
}

pub fn pick_action(step: OnboardingStep, answer: &str) -> Option<StepAction> {
    pick(step_actions(step), |a| a.label(), answer)
}
