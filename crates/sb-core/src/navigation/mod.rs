//! Navigation vocabulary shared by the launch gate, the onboarding flow and
//! the host router.

use serde::{Deserialize, Serialize};

/// Tabs of the main application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainShellTab {
    Map,
    Sos,
    News,
    Settings,
}

impl MainShellTab {
    pub const ALL: [MainShellTab; 4] = [Self::Map, Self::Sos, Self::News, Self::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Sos => "sos",
            Self::News => "news",
            Self::Settings => "settings",
        }
    }
}

/// Screens the orchestrator can route to.
///
/// Destinations are opaque to the router; `path()` is what the host resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "tab", rename_all = "snake_case")]
pub enum Route {
    /// Cold-start splash screen.
    Splash,
    /// Onboarding entry screen (location step).
    OnboardingLocation,
    /// Second onboarding screen (notifications step).
    OnboardingNotifications,
    /// Feature tour shown after the notification step.
    FeatureTour,
    /// Main tabbed application.
    MainShell(MainShellTab),
}

impl Route {
    /// The route the main shell opens on.
    pub const fn main_shell() -> Self {
        Route::MainShell(MainShellTab::Map)
    }

    pub fn is_main_shell(&self) -> bool {
        matches!(self, Route::MainShell(_))
    }

    pub fn is_onboarding(&self) -> bool {
        matches!(self, Route::OnboardingLocation | Route::OnboardingNotifications)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Splash => "/splash".to_string(),
            Route::OnboardingLocation => "/onboarding".to_string(),
            Route::OnboardingNotifications => "/onboarding/notifications".to_string(),
            Route::FeatureTour => "/features".to_string(),
            Route::MainShell(tab) => format!("/(tabs)/{}", tab.as_str()),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// How a navigation affects history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Back-navigable.
    Push,
    /// Replaces the current entry; no way back to the prior screen.
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tab_routes_are_main_shell() {
        for tab in MainShellTab::ALL {
            assert!(Route::MainShell(tab).is_main_shell());
        }
        assert!(!Route::Splash.is_main_shell());
        assert!(!Route::OnboardingLocation.is_main_shell());
        assert!(!Route::OnboardingNotifications.is_main_shell());
        assert!(!Route::FeatureTour.is_main_shell());
    }

    #[test]
    fn paths_are_distinct() {
        let mut routes = vec![
            Route::Splash,
            Route::OnboardingLocation,
            Route::OnboardingNotifications,
            Route::FeatureTour,
        ];
        routes.extend(MainShellTab::ALL.into_iter().map(Route::MainShell));

        let mut paths: Vec<String> = routes.iter().map(Route::path).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn main_shell_opens_on_map() {
        assert_eq!(Route::main_shell().path(), "/(tabs)/map");
    }
}
