use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use sb_app::app_paths::AppPaths;
use sb_app::usecases::{LaunchGate, OnboardingOrchestrator, SplashHandoff};
use sb_core::app_dirs::AppDirs;
use sb_core::launch::{LaunchDecision, LaunchFlag};
use sb_core::navigation::{MainShellTab, NavigationMode, Route};
use sb_core::onboarding::{OnboardingPrompt, OnboardingStep};
use sb_core::permission::PermissionStatus;
use sb_core::ports::{
    FlagStoreError, KeyValueStorePort, NavigationPort, PermissionError, PermissionGatewayPort,
    PromptPort,
};
use sb_infra::kv::{FileKeyValueStore, InMemoryKeyValueStore};

#[derive(Default)]
struct RecordingNavigator {
    calls: Mutex<Vec<(Route, NavigationMode)>>,
}

impl RecordingNavigator {
    fn calls(&self) -> Vec<(Route, NavigationMode)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NavigationPort for RecordingNavigator {
    async fn navigate(&self, route: Route, mode: NavigationMode) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push((route, mode));
        Ok(())
    }
}

/// Counts writes on top of a real store.
struct CountingStore<S> {
    inner: S,
    writes: Mutex<Vec<(String, String)>>,
}

impl<S> CountingStore<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            writes: Mutex::new(Vec::new()),
        }
    }

    fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl<S: KeyValueStorePort> KeyValueStorePort for CountingStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        self.inner.set(key, value).await
    }
}

struct GrantingGateway;

#[async_trait]
impl PermissionGatewayPort for GrantingGateway {
    async fn request_location(&self) -> Result<PermissionStatus, PermissionError> {
        Ok(PermissionStatus::Granted)
    }

    async fn request_notifications(&self) -> Result<PermissionStatus, PermissionError> {
        Ok(PermissionStatus::Granted)
    }
}

struct SilentPrompts;

#[async_trait]
impl PromptPort for SilentPrompts {
    async fn present(&self, _prompt: OnboardingPrompt) {}
}

#[tokio::test]
async fn fresh_install_writes_flag_once_and_starts_at_location() {
    let store = Arc::new(CountingStore::new(InMemoryKeyValueStore::new()));
    let navigator = Arc::new(RecordingNavigator::default());
    let gate = LaunchGate::new(store.clone(), navigator.clone());

    let decision = gate.run(Route::main_shell()).await;

    let LaunchDecision::FirstLaunch(state) = decision else {
        panic!("fresh install must start onboarding");
    };
    assert_eq!(state.step, OnboardingStep::AwaitingLocation);
    assert_eq!(
        store.writes(),
        vec![(LaunchFlag::KEY.to_string(), LaunchFlag::VALUE.to_string())]
    );
    assert_eq!(
        navigator.calls(),
        vec![(Route::OnboardingLocation, NavigationMode::Replace)]
    );
}

#[tokio::test]
async fn launched_flag_skips_onboarding_without_writing() {
    let store = Arc::new(CountingStore::new(InMemoryKeyValueStore::with_entry(
        LaunchFlag::KEY,
        LaunchFlag::VALUE,
    )));
    let navigator = Arc::new(RecordingNavigator::default());
    let gate = LaunchGate::new(store.clone(), navigator.clone());

    let decision = gate.run(Route::MainShell(MainShellTab::Settings)).await;

    assert_eq!(decision, LaunchDecision::ReturningUser);
    assert!(store.writes().is_empty());
    assert!(navigator.calls().is_empty());
}

#[tokio::test]
async fn any_stored_value_counts_as_launched() {
    let store = Arc::new(InMemoryKeyValueStore::with_entry(LaunchFlag::KEY, "1"));
    let gate = LaunchGate::new(store, Arc::new(RecordingNavigator::default()));

    assert_eq!(gate.run(Route::Splash).await, LaunchDecision::ReturningUser);
}

#[tokio::test]
async fn restart_after_abandoned_onboarding_does_not_redirect() {
    let temp_dir = TempDir::new().unwrap();

    // First process: gate opens onboarding, user grants location, then quits.
    {
        let store = Arc::new(FileKeyValueStore::with_defaults(
            temp_dir.path().to_path_buf(),
        ));
        let navigator = Arc::new(RecordingNavigator::default());
        let gate = LaunchGate::new(store, navigator.clone());

        let LaunchDecision::FirstLaunch(state) = gate.run(Route::main_shell()).await else {
            panic!("fresh data dir must start onboarding");
        };
        let orchestrator = OnboardingOrchestrator::new(
            state,
            Arc::new(GrantingGateway),
            navigator.clone(),
            Arc::new(SilentPrompts),
        );
        orchestrator.grant_location().await;
        assert!(orchestrator.is_active().await);
    }

    // Second process over the same data dir.
    let store = Arc::new(CountingStore::new(FileKeyValueStore::with_defaults(
        temp_dir.path().to_path_buf(),
    )));
    let navigator = Arc::new(RecordingNavigator::default());
    let gate = LaunchGate::new(store.clone(), navigator.clone());

    let decision = gate.run(Route::main_shell()).await;

    assert_eq!(decision, LaunchDecision::ReturningUser);
    assert!(navigator.calls().is_empty());
    assert!(store.writes().is_empty());
}

#[tokio::test]
async fn shell_paths_and_default_store_share_one_flag_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    let paths = AppPaths::from_app_dirs(&AppDirs::at(root.clone()));
    let default_store = FileKeyValueStore::with_defaults(root);

    assert_eq!(default_store.path(), &paths.flag_store_path);

    let gate = LaunchGate::new(
        Arc::new(FileKeyValueStore::new(paths.flag_store_path.clone())),
        Arc::new(RecordingNavigator::default()),
    );
    assert!(matches!(
        gate.run(Route::main_shell()).await,
        LaunchDecision::FirstLaunch(_)
    ));
    assert_eq!(
        default_store.get(LaunchFlag::KEY).await.unwrap().as_deref(),
        Some(LaunchFlag::VALUE)
    );
}

#[tokio::test(start_paused = true)]
async fn splash_waits_for_gate_decision() {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let navigator = Arc::new(RecordingNavigator::default());
    let gate = LaunchGate::new(store, navigator.clone());
    let splash = SplashHandoff::from_millis(navigator.clone(), 0);

    let decision = gate.run(Route::Splash).await;
    splash.execute(&decision).await.unwrap();

    assert_eq!(
        navigator.calls(),
        vec![(Route::OnboardingLocation, NavigationMode::Replace)]
    );
}
