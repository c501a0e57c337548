use std::io;
use std::path::Path;

use tempfile::TempDir;

use sb_core::config::AppConfig;
use sb_core::launch::LaunchDecision;
use sb_core::navigation::Route;
use sb_core::ports::KeyValueStorePort;
use sb_infra::kv::FileKeyValueStore;
use sb_platform::ConsoleIo;
use sb_shell::bootstrap::{resolve_app_paths, run_session, wire_dependencies, SessionReport};

fn config(data_dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: data_dir.to_path_buf(),
        splash_handoff_ms: 1,
        ..AppConfig::empty()
    }
}

async fn session(data_dir: &Path, input: &'static str) -> SessionReport {
    let config = config(data_dir);
    let paths = resolve_app_paths(&config).unwrap();
    let deps = wire_dependencies(
        &config,
        paths,
        ConsoleIo::new(io::Cursor::new(input), io::sink()),
    );
    run_session(deps).await.unwrap()
}

async fn stored_flag(data_dir: &Path) -> Option<String> {
    FileKeyValueStore::with_defaults(data_dir.to_path_buf())
        .get("hasLaunched")
        .await
        .unwrap()
}

#[tokio::test]
async fn first_launch_happy_path_ends_in_main_shell() {
    let temp_dir = TempDir::new().unwrap();

    // agree GPS, allow, agree notifications, allow, START
    let report = session(temp_dir.path(), "1\ny\n1\ny\n1\n").await;

    assert!(report.decision.is_first_launch());
    assert_eq!(report.final_route, Route::main_shell());
    assert!(report.reached_main_shell);
    assert_eq!(stored_flag(temp_dir.path()).await.as_deref(), Some("true"));
}

#[tokio::test]
async fn denials_are_recoverable() {
    let temp_dir = TempDir::new().unwrap();

    // agree GPS, deny, OK, agree GPS, allow,
    // agree notifications, deny, Skip, START
    let report = session(temp_dir.path(), "1\nn\n1\n1\ny\n1\nn\n1\nstart\n").await;

    assert_eq!(report.final_route, Route::main_shell());
    assert!(report.reached_main_shell);
}

#[tokio::test]
async fn skip_for_now_bypasses_the_tour() {
    let temp_dir = TempDir::new().unwrap();

    // agree GPS, allow, skip for now; no START needed
    let report = session(temp_dir.path(), "1\ny\n2\n").await;

    assert_eq!(report.final_route, Route::main_shell());
}

#[tokio::test]
async fn abandoned_onboarding_is_not_repeated() {
    let temp_dir = TempDir::new().unwrap();

    let first = session(temp_dir.path(), "1\ny\n").await;
    assert!(!first.reached_main_shell);
    assert_eq!(first.final_route, Route::OnboardingNotifications);

    let second = session(temp_dir.path(), "").await;
    assert_eq!(second.decision, LaunchDecision::ReturningUser);
    assert_eq!(second.final_route, Route::main_shell());
    assert!(second.reached_main_shell);
}
