pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::{run_app, run_session, SessionReport};
pub use wiring::{resolve_app_paths, wire_dependencies, ShellDeps};
