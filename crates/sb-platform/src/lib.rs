pub mod app_dirs;
pub mod console;
pub mod permission;

pub use app_dirs::DirsAppDirsAdapter;
pub use console::ConsoleIo;
pub use permission::ConsolePermissionGateway;
