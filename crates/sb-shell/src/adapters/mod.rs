pub mod navigation;
pub mod prompt;

pub use navigation::ConsoleNavigator;
pub use prompt::ConsolePromptPresenter;
