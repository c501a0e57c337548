//! Router stand-in for the headless shell.
//!
//! Keeps a route stack with push/replace semantics and announces every
//! screen change on the console.

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use sb_core::navigation::{NavigationMode, Route};
use sb_core::ports::NavigationPort;
use sb_platform::ConsoleIo;

pub struct ConsoleNavigator {
    stack: Mutex<Vec<Route>>,
    console: ConsoleIo,
}

impl ConsoleNavigator {
    /// Navigator showing `initial`.
    pub fn new(initial: Route, console: ConsoleIo) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
            console,
        }
    }

    pub async fn current(&self) -> Route {
        let stack = self.stack.lock().await;
        stack.last().copied().unwrap_or(Route::Splash)
    }

    /// Routes reachable with "back", oldest first, current last.
    pub async fn history(&self) -> Vec<Route> {
        self.stack.lock().await.clone()
    }
}

#[async_trait]
impl NavigationPort for ConsoleNavigator {
    async fn navigate(&self, route: Route, mode: NavigationMode) -> anyhow::Result<()> {
        {
            let mut stack = self.stack.lock().await;
            if mode == NavigationMode::Replace {
                stack.pop();
            }
            stack.push(route);
        }

        info!(route = %route, mode = ?mode, "navigated");
        self.console.say(format!("\n== {route} ==")).await?;
        Ok(())
    }
}
