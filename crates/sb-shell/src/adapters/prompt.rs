use async_trait::async_trait;
use tracing::{info, warn};

use sb_core::onboarding::OnboardingPrompt;
use sb_core::ports::PromptPort;
use sb_platform::ConsoleIo;

/// Prints prompts as alert boxes. The answer is read by the run loop and
/// fed back to the orchestrator as a choice.
pub struct ConsolePromptPresenter {
    console: ConsoleIo,
}

impl ConsolePromptPresenter {
    pub fn new(console: ConsoleIo) -> Self {
        Self { console }
    }
}

#[async_trait]
impl PromptPort for ConsolePromptPresenter {
    async fn present(&self, prompt: OnboardingPrompt) {
        info!(prompt = ?prompt, "presenting prompt");
        let text = format!("\n[!] {}\n    {}", prompt.title(), prompt.message());
        if let Err(err) = self.console.say(text).await {
            warn!(error = %err, prompt = ?prompt, "failed to print prompt");
        }
    }
}
