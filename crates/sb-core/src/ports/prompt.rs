use async_trait::async_trait;

use crate::onboarding::OnboardingPrompt;

/// Surfaces a prompt to the user.
///
/// The answer is not returned here; the host feeds it back through the
/// onboarding orchestrator as a separate input.
#[async_trait]
pub trait PromptPort: Send + Sync {
    async fn present(&self, prompt: OnboardingPrompt);
}
