//! Screen sequence of the first-run flow.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{NewsMix, Topic},
    protocol::OnboardingAnswers,
};
use thiserror::Error;
use tracing::debug;

use crate::onboarding::OnboardingFlowController;

/// Number of question screens that show a step indicator.
pub const QUESTION_STEPS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    NewsMix,
    Topics,
    SignIn,
    Notifications,
    Finished,
}

impl OnboardingStep {
    fn next(self) -> Option<Self> {
        match self {
            OnboardingStep::Welcome => Some(OnboardingStep::NewsMix),
            OnboardingStep::NewsMix => Some(OnboardingStep::Topics),
            OnboardingStep::Topics => Some(OnboardingStep::SignIn),
            OnboardingStep::SignIn => Some(OnboardingStep::Notifications),
            OnboardingStep::Notifications | OnboardingStep::Finished => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            OnboardingStep::Welcome | OnboardingStep::Finished => None,
            OnboardingStep::NewsMix => Some(OnboardingStep::Welcome),
            OnboardingStep::Topics => Some(OnboardingStep::NewsMix),
            OnboardingStep::SignIn => Some(OnboardingStep::Topics),
            OnboardingStep::Notifications => Some(OnboardingStep::SignIn),
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "/(onboarding)/welcome",
            OnboardingStep::NewsMix => "/(onboarding)/Onboarding1",
            OnboardingStep::Topics => "/(onboarding)/Onboarding2",
            OnboardingStep::SignIn => "/(onboarding)/SignIn",
            OnboardingStep::Notifications => "/(onboarding)/notifications",
            OnboardingStep::Finished => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("choose a news mix before continuing")]
    NewsMixRequired,
    #[error("the notifications step is left with finish()")]
    UseFinish,
    #[error("onboarding already finished")]
    AlreadyFinished,
    #[error("cannot finish from step {0:?}")]
    NotAtNotifications(OnboardingStep),
}

#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    answers: OnboardingAnswers,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            answers: OnboardingAnswers::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    /// `(current, total)` for the numbered question screens.
    pub fn step_indicator(&self) -> Option<(u8, u8)> {
        let current = match self.step {
            OnboardingStep::NewsMix => 1,
            OnboardingStep::Topics => 2,
            OnboardingStep::SignIn => 3,
            _ => return None,
        };
        Some((current, QUESTION_STEPS))
    }

    pub fn select_news_mix(&mut self, mix: NewsMix) {
        self.answers.news_mix = Some(mix);
    }

    /// Flips a topic pill; returns whether it is now selected.
    pub fn toggle_topic(&mut self, topic: Topic) -> bool {
        if self.answers.topics.remove(&topic) {
            false
        } else {
            self.answers.topics.insert(topic);
            true
        }
    }

    pub fn advance(&mut self) -> Result<OnboardingStep, WizardError> {
        match self.step {
            OnboardingStep::NewsMix if self.answers.news_mix.is_none() => {
                return Err(WizardError::NewsMixRequired)
            }
            OnboardingStep::Notifications => return Err(WizardError::UseFinish),
            OnboardingStep::Finished => return Err(WizardError::AlreadyFinished),
            _ => {}
        }
        if let Some(next) = self.step.next() {
            debug!(from = ?self.step, to = ?next, "onboarding: advancing");
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> OnboardingStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Leaves the notifications screen and marks onboarding complete.
    pub async fn finish(
        &mut self,
        enable_notifications: bool,
        controller: &OnboardingFlowController,
    ) -> Result<OnboardingAnswers, WizardError> {
        match self.step {
            OnboardingStep::Notifications => {}
            OnboardingStep::Finished => return Err(WizardError::AlreadyFinished),
            other => return Err(WizardError::NotAtNotifications(other)),
        }
        self.answers.notifications_enabled = enable_notifications;
        controller.complete_onboarding().await;
        self.step = OnboardingStep::Finished;
        Ok(self.answers.clone())
    }
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
