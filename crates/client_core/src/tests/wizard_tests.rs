use std::sync::Arc;

use storage::MemoryStore;

use super::*;

fn controller() -> OnboardingFlowController {
    OnboardingFlowController::new(Arc::new(MemoryStore::new()))
}

#[test]
fn starts_at_welcome_with_every_topic_selected() {
    let wizard = OnboardingWizard::new();
    assert_eq!(wizard.step(), OnboardingStep::Welcome);
    assert_eq!(wizard.answers().topics.len(), Topic::ALL.len());
    assert_eq!(wizard.step_indicator(), None);
}

#[test]
fn news_mix_step_requires_a_choice() {
    let mut wizard = OnboardingWizard::new();
    assert_eq!(wizard.advance(), Ok(OnboardingStep::NewsMix));
    assert_eq!(wizard.step_indicator(), Some((1, 3)));

    assert_eq!(wizard.advance(), Err(WizardError::NewsMixRequired));
    assert_eq!(wizard.step(), OnboardingStep::NewsMix);

    wizard.select_news_mix(NewsMix::BalancedMix);
    assert_eq!(wizard.advance(), Ok(OnboardingStep::Topics));
    assert_eq!(wizard.step_indicator(), Some((2, 3)));
}

#[test]
fn topics_toggle_and_allow_empty_selection() {
    let mut wizard = OnboardingWizard::new();
    wizard.advance().expect("to news mix");
    wizard.select_news_mix(NewsMix::InDepthAnalysis);
    wizard.advance().expect("to topics");

    assert!(!wizard.toggle_topic(Topic::Sports));
    assert!(!wizard.answers().topics.contains(&Topic::Sports));
    assert!(wizard.toggle_topic(Topic::Sports));

    for topic in Topic::ALL {
        wizard.toggle_topic(topic);
    }
    assert!(wizard.answers().topics.is_empty());
    assert_eq!(wizard.advance(), Ok(OnboardingStep::SignIn));
}

#[test]
fn back_walks_toward_welcome_and_stops_there() {
    let mut wizard = OnboardingWizard::new();
    wizard.advance().expect("to news mix");
    wizard.select_news_mix(NewsMix::TrendingPopCulture);
    wizard.advance().expect("to topics");

    assert_eq!(wizard.back(), OnboardingStep::NewsMix);
    assert_eq!(wizard.back(), OnboardingStep::Welcome);
    assert_eq!(wizard.back(), OnboardingStep::Welcome);
    assert_eq!(wizard.answers().news_mix, Some(NewsMix::TrendingPopCulture));
}

#[test]
fn notifications_step_cannot_be_skipped_with_advance() {
    let mut wizard = OnboardingWizard::new();
    wizard.select_news_mix(NewsMix::BalancedMix);
    for _ in 0..4 {
        wizard.advance().expect("advance");
    }
    assert_eq!(wizard.step(), OnboardingStep::Notifications);
    assert_eq!(wizard.advance(), Err(WizardError::UseFinish));
}

#[tokio::test]
async fn finish_completes_onboarding_and_returns_answers() {
    let controller = controller();
    controller.get_status().await;
    let mut wizard = OnboardingWizard::new();
    wizard.select_news_mix(NewsMix::BalancedMix);
    for _ in 0..4 {
        wizard.advance().expect("advance");
    }

    let answers = wizard.finish(true, &controller).await.expect("finish");

    assert!(answers.notifications_enabled);
    assert_eq!(answers.news_mix, Some(NewsMix::BalancedMix));
    assert_eq!(wizard.step(), OnboardingStep::Finished);
    assert!(controller.status().is_onboarding_complete);
    assert_eq!(wizard.back(), OnboardingStep::Finished);
    assert_eq!(wizard.advance(), Err(WizardError::AlreadyFinished));
    assert_eq!(
        wizard.finish(false, &controller).await,
        Err(WizardError::AlreadyFinished)
    );
}

#[tokio::test]
async fn finish_is_rejected_before_notifications() {
    let controller = controller();
    let mut wizard = OnboardingWizard::new();

    let result = wizard.finish(false, &controller).await;

    assert_eq!(result, Err(WizardError::NotAtNotifications(OnboardingStep::Welcome)));
    assert!(!controller.status().is_onboarding_complete);
}

#[test]
fn every_step_has_a_route() {
    assert_eq!(OnboardingStep::Welcome.route(), "/(onboarding)/welcome");
    assert_eq!(OnboardingStep::Finished.route(), "/");
}
