use super::*;

#[test]
fn mock_session_starts_as_free_user() {
    let session = UserSession::mock();
    assert!(session.is_authenticated());
    assert!(!session.is_premium());
    assert_eq!(session.premium_features(), PremiumFeatures::default());
}

#[test]
fn upgrade_is_one_way() {
    let session = UserSession::mock();

    assert!(session.upgrade_to_premium());
    assert!(session.is_premium());
    assert!(session.premium_features().exclusive_content);

    assert!(!session.upgrade_to_premium());
    assert_eq!(
        session.current_user().map(|u| u.user_type),
        Some(UserType::Premium)
    );
}

#[test]
fn logout_clears_the_user_and_blocks_upgrade() {
    let session = UserSession::mock();
    session.logout();

    assert!(!session.is_authenticated());
    assert!(!session.upgrade_to_premium());
    assert_eq!(session.premium_features(), PremiumFeatures::default());
}

#[test]
fn sign_in_replaces_the_user() {
    let session = UserSession::new(None);
    let mut user = mock_data::mock_user();
    user.user_type = UserType::Premium;

    session.sign_in(user.clone());

    assert_eq!(session.current_user(), Some(user));
    assert!(session.is_premium());
}

#[tokio::test]
async fn upgrade_publishes_the_new_user() {
    let session = UserSession::mock();
    let mut events = session.events.subscribe();

    session.upgrade_to_premium();

    match events.recv().await.expect("event") {
        ClientEvent::SessionChanged(Some(user)) => assert!(user.is_premium()),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn sessions_get_distinct_ids() {
    assert_ne!(UserSession::mock().session_id(), UserSession::mock().session_id());
}
