use crate::client::Reply;
use crate::error::ProvisionError;
use crate::models::{DesiredTeamState, Presence, TeamId};
use crate::reconcile::{provision_team, TeamAction, TeamReconciler};
use crate::tests::fake_remote::{team, Call, FakeRemote};

#[test]
fn plan_covers_every_presence_and_lookup() {
    let alpha = team("7", "alpha");
    let present = DesiredTeamState::new("alpha", Presence::Present);
    let absent = DesiredTeamState::new("alpha", Presence::Absent);

    assert_eq!(TeamReconciler::plan(&present, None), TeamAction::Create);
    assert_eq!(
        TeamReconciler::plan(&absent, Some(&alpha)),
        TeamAction::Delete(TeamId::new("7"))
    );
    assert_eq!(TeamReconciler::plan(&present, Some(&alpha)), TeamAction::AlreadyPresent);
    assert_eq!(TeamReconciler::plan(&absent, None), TeamAction::AlreadyAbsent);
}

#[tokio::test]
async fn creates_missing_team() {
    let remote = FakeRemote::empty();
    let desired = DesiredTeamState::new("alpha", Presence::Present);

    let outcome = provision_team(&remote, &desired).await.unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.subject, "alpha");
    assert_eq!(outcome.message, "team alpha created.");
    assert_eq!(remote.mutations(), vec![Call::CreateTeam("alpha".to_string())]);
}

#[tokio::test]
async fn deletes_present_team_by_id() {
    let remote = FakeRemote::new(vec![team("7", "alpha")]);
    let desired = DesiredTeamState::new("alpha", Presence::Absent);

    let outcome = provision_team(&remote, &desired).await.unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.message, "team alpha deleted.");
    assert_eq!(remote.mutations(), vec![Call::DeleteTeam(TeamId::new("7"))]);
    assert!(remote.teams().is_empty());
}

#[tokio::test]
async fn no_op_when_already_in_desired_state() {
    let remote = FakeRemote::new(vec![team("7", "alpha")]);
    let outcome = provision_team(&remote, &DesiredTeamState::new("alpha", Presence::Present))
        .await
        .unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.message, "Team alpha already present in organization.");

    let outcome = provision_team(&remote, &DesiredTeamState::new("gamma", Presence::Absent))
        .await
        .unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.message, "Team gamma already absent from organization.");

    assert!(remote.mutations().is_empty());
}

#[tokio::test]
async fn applying_twice_changes_once() {
    let remote = FakeRemote::empty();

    for desired in [
        DesiredTeamState::new("alpha", Presence::Present),
        DesiredTeamState::new("alpha", Presence::Absent),
    ] {
        let first = provision_team(&remote, &desired).await.unwrap();
        let second = provision_team(&remote, &desired).await.unwrap();
        assert!(first.changed, "{:?}", desired);
        assert!(!second.changed, "{:?}", desired);
    }
}

#[tokio::test]
async fn substring_match_targets_first_team() {
    // "alpha" is contained in "alphabeta", which comes first
    let remote = FakeRemote::new(vec![team("1", "alphabeta"), team("2", "alpha")]);

    provision_team(&remote, &DesiredTeamState::new("alpha", Presence::Absent))
        .await
        .unwrap();

    assert_eq!(remote.mutations(), vec![Call::DeleteTeam(TeamId::new("1"))]);
}

#[tokio::test]
async fn create_failure_surfaces_raw_response() {
    let remote = FakeRemote::empty();
    remote.answer_next_with(403, r#"{"errors":"Forbidden"}"#);

    let err = provision_team(&remote, &DesiredTeamState::new("alpha", Presence::Present))
        .await
        .unwrap_err();

    match err {
        ProvisionError::UnexpectedStatus { context, status, body } => {
            assert_eq!(context, "Failed to create team: alpha");
            assert_eq!(status, 403);
            assert!(body.contains("Forbidden"));
        }
        other => panic!("Expected UnexpectedStatus, got {:?}", other),
    }
    // no retry
    assert_eq!(remote.mutations().len(), 1);
}

#[tokio::test]
async fn delete_accepts_only_no_content() {
    let remote = FakeRemote::new(vec![team("7", "alpha")]);
    remote.answer_next_with(200, "{}");

    let err = provision_team(&remote, &DesiredTeamState::new("alpha", Presence::Absent))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert!(err.to_string().contains("Failed to delete team: alpha"));
}

#[tokio::test]
async fn listing_failure_stops_before_any_mutation() {
    let remote = FakeRemote::empty();
    remote.fail_listing(Reply::UnexpectedStatus {
        status: 401,
        body: "Unauthorized".to_string(),
    });

    let err = provision_team(&remote, &DesiredTeamState::new("alpha", Presence::Present))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Unable to request teams info"));
    assert_eq!(remote.calls(), vec![Call::ListTeams]);
}
