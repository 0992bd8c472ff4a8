//! Submission authorization through the raising call shape.
//!
//! Covers the full actor × record-origin × action grid a request handler
//! sees, asserting on the [`AuthError`] each denial renders as.

use crowdgate_auth::{Action, AuthError, Denial, SubmissionRecord, SubmitterMarker};
use crowdgate_runtime::{DecisionEngine, InMemoryCredentialStore, InMemorySubmissionStore};
use crowdgate_types::{Actor, JobId, SubmissionId, UserId, WorkUnitId};
use std::sync::Arc;

const ORIGIN: &str = "127.0.0.0";

fn setup() -> (DecisionEngine, Arc<InMemorySubmissionStore>) {
    let store = Arc::new(InMemorySubmissionStore::new());
    let engine = DecisionEngine::new(store.clone(), Arc::new(InMemoryCredentialStore::new()));
    (engine, store)
}

fn anonymous() -> Actor {
    Actor::anonymous(ORIGIN)
}

fn user(id: u64) -> Actor {
    Actor::authenticated(UserId::new(id))
}

fn admin() -> Actor {
    Actor::privileged(UserId::new(1))
}

fn anonymous_record() -> SubmissionRecord {
    record(SubmitterMarker::anonymous(ORIGIN))
}

fn user_record(owner: u64) -> SubmissionRecord {
    record(SubmitterMarker::user(UserId::new(owner)))
}

fn record(marker: SubmitterMarker) -> SubmissionRecord {
    SubmissionRecord::new(
        SubmissionId::new(),
        WorkUnitId::new(1),
        JobId::new(1),
        marker,
        serde_json::json!({"answer": "yes"}),
    )
}

fn draft(actor: &Actor, unit: u64) -> SubmissionRecord {
    SubmissionRecord::draft_for(
        actor,
        WorkUnitId::new(unit),
        JobId::new(1),
        serde_json::json!({"answer": "yes"}),
    )
}

const UNAUTHORIZED: Result<(), AuthError> = Err(AuthError::Denied(Denial::Unauthorized));
const FORBIDDEN: Result<(), AuthError> = Err(AuthError::Denied(Denial::Forbidden));

// --- create ---------------------------------------------------------------

#[test]
fn anonymous_creates_first_submission() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&anonymous(), Action::Create, &draft(&anonymous(), 1)), Ok(()));
}

#[test]
fn anonymous_repeated_submission_forbidden() {
    let (engine, store) = setup();
    store
        .insert(draft(&anonymous(), 1))
        .expect("first insert should succeed");

    assert_eq!(
        engine.require_action(&anonymous(), Action::Create, &draft(&anonymous(), 1)),
        FORBIDDEN
    );
    assert_eq!(
        engine.require_action(&anonymous(), Action::Create, &draft(&anonymous(), 2)),
        Ok(())
    );
}

#[test]
fn authenticated_creates_first_submission() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&user(2), Action::Create, &draft(&user(2), 1)), Ok(()));
}

#[test]
fn authenticated_repeated_submission_forbidden() {
    let (engine, store) = setup();
    store
        .insert(draft(&user(2), 1))
        .expect("first insert should succeed");

    assert_eq!(
        engine.require_action(&user(2), Action::Create, &draft(&user(2), 1)),
        FORBIDDEN
    );
    assert_eq!(
        engine.require_action(&user(2), Action::Create, &draft(&user(2), 2)),
        Ok(())
    );
}

#[test]
fn another_submitter_on_same_unit_allowed() {
    let (engine, store) = setup();
    store
        .insert(draft(&user(2), 1))
        .expect("first insert should succeed");

    assert_eq!(engine.require_action(&user(3), Action::Create, &draft(&user(3), 1)), Ok(()));
    assert_eq!(
        engine.require_action(&anonymous(), Action::Create, &draft(&anonymous(), 1)),
        Ok(())
    );
}

// --- read -----------------------------------------------------------------

#[test]
fn everyone_reads_everything() {
    let (engine, _) = setup();
    for actor in [anonymous(), user(2), user(3), admin()] {
        for record in [anonymous_record(), user_record(2)] {
            assert_eq!(engine.require_action(&actor, Action::Read, &record), Ok(()), "{actor}");
        }
    }
}

// --- update ---------------------------------------------------------------

#[test]
fn anonymous_update_unauthorized() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&anonymous(), Action::Update, &anonymous_record()), UNAUTHORIZED);
    assert_eq!(engine.require_action(&anonymous(), Action::Update, &user_record(2)), UNAUTHORIZED);
}

#[test]
fn authenticated_update_forbidden() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&user(2), Action::Update, &anonymous_record()), FORBIDDEN);
    assert_eq!(engine.require_action(&user(3), Action::Update, &user_record(2)), FORBIDDEN);
    // Owners cannot edit their own answer either.
    assert_eq!(engine.require_action(&user(2), Action::Update, &user_record(2)), FORBIDDEN);
}

#[test]
fn admin_update_forbidden() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&admin(), Action::Update, &anonymous_record()), FORBIDDEN);
    assert_eq!(engine.require_action(&admin(), Action::Update, &user_record(2)), FORBIDDEN);
}

// --- delete ---------------------------------------------------------------

#[test]
fn anonymous_delete_unauthorized() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&anonymous(), Action::Delete, &anonymous_record()), UNAUTHORIZED);
    assert_eq!(engine.require_action(&anonymous(), Action::Delete, &user_record(2)), UNAUTHORIZED);
}

#[test]
fn authenticated_delete_anonymous_forbidden() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&user(2), Action::Delete, &anonymous_record()), FORBIDDEN);
}

#[test]
fn authenticated_delete_own_allowed_other_forbidden() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&user(2), Action::Delete, &user_record(2)), Ok(()));
    assert_eq!(engine.require_action(&user(3), Action::Delete, &user_record(2)), FORBIDDEN);
}

#[test]
fn admin_deletes_anything() {
    let (engine, _) = setup();
    assert_eq!(engine.require_action(&admin(), Action::Delete, &anonymous_record()), Ok(()));
    assert_eq!(engine.require_action(&admin(), Action::Delete, &user_record(2)), Ok(()));
    assert_eq!(
        engine.require_action(&admin(), Action::Delete, &record(SubmitterMarker::default())),
        Ok(())
    );
}

#[test]
fn malformed_marker_forbidden_for_non_privileged() {
    let (engine, _) = setup();
    let both = record(SubmitterMarker {
        user_id: Some(UserId::new(2)),
        origin: Some(ORIGIN.into()),
    });

    assert_eq!(engine.require_action(&user(2), Action::Delete, &both), FORBIDDEN);
    assert_eq!(engine.require_action(&user(2), Action::Create, &both), FORBIDDEN);
}

#[test]
fn denials_render_http_status() {
    let (engine, _) = setup();
    let err = engine
        .require_action(&anonymous(), Action::Delete, &user_record(2))
        .expect_err("anonymous delete should be refused");
    assert_eq!(err.http_status(), 401);

    let err = engine
        .require_action(&user(3), Action::Delete, &user_record(2))
        .expect_err("other user's delete should be refused");
    assert_eq!(err.http_status(), 403);
}
