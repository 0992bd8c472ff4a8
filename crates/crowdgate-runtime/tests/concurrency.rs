//! Racing creates through [`SubmissionService`].

use crowdgate_auth::{AuthError, Denial};
use crowdgate_runtime::SubmissionService;
use crowdgate_types::{Actor, JobId, UserId, WorkUnitId};

const RACERS: usize = 16;

fn race(service: &SubmissionService, actor: &Actor) -> Vec<Result<(), AuthError>> {
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..RACERS)
            .map(|n| {
                s.spawn(move || {
                    service
                        .create(actor, WorkUnitId::new(1), JobId::new(1), serde_json::json!(n))
                        .map(|_| ())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("racer thread should not panic"))
            .collect()
    })
}

fn assert_single_winner(results: &[Result<(), AuthError>]) {
    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1, "results: {results:?}");

    for result in results.iter().filter(|r| r.is_err()) {
        assert_eq!(result, &Err(AuthError::Denied(Denial::Forbidden)));
    }
}

#[test]
fn racing_anonymous_creates_have_one_winner() {
    let service = SubmissionService::in_memory();
    let visitor = Actor::anonymous("127.0.0.1");

    let results = race(&service, &visitor);
    assert_single_winner(&results);
    assert_eq!(service.store().len(), 1);
}

#[test]
fn racing_user_creates_have_one_winner() {
    let service = SubmissionService::in_memory();
    let worker = Actor::authenticated(UserId::new(7));

    let results = race(&service, &worker);
    assert_single_winner(&results);
    assert_eq!(service.store().len(), 1);
}

#[test]
fn distinct_submitters_all_win() {
    let service = SubmissionService::in_memory();

    let results: Vec<_> = std::thread::scope(|s| {
        let service = &service;
        let handles: Vec<_> = (1..=RACERS as u64)
            .map(|id| {
                s.spawn(move || {
                    service.create(
                        &Actor::authenticated(UserId::new(id)),
                        WorkUnitId::new(1),
                        JobId::new(1),
                        serde_json::Value::Null,
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("racer thread should not panic"))
            .collect()
    });

    assert!(results.iter().all(Result::is_ok), "results: {results:?}");
    assert_eq!(service.store().len(), RACERS);
}
