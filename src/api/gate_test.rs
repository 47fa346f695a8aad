use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use super::error::{ApiError, ApiResult};
use super::gate::{FetchOutcome, RequestGate, SearchBackend};
use crate::domain::models::{Employee, EmployeePage, SearchParams};

/// Backend whose latency and outcome are scripted by the search term:
/// terms starting with "slow" sleep long enough to be superseded, terms
/// starting with "fail" settle rejected.
struct ScriptedBackend;

impl SearchBackend for ScriptedBackend {
    async fn search(&self, params: SearchParams) -> ApiResult<EmployeePage> {
        let delay = if params.term.starts_with("slow") {
            Duration::from_millis(500)
        } else {
            Duration::from_millis(10)
        };
        tokio::time::sleep(delay).await;

        if params.term.starts_with("fail") {
            return Err(ApiError::from_error_response(500, r#"{"detail":"DB down"}"#));
        }

        Ok(EmployeePage {
            employees: vec![Employee {
                id: 1,
                name: params.term.clone(),
                email: format!("{}@example.com", params.term),
                department: "Engineering".to_string(),
                designation: "Engineer".to_string(),
                date_of_joining: "2021-03-05".to_string(),
            }],
            total: 1,
            limit: params.limit,
            offset: params.offset,
        })
    }
}

fn params(term: &str) -> SearchParams {
    SearchParams {
        term: term.to_string(),
        limit: 50,
        offset: 0,
    }
}

fn gate_and_outcomes() -> (
    tokio::runtime::Runtime,
    RequestGate<ScriptedBackend>,
    Receiver<FetchOutcome>,
) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let gate = RequestGate::new(Arc::new(ScriptedBackend), runtime.handle().clone(), tx);
    (runtime, gate, rx)
}

fn recv(outcomes: &Receiver<FetchOutcome>) -> FetchOutcome {
    outcomes
        .recv_timeout(Duration::from_secs(2))
        .expect("fetch settlement")
}

#[test]
fn later_issued_request_wins() {
    let (_runtime, mut gate, outcomes) = gate_and_outcomes();

    let first = gate.issue(params("slow old"));
    let second = gate.issue(params("new"));
    assert_ne!(first, second);

    let mut settled = vec![recv(&outcomes), recv(&outcomes)];
    settled.sort_by_key(|outcome| outcome.id);

    // The superseded fetch settles cancelled and is refused by the gate
    assert_eq!(settled[0].id, first);
    assert!(matches!(settled[0].result, Err(ApiError::Cancelled)));
    assert!(!gate.accept(first));

    // Only the most recently issued fetch may update state
    assert_eq!(settled[1].id, second);
    assert!(settled[1].result.is_ok());
    assert!(gate.accept(second));
    assert!(!gate.has_active());
}

#[test]
fn explicit_cancel_suppresses_the_settlement() {
    let (_runtime, mut gate, outcomes) = gate_and_outcomes();

    let id = gate.issue(params("slow"));
    gate.cancel();
    assert!(!gate.has_active());

    let outcome = recv(&outcomes);
    assert_eq!(outcome.id, id);
    assert!(matches!(outcome.result, Err(ApiError::Cancelled)));
    assert!(!gate.accept(id));
}

#[test]
fn cancel_with_no_active_handle_is_a_noop() {
    let (_runtime, mut gate, _outcomes) = gate_and_outcomes();
    gate.cancel();
    assert!(!gate.has_active());
}

#[test]
fn accept_is_single_shot_per_fetch() {
    let (_runtime, mut gate, outcomes) = gate_and_outcomes();

    let id = gate.issue(params("quick"));
    let outcome = recv(&outcomes);
    assert_eq!(outcome.id, id);

    assert!(gate.accept(id));
    assert!(!gate.accept(id));
}

#[test]
fn rejected_fetch_settles_with_the_backend_error() {
    let (_runtime, mut gate, outcomes) = gate_and_outcomes();

    let id = gate.issue(params("fail"));
    let outcome = recv(&outcomes);

    assert_eq!(outcome.id, id);
    assert!(gate.accept(id));
    match outcome.result {
        Err(ApiError::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "DB down");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}
