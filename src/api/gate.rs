use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::Sender;

use futures::future::{AbortHandle, Aborted, abortable};
use tracing::debug;

use crate::api::client::DirectoryClient;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::models::{EmployeePage, SearchParams};

/// Transport behind the gate. Production uses [`DirectoryClient`]; tests
/// drive the gate with scripted fakes.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, params: SearchParams) -> impl Future<Output = ApiResult<EmployeePage>> + Send;
}

impl SearchBackend for DirectoryClient {
    async fn search(&self, params: SearchParams) -> ApiResult<EmployeePage> {
        self.search_employees(&params.term, params.limit, params.offset)
            .await
    }
}

/// Settlement of one issued fetch, tagged with the id it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub id: u64,
    pub result: ApiResult<EmployeePage>,
}

struct ActiveFetch {
    id: u64,
    abort: AbortHandle,
}

/// Owns the single in-flight fetch.
///
/// Issuing a new request aborts the previous one; an aborted fetch settles
/// as [`ApiError::Cancelled`]. The consumer additionally drops settlements
/// whose id is not the active one (see [`RequestGate::accept`]), so a
/// superseded result can never produce a state update even if the abort
/// loses the race with completion.
pub struct RequestGate<B: SearchBackend> {
    backend: Arc<B>,
    runtime: tokio::runtime::Handle,
    outcomes: Sender<FetchOutcome>,
    active: Option<ActiveFetch>,
    next_id: u64,
}

impl<B: SearchBackend> RequestGate<B> {
    pub fn new(
        backend: Arc<B>,
        runtime: tokio::runtime::Handle,
        outcomes: Sender<FetchOutcome>,
    ) -> Self {
        Self {
            backend,
            runtime,
            outcomes,
            active: None,
            next_id: 0,
        }
    }

    /// Aborts any in-flight fetch and starts a new one. Returns the id the
    /// settlement will carry.
    pub fn issue(&mut self, params: SearchParams) -> u64 {
        self.cancel();

        self.next_id += 1;
        let id = self.next_id;

        let backend = Arc::clone(&self.backend);
        let (fetch, abort) = abortable(async move { backend.search(params).await });
        let outcomes = self.outcomes.clone();

        self.runtime.spawn(async move {
            let result = match fetch.await {
                Ok(result) => result,
                Err(Aborted) => Err(ApiError::Cancelled),
            };
            // The receiver may already be gone during teardown
            let _ = outcomes.send(FetchOutcome { id, result });
        });

        debug!(id, "fetch issued");
        self.active = Some(ActiveFetch { id, abort });
        id
    }

    /// Aborts the in-flight fetch. No-op when nothing is in flight.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            debug!(id = active.id, "fetch aborted");
            active.abort.abort();
        }
    }

    /// Whether the settlement tagged `id` is the one the consumer may
    /// apply. Clears the active slot on a match, so each issued fetch can
    /// be accepted at most once.
    pub fn accept(&mut self, id: u64) -> bool {
        if self.active.as_ref().is_some_and(|active| active.id == id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }
}
