//! # Mock Client
//!
//! `MockClient<T>` exposes the same API as the production
//! [`ResourceClient`](crate::ResourceClient) but answers from a queue of
//! programmed expectations instead of a live actor. Use it to test client
//! logic in isolation: fast, deterministic, and able to inject failures that
//! are awkward to reproduce with real actors (downstream closure, missing
//! records, entity errors).
//!
//! ## Choosing mocks vs real actors
//!
//! | Feature | `MockClient` | Real actor |
//! |---------|--------------|------------|
//! | Speed | In-memory, instant | Fast, but spawns a task |
//! | Determinism | Total | Subject to the scheduler |
//! | State | None (expectations) | Real store |
//! | Error injection | `return_err(...)` | Requires specific state |
//!
//! A typical isolation test wires a real actor-under-test with mocked
//! dependency clients: the real actor exercises its hooks, the mocks script
//! the collaborators' replies.
//!
//! ```ignore
//! let mut directory = MockClient::<Courier>::new();
//! directory.expect_get(courier_id.clone()).return_ok(Some(profile));
//! let client = CourierClient::new(directory.client());
//! // ... drive the actor under test ...
//! directory.verify();
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request together with its scripted response.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Find {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking.
///
/// Expectations are consumed in FIFO order; a request arriving with no
/// matching expectation panics the mock task, which surfaces in the test as
/// a closed-channel error. Call [`MockClient::verify`] at the end of the test
/// to assert every expectation was used.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = expectations_clone
                        .lock()
                        .unwrap_or_else(|e| e.into_inner());
                    exps.pop_front()
                };

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Get { response }),
        }
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Find { response }),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Create { response }),
        }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Update { response }),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Delete { response }),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, _id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Action { response }),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder finishing an expectation with either a success or an error.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Scripts a successful response.
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(expectation);
    }

    /// Scripts an error response.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(expectation);
    }
}
