//! # Mock Collections
//!
//! [`MockCollection`] implements the same wire protocol as a live
//! [`CollectionActor`](crate::CollectionActor) but serves queued expectations
//! instead of real state. It lets you unit test client wrappers and documents
//! that depend on other collections, without spawning the real actors.
//!
//! Two styles are supported:
//!
//! - **Expectations** - queue responses with `expect_get(...).return_ok(...)`
//!   etc., then call [`MockCollection::verify`] to assert they were all
//!   consumed.
//! - **Raw channel** - [`mock_client`] hands you the request receiver so a
//!   test can assert the exact request a client sent before answering it.
//!
//! Error injection is the main payoff: a mock can return
//! [`StoreError::CollectionClosed`] or a document error on demand, which is
//! awkward to provoke from a real actor.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and its canned response.
enum Expectation<T: Document> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
    Query {
        response: Result<T::QueryResult, StoreError>,
    },
}

/// A mock collection with expectation tracking.
///
/// # Example
/// ```ignore
/// let mut mock = MockCollection::<Product>::new();
/// mock.expect_get(ProductId(1)).return_ok(Some(product));
/// mock.expect_action(ProductId(1)).return_ok(ProductActionResult::Reserved);
///
/// let client = mock.client();
/// // drive the code under test ...
/// mock.verify();
/// ```
pub struct MockCollection<T: Document> {
    client: CollectionClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Creates a new mock collection with no expectations queued.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request with the next queued expectation.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                // Shutdown is honored without consuming an expectation.
                if let CollectionRequest::Shutdown { respond_to } = request {
                    let _ = respond_to.send(());
                    break;
                }

                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get id mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update id mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete id mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action id mismatch");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
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
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client handle wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    /// Expects a `get` request.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectation<T> {
        GetExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> CreateExpectation<T> {
        CreateExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ListExpectation<T> {
        ListExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` request.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectation<T> {
        UpdateExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` request.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectation<T> {
        DeleteExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectation<T> {
        ActionExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` request.
    pub fn expect_query(&mut self) -> QueryExpectation<T> {
        QueryExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectation<T: Document> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> GetExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectation<T: Document> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> CreateExpectation<T> {
    pub fn return_ok(self, doc: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(doc) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectation<T: Document> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> ListExpectation<T> {
    pub fn return_ok(self, docs: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(docs) });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectation<T: Document> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> UpdateExpectation<T> {
    pub fn return_ok(self, doc: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Ok(doc),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectation<T: Document> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> DeleteExpectation<T> {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Ok(()),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectation<T: Document> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> ActionExpectation<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response: Ok(result),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectation<T: Document> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Document> QueryExpectation<T> {
    pub fn return_ok(self, result: T::QueryResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query {
                response: Ok(result),
            });
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query {
                response: Err(error),
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client plus the raw request receiver, for tests that want to
/// assert the exact requests a wrapper sends before answering them.
pub fn mock_client<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Receive the next request and unwrap it as a Create.
pub async fn expect_create<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receive the next request and unwrap it as a Get.
pub async fn expect_get<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receive the next request and unwrap it as an Action.
pub async fn expect_action<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Receive the next request and unwrap it as a Query.
pub async fn expect_query<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Query,
    tokio::sync::oneshot::Sender<Result<T::QueryResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Customer {
        id: u32,
        email: String,
    }

    #[derive(Debug)]
    struct CustomerCreate {
        email: String,
    }

    #[derive(Debug)]
    struct CustomerUpdate;

    #[derive(Debug)]
    enum CustomerAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("customer error")]
    struct CustomerError;

    #[async_trait]
    impl Document for Customer {
        type Id = u32;
        type Create = CustomerCreate;
        type Update = CustomerUpdate;
        type Action = CustomerAction;
        type ActionResult = ();
        type Query = ();
        type QueryResult = usize;
        type Context = ();
        type Error = CustomerError;

        fn from_create_params(id: u32, params: CustomerCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                email: params.email,
            })
        }

        async fn on_update(
            &mut self,
            _update: CustomerUpdate,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: CustomerAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            match action {}
        }

        fn evaluate_query<'a>(docs: impl Iterator<Item = &'a Self>, _query: ()) -> usize {
            docs.count()
        }
    }

    fn sample(id: u32, email: &str) -> Customer {
        Customer {
            id,
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn raw_channel_create() {
        let (client, mut receiver) = mock_client::<Customer>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(CustomerCreate {
                    email: "test@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.email, "test@example.com");
        responder.send(Ok(sample(1, "test@example.com"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn expectations_are_served_in_order() {
        let mut mock = MockCollection::<Customer>::new();

        mock.expect_create().return_ok(sample(1, "test@example.com"));
        mock.expect_get(1).return_ok(Some(sample(1, "test@example.com")));
        mock.expect_query().return_ok(1);

        let client = mock.client();

        let created = client
            .create(CustomerCreate {
                email: "test@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        assert_eq!(client.query(()).await.unwrap(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn shutdown_is_acknowledged_without_expectations() {
        let mock = MockCollection::<Customer>::new();
        let client = mock.client();

        client.shutdown().await.unwrap();

        // The mock task has exited; later requests see the closed channel.
        assert!(matches!(
            client.get(1).await,
            Err(StoreError::CollectionClosed)
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn error_injection() {
        let mut mock = MockCollection::<Customer>::new();
        mock.expect_get(1).return_err(StoreError::CollectionClosed);

        let client = mock.client();
        let result = client.get(1).await;
        assert!(matches!(result, Err(StoreError::CollectionClosed)));
        mock.verify();
    }
}
