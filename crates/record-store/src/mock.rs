//! # Mock Store
//!
//! `MockStore<T>` hands out a real [`RecordClient<T>`] whose requests are
//! answered from scripted expectations instead of a running actor. Use it to
//! unit test the logic that sits *around* a store (validation, mapping,
//! orchestration) without any stored state.
//!
//! | | `MockStore` | `RecordActor` |
//! |---|---|---|
//! | **State** | none, scripted replies | real `HashMap` |
//! | **Error injection** | `return_err` | needs a record that fails |
//! | **Use case** | services around the client | the store itself, full system |
//!
//! Expectations are consumed in the order they were declared. A request that
//! does not match the next expectation panics the mock task, which surfaces as
//! [`StoreError::Dropped`] in the caller and as a failed [`MockStore::verify`].
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{Record, StoreError};
//! # use async_trait::async_trait;
//! # #[derive(Clone, Debug, PartialEq)] struct Note { id: u32, text: String }
//! # #[derive(Debug)] struct NoteDraft { text: String }
//! # #[derive(Debug)] struct NotePatch;
//! # #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//! # #[async_trait]
//! # impl Record for Note {
//! #     type Id = u32; type Draft = NoteDraft; type Patch = NotePatch;
//! #     type Context = (); type Error = NoteError;
//! #     fn generate_id() -> u32 { 1 }
//! #     fn from_draft(id: u32, d: NoteDraft) -> Result<Self, NoteError> { Ok(Self { id, text: d.text }) }
//! #     async fn apply_patch(&mut self, _: NotePatch, _: &()) -> Result<(), NoteError> { Ok(()) }
//! # }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Note>::new();
//!     mock.expect_insert()
//!         .returning(|draft| Ok(Note { id: 7, text: draft.text }));
//!     mock.expect_find(8).return_err(StoreError::Closed);
//!
//!     let client = mock.client();
//!     let note = client.insert(NoteDraft { text: "crust".into() }).await.unwrap();
//!     assert_eq!(note.id, 7);
//!     assert!(matches!(client.find_by_id(8).await, Err(StoreError::Closed)));
//!
//!     mock.verify();
//! }
//! ```

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

type InsertResponder<T> =
    Box<dyn FnOnce(<T as Record>::Draft) -> Result<T, StoreError> + Send + 'static>;

enum Expectation<T: Record> {
    Insert {
        respond: InsertResponder<T>,
    },
    Find {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Count {
        response: Result<usize, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A store double driven by expectations.
pub struct MockStore<T: Record> {
    client: RecordClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a tokio
    /// runtime because the responder runs as a task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (
                        StoreRequest::Insert { draft, respond_to },
                        Some(Expectation::Insert { respond }),
                    ) => {
                        let _ = respond_to.send(respond(draft));
                    }
                    (
                        StoreRequest::Find { id, respond_to },
                        Some(Expectation::Find {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "find called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Count { respond_to }, Some(Expectation::Count { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_insert(&mut self) -> InsertExpectation<T> {
        InsertExpectation {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_find(&mut self, id: T::Id) -> FindExpectation<T> {
        FindExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectation<T> {
        UpdateExpectation {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_count(&mut self) -> CountExpectation<T> {
        CountExpectation {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for an `insert` expectation.
pub struct InsertExpectation<T: Record> {
    expectations: Expectations<T>,
}

impl<T: Record> InsertExpectation<T> {
    /// Answers with a value computed from the draft the caller sent.
    pub fn returning<F>(self, respond: F)
    where
        F: FnOnce(T::Draft) -> Result<T, StoreError> + Send + 'static,
    {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Insert {
                respond: Box::new(respond),
            });
    }

    pub fn return_ok(self, record: T) {
        self.returning(move |_| Ok(record));
    }

    pub fn return_err(self, error: StoreError) {
        self.returning(move |_| Err(error));
    }
}

/// Builder for a `find_by_id` expectation.
pub struct FindExpectation<T: Record> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: Record> FindExpectation<T> {
    pub fn return_ok(self, record: Option<T>) {
        self.push(Ok(record));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Find {
                id: self.id,
                response,
            });
    }
}

/// Builder for an `update` expectation.
pub struct UpdateExpectation<T: Record> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: Record> UpdateExpectation<T> {
    pub fn return_ok(self, record: T) {
        self.push(Ok(record));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response,
            });
    }
}

/// Builder for a `count` expectation.
pub struct CountExpectation<T: Record> {
    expectations: Expectations<T>,
}

impl<T: Record> CountExpectation<T> {
    pub fn return_ok(self, count: usize) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Count {
                response: Ok(count),
            });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver behind it, for tests that want to
/// inspect each request and answer it by hand.
pub fn channel_client<T: Record>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an insert.
pub async fn next_insert<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Draft, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an update.
pub async fn next_update<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Topping {
        id: u32,
        name: String,
        vegan: bool,
    }

    #[derive(Debug)]
    struct ToppingDraft {
        name: String,
    }

    #[derive(Debug)]
    struct ToppingPatch {
        vegan: Option<bool>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Topping error")]
    struct ToppingError;

    #[async_trait]
    impl Record for Topping {
        type Id = u32;
        type Draft = ToppingDraft;
        type Patch = ToppingPatch;
        type Context = ();
        type Error = ToppingError;

        fn generate_id() -> u32 {
            1
        }

        fn from_draft(id: u32, draft: ToppingDraft) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: draft.name,
                vegan: false,
            })
        }

        async fn apply_patch(
            &mut self,
            patch: ToppingPatch,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            if let Some(vegan) = patch.vegan {
                self.vegan = vegan;
            }
            Ok(())
        }
    }

    fn basil() -> Topping {
        Topping {
            id: 3,
            name: "basil".to_string(),
            vegan: true,
        }
    }

    #[tokio::test]
    async fn test_channel_client_hand_driven() {
        let (client, mut receiver) = channel_client::<Topping>(10);

        let insert_task = tokio::spawn(async move {
            client
                .insert(ToppingDraft {
                    name: "olives".to_string(),
                })
                .await
        });

        let (draft, responder) = next_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        assert_eq!(draft.name, "olives");
        responder
            .send(Ok(Topping {
                id: 9,
                name: draft.name,
                vegan: true,
            }))
            .unwrap();

        let inserted = insert_task.await.unwrap().unwrap();
        assert_eq!(inserted.id, 9);
    }

    #[tokio::test]
    async fn test_next_update_exposes_patch() {
        let (client, mut receiver) = channel_client::<Topping>(10);

        let update_task =
            tokio::spawn(async move { client.update(3, ToppingPatch { vegan: Some(true) }).await });

        let (id, patch, responder) = next_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, 3);
        assert_eq!(patch.vegan, Some(true));
        responder.send(Ok(basil())).unwrap();

        assert_eq!(update_task.await.unwrap().unwrap(), basil());
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Topping>::new();
        mock.expect_insert().return_ok(basil());
        mock.expect_find(3).return_ok(Some(basil()));
        mock.expect_update(4)
            .return_err(StoreError::NotFound("4".to_string()));
        mock.expect_count().return_ok(1);

        let client = mock.client();

        let inserted = client
            .insert(ToppingDraft {
                name: "basil".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(inserted, basil());

        let found = client.find_by_id(3).await.unwrap();
        assert_eq!(found, Some(basil()));

        let missing = client.update(4, ToppingPatch { vegan: None }).await;
        assert!(matches!(missing, Err(StoreError::NotFound(id)) if id == "4"));

        assert_eq!(client.count().await.unwrap(), 1);

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unused_expectations() {
        let mut mock = MockStore::<Topping>::new();
        mock.expect_find(1).return_ok(None);
        mock.verify();
    }
}
