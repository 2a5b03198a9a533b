//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

/// The state of the REST server: the injected record store.
///
/// The store is generic so the server binary can run either backend and the
/// tests can substitute the in-memory one. Every request takes the mutex for
/// the duration of its read-modify-write; there is no finer-grained locking
/// and no transaction isolation (single-writer assumption).
#[derive(Debug)]
pub struct AppState<S> {
    /// The record store holding the trip and expense collections.
    pub store: Arc<Mutex<S>>,
}

impl<S> AppState<S> {
    /// Create a new [AppState] wrapping `store`.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

// Derived Clone would require S: Clone, but only the Arc is cloned.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
