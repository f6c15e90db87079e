//! Session Store
//!
//! A string-keyed JSON store standing in for the browser session the
//! storefront persisted into: reads fall back to a default when data is
//! missing or corrupt, writes are skipped when nothing changed, and a
//! broadcast channel carries the changed key so every observer of that key
//! stays in sync.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Key the in-progress cart is stored under.
pub const CART_KEY: &str = "gh_cart";

/// Key the order history is stored under.
pub const ORDERS_KEY: &str = "gh_orders";

const CHANGE_CHANNEL_CAPACITY: usize = 16;

/// Errors writing to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The value could not be serialized to JSON.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// A session-scoped key/value store with change notification.
#[derive(Debug)]
pub struct SessionStore {
    entries: Mutex<FxHashMap<String, String>>,
    changes: broadcast::Sender<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            entries: Mutex::new(FxHashMap::default()),
            changes,
        }
    }
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and decodes the value under `key`.
    ///
    /// A missing key and a stored value that fails to parse both yield
    /// `default`, the same way the storefront fell back when session data
    /// was corrupt.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.lock()
            .get(key)
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or(default)
    }

    /// Encodes and stores `value` under `key`.
    ///
    /// Storing a value whose serialized form is identical to what is
    /// already there is a no-op and notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value cannot be serialized.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;

        let changed = {
            let mut entries = self.lock();

            match entries.get(key) {
                Some(existing) if existing == &raw => false,
                _ => {
                    entries.insert(key.to_owned(), raw);
                    true
                }
            }
        };

        if changed {
            self.notify(key);
        }

        Ok(())
    }

    /// Drops the value under `key` and notifies observers.
    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
        self.notify(key);
    }

    /// Subscribes to change notifications carrying the changed key.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.changes.subscribe()
    }

    fn notify(&self, key: &str) {
        // A send error only means nobody is subscribed right now.
        let receivers = self.changes.send(key.to_owned()).unwrap_or(0);
        debug!(key, receivers, "session entry changed");
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
