//! In-memory key-value storage.

use super::types::{Key, KeyRef, Value};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle to the process-wide mutable map.
///
/// Clones share the same underlying map, so the server can hand one
/// handle to every connection while the console keeps another. The map
/// itself is reachable only through [`super::Store::get`] and
/// [`super::Store::set`], each of which holds the internal lock for its
/// full duration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<HashMap<Key, Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl super::Store for InMemoryStore {
    type Err = anyhow::Error;

    async fn get<'k>(&self, key: KeyRef<'k>) -> Result<Option<Value>, Self::Err> {
        let data = self.data.lock().await;
        Ok(data.get(key).map(Value::clone))
    }

    async fn set(&mut self, key: Key, value: Value) -> Result<(), Self::Err> {
        let mut data = self.data.lock().await;
        data.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Store;
    use super::*;

    #[tokio::test]
    async fn round_trips_a_stored_value() {
        // Pre-condition.
        let mut store = InMemoryStore::new();

        // Action.
        store.set("key".into(), "value".into()).await.unwrap();

        // Post-condition.
        let value = store.get("key").await.unwrap();
        assert_eq!(value, Some("value".into()));
    }

    #[tokio::test]
    async fn reports_absence_of_a_key_never_set() {
        // Pre-condition.
        let store = InMemoryStore::new();

        // Action.
        let value = store.get("missing").await.unwrap();

        // Post-condition.
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn keeps_the_last_written_value() {
        // Pre-condition.
        let mut store = InMemoryStore::new();

        // Action.
        store.set("key".into(), "first".into()).await.unwrap();
        store.set("key".into(), "second".into()).await.unwrap();

        // Post-condition.
        let value = store.get("key").await.unwrap();
        assert_eq!(value, Some("second".into()));
    }

    #[tokio::test]
    async fn shares_the_map_between_clones() {
        // Pre-condition.
        let store = InMemoryStore::new();
        let mut writer = store.clone();

        // Action.
        writer.set("key".into(), "value".into()).await.unwrap();

        // Post-condition.
        let value = store.get("key").await.unwrap();
        assert_eq!(value, Some("value".into()));
    }

    #[tokio::test]
    async fn settles_racing_writers_on_exactly_one_value() {
        // Pre-condition.
        let store = InMemoryStore::new();
        let values = (0..16).map(|i| format!("value-{}", i)).collect::<Vec<_>>();

        // Action.
        let writers = values
            .iter()
            .cloned()
            .map(|value| {
                let mut store = store.clone();
                tokio::spawn(async move { store.set("key".into(), value).await })
            })
            .collect::<Vec<_>>();

        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        // Post-condition.
        let value = store.get("key").await.unwrap().unwrap();
        assert!(values.contains(&value), "torn or unknown value: {}", value);
    }
}
