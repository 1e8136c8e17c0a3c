//! Record store: the persistence seam for orders and workers.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use cleanops_core::RecordId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("record already exists")]
    Conflict,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Async keyed store of documents.
///
/// The store assigns keys on `create`. `update` and `delete` fail with
/// [`StoreError::NotFound`] for unknown keys; concurrent writers are last
/// writer wins.
#[async_trait::async_trait]
pub trait RecordStore<K, V>: Send + Sync {
    async fn create(&self, value: V) -> Result<K, StoreError>;

    async fn get(&self, key: &K) -> Result<Option<V>, StoreError>;

    /// All records, ordered by key.
    async fn list(&self) -> Result<Vec<(K, V)>, StoreError>;

    async fn update(&self, key: &K, value: V) -> Result<(), StoreError>;

    async fn delete(&self, key: &K) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<K, V, S> RecordStore<K, V> for Arc<S>
where
    K: Sync + 'static,
    V: Send + 'static,
    S: RecordStore<K, V> + ?Sized,
{
    async fn create(&self, value: V) -> Result<K, StoreError> {
        (**self).create(value).await
    }

    async fn get(&self, key: &K) -> Result<Option<V>, StoreError> {
        (**self).get(key).await
    }

    async fn list(&self) -> Result<Vec<(K, V)>, StoreError> {
        (**self).list().await
    }

    async fn update(&self, key: &K, value: V) -> Result<(), StoreError> {
        (**self).update(key, value).await
    }

    async fn delete(&self, key: &K) -> Result<(), StoreError> {
        (**self).delete(key).await
    }
}

/// In-memory store for tests/dev. Keys are fresh v7 record ids.
#[derive(Debug)]
pub struct InMemoryRecordStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K, V> InMemoryRecordStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryRecordStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait::async_trait]
impl<K, V> RecordStore<K, V> for InMemoryRecordStore<K, V>
where
    K: From<RecordId> + Clone + Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn create(&self, value: V) -> Result<K, StoreError> {
        let key = K::from(RecordId::new());
        let mut map = self.inner.write().map_err(poisoned)?;
        if map.contains_key(&key) {
            return Err(StoreError::Conflict);
        }
        map.insert(key.clone(), value);
        Ok(key)
    }

    async fn get(&self, key: &K) -> Result<Option<V>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<(K, V)>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    async fn update(&self, key: &K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        match map.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, key: &K) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.remove(key).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
