//! Locked Lazy Cache
//!
//! A slot that is filled by the first caller and reused afterwards. The
//! async mutex keeps concurrent first accesses from loading twice: later
//! callers wait, then find the slot filled.

use std::future::Future;

use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

use super::ApiResult;

pub(crate) struct Cached<T> {
    key: &'static str,
    slot: Mutex<Option<T>>,
}

impl<T: Default> Cached<T> {
    pub(crate) fn new(key: &'static str) -> Self {
        Self {
            key,
            slot: Mutex::new(None),
        }
    }

    async fn acquire(&self) -> MutexGuard<'_, Option<T>> {
        match self.slot.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::debug!("waiting for lock: {}", self.key);
                self.slot.lock().await
            }
        }
    }

    /// Lock the slot, running `load` first if it is empty.
    ///
    /// A failed load leaves the slot empty so the next caller retries.
    pub(crate) async fn lock_loaded<F, Fut>(&self, load: F) -> ApiResult<MappedMutexGuard<'_, T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut guard = self.acquire().await;
        if guard.is_none() {
            log::info!("loading {}", self.key);
            *guard = Some(load().await?);
        }
        Ok(MutexGuard::map(guard, |slot| slot.get_or_insert_with(T::default)))
    }

    /// Drop the cached value
    pub(crate) async fn clear(&self) {
        *self.acquire().await = None;
    }

    #[cfg(test)]
    pub(crate) async fn is_loaded(&self) -> bool {
        self.acquire().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_loads_once() {
        let cache: Cached<Vec<u32>> = Cached::new("numbers");
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .lock_loaded(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(*value, vec![1, 2, 3]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_retries() {
        let cache: Cached<Vec<u32>> = Cached::new("numbers");

        let err = cache
            .lock_loaded(|| async { Err(ApiError::Backend("down".into())) })
            .await;
        assert!(err.is_err());
        assert!(!cache.is_loaded().await);

        let value = cache.lock_loaded(|| async { Ok(vec![7]) }).await.unwrap();
        assert_eq!(*value, vec![7]);
    }

    #[tokio::test]
    async fn test_mutation_persists_and_clear_resets() {
        let cache: Cached<Vec<u32>> = Cached::new("numbers");
        cache.lock_loaded(|| async { Ok(vec![]) }).await.unwrap().push(5);

        let value = cache.lock_loaded(|| async { Ok(vec![0]) }).await.unwrap();
        assert_eq!(*value, vec![5]);
        drop(value);

        cache.clear().await;
        assert!(!cache.is_loaded().await);
    }
}
