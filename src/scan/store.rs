use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::types::ProbeResult;

/// Append-only collection of accepted probe results.
///
/// Shared between the tasks of a batch behind an `Arc`; every append takes
/// the lock so writers never interleave. Once the scan is over the contents
/// are taken out with [`ResultStore::into_results`].
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Mutex<Vec<ProbeResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, result: ProbeResult) {
        self.lock().push(result);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents, in insertion order.
    pub fn snapshot(&self) -> Vec<ProbeResult> {
        self.lock().clone()
    }

    pub fn into_results(self) -> Vec<ProbeResult> {
        self.results
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panicking writer cannot leave a half-pushed entry behind, so a
    // poisoned lock still guards a consistent Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<ProbeResult>> {
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn result(path: &str, status: u16) -> ProbeResult {
        ProbeResult::new(format!("http://example.test{path}"), status, None, 0.0, 0)
    }

    #[test]
    fn test_push__keeps_insertion_order() {
        let store = ResultStore::new();
        store.push(result("/b", 200));
        store.push(result("/a", 403));

        let results = store.into_results();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url(), "http://example.test/b");
        assert_eq!(results[1].url(), "http://example.test/a");
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ResultStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_push__from_many_threads() {
        let store = Arc::new(ResultStore::new());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for j in 0..50 {
                        store.push(result(&format!("/{i}/{j}"), 200));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 1000);
        let mut urls: Vec<String> = store
            .snapshot()
            .iter()
            .map(|r| r.url().to_string())
            .collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), 1000);
    }
}
