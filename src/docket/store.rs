//! Storage abstraction for per-case game parameters.
//!
//! The trigger never owns a process-wide mutable map; it is handed a
//! [`ParameterStore`] implementation. The in-memory implementation keeps
//! one mutex per case under a shared read-write-locked index, so two
//! concurrent events for the same case serialize on that case's mutex
//! while events for different cases proceed independently.

use std::sync::{Arc, Mutex, RwLock};

use rustc_hash::FxHashMap;

use crate::docket::params::GameParameters;

/// Keyed storage for [`GameParameters`], one entry per case identifier.
pub trait ParameterStore {
    /// Fetch a snapshot of the parameters for a case.
    fn get(&self, case_id: &str) -> Option<GameParameters>;

    /// Insert or replace the parameters for a case.
    fn upsert(&self, case_id: &str, params: GameParameters);

    /// Remove a case's parameters. Returns whether an entry existed.
    fn delete(&self, case_id: &str) -> bool;

    /// Apply a read-modify-write update atomically for one case.
    ///
    /// The closure runs inside the case's critical section; no other
    /// update for the same case can interleave with it. Returns `None`
    /// when the case has no stored parameters.
    fn update<T>(
        &self,
        case_id: &str,
        apply: impl FnOnce(&mut GameParameters) -> T,
    ) -> Option<T>;
}

/// In-memory [`ParameterStore`] with per-case locking.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cases: RwLock<FxHashMap<String, Arc<Mutex<GameParameters>>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cases with stored parameters.
    pub fn len(&self) -> usize {
        self.cases.read().unwrap().len()
    }

    /// Whether the store holds no cases.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, case_id: &str) -> Option<Arc<Mutex<GameParameters>>> {
        self.cases
            .read()
            .unwrap()
            .get(case_id)
            .cloned()
    }
}

impl ParameterStore for InMemoryStore {
    fn get(&self, case_id: &str) -> Option<GameParameters> {
        self.entry(case_id)
            .map(|cell| cell.lock().unwrap().clone())
    }

    fn upsert(&self, case_id: &str, params: GameParameters) {
        let mut cases = self.cases.write().unwrap();
        match cases.get(case_id) {
            // Keep the existing cell so in-flight updates stay serialized
            // against the replacement.
            Some(cell) => *cell.lock().unwrap() = params,
            None => {
                cases.insert(case_id.to_string(), Arc::new(Mutex::new(params)));
            }
        }
    }

    fn delete(&self, case_id: &str) -> bool {
        self.cases
            .write()
            .unwrap()
            .remove(case_id)
            .is_some()
    }

    fn update<T>(
        &self,
        case_id: &str,
        apply: impl FnOnce(&mut GameParameters) -> T,
    ) -> Option<T> {
        let cell = self.entry(case_id)?;
        let mut params = cell.lock().unwrap();
        Some(apply(&mut params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn params(offer: f64) -> GameParameters {
        GameParameters::new(offer, 100_000.0, 25_000.0, 0.5)
    }

    #[test]
    fn test_get_upsert_delete() {
        let store = InMemoryStore::new();
        assert!(store.get("case-1").is_none());

        store.upsert("case-1", params(50_000.0));
        assert_eq!(store.get("case-1").unwrap().settlement_offer, 50_000.0);

        store.upsert("case-1", params(60_000.0));
        assert_eq!(store.get("case-1").unwrap().settlement_offer, 60_000.0);
        assert_eq!(store.len(), 1);

        assert!(store.delete("case-1"));
        assert!(!store.delete("case-1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_missing_case_is_none() {
        let store = InMemoryStore::new();
        assert!(store.update("case-1", |p| p.settlement_offer).is_none());
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = InMemoryStore::new();
        store.upsert("case-1", params(50_000.0));

        let ev = store.update("case-1", |p| {
            p.win_probability = 0.7;
            p.trial_ev()
        });

        assert_eq!(ev, Some(45_000.0));
        assert_eq!(store.get("case-1").unwrap().win_probability, 0.7);
    }

    #[test]
    fn test_concurrent_updates_do_not_interleave() {
        let store = Arc::new(InMemoryStore::new());
        store.upsert("case-1", params(0.0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        store.update("case-1", |p| {
                            // Non-atomic read-modify-write; only the per-case
                            // lock keeps the count exact.
                            p.settlement_offer += 1.0;
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get("case-1").unwrap().settlement_offer, 8000.0);
    }
}
