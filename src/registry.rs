use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A record that can live in a [`Registry`]: something with a
/// registry-assigned id and a human-facing name.
pub trait Entity: Send + Sync {
    /// Builds the record. Only the registry calls this; ids are never
    /// chosen by callers.
    fn with_id(id: u64, name: String) -> Self;

    fn id(&self) -> u64;

    fn name(&self) -> &str;
}

/// In-memory table of one entity kind, indexed by id and by name.
///
/// Ids start at 1 and are assigned by the registry itself; the counter is
/// scoped to the registry instance, so independent services each count from
/// 1. Entities are immutable once stored and handed out as shared `Arc`
/// references, never as copies.
///
/// Names are *not* unique: inserting two entries under the same name keeps
/// both reachable by id, while the name index retains only the later
/// insertion. That is documented behavior, not a bug.
pub struct Registry<T> {
    tables: RwLock<Tables<T>>,
}

struct Tables<T> {
    by_id: HashMap<u64, Arc<T>>,
    by_name: HashMap<String, Arc<T>>,
    next_id: u64,
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Registry {
            tables: RwLock::new(Tables {
                by_id: HashMap::new(),
                by_name: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a new entity under the next free id and indexes it by id and
    /// by name. Empty names are accepted here; validation belongs to the
    /// layer above.
    pub fn add_entry(&self, name: &str) -> Arc<T> {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        let id = tables.next_id;
        tables.next_id += 1;

        let entry = Arc::new(T::with_id(id, name.to_owned()));
        tables.by_id.insert(id, Arc::clone(&entry));
        tables.by_name.insert(name.to_owned(), Arc::clone(&entry));
        entry
    }

    /// Returns the entity currently indexed under `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Option<Arc<T>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.by_name.get(name).cloned()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Arc<T>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.by_id.get(&id).cloned()
    }

    /// Snapshot of all live entities. Order is not significant and not
    /// stable across calls.
    pub fn all_entries(&self) -> Vec<Arc<T>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.by_id.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMovie {
        id: u64,
        name: String,
    }

    impl Entity for TestMovie {
        fn with_id(id: u64, name: String) -> Self {
            TestMovie { id, name }
        }

        fn id(&self) -> u64 {
            self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn first_entry_gets_id_one() {
        let registry: Registry<TestMovie> = Registry::new();
        let movie = registry.add_entry("TestMovie");
        assert_eq!(movie.id(), 1);
        assert_eq!(movie.name(), "TestMovie");
    }

    #[test]
    fn ids_are_sequential_and_distinct() {
        let registry: Registry<TestMovie> = Registry::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| registry.add_entry(&format!("Movie {i}")).id())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn counters_are_scoped_per_registry() {
        let movies: Registry<TestMovie> = Registry::new();
        let more_movies: Registry<TestMovie> = Registry::new();

        assert_eq!(movies.add_entry("A").id(), 1);
        assert_eq!(movies.add_entry("B").id(), 2);
        assert_eq!(more_movies.add_entry("C").id(), 1);
    }

    #[test]
    fn find_by_id_returns_the_inserted_entry() {
        let registry: Registry<TestMovie> = Registry::new();
        let original = registry.add_entry("TestMovie2");

        let found = registry.find_by_id(original.id()).expect("entry exists");
        assert_eq!(found.id(), original.id());
        assert_eq!(found.name(), original.name());
    }

    #[test]
    fn find_by_name_returns_the_inserted_entry() {
        let registry: Registry<TestMovie> = Registry::new();
        let original = registry.add_entry("TestMovie2");

        let found = registry.find_by_name("TestMovie2").expect("entry exists");
        assert_eq!(found.id(), original.id());
    }

    #[test]
    fn lookups_report_absence_as_none() {
        let registry: Registry<TestMovie> = Registry::new();
        assert!(registry.find_by_name("nope").is_none());
        assert!(registry.find_by_id(42).is_none());
    }

    #[test]
    fn all_entries_returns_every_record() {
        let names = ["One", "Two", "Three", "Four", "Five"];
        let registry: Registry<TestMovie> = Registry::new();
        for name in names {
            registry.add_entry(name);
        }

        let all = registry.all_entries();
        assert_eq!(all.len(), names.len());
        for name in names {
            assert!(all.iter().any(|entry| entry.name() == name));
        }
    }

    #[test]
    fn duplicate_names_keep_both_ids_but_later_wins_the_name_index() {
        let registry: Registry<TestMovie> = Registry::new();
        let first = registry.add_entry("Dune");
        let second = registry.add_entry("Dune");

        assert_ne!(first.id(), second.id());
        assert_eq!(registry.len(), 2);

        // Both reachable by id, only the later insertion by name.
        assert!(registry.find_by_id(first.id()).is_some());
        assert!(registry.find_by_id(second.id()).is_some());
        assert_eq!(registry.find_by_name("Dune").expect("indexed").id(), second.id());
    }
}
