use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{Movie, Premiere, Theater};

/// The set of scheduled premieres.
///
/// Keeps the premieres in insertion order and indexes them by the
/// `(theater_id, movie_id)` pair, so the primary lookup path is O(1)
/// instead of a scan. At most one premiere exists per pair: scheduling
/// the same movie at the same theater twice is rejected.
pub struct Schedule {
    slate: RwLock<Slate>,
}

struct Slate {
    premieres: Vec<Arc<Premiere>>,
    by_pair: HashMap<(u64, u64), Arc<Premiere>>,
}

impl Schedule {
    pub fn new() -> Self {
        Schedule {
            slate: RwLock::new(Slate {
                premieres: Vec::new(),
                by_pair: HashMap::new(),
            }),
        }
    }

    /// Creates a premiere for the pair with every seat available.
    ///
    /// Returns `false` without touching anything when the pair is already
    /// scheduled.
    pub fn schedule(&self, theater: &Theater, movie: &Movie) -> bool {
        let mut slate = self.slate.write().unwrap_or_else(PoisonError::into_inner);
        let key = (theater.id, movie.id);
        if slate.by_pair.contains_key(&key) {
            return false;
        }

        let premiere = Arc::new(Premiere::new(theater, movie));
        slate.by_pair.insert(key, Arc::clone(&premiere));
        slate.premieres.push(premiere);
        true
    }

    pub fn find_premiere(&self, theater_id: u64, movie_id: u64) -> Option<Arc<Premiere>> {
        let slate = self.slate.read().unwrap_or_else(PoisonError::into_inner);
        slate.by_pair.get(&(theater_id, movie_id)).cloned()
    }

    /// Ids of all theaters with a premiere for the given movie, in
    /// scheduling order.
    pub fn theaters_showing(&self, movie_id: u64) -> Vec<u64> {
        let slate = self.slate.read().unwrap_or_else(PoisonError::into_inner);
        slate
            .premieres
            .iter()
            .filter(|premiere| premiere.movie_id == movie_id)
            .map(|premiere| premiere.theater_id)
            .collect()
    }

    /// Distinct ids of all movies that appear in the schedule, ordered by
    /// their first premiere.
    pub fn movies_playing(&self) -> Vec<u64> {
        let slate = self.slate.read().unwrap_or_else(PoisonError::into_inner);
        let mut seen = Vec::new();
        for premiere in &slate.premieres {
            if !seen.contains(&premiere.movie_id) {
                seen.push(premiere.movie_id);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        let slate = self.slate.read().unwrap_or_else(PoisonError::into_inner);
        slate.premieres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
