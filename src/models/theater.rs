use serde::Serialize;

use crate::registry::Entity;

/// A theater record. Equality compares ids only, like [`Movie`].
///
/// [`Movie`]: crate::models::Movie
#[derive(Debug, Serialize)]
pub struct Theater {
    pub id: u64,
    pub name: String,
}

impl Theater {
    /// Every theater has the same fixed number of seats.
    pub const SEAT_CAPACITY: usize = 20;
}

impl Entity for Theater {
    fn with_id(id: u64, name: String) -> Self {
        Theater { id, name }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Theater {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Theater {}
