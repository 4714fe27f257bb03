use serde::Serialize;

use crate::registry::Entity;

/// A movie record in the catalog.
///
/// Identity is the registry-assigned id; two movies that happen to share a
/// name are still distinct records, so equality compares ids only.
#[derive(Debug, Serialize)]
pub struct Movie {
    pub id: u64,
    pub name: String,
}

impl Entity for Movie {
    fn with_id(id: u64, name: String) -> Self {
        Movie { id, name }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}
