use engine::id::VilleId;
use serde::{Deserialize, Serialize};

/// The persisted form of a ville. The id field maps to the store's `_id`;
/// the HTTP surface renders its own representation instead.
#[derive(Debug, Serialize, Deserialize, Clone, Eq)]
pub struct Ville {
    #[serde(rename = "_id")]
    pub id: VilleId,
    pub name: String,
    pub postal_code: Option<String>,
}

impl PartialEq for Ville {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
