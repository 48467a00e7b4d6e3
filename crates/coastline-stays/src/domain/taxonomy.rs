use serde::{Deserialize, Serialize};

/// A single row from one of the shared reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// The four reference tables used to tag and filter content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomySet {
    pub categories: Vec<TaxonomyEntry>,
    pub seasons: Vec<TaxonomyEntry>,
    pub audiences: Vec<TaxonomyEntry>,
    pub activity_levels: Vec<TaxonomyEntry>,
}
