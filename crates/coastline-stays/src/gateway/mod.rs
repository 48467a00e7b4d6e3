mod records;
mod rest;

pub use rest::HostedDataClient;

use crate::domain::{ContentItem, Property, PropertyId, Review, TaxonomySet};
use async_trait::async_trait;
use serde::Deserialize;

/// Optional narrowing criteria for catalog listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyFilter {
    pub guests: Option<u8>,
    pub pet_friendly: Option<bool>,
    pub boat_parking: Option<bool>,
    pub water_views: Option<bool>,
}

impl PropertyFilter {
    pub fn admits(&self, property: &Property) -> bool {
        if let Some(guests) = self.guests {
            if property.guests < guests {
                return false;
            }
        }
        if let Some(pet_friendly) = self.pet_friendly {
            if property.pet_friendly != pet_friendly {
                return false;
            }
        }
        if let Some(boat_parking) = self.boat_parking {
            if property.boat_parking != boat_parking {
                return false;
            }
        }
        if let Some(water_views) = self.water_views {
            if property.water_views != water_views {
                return false;
            }
        }
        true
    }
}

/// Optional taxonomy and free-text criteria for content listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentFilter {
    pub category: Option<String>,
    pub season: Option<String>,
    pub audience: Option<String>,
    pub activity_level: Option<String>,
    pub search: Option<String>,
}

impl ContentFilter {
    pub fn admits(&self, item: &ContentItem) -> bool {
        if let Some(category) = &self.category {
            let matches = item
                .category
                .as_ref()
                .map(|c| c.slug.eq_ignore_ascii_case(category))
                .unwrap_or(false);
            if !matches {
                return false;
            }
        }
        if let Some(season) = &self.season {
            if !contains_slug(&item.seasons, season) {
                return false;
            }
        }
        if let Some(audience) = &self.audience {
            if !contains_slug(&item.audiences, audience) {
                return false;
            }
        }
        if let Some(level) = &self.activity_level {
            if !contains_slug(&item.activity_levels, level) {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let title_hit = item.title.to_lowercase().contains(&needle);
            let excerpt_hit = item
                .excerpt
                .as_ref()
                .map(|e| e.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !title_hit && !excerpt_hit {
                return false;
            }
        }
        true
    }
}

fn contains_slug(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(wanted))
}

/// Failure surfaced by the hosted data service. Callers render a generic
/// "could not load" state; there is no retry policy.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("data service request failed: {0}")]
    Transport(String),
    #[error("data service returned status {status} for table '{table}'")]
    Status { table: &'static str, status: u16 },
    #[error("could not decode rows from table '{table}': {detail}")]
    Decode {
        table: &'static str,
        detail: String,
    },
}

/// Read-only query surface over the hosted tabular data service.
///
/// Every operation may fail with a `GatewayError`; none of them retries.
#[async_trait]
pub trait DataGateway: Send + Sync {
    async fn list_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, GatewayError>;

    async fn property_by_slug(&self, slug: &str) -> Result<Option<Property>, GatewayError>;

    async fn list_content(&self, filter: &ContentFilter)
        -> Result<Vec<ContentItem>, GatewayError>;

    async fn content_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, GatewayError>;

    async fn taxonomies(&self) -> Result<TaxonomySet, GatewayError>;

    async fn reviews_for(&self, property: &PropertyId) -> Result<Vec<Review>, GatewayError>;
}
