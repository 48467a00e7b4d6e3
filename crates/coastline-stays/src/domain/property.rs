use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

/// A rentable property as published by the hosted data service.
///
/// Records are read-only snapshots; nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub excerpt: Option<String>,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub guests: u8,
    pub pet_friendly: bool,
    pub boat_parking: bool,
    pub water_views: bool,
    pub rating: Option<f32>,
    pub distance_from_town_minutes: Option<u8>,
    pub location_tags: Vec<String>,
    pub feature_tags: Vec<String>,
    pub nearby_activities: Vec<String>,
    pub image_folder: Option<String>,
}

impl Property {
    pub fn has_location_tag(&self, tag: &str) -> bool {
        self.location_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn has_any_location_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_location_tag(tag))
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.feature_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(feature))
    }

    /// Whether the property sits within walking range of the town center.
    pub fn walkable_to_town(&self) -> bool {
        self.distance_from_town_minutes
            .map(|minutes| minutes <= 5)
            .unwrap_or(false)
            || self.has_any_location_tag(&["town-center", "town-adjacent", "walking-distance"])
    }
}

/// A guest review attached to a property, sourced from the booking platform export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub property_id: PropertyId,
    pub reviewer: String,
    pub rating: u8,
    pub comment: String,
    pub reviewed_on: Option<NaiveDate>,
}
