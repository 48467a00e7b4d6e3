//! Raw row shapes as the hosted service returns them, plus the
//! normalization step that turns them into domain values.
//!
//! The service's tables are loosely shaped: most columns are nullable and
//! tag columns arrive as delimited text. Normalization happens once, here;
//! rows missing their identity fields are dropped rather than defended
//! against at every call site.

use crate::domain::{
    CategoryRef, ContentId, ContentItem, Property, PropertyId, Review, TaxonomyEntry,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawProperty {
    pub(crate) id: Option<String>,
    pub(crate) slug: Option<String>,
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) subtitle: Option<String>,
    #[serde(default)]
    pub(crate) excerpt: Option<String>,
    #[serde(default)]
    pub(crate) bedrooms: Option<u8>,
    #[serde(default)]
    pub(crate) bathrooms: Option<u8>,
    #[serde(default)]
    pub(crate) guests: Option<u8>,
    #[serde(default)]
    pub(crate) pet_friendly: Option<bool>,
    #[serde(default)]
    pub(crate) boat_parking: Option<bool>,
    #[serde(default)]
    pub(crate) water_views: Option<bool>,
    #[serde(default)]
    pub(crate) rating: Option<f32>,
    #[serde(default)]
    pub(crate) distance_from_town_minutes: Option<u8>,
    #[serde(default)]
    pub(crate) location_tags: Option<String>,
    #[serde(default)]
    pub(crate) feature_tags: Option<String>,
    #[serde(default)]
    pub(crate) nearby_activities: Option<String>,
    #[serde(default)]
    pub(crate) image_folder: Option<String>,
}

impl RawProperty {
    pub(crate) fn normalize(self) -> Option<Property> {
        let id = non_empty(self.id)?;
        let slug = non_empty(self.slug)?;
        let title = non_empty(self.title)?;

        Some(Property {
            id: PropertyId(id),
            slug,
            title,
            subtitle: self.subtitle.filter(|s| !s.trim().is_empty()),
            excerpt: self.excerpt.filter(|s| !s.trim().is_empty()),
            bedrooms: self.bedrooms.unwrap_or(0),
            bathrooms: self.bathrooms.unwrap_or(0),
            guests: self.guests.unwrap_or(0),
            pet_friendly: self.pet_friendly.unwrap_or(false),
            boat_parking: self.boat_parking.unwrap_or(false),
            water_views: self.water_views.unwrap_or(false),
            rating: self.rating,
            distance_from_town_minutes: self.distance_from_town_minutes,
            location_tags: split_tags(self.location_tags),
            feature_tags: split_tags(self.feature_tags),
            nearby_activities: split_tags(self.nearby_activities),
            image_folder: self.image_folder.filter(|s| !s.trim().is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawContent {
    pub(crate) id: Option<String>,
    pub(crate) slug: Option<String>,
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) excerpt: Option<String>,
    #[serde(default)]
    pub(crate) body: Option<String>,
    #[serde(default)]
    pub(crate) meta_title: Option<String>,
    #[serde(default)]
    pub(crate) meta_description: Option<String>,
    #[serde(default)]
    pub(crate) hero_image_url: Option<String>,
    #[serde(default)]
    pub(crate) published_at: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) category_id: Option<String>,
    #[serde(default)]
    pub(crate) category_name: Option<String>,
    #[serde(default)]
    pub(crate) category_slug: Option<String>,
    #[serde(default)]
    pub(crate) seasons: Option<String>,
    #[serde(default)]
    pub(crate) audiences: Option<String>,
    #[serde(default)]
    pub(crate) activity_levels: Option<String>,
}

impl RawContent {
    pub(crate) fn normalize(self) -> Option<ContentItem> {
        let id = non_empty(self.id)?;
        let slug = non_empty(self.slug)?;
        let title = non_empty(self.title)?;

        let category = match (self.category_id, self.category_name, self.category_slug) {
            (Some(id), Some(name), Some(slug))
                if !id.trim().is_empty() && !name.trim().is_empty() =>
            {
                Some(CategoryRef { id, name, slug })
            }
            _ => None,
        };

        Some(ContentItem {
            id: ContentId(id),
            slug,
            title,
            excerpt: self.excerpt.filter(|s| !s.trim().is_empty()),
            body: self.body.filter(|s| !s.trim().is_empty()),
            meta_title: self.meta_title.filter(|s| !s.trim().is_empty()),
            meta_description: self.meta_description.filter(|s| !s.trim().is_empty()),
            hero_image_url: self.hero_image_url.filter(|s| !s.trim().is_empty()),
            published_at: self.published_at,
            category,
            seasons: split_tags(self.seasons),
            audiences: split_tags(self.audiences),
            activity_levels: split_tags(self.activity_levels),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTaxonomyEntry {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) slug: Option<String>,
}

impl RawTaxonomyEntry {
    pub(crate) fn normalize(self) -> Option<TaxonomyEntry> {
        let id = non_empty(self.id)?;
        let name = non_empty(self.name)?;
        let slug = match non_empty(self.slug) {
            Some(slug) => slug,
            None => slugify(&name),
        };
        Some(TaxonomyEntry { id, name, slug })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawReview {
    pub(crate) property_id: Option<String>,
    #[serde(default)]
    pub(crate) reviewer: Option<String>,
    #[serde(default)]
    pub(crate) rating: Option<u8>,
    #[serde(default)]
    pub(crate) comment: Option<String>,
    #[serde(default)]
    pub(crate) reviewed_on: Option<NaiveDate>,
}

impl RawReview {
    pub(crate) fn normalize(self) -> Option<Review> {
        let property_id = non_empty(self.property_id)?;
        Some(Review {
            property_id: PropertyId(property_id),
            reviewer: self.reviewer.unwrap_or_else(|| "Guest".to_string()),
            rating: self.rating.unwrap_or(5).min(5),
            comment: self.comment.unwrap_or_default(),
            reviewed_on: self.reviewed_on,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Tag columns arrive as comma-delimited text; split and lowercase them.
fn split_tags(value: Option<String>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn slugify(name: &str) -> String {
    let mut slug = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug.trim_matches('-').to_string()
}
