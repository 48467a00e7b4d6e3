#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use coastline_stays::domain::{
    CategoryRef, ContactEnquiry, ContentId, ContentItem, Property, PropertyEnquiry, PropertyId,
    Review, TaxonomyEntry, TaxonomySet,
};
use coastline_stays::enquiry::relay::{FormRelay, RelayError};
use coastline_stays::gateway::{ContentFilter, DataGateway, GatewayError, PropertyFilter};
use coastline_stays::pages::SiteInfo;
use std::sync::Mutex;

/// In-memory gateway backed by fixture data, mirroring the hosted
/// service's ordering guarantees.
#[derive(Default)]
pub struct FixtureGateway {
    pub properties: Vec<Property>,
    pub content: Vec<ContentItem>,
    pub taxonomies: TaxonomySet,
    pub reviews: Vec<Review>,
}

#[async_trait]
impl DataGateway for FixtureGateway {
    async fn list_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, GatewayError> {
        let mut matches: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| filter.admits(p))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(matches)
    }

    async fn property_by_slug(&self, slug: &str) -> Result<Option<Property>, GatewayError> {
        Ok(self.properties.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_content(
        &self,
        filter: &ContentFilter,
    ) -> Result<Vec<ContentItem>, GatewayError> {
        let mut matches: Vec<ContentItem> = self
            .content
            .iter()
            .filter(|c| filter.admits(c))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(matches)
    }

    async fn content_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, GatewayError> {
        Ok(self.content.iter().find(|c| c.slug == slug).cloned())
    }

    async fn taxonomies(&self) -> Result<TaxonomySet, GatewayError> {
        Ok(self.taxonomies.clone())
    }

    async fn reviews_for(&self, property: &PropertyId) -> Result<Vec<Review>, GatewayError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| &r.property_id == property)
            .cloned()
            .collect())
    }
}

/// Gateway that always fails, for exercising the "could not load" paths.
pub struct UnavailableGateway;

#[async_trait]
impl DataGateway for UnavailableGateway {
    async fn list_properties(
        &self,
        _filter: &PropertyFilter,
    ) -> Result<Vec<Property>, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }

    async fn property_by_slug(&self, _slug: &str) -> Result<Option<Property>, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }

    async fn list_content(
        &self,
        _filter: &ContentFilter,
    ) -> Result<Vec<ContentItem>, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }

    async fn content_by_slug(&self, _slug: &str) -> Result<Option<ContentItem>, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }

    async fn taxonomies(&self) -> Result<TaxonomySet, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }

    async fn reviews_for(&self, _property: &PropertyId) -> Result<Vec<Review>, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }
}

/// Relay double that records accepted submissions.
#[derive(Default)]
pub struct RecordingRelay {
    pub contact: Mutex<Vec<ContactEnquiry>>,
    pub property: Mutex<Vec<PropertyEnquiry>>,
    pub reject_with: Option<String>,
}

#[async_trait]
impl FormRelay for RecordingRelay {
    async fn submit_contact(&self, enquiry: &ContactEnquiry) -> Result<(), RelayError> {
        if let Some(reason) = &self.reject_with {
            return Err(RelayError::Rejected(reason.clone()));
        }
        self.contact
            .lock()
            .expect("relay mutex poisoned")
            .push(enquiry.clone());
        Ok(())
    }

    async fn submit_property(&self, enquiry: &PropertyEnquiry) -> Result<(), RelayError> {
        if let Some(reason) = &self.reject_with {
            return Err(RelayError::Rejected(reason.clone()));
        }
        self.property
            .lock()
            .expect("relay mutex poisoned")
            .push(enquiry.clone());
        Ok(())
    }
}

pub fn site_info() -> SiteInfo {
    SiteInfo {
        base_url: "https://www.coastlinestays.com.au".to_string(),
        name: "Coastline Stays".to_string(),
        default_og_image: "https://www.coastlinestays.com.au/images/og-default.jpg".to_string(),
    }
}

pub fn property(slug: &str, title: &str) -> Property {
    Property {
        id: PropertyId(format!("id-{slug}")),
        slug: slug.to_string(),
        title: title.to_string(),
        subtitle: None,
        excerpt: None,
        bedrooms: 2,
        bathrooms: 1,
        guests: 4,
        pet_friendly: false,
        boat_parking: false,
        water_views: false,
        rating: None,
        distance_from_town_minutes: Some(15),
        location_tags: Vec::new(),
        feature_tags: Vec::new(),
        nearby_activities: Vec::new(),
        image_folder: None,
    }
}

pub fn content(slug: &str, title: &str) -> ContentItem {
    ContentItem {
        id: ContentId(format!("id-{slug}")),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: None,
        body: None,
        meta_title: None,
        meta_description: None,
        hero_image_url: None,
        published_at: NaiveDate::from_ymd_opt(2025, 6, 1),
        category: None,
        seasons: Vec::new(),
        audiences: Vec::new(),
        activity_levels: Vec::new(),
    }
}

pub fn category(slug: &str) -> CategoryRef {
    CategoryRef {
        id: format!("cat-{slug}"),
        name: slug.to_string(),
        slug: slug.to_string(),
    }
}

pub fn taxonomy_entry(slug: &str) -> TaxonomyEntry {
    TaxonomyEntry {
        id: format!("tax-{slug}"),
        name: slug.to_string(),
        slug: slug.to_string(),
    }
}
