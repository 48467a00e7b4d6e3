use async_trait::async_trait;
use chrono::NaiveDate;
use coastline_stays::domain::{
    CategoryRef, ContactEnquiry, ContentId, ContentItem, Property, PropertyEnquiry, PropertyId,
    Review, TaxonomyEntry, TaxonomySet,
};
use coastline_stays::enquiry::relay::{FormRelay, RelayError};
use coastline_stays::gateway::{ContentFilter, DataGateway, GatewayError, PropertyFilter};
use coastline_stays::pages::SiteInfo;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Gateway double backed by the bundled demo catalog, used by the CLI demo
/// commands and the endpoint tests.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDataGateway {
    properties: Vec<Property>,
    content: Vec<ContentItem>,
    taxonomies: TaxonomySet,
    reviews: Vec<Review>,
}

impl InMemoryDataGateway {
    pub(crate) fn with_demo_data() -> Self {
        Self {
            properties: demo_properties(),
            content: demo_content(),
            taxonomies: demo_taxonomies(),
            reviews: demo_reviews(),
        }
    }
}

#[async_trait]
impl DataGateway for InMemoryDataGateway {
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

/// Relay double that records submissions instead of posting them.
#[derive(Default, Clone)]
pub(crate) struct RecordingFormRelay {
    contact: Arc<Mutex<Vec<ContactEnquiry>>>,
    property: Arc<Mutex<Vec<PropertyEnquiry>>>,
}

impl RecordingFormRelay {
    #[cfg(test)]
    pub(crate) fn contact_submissions(&self) -> Vec<ContactEnquiry> {
        self.contact.lock().expect("relay mutex poisoned").clone()
    }

    #[cfg(test)]
    pub(crate) fn property_submissions(&self) -> Vec<PropertyEnquiry> {
        self.property.lock().expect("relay mutex poisoned").clone()
    }
}

#[async_trait]
impl FormRelay for RecordingFormRelay {
    async fn submit_contact(&self, enquiry: &ContactEnquiry) -> Result<(), RelayError> {
        self.contact
            .lock()
            .expect("relay mutex poisoned")
            .push(enquiry.clone());
        Ok(())
    }

    async fn submit_property(&self, enquiry: &PropertyEnquiry) -> Result<(), RelayError> {
        self.property
            .lock()
            .expect("relay mutex poisoned")
            .push(enquiry.clone());
        Ok(())
    }
}

pub(crate) fn demo_site_info() -> SiteInfo {
    SiteInfo {
        base_url: "https://www.coastlinestays.com.au".to_string(),
        name: "Coastline Stays".to_string(),
        default_og_image: "https://www.coastlinestays.com.au/images/og-default.jpg".to_string(),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn demo_properties() -> Vec<Property> {
    vec![
        Property {
            id: PropertyId("prop-001".to_string()),
            slug: "heron-point-retreat".to_string(),
            title: "Heron Point Retreat".to_string(),
            subtitle: Some("Direct waterfront access".to_string()),
            excerpt: Some("Wake to sunrises over the inlet from this waterfront home.".to_string()),
            bedrooms: 3,
            bathrooms: 2,
            guests: 6,
            pet_friendly: false,
            boat_parking: true,
            water_views: true,
            rating: Some(4.9),
            distance_from_town_minutes: Some(3),
            location_tags: tags(&["waterfront", "town-adjacent"]),
            feature_tags: tags(&["deck", "views", "family"]),
            nearby_activities: tags(&["fishing", "kayaking", "beach-walks"]),
            image_folder: Some("heron-point-retreat".to_string()),
        },
        Property {
            id: PropertyId("prop-002".to_string()),
            slug: "saltbush-cottage".to_string(),
            title: "Saltbush Cottage".to_string(),
            subtitle: Some("Garden cottage near town".to_string()),
            excerpt: Some("A quiet garden cottage a short stroll from the shops.".to_string()),
            bedrooms: 2,
            bathrooms: 1,
            guests: 4,
            pet_friendly: true,
            boat_parking: false,
            water_views: false,
            rating: Some(4.8),
            distance_from_town_minutes: Some(4),
            location_tags: tags(&["town-adjacent", "walking-distance"]),
            feature_tags: tags(&["pet-friendly", "garden", "wifi"]),
            nearby_activities: tags(&["cafes", "shopping", "beach-walks"]),
            image_folder: Some("saltbush-cottage".to_string()),
        },
        Property {
            id: PropertyId("prop-003".to_string()),
            slug: "the-boathouse".to_string(),
            title: "The Boathouse".to_string(),
            subtitle: Some("Jetty at the bottom of the garden".to_string()),
            excerpt: Some("Launch the tinny before breakfast.".to_string()),
            bedrooms: 2,
            bathrooms: 1,
            guests: 4,
            pet_friendly: false,
            boat_parking: true,
            water_views: true,
            rating: Some(4.7),
            distance_from_town_minutes: Some(8),
            location_tags: tags(&["waterfront", "jetty-access"]),
            feature_tags: tags(&["jetty", "boat-access", "kayaks"]),
            nearby_activities: tags(&["fishing", "boating", "water-sports"]),
            image_folder: Some("the-boathouse".to_string()),
        },
        Property {
            id: PropertyId("prop-004".to_string()),
            slug: "driftwood-villa".to_string(),
            title: "Driftwood Villa".to_string(),
            subtitle: Some("Space for the whole family".to_string()),
            excerpt: Some("Four bedrooms, a games room, and the beach up the road.".to_string()),
            bedrooms: 4,
            bathrooms: 2,
            guests: 8,
            pet_friendly: true,
            boat_parking: false,
            water_views: false,
            rating: Some(4.9),
            distance_from_town_minutes: Some(6),
            location_tags: tags(&["beachfront", "family-friendly"]),
            feature_tags: tags(&["family", "spacious", "games", "pet-friendly"]),
            nearby_activities: tags(&["playground", "beach-walks", "family-activities"]),
            image_folder: Some("driftwood-villa".to_string()),
        },
        Property {
            id: PropertyId("prop-005".to_string()),
            slug: "bluff-lookout".to_string(),
            title: "Bluff Lookout".to_string(),
            subtitle: Some("270-degree coastal views".to_string()),
            excerpt: Some("Perched above the coast with a telescope on the deck.".to_string()),
            bedrooms: 3,
            bathrooms: 2,
            guests: 6,
            pet_friendly: false,
            boat_parking: false,
            water_views: true,
            rating: Some(5.0),
            distance_from_town_minutes: Some(12),
            location_tags: tags(&["elevated", "coastal", "secluded"]),
            feature_tags: tags(&["views", "deck", "balcony", "fireplace"]),
            nearby_activities: tags(&["wildlife-viewing", "nature-walks", "scenic-views"]),
            image_folder: Some("bluff-lookout".to_string()),
        },
    ]
}

pub(crate) fn demo_content() -> Vec<ContentItem> {
    let nature = CategoryRef {
        id: "cat-nature".to_string(),
        name: "Wildlife & Nature".to_string(),
        slug: "wildlife-nature".to_string(),
    };
    let dining = CategoryRef {
        id: "cat-dining".to_string(),
        name: "Dining & Local Flavors".to_string(),
        slug: "dining-local-flavors".to_string(),
    };

    vec![
        ContentItem {
            id: ContentId("guide-001".to_string()),
            slug: "complete-coffee-scene".to_string(),
            title: "The Complete Coffee Scene".to_string(),
            excerpt: Some("Artisan roasters and waterfront cafes for every coffee moment.".to_string()),
            body: None,
            meta_title: None,
            meta_description: None,
            hero_image_url: None,
            published_at: NaiveDate::from_ymd_opt(2025, 7, 14),
            category: Some(dining.clone()),
            seasons: Vec::new(),
            audiences: tags(&["couples", "solo travelers"]),
            activity_levels: tags(&["relaxed"]),
        },
        ContentItem {
            id: ContentId("guide-002".to_string()),
            slug: "seasonal-seafood-sustainability".to_string(),
            title: "Seasonal Seafood & Sustainability".to_string(),
            excerpt: Some("From the wharf to your plate, in season and close to home.".to_string()),
            body: None,
            meta_title: None,
            meta_description: None,
            hero_image_url: None,
            published_at: NaiveDate::from_ymd_opt(2025, 6, 2),
            category: Some(dining),
            seasons: Vec::new(),
            audiences: Vec::new(),
            activity_levels: tags(&["relaxed"]),
        },
        ContentItem {
            id: ContentId("guide-003".to_string()),
            slug: "whale-watching-winter-wildlife".to_string(),
            title: "Whale Watching & Winter Wildlife".to_string(),
            excerpt: Some("The migration passes close enough to watch from the headland.".to_string()),
            body: None,
            meta_title: None,
            meta_description: None,
            hero_image_url: None,
            published_at: NaiveDate::from_ymd_opt(2025, 5, 20),
            category: Some(nature.clone()),
            seasons: tags(&["winter"]),
            audiences: tags(&["families", "couples"]),
            activity_levels: tags(&["moderate"]),
        },
        ContentItem {
            id: ContentId("guide-004".to_string()),
            slug: "pet-friendly-getaways".to_string(),
            title: "Pet-Friendly Getaways".to_string(),
            excerpt: Some("Beaches, walks, and cottages where the dog is welcome too.".to_string()),
            body: None,
            meta_title: None,
            meta_description: None,
            hero_image_url: None,
            published_at: NaiveDate::from_ymd_opt(2025, 4, 8),
            category: Some(nature.clone()),
            seasons: Vec::new(),
            audiences: tags(&["families"]),
            activity_levels: tags(&["relaxed"]),
        },
        ContentItem {
            id: ContentId("guide-005".to_string()),
            slug: "secret-beaches-coastal-walks".to_string(),
            title: "Secret Beaches & Coastal Walks".to_string(),
            excerpt: Some("Hidden stretches of sand away from the summer crowds.".to_string()),
            body: None,
            meta_title: None,
            meta_description: None,
            hero_image_url: None,
            published_at: NaiveDate::from_ymd_opt(2025, 1, 15),
            category: Some(nature),
            seasons: tags(&["summer"]),
            audiences: tags(&["families", "couples"]),
            activity_levels: tags(&["moderate"]),
        },
    ]
}

fn demo_taxonomies() -> TaxonomySet {
    fn entries(values: &[(&str, &str, &str)]) -> Vec<TaxonomyEntry> {
        values
            .iter()
            .map(|(id, name, slug)| TaxonomyEntry {
                id: id.to_string(),
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .collect()
    }

    TaxonomySet {
        categories: entries(&[
            ("cat-nature", "Wildlife & Nature", "wildlife-nature"),
            ("cat-dining", "Dining & Local Flavors", "dining-local-flavors"),
            ("cat-activities", "Adventures & Activities", "adventures-activities"),
        ]),
        seasons: entries(&[
            ("season-summer", "Summer", "summer"),
            ("season-autumn", "Autumn", "autumn"),
            ("season-winter", "Winter", "winter"),
            ("season-spring", "Spring", "spring"),
        ]),
        audiences: entries(&[
            ("aud-families", "Families", "families"),
            ("aud-couples", "Couples", "couples"),
            ("aud-solo", "Solo Travelers", "solo-travelers"),
            ("aud-groups", "Groups", "groups"),
        ]),
        activity_levels: entries(&[
            ("level-relaxed", "Relaxed", "relaxed"),
            ("level-moderate", "Moderate", "moderate"),
            ("level-active", "Active", "active"),
        ]),
    }
}

fn demo_reviews() -> Vec<Review> {
    vec![
        Review {
            property_id: PropertyId("prop-001".to_string()),
            reviewer: "Morgan".to_string(),
            rating: 5,
            comment: "Watched dolphins from the deck every morning.".to_string(),
            reviewed_on: NaiveDate::from_ymd_opt(2025, 3, 12),
        },
        Review {
            property_id: PropertyId("prop-002".to_string()),
            reviewer: "Priya".to_string(),
            rating: 5,
            comment: "The garden was perfect for our spaniel.".to_string(),
            reviewed_on: NaiveDate::from_ymd_opt(2025, 2, 3),
        },
    ]
}
