use super::routes::PageKind;
use crate::config::SiteConfig;
use crate::domain::{ContentItem, Property};
use serde::Serialize;
use std::sync::Mutex;

/// Public identity used when building canonical URLs and share images.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub base_url: String,
    pub name: String,
    pub default_og_image: String,
}

impl SiteInfo {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            default_og_image: format!("{}/images/og-default.jpg", config.base_url),
            base_url: config.base_url.clone(),
            name: config.name.clone(),
        }
    }
}

/// One meta tag as the rendering layer writes it into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub key: &'static str,
    pub value: String,
}

/// Everything the head of a rendered page needs, computed purely from the
/// page's data; applying it to a document is the rendering layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og: Vec<MetaTag>,
    pub twitter: Vec<MetaTag>,
}

fn assemble(
    title: String,
    description: String,
    path: &str,
    image: String,
    og_type: &'static str,
    site: &SiteInfo,
) -> PageMetadata {
    let canonical = format!("{}{}", site.base_url, path);

    let og = vec![
        MetaTag { key: "og:title", value: title.clone() },
        MetaTag { key: "og:description", value: description.clone() },
        MetaTag { key: "og:url", value: canonical.clone() },
        MetaTag { key: "og:image", value: image.clone() },
        MetaTag { key: "og:type", value: og_type.to_string() },
    ];

    let twitter = vec![
        MetaTag { key: "twitter:card", value: "summary_large_image".to_string() },
        MetaTag { key: "twitter:title", value: title.clone() },
        MetaTag { key: "twitter:description", value: description.clone() },
        MetaTag { key: "twitter:image", value: image },
    ];

    PageMetadata {
        title,
        description,
        canonical,
        og,
        twitter,
    }
}

/// Metadata for the fixed pages.
pub fn meta_for_static(kind: PageKind, site: &SiteInfo) -> PageMetadata {
    let (title, description) = match kind {
        PageKind::Home => (
            format!("{} | Coastal Holiday Rentals", site.name),
            "Waterfront holiday homes with premium amenities, pet-friendly options, and a personal local welcome.".to_string(),
        ),
        PageKind::Properties => (
            format!("Holiday Properties | {}", site.name),
            "Browse the full collection of coastal holiday homes, from waterfront luxury to quiet garden cottages.".to_string(),
        ),
        PageKind::Discover => (
            format!("Discover the Coast | {}", site.name),
            "Local guides and insider tips for planning your perfect coastal getaway.".to_string(),
        ),
        PageKind::Testimonials => (
            format!("Guest Reviews | {}", site.name),
            "Real experiences from guests who keep coming back.".to_string(),
        ),
        PageKind::About => (
            format!("About Us | {}", site.name),
            "The family-run team behind the coast's most-loved holiday rentals.".to_string(),
        ),
        PageKind::Contact => (
            format!("Contact | {}", site.name),
            "Questions about a stay? Get in touch and we'll reply within a day.".to_string(),
        ),
        PageKind::PetFriendly => (
            format!("Pet-Friendly Stays | {}", site.name),
            "Holiday homes where the dog is as welcome as you are.".to_string(),
        ),
        PageKind::FishingGetaways => (
            format!("Fishing Getaways | {}", site.name),
            "Stay by the water with boat parking, jetty access, and the inlet on your doorstep.".to_string(),
        ),
        PageKind::FamilyStays => (
            format!("Family Stays | {}", site.name),
            "Spacious homes near the beach, the playground, and everything in between.".to_string(),
        ),
        PageKind::WinterEscapes => (
            format!("Winter Escapes | {}", site.name),
            "Whale season, storm watching, and a fireplace waiting at the end of the day.".to_string(),
        ),
        PageKind::PropertyDetail | PageKind::ContentDetail | PageKind::NotFound => (
            format!("Page Not Found | {}", site.name),
            "The page you're looking for doesn't exist or has been moved.".to_string(),
        ),
    };

    let path = kind.static_path().unwrap_or("/404");
    assemble(
        title,
        description,
        path,
        site.default_og_image.clone(),
        "website",
        site,
    )
}

/// Metadata for a property detail page.
pub fn meta_for_property(property: &Property, site: &SiteInfo) -> PageMetadata {
    let title = format!("{} | {}", property.title, site.name);
    let description = property
        .excerpt
        .clone()
        .or_else(|| property.subtitle.clone())
        .unwrap_or_else(|| {
            format!(
                "{} sleeps {} across {} bedrooms. Book your coastal escape.",
                property.title, property.guests, property.bedrooms
            )
        });
    let image = property
        .image_folder
        .as_ref()
        .map(|folder| format!("{}/images/{}/hero.jpg", site.base_url, folder))
        .unwrap_or_else(|| site.default_og_image.clone());

    assemble(
        title,
        description,
        &format!("/properties/{}", property.slug),
        image,
        "website",
        site,
    )
}

/// Metadata for a content detail page; explicit meta fields win over
/// derived ones.
pub fn meta_for_content(item: &ContentItem, site: &SiteInfo) -> PageMetadata {
    let title = item
        .meta_title
        .clone()
        .unwrap_or_else(|| format!("{} | {}", item.title, site.name));
    let description = item
        .meta_description
        .clone()
        .or_else(|| item.excerpt.clone())
        .unwrap_or_else(|| format!("Discover the coast: {}.", item.title));
    let image = item
        .hero_image_url
        .clone()
        .unwrap_or_else(|| site.default_og_image.clone());

    assemble(
        title,
        description,
        &format!("/discover/{}", item.slug),
        image,
        "article",
        site,
    )
}

/// Holds the metadata currently applied to the rendered document.
///
/// Constructed once and passed to whatever layer renders pages; nothing in
/// this crate keeps a process-global instance.
#[derive(Debug, Default)]
pub struct MetaRegistry {
    applied: Mutex<Vec<PageMetadata>>,
}

impl MetaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<PageMetadata> {
        self.applied
            .lock()
            .expect("meta registry mutex poisoned")
            .last()
            .cloned()
    }
}

/// Scope guard pairing metadata application with guaranteed restoration.
///
/// Entering a page applies its metadata; dropping the scope restores
/// whatever was applied before, however the scope is exited.
pub struct MetaScope<'a> {
    registry: &'a MetaRegistry,
}

impl<'a> MetaScope<'a> {
    pub fn apply(registry: &'a MetaRegistry, metadata: PageMetadata) -> Self {
        registry
            .applied
            .lock()
            .expect("meta registry mutex poisoned")
            .push(metadata);
        Self { registry }
    }
}

impl Drop for MetaScope<'_> {
    fn drop(&mut self) {
        self.registry
            .applied
            .lock()
            .expect("meta registry mutex poisoned")
            .pop();
    }
}
