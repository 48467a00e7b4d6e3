use crate::domain::Property;
use std::collections::BTreeMap;

/// Hand-authored mapping from content slug to an ordered list of property
/// identifiers, maintained alongside the editorial content itself.
#[derive(Debug, Clone, Default)]
pub struct CuratedMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl CuratedMap {
    /// The mapping shipped with the site. Identifiers are usually slugs but
    /// may be record ids or display titles; resolution tries each in turn.
    pub fn standard() -> Self {
        let mut map = CuratedMap::default();
        map.insert(
            "complete-coffee-scene",
            vec![
                "saltbush-cottage".to_string(),
                "harbourside-loft".to_string(),
                "the-anchorage".to_string(),
            ],
        );
        map.insert(
            "secret-beaches-coastal-walks",
            vec![
                "heron-point-retreat".to_string(),
                "driftwood-villa".to_string(),
                "saltbush-cottage".to_string(),
            ],
        );
        map.insert(
            "whale-watching-winter-wildlife",
            vec![
                "bluff-lookout".to_string(),
                "heron-point-retreat".to_string(),
            ],
        );
        map.insert(
            "luxury-waterfront-escapes",
            vec![
                "heron-point-retreat".to_string(),
                "the-boathouse".to_string(),
                "bluff-lookout".to_string(),
            ],
        );
        map.insert(
            "multi-generational-family-fun",
            vec![
                "driftwood-villa".to_string(),
                "the-anchorage".to_string(),
            ],
        );
        map.insert(
            "pet-friendly-getaways",
            vec![
                "saltbush-cottage".to_string(),
                "driftwood-villa".to_string(),
            ],
        );
        map
    }

    pub fn insert(&mut self, content_slug: &str, identifiers: Vec<String>) {
        self.entries.insert(content_slug.to_string(), identifiers);
    }

    pub fn picks_for(&self, content_slug: &str) -> Option<&[String]> {
        self.entries.get(content_slug).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a curated identifier against the live catalog: slug first, then
/// record id, then display title (case-insensitive). Unresolved identifiers
/// are the caller's cue to drop the entry.
pub(crate) fn resolve<'a>(identifier: &str, catalog: &'a [Property]) -> Option<&'a Property> {
    if let Some(property) = catalog.iter().find(|p| p.slug == identifier) {
        return Some(property);
    }
    if let Some(property) = catalog.iter().find(|p| p.id.0 == identifier) {
        return Some(property);
    }
    catalog
        .iter()
        .find(|p| p.title.eq_ignore_ascii_case(identifier))
}
