use crate::domain::{ContentItem, Property};
use serde::Serialize;

/// The direction the fallback filler leans when the curated map
/// under-supplies. Derived from the content's text, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackLean {
    Pets,
    Water,
    Couples,
    Families,
    Any,
}

/// Where a rule's keywords are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Title + excerpt + slug + audience tags.
    FullText,
    /// Audience tags only.
    Audience,
}

struct FallbackRule {
    lean: FallbackLean,
    scope: Scope,
    keywords: &'static [&'static str],
}

/// Keyword vocabulary kept as data so the heuristic stays testable in one
/// place rather than scattered through conditionals.
const RULES: &[FallbackRule] = &[
    FallbackRule {
        lean: FallbackLean::Pets,
        scope: Scope::FullText,
        keywords: &["pet", "dog"],
    },
    FallbackRule {
        lean: FallbackLean::Water,
        scope: Scope::FullText,
        keywords: &["water", "beach", "boat", "fishing"],
    },
    FallbackRule {
        lean: FallbackLean::Couples,
        scope: Scope::Audience,
        keywords: &["couples"],
    },
    FallbackRule {
        lean: FallbackLean::Families,
        scope: Scope::Audience,
        keywords: &["families"],
    },
];

/// Pick the lean for a content item from the rule table.
pub(crate) fn lean_for(content: &ContentItem) -> FallbackLean {
    let full_text = content.keyword_haystack();
    let audience_text = content.audience_text();

    for rule in RULES {
        let haystack = match rule.scope {
            Scope::FullText => full_text.as_str(),
            Scope::Audience => audience_text.as_str(),
        };
        if rule.keywords.iter().any(|kw| haystack.contains(kw)) {
            return rule.lean;
        }
    }

    FallbackLean::Any
}

/// Whether a property qualifies under a lean.
pub(crate) fn admits(lean: FallbackLean, property: &Property) -> bool {
    match lean {
        FallbackLean::Pets => property.pet_friendly,
        FallbackLean::Water => property.water_views || property.boat_parking,
        FallbackLean::Couples => property.bedrooms <= 2,
        FallbackLean::Families => property.bedrooms >= 3,
        FallbackLean::Any => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentId, PropertyId};

    fn content(slug: &str, title: &str, audiences: &[&str]) -> ContentItem {
        ContentItem {
            id: ContentId(format!("id-{slug}")),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: None,
            body: None,
            meta_title: None,
            meta_description: None,
            hero_image_url: None,
            published_at: None,
            category: None,
            seasons: Vec::new(),
            audiences: audiences.iter().map(|a| a.to_string()).collect(),
            activity_levels: Vec::new(),
        }
    }

    fn property(bedrooms: u8) -> Property {
        Property {
            id: PropertyId("p".to_string()),
            slug: "p".to_string(),
            title: "P".to_string(),
            subtitle: None,
            excerpt: None,
            bedrooms,
            bathrooms: 1,
            guests: bedrooms * 2,
            pet_friendly: false,
            boat_parking: false,
            water_views: false,
            rating: None,
            distance_from_town_minutes: None,
            location_tags: Vec::new(),
            feature_tags: Vec::new(),
            nearby_activities: Vec::new(),
            image_folder: None,
        }
    }

    #[test]
    fn pet_keywords_win_over_water_keywords() {
        let item = content("pet-friendly-walks", "Pet-Friendly Beach Walks", &[]);
        assert_eq!(lean_for(&item), FallbackLean::Pets);
    }

    #[test]
    fn water_keywords_match_anywhere_in_the_text() {
        let item = content("jetty-days", "Best Jetties for Fishing", &[]);
        assert_eq!(lean_for(&item), FallbackLean::Water);
    }

    #[test]
    fn audience_leans_only_read_audience_tags() {
        let tagged = content("quiet-escapes", "Quiet Escapes", &["Couples"]);
        assert_eq!(lean_for(&tagged), FallbackLean::Couples);

        // "couples" in the title alone is not an audience signal.
        let untagged = content("quiet-escapes", "Trips for couples", &[]);
        assert_eq!(lean_for(&untagged), FallbackLean::Any);
    }

    #[test]
    fn unmatched_content_keeps_everything() {
        let item = content(
            "seasonal-seafood-sustainability",
            "Seasonal Seafood & Sustainability",
            &[],
        );
        assert_eq!(lean_for(&item), FallbackLean::Any);
        assert!(admits(FallbackLean::Any, &property(1)));
    }

    #[test]
    fn bedroom_bounds_gate_couples_and_families() {
        assert!(admits(FallbackLean::Couples, &property(2)));
        assert!(!admits(FallbackLean::Couples, &property(3)));
        assert!(admits(FallbackLean::Families, &property(3)));
        assert!(!admits(FallbackLean::Families, &property(2)));
    }
}
