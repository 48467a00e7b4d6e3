use crate::domain::Property;

const LOCATION_WEIGHT: i32 = 30;
const DISTANCE_WEIGHT: i32 = 20;
const ACTIVITY_WEIGHT: i32 = 10;
const FEATURE_WEIGHT: i32 = 5;

/// Weighted matching context used by the fixed landing pages to pull the
/// most relevant properties for a theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchContext {
    pub location_focus: Vec<String>,
    pub activity_tags: Vec<String>,
    pub ideal_features: Vec<String>,
    pub max_distance_minutes: Option<u8>,
}

impl MatchContext {
    fn score(&self, property: &Property) -> i32 {
        let mut score = 0;

        let location_match = property
            .location_tags
            .iter()
            .any(|tag| contains(&self.location_focus, tag));
        if location_match {
            score += LOCATION_WEIGHT;
        }

        if let Some(max_minutes) = self.max_distance_minutes {
            let within = property
                .distance_from_town_minutes
                .map(|minutes| minutes <= max_minutes)
                .unwrap_or(false);
            score += if within {
                DISTANCE_WEIGHT
            } else {
                -DISTANCE_WEIGHT
            };
        }

        let activity_matches = property
            .nearby_activities
            .iter()
            .filter(|activity| contains(&self.activity_tags, activity))
            .count() as i32;
        score += activity_matches * ACTIVITY_WEIGHT;

        let feature_matches = property
            .feature_tags
            .iter()
            .filter(|feature| contains(&self.ideal_features, feature))
            .count() as i32;
        score += feature_matches * FEATURE_WEIGHT;

        score
    }
}

fn contains(tags: &[String], wanted: &str) -> bool {
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(wanted))
}

/// Rank the catalog against a context and keep the top `limit` entries.
/// The sort is stable, so equally scored properties keep catalog order.
pub fn score_properties<'a>(
    context: &MatchContext,
    catalog: &'a [Property],
    limit: usize,
) -> Vec<&'a Property> {
    let mut scored: Vec<(&Property, i32)> = catalog
        .iter()
        .map(|property| (property, context.score(property)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(property, _)| property)
        .collect()
}

/// Hand-authored contexts for the fixed landing pages, with a general
/// default for anything unmapped.
pub fn context_for_page(page_slug: &str) -> MatchContext {
    let owned = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect::<Vec<_>>();

    match page_slug {
        "pet-friendly" => MatchContext {
            location_focus: owned(&["town-adjacent", "beachfront", "peaceful"]),
            activity_tags: owned(&["beach-walks", "nature-walks", "pet-friendly-activities"]),
            ideal_features: owned(&["pet-friendly", "garden", "family"]),
            max_distance_minutes: None,
        },
        "fishing-getaways" => MatchContext {
            location_focus: owned(&["waterfront", "jetty-access", "inlet-views"]),
            activity_tags: owned(&["fishing", "kayaking", "boating", "water-sports"]),
            ideal_features: owned(&["waterfront", "jetty", "boat-access", "kayaks"]),
            max_distance_minutes: None,
        },
        "family-stays" => MatchContext {
            location_focus: owned(&["town-adjacent", "beachfront", "family-friendly"]),
            activity_tags: owned(&["playground", "beach-walks", "cafes", "family-activities"]),
            ideal_features: owned(&["family", "spacious", "pet-friendly", "games"]),
            max_distance_minutes: Some(10),
        },
        "winter-escapes" => MatchContext {
            location_focus: owned(&["waterfront", "coastal", "elevated"]),
            activity_tags: owned(&["wildlife-viewing", "nature-walks", "scenic-views"]),
            ideal_features: owned(&["views", "deck", "fireplace", "balcony"]),
            max_distance_minutes: None,
        },
        _ => MatchContext {
            location_focus: owned(&["town-adjacent", "waterfront"]),
            activity_tags: owned(&["beach-walks", "cafes"]),
            ideal_features: owned(&["family", "modern"]),
            max_distance_minutes: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyId;

    fn property(slug: &str) -> Property {
        Property {
            id: PropertyId(format!("id-{slug}")),
            slug: slug.to_string(),
            title: slug.replace('-', " "),
            subtitle: None,
            excerpt: None,
            bedrooms: 3,
            bathrooms: 2,
            guests: 6,
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

    #[test]
    fn location_match_outweighs_feature_matches() {
        let context = MatchContext {
            location_focus: vec!["waterfront".to_string()],
            activity_tags: Vec::new(),
            ideal_features: vec![
                "family".to_string(),
                "modern".to_string(),
                "deck".to_string(),
            ],
            max_distance_minutes: None,
        };

        let mut on_water = property("on-water");
        on_water.location_tags = vec!["waterfront".to_string()];

        let mut featureful = property("featureful");
        featureful.feature_tags = vec![
            "family".to_string(),
            "modern".to_string(),
            "deck".to_string(),
        ];

        let catalog = vec![featureful, on_water];
        let ranked = score_properties(&context, &catalog, 2);
        assert_eq!(ranked[0].slug, "on-water");
    }

    #[test]
    fn distance_bonus_flips_to_penalty_beyond_the_cap() {
        let context = MatchContext {
            location_focus: Vec::new(),
            activity_tags: Vec::new(),
            ideal_features: Vec::new(),
            max_distance_minutes: Some(5),
        };

        let mut near = property("near");
        near.distance_from_town_minutes = Some(3);
        let far = property("far");

        assert!(context.score(&near) > 0);
        assert!(context.score(&far) < 0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let context = context_for_page("unmapped-page");
        let catalog = vec![property("first"), property("second")];
        let ranked = score_properties(&context, &catalog, 2);
        assert_eq!(ranked[0].slug, "first");
        assert_eq!(ranked[1].slug, "second");
    }

    #[test]
    fn landing_pages_have_curated_contexts() {
        let fishing = context_for_page("fishing-getaways");
        assert!(fishing
            .activity_tags
            .iter()
            .any(|tag| tag == "fishing"));

        let family = context_for_page("family-stays");
        assert_eq!(family.max_distance_minutes, Some(10));
    }
}
