mod curated;
mod fallback;
mod labeler;

pub use curated::CuratedMap;
pub use fallback::FallbackLean;
pub use labeler::reason_for;

use crate::domain::{ContentItem, Property};
use serde::Serialize;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// One matched property plus the single reason label shown with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub property: Property,
    pub reason: &'static str,
}

/// Matches editorial content to catalog properties.
///
/// A hand-authored curated map supplies the preferred picks; when it
/// under-supplies, a keyword fallback broadens the search. Results keep
/// assembly order (curated first, then fallback) and are never re-sorted.
pub struct RecommendationEngine {
    curated: CuratedMap,
    limit: usize,
}

impl RecommendationEngine {
    pub fn new(curated: CuratedMap) -> Self {
        Self::with_limit(curated, DEFAULT_RECOMMENDATION_LIMIT)
    }

    pub fn with_limit(curated: CuratedMap, limit: usize) -> Self {
        Self { curated, limit }
    }

    /// Produce at most `limit` recommendations for a content item.
    ///
    /// An empty catalog yields an empty result; curated identifiers absent
    /// from the catalog are silently dropped.
    pub fn recommend(&self, content: &ContentItem, catalog: &[Property]) -> Vec<Recommendation> {
        let mut picks: Vec<&Property> = Vec::new();

        if let Some(identifiers) = self.curated.picks_for(&content.slug) {
            for identifier in identifiers {
                if picks.len() == self.limit {
                    break;
                }
                if let Some(property) = curated::resolve(identifier, catalog) {
                    if !picks.iter().any(|chosen| chosen.slug == property.slug) {
                        picks.push(property);
                    }
                }
            }
        }

        if picks.len() < self.limit {
            let lean = fallback::lean_for(content);
            for property in catalog {
                if picks.len() == self.limit {
                    break;
                }
                if !fallback::admits(lean, property) {
                    continue;
                }
                if picks.iter().any(|chosen| chosen.slug == property.slug) {
                    continue;
                }
                picks.push(property);
            }
        }

        picks
            .into_iter()
            .map(|property| Recommendation {
                property: property.clone(),
                reason: reason_for(property, content),
            })
            .collect()
    }
}
