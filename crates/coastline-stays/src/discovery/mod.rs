pub mod context;
pub mod recommendation;
pub mod related;
pub mod seasonal;

pub use context::{score_properties, MatchContext};
pub use recommendation::{CuratedMap, Recommendation, RecommendationEngine};
pub use related::{related_content, RelatedPick};
pub use seasonal::{select_seasonal_content, Season, SeasonProfile};
