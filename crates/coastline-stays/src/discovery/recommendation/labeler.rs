use crate::domain::{ContentItem, Property};

/// Produce the single short label shown next to a matched property.
///
/// The chain is priority-ordered and first-match-wins: exactly one label
/// per property, even when several conditions hold. Order: walk-to-town,
/// waterfront, pet, family, peaceful, then the default.
pub fn reason_for(property: &Property, content: &ContentItem) -> &'static str {
    let text = content.keyword_haystack();

    if property.walkable_to_town() {
        "Walk to town"
    } else if property.water_views || property.has_any_location_tag(&["waterfront", "beachfront"])
    {
        "Waterfront access"
    } else if property.pet_friendly && (text.contains("pet") || text.contains("dog")) {
        "Pet-friendly"
    } else if property.bedrooms >= 3 && (text.contains("famil") || property.has_feature("family"))
    {
        "Family-friendly"
    } else if property.has_any_location_tag(&["remote", "secluded", "peaceful"]) {
        "Peaceful retreat"
    } else {
        "Great location"
    }
}
