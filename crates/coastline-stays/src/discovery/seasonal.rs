use crate::domain::ContentItem;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Southern-Hemisphere seasons used to rotate homepage content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

/// A short hand-authored activity shown alongside the seasonal picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonalActivity {
    pub title: &'static str,
    pub description: &'static str,
}

/// Fixed display profile for a season: label, icon identifier, the keyword
/// list the content filter scans for, and three featured activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonProfile {
    pub season: Season,
    pub label: &'static str,
    pub icon: &'static str,
    pub keywords: &'static [&'static str],
    pub activities: [SeasonalActivity; 3],
}

const SUMMER: SeasonProfile = SeasonProfile {
    season: Season::Summer,
    label: "Summer",
    icon: "thermometer",
    keywords: &["summer", "beach", "swimming", "christmas", "holiday", "sun"],
    activities: [
        SeasonalActivity {
            title: "Beach Swimming & Sunbathing",
            description: "Perfect warm days for the beach",
        },
        SeasonalActivity {
            title: "Kayaking & Water Sports",
            description: "Ideal conditions on calm waters",
        },
        SeasonalActivity {
            title: "Family Holiday Fun",
            description: "School holidays bring festive energy",
        },
    ],
};

const AUTUMN: SeasonProfile = SeasonProfile {
    season: Season::Autumn,
    label: "Autumn",
    icon: "leaf",
    keywords: &["autumn", "fall", "harvest", "wine", "hiking", "mild"],
    activities: [
        SeasonalActivity {
            title: "Perfect Hiking Weather",
            description: "Cool mornings, warm afternoons",
        },
        SeasonalActivity {
            title: "Wildlife Photography",
            description: "Animals more active in mild weather",
        },
        SeasonalActivity {
            title: "Cozy Indoor Escapes",
            description: "Fireplaces and comfortable evenings",
        },
    ],
};

const WINTER: SeasonProfile = SeasonProfile {
    season: Season::Winter,
    label: "Winter",
    icon: "snowflake",
    keywords: &["winter", "whale", "cozy", "fireplace", "wildlife", "cold"],
    activities: [
        SeasonalActivity {
            title: "Whale Watching Season",
            description: "Spectacular migration sightings",
        },
        SeasonalActivity {
            title: "Storm Watching",
            description: "Dramatic weather from warm indoors",
        },
        SeasonalActivity {
            title: "Indoor Luxury",
            description: "Perfect spa and relaxation time",
        },
    ],
};

const SPRING: SeasonProfile = SeasonProfile {
    season: Season::Spring,
    label: "Spring",
    icon: "sun",
    keywords: &["spring", "wildflower", "bloom", "fresh", "new", "growth"],
    activities: [
        SeasonalActivity {
            title: "Wildflower Blooms",
            description: "National park bursts with color",
        },
        SeasonalActivity {
            title: "Perfect Walking Weather",
            description: "Cool mornings, pleasant days",
        },
        SeasonalActivity {
            title: "Bird Watching",
            description: "Migratory species return",
        },
    ],
};

impl Season {
    /// Map a calendar month (1-12) to its Southern-Hemisphere season.
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Autumn,
            6..=8 => Season::Winter,
            9..=11 => Season::Spring,
            _ => Season::Summer,
        }
    }

    pub fn for_date(date: NaiveDate) -> Season {
        Season::from_month(date.month())
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
            Season::Spring => "spring",
        }
    }

    pub const fn profile(self) -> &'static SeasonProfile {
        match self {
            Season::Summer => &SUMMER,
            Season::Autumn => &AUTUMN,
            Season::Winter => &WINTER,
            Season::Spring => &SPRING,
        }
    }
}

/// Keep the first `limit` items whose season tags, title, or excerpt mention
/// one of the profile's keywords. Zero matches is a valid outcome; the
/// caller shows a placeholder instead of an error.
pub fn select_seasonal_content(
    profile: &SeasonProfile,
    items: &[ContentItem],
    limit: usize,
) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| {
            let haystack = item.seasonal_haystack();
            profile.keywords.iter().any(|kw| haystack.contains(kw))
        })
        .take(limit)
        .cloned()
        .collect()
}
