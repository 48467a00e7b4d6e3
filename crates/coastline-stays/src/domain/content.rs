use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for editorial records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub String);

/// Denormalized category reference carried on each content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// An editorial article describing local experiences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub hero_image_url: Option<String>,
    pub published_at: Option<NaiveDate>,
    pub category: Option<CategoryRef>,
    pub seasons: Vec<String>,
    pub audiences: Vec<String>,
    pub activity_levels: Vec<String>,
}

impl ContentItem {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    /// Lowercased text the keyword heuristics scan: title, excerpt, slug,
    /// and audience tags joined together.
    pub fn keyword_haystack(&self) -> String {
        let mut text = String::new();
        text.push_str(&self.title);
        text.push(' ');
        if let Some(excerpt) = &self.excerpt {
            text.push_str(excerpt);
            text.push(' ');
        }
        text.push_str(&self.slug);
        for audience in &self.audiences {
            text.push(' ');
            text.push_str(audience);
        }
        text.to_lowercase()
    }

    /// Lowercased text the seasonal selector scans: season tags, title, excerpt.
    pub fn seasonal_haystack(&self) -> String {
        let mut text = String::new();
        for season in &self.seasons {
            text.push_str(season);
            text.push(' ');
        }
        text.push_str(&self.title);
        text.push(' ');
        if let Some(excerpt) = &self.excerpt {
            text.push_str(excerpt);
        }
        text.to_lowercase()
    }

    pub fn audience_text(&self) -> String {
        self.audiences.join(" ").to_lowercase()
    }
}
