use crate::domain::ContentItem;
use serde::Serialize;

pub const DEFAULT_RELATED_LIMIT: usize = 5;
pub const DEFAULT_MIN_SCORE: u32 = 1;

/// A related article with its relevance score and the attributes it shares
/// with the current one, useful for debugging the ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedPick {
    pub content: ContentItem,
    pub score: u32,
    pub shared: Vec<String>,
}

/// Rank other published articles by taxonomy overlap with the current one.
///
/// Same category scores 3, each shared audience 2, each shared season 1.
/// Ties break on published date, newest first. Items below `min_score`
/// are excluded entirely.
pub fn related_content(
    current: &ContentItem,
    all: &[ContentItem],
    max: usize,
    min_score: u32,
) -> Vec<RelatedPick> {
    let current_category = current.category.as_ref().map(|c| c.slug.as_str());

    let mut scored: Vec<RelatedPick> = all
        .iter()
        .filter(|item| item.slug != current.slug && item.is_published())
        .map(|item| {
            let mut score = 0u32;
            let mut shared = Vec::new();

            let same_category = match (current_category, item.category.as_ref()) {
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(&b.slug),
                _ => false,
            };
            if same_category {
                score += 3;
                shared.push("category".to_string());
            }

            let shared_audiences = overlap(&current.audiences, &item.audiences);
            if shared_audiences > 0 {
                score += shared_audiences * 2;
                shared.push(format!("{shared_audiences} audiences"));
            }

            let shared_seasons = overlap(&current.seasons, &item.seasons);
            if shared_seasons > 0 {
                score += shared_seasons;
                shared.push(format!("{shared_seasons} seasons"));
            }

            RelatedPick {
                content: item.clone(),
                score,
                shared,
            }
        })
        .filter(|pick| pick.score >= min_score)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.content.published_at.cmp(&a.content.published_at))
    });
    scored.truncate(max);
    scored
}

fn overlap(left: &[String], right: &[String]) -> u32 {
    right
        .iter()
        .filter(|tag| left.iter().any(|other| other.eq_ignore_ascii_case(tag)))
        .count() as u32
}
