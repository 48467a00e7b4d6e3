use super::records::{RawContent, RawProperty, RawReview, RawTaxonomyEntry};
use super::{ContentFilter, DataGateway, GatewayError, PropertyFilter};
use crate::config::GatewayConfig;
use crate::domain::{ContentItem, Property, PropertyId, Review, TaxonomySet};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;

const PROPERTIES_TABLE: &str = "properties";
const CONTENT_TABLE: &str = "content_items";
const CATEGORIES_TABLE: &str = "categories";
const SEASONS_TABLE: &str = "seasons";
const AUDIENCES_TABLE: &str = "audiences";
const ACTIVITY_LEVELS_TABLE: &str = "activity_levels";
const REVIEWS_TABLE: &str = "reviews";

/// REST client for the hosted tabular data service.
///
/// Speaks the service's PostgREST-style query dialect: one GET per table
/// with `column=op.value` filter parameters and an `apikey` header pair.
pub struct HostedDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HostedDataClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &'static str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, GatewayError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                table,
                status: status.as_u16(),
            });
        }

        response.json::<Vec<T>>().await.map_err(|err| {
            GatewayError::Decode {
                table,
                detail: err.to_string(),
            }
        })
    }

    async fn taxonomy_table(
        &self,
        table: &'static str,
    ) -> Result<Vec<crate::domain::TaxonomyEntry>, GatewayError> {
        let rows: Vec<RawTaxonomyEntry> = self
            .fetch_rows(table, &[("select", "*".to_string()), order_by("name.asc")])
            .await?;
        Ok(normalize_rows(table, rows, RawTaxonomyEntry::normalize))
    }
}

fn order_by(clause: &str) -> (&'static str, String) {
    ("order", clause.to_string())
}

/// Drop rows the normalizer rejects, logging how many were skipped.
fn normalize_rows<R, T>(
    table: &'static str,
    rows: Vec<R>,
    normalize: impl Fn(R) -> Option<T>,
) -> Vec<T> {
    let total = rows.len();
    let kept: Vec<T> = rows.into_iter().filter_map(normalize).collect();
    if kept.len() < total {
        warn!(table, dropped = total - kept.len(), "skipped malformed rows");
    }
    kept
}

#[async_trait]
impl DataGateway for HostedDataClient {
    async fn list_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, GatewayError> {
        let mut query = vec![("select", "*".to_string()), order_by("title.asc")];
        if let Some(guests) = filter.guests {
            query.push(("guests", format!("gte.{guests}")));
        }
        if let Some(pet_friendly) = filter.pet_friendly {
            query.push(("pet_friendly", format!("eq.{pet_friendly}")));
        }
        if let Some(boat_parking) = filter.boat_parking {
            query.push(("boat_parking", format!("eq.{boat_parking}")));
        }
        if let Some(water_views) = filter.water_views {
            query.push(("water_views", format!("eq.{water_views}")));
        }

        let rows: Vec<RawProperty> = self.fetch_rows(PROPERTIES_TABLE, &query).await?;
        Ok(normalize_rows(PROPERTIES_TABLE, rows, RawProperty::normalize))
    }

    async fn property_by_slug(&self, slug: &str) -> Result<Option<Property>, GatewayError> {
        let query = vec![
            ("select", "*".to_string()),
            ("slug", format!("eq.{slug}")),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<RawProperty> = self.fetch_rows(PROPERTIES_TABLE, &query).await?;
        Ok(normalize_rows(PROPERTIES_TABLE, rows, RawProperty::normalize).into_iter().next())
    }

    async fn list_content(
        &self,
        filter: &ContentFilter,
    ) -> Result<Vec<ContentItem>, GatewayError> {
        let mut query = vec![
            ("select", "*".to_string()),
            order_by("published_at.desc.nullslast"),
        ];
        if let Some(category) = &filter.category {
            query.push(("category_slug", format!("eq.{category}")));
        }
        if let Some(season) = &filter.season {
            query.push(("seasons", format!("ilike.*{season}*")));
        }
        if let Some(audience) = &filter.audience {
            query.push(("audiences", format!("ilike.*{audience}*")));
        }
        if let Some(level) = &filter.activity_level {
            query.push(("activity_levels", format!("ilike.*{level}*")));
        }
        if let Some(search) = &filter.search {
            query.push((
                "or",
                format!("(title.ilike.*{search}*,excerpt.ilike.*{search}*)"),
            ));
        }

        let rows: Vec<RawContent> = self.fetch_rows(CONTENT_TABLE, &query).await?;
        Ok(normalize_rows(CONTENT_TABLE, rows, RawContent::normalize))
    }

    async fn content_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, GatewayError> {
        let query = vec![
            ("select", "*".to_string()),
            ("slug", format!("eq.{slug}")),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<RawContent> = self.fetch_rows(CONTENT_TABLE, &query).await?;
        Ok(normalize_rows(CONTENT_TABLE, rows, RawContent::normalize).into_iter().next())
    }

    async fn taxonomies(&self) -> Result<TaxonomySet, GatewayError> {
        let categories = self.taxonomy_table(CATEGORIES_TABLE).await?;
        let seasons = self.taxonomy_table(SEASONS_TABLE).await?;
        let audiences = self.taxonomy_table(AUDIENCES_TABLE).await?;
        let activity_levels = self.taxonomy_table(ACTIVITY_LEVELS_TABLE).await?;

        Ok(TaxonomySet {
            categories,
            seasons,
            audiences,
            activity_levels,
        })
    }

    async fn reviews_for(&self, property: &PropertyId) -> Result<Vec<Review>, GatewayError> {
        let query = vec![
            ("select", "*".to_string()),
            ("property_id", format!("eq.{}", property.0)),
            order_by("reviewed_on.desc.nullslast"),
        ];
        let rows: Vec<RawReview> = self.fetch_rows(REVIEWS_TABLE, &query).await?;
        Ok(normalize_rows(REVIEWS_TABLE, rows, RawReview::normalize))
    }
}
