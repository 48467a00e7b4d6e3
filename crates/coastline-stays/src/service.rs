use std::sync::Arc;

use serde::Serialize;

use crate::discovery::context::{context_for_page, score_properties};
use crate::discovery::recommendation::{
    Recommendation, RecommendationEngine, DEFAULT_RECOMMENDATION_LIMIT,
};
use crate::discovery::related::{related_content, RelatedPick, DEFAULT_MIN_SCORE, DEFAULT_RELATED_LIMIT};
use crate::discovery::seasonal::{select_seasonal_content, Season, SeasonalActivity};
use crate::discovery::CuratedMap;
use crate::domain::{ContactEnquiry, ContentItem, Property, PropertyEnquiry, Review, TaxonomySet};
use crate::enquiry::relay::{FormRelay, RelayError};
use crate::enquiry::validation::{validate_contact, validate_property, EnquiryValidationError};
use crate::gateway::{ContentFilter, DataGateway, GatewayError, PropertyFilter};
use crate::pages::{
    meta_for_content, meta_for_property, meta_for_static, PageKind, PageMetadata, RouteMatch,
    RouteTable, SiteInfo,
};

const SEASONAL_PICK_LIMIT: usize = 3;

/// Error raised when an enquiry cannot be accepted or relayed.
#[derive(Debug, thiserror::Error)]
pub enum EnquirySubmitError {
    #[error(transparent)]
    Validation(#[from] EnquiryValidationError),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// The season profile plus the content selected for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalDigest {
    pub season: Season,
    pub label: &'static str,
    pub icon: &'static str,
    pub activities: [SeasonalActivity; 3],
    pub picks: Vec<ContentItem>,
}

/// Route resolution plus the metadata the resolved page should carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageAnswer {
    Page {
        page: PageKind,
        metadata: PageMetadata,
    },
    Redirect {
        location: String,
        permanent: bool,
    },
}

/// Composes the data gateway, discovery engines, form relay, and routing
/// surface behind a single injectable seam.
pub struct SiteService<G, R> {
    gateway: Arc<G>,
    relay: Arc<R>,
    engine: RecommendationEngine,
    routes: RouteTable,
    site: SiteInfo,
}

impl<G, R> SiteService<G, R>
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    pub fn new(gateway: Arc<G>, relay: Arc<R>, site: SiteInfo) -> Self {
        Self::with_engine(
            gateway,
            relay,
            site,
            RecommendationEngine::new(CuratedMap::standard()),
        )
    }

    pub fn with_engine(
        gateway: Arc<G>,
        relay: Arc<R>,
        site: SiteInfo,
        engine: RecommendationEngine,
    ) -> Self {
        Self {
            gateway,
            relay,
            engine,
            routes: RouteTable::standard(),
            site,
        }
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    pub async fn properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>, GatewayError> {
        self.gateway.list_properties(filter).await
    }

    pub async fn property(&self, slug: &str) -> Result<Option<Property>, GatewayError> {
        self.gateway.property_by_slug(slug).await
    }

    /// Reviews for a property; `None` when the property itself is unknown.
    pub async fn property_reviews(&self, slug: &str) -> Result<Option<Vec<Review>>, GatewayError> {
        match self.gateway.property_by_slug(slug).await? {
            Some(property) => Ok(Some(self.gateway.reviews_for(&property.id).await?)),
            None => Ok(None),
        }
    }

    pub async fn content(&self, filter: &ContentFilter) -> Result<Vec<ContentItem>, GatewayError> {
        self.gateway.list_content(filter).await
    }

    pub async fn content_item(&self, slug: &str) -> Result<Option<ContentItem>, GatewayError> {
        self.gateway.content_by_slug(slug).await
    }

    /// Content matcher output for an article; `None` when the article is
    /// unknown. An empty catalog produces an empty list, not an error.
    pub async fn recommendations_for(
        &self,
        slug: &str,
    ) -> Result<Option<Vec<Recommendation>>, GatewayError> {
        let Some(content) = self.gateway.content_by_slug(slug).await? else {
            return Ok(None);
        };
        let catalog = self
            .gateway
            .list_properties(&PropertyFilter::default())
            .await?;
        Ok(Some(self.engine.recommend(&content, &catalog)))
    }

    /// Related-article ranking for an article; `None` when it is unknown.
    pub async fn related_for(&self, slug: &str) -> Result<Option<Vec<RelatedPick>>, GatewayError> {
        let Some(current) = self.gateway.content_by_slug(slug).await? else {
            return Ok(None);
        };
        let all = self.gateway.list_content(&ContentFilter::default()).await?;
        Ok(Some(related_content(
            &current,
            &all,
            DEFAULT_RELATED_LIMIT,
            DEFAULT_MIN_SCORE,
        )))
    }

    /// Top properties for a fixed landing page, ranked by its hand-authored
    /// matching context. Unmapped slugs fall back to a general context.
    pub async fn featured_for_page(
        &self,
        page_slug: &str,
    ) -> Result<Vec<Property>, GatewayError> {
        let catalog = self
            .gateway
            .list_properties(&PropertyFilter::default())
            .await?;
        let context = context_for_page(page_slug);
        Ok(
            score_properties(&context, &catalog, DEFAULT_RECOMMENDATION_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub async fn seasonal_digest(&self, month: u32) -> Result<SeasonalDigest, GatewayError> {
        let profile = Season::from_month(month).profile();
        let items = self.gateway.list_content(&ContentFilter::default()).await?;
        let picks = select_seasonal_content(profile, &items, SEASONAL_PICK_LIMIT);

        Ok(SeasonalDigest {
            season: profile.season,
            label: profile.label,
            icon: profile.icon,
            activities: profile.activities,
            picks,
        })
    }

    pub async fn taxonomies(&self) -> Result<TaxonomySet, GatewayError> {
        self.gateway.taxonomies().await
    }

    pub async fn submit_contact(&self, enquiry: &ContactEnquiry) -> Result<(), EnquirySubmitError> {
        validate_contact(enquiry)?;
        self.relay.submit_contact(enquiry).await?;
        Ok(())
    }

    pub async fn submit_property(
        &self,
        enquiry: &PropertyEnquiry,
    ) -> Result<(), EnquirySubmitError> {
        validate_property(enquiry)?;
        self.relay.submit_property(enquiry).await?;
        Ok(())
    }

    /// Resolve a site path and compute the metadata its page should carry.
    /// Unknown slugs resolve to the not-found page rather than an error.
    pub async fn page_answer(&self, path: &str) -> Result<PageAnswer, GatewayError> {
        match self.routes.resolve(path) {
            RouteMatch::Redirect {
                location,
                permanent,
            } => Ok(PageAnswer::Redirect {
                location,
                permanent,
            }),
            RouteMatch::Page {
                page: PageKind::PropertyDetail,
                slug,
            } => {
                let slug = slug.unwrap_or_default();
                match self.gateway.property_by_slug(&slug).await? {
                    Some(property) => Ok(PageAnswer::Page {
                        page: PageKind::PropertyDetail,
                        metadata: meta_for_property(&property, &self.site),
                    }),
                    None => Ok(self.not_found_answer()),
                }
            }
            RouteMatch::Page {
                page: PageKind::ContentDetail,
                slug,
            } => {
                let slug = slug.unwrap_or_default();
                match self.gateway.content_by_slug(&slug).await? {
                    Some(item) => Ok(PageAnswer::Page {
                        page: PageKind::ContentDetail,
                        metadata: meta_for_content(&item, &self.site),
                    }),
                    None => Ok(self.not_found_answer()),
                }
            }
            RouteMatch::Page { page, .. } => Ok(PageAnswer::Page {
                page,
                metadata: meta_for_static(page, &self.site),
            }),
        }
    }

    fn not_found_answer(&self) -> PageAnswer {
        PageAnswer::Page {
            page: PageKind::NotFound,
            metadata: meta_for_static(PageKind::NotFound, &self.site),
        }
    }
}
