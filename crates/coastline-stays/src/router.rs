use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Local};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::domain::{ContactEnquiry, PropertyEnquiry};
use crate::enquiry::relay::FormRelay;
use crate::gateway::{ContentFilter, DataGateway, GatewayError, PropertyFilter};
use crate::service::{EnquirySubmitError, SiteService};

/// Router builder exposing the discovery and enquiry endpoints.
pub fn site_router<G, R>(service: Arc<SiteService<G, R>>) -> Router
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    Router::new()
        .route("/api/v1/properties", get(list_properties_handler::<G, R>))
        .route("/api/v1/properties/:slug", get(property_handler::<G, R>))
        .route(
            "/api/v1/properties/:slug/reviews",
            get(reviews_handler::<G, R>),
        )
        .route("/api/v1/discover", get(list_content_handler::<G, R>))
        .route("/api/v1/discover/:slug", get(content_handler::<G, R>))
        .route(
            "/api/v1/discover/:slug/recommendations",
            get(recommendations_handler::<G, R>),
        )
        .route(
            "/api/v1/discover/:slug/related",
            get(related_handler::<G, R>),
        )
        .route(
            "/api/v1/landing/:slug/featured",
            get(featured_handler::<G, R>),
        )
        .route("/api/v1/seasonal", get(seasonal_handler::<G, R>))
        .route("/api/v1/taxonomies", get(taxonomies_handler::<G, R>))
        .route("/api/v1/pages/meta", get(page_meta_handler::<G, R>))
        .route(
            "/api/v1/enquiries/contact",
            post(contact_enquiry_handler::<G, R>),
        )
        .route(
            "/api/v1/enquiries/property",
            post(property_enquiry_handler::<G, R>),
        )
        .with_state(service)
}

/// Uniform body for data-fetch failures; the caller shows a retry action.
fn could_not_load(what: &str, error: GatewayError) -> Response {
    warn!(%error, what, "data fetch failed");
    let payload = json!({ "error": format!("could not load {what}") });
    (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
}

fn not_found(what: &str, slug: &str) -> Response {
    let payload = json!({ "error": format!("{what} '{slug}' not found") });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

pub(crate) async fn list_properties_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Query(filter): Query<PropertyFilter>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.properties(&filter).await {
        Ok(properties) => (StatusCode::OK, Json(properties)).into_response(),
        Err(error) => could_not_load("properties", error),
    }
}

pub(crate) async fn property_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Path(slug): Path<String>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.property(&slug).await {
        Ok(Some(property)) => (StatusCode::OK, Json(property)).into_response(),
        Ok(None) => not_found("property", &slug),
        Err(error) => could_not_load("property", error),
    }
}

pub(crate) async fn reviews_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Path(slug): Path<String>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.property_reviews(&slug).await {
        Ok(Some(reviews)) => (StatusCode::OK, Json(reviews)).into_response(),
        Ok(None) => not_found("property", &slug),
        Err(error) => could_not_load("reviews", error),
    }
}

pub(crate) async fn list_content_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Query(filter): Query<ContentFilter>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.content(&filter).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(error) => could_not_load("guides", error),
    }
}

pub(crate) async fn content_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Path(slug): Path<String>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.content_item(&slug).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => not_found("guide", &slug),
        Err(error) => could_not_load("guide", error),
    }
}

pub(crate) async fn recommendations_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Path(slug): Path<String>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.recommendations_for(&slug).await {
        Ok(Some(picks)) => (StatusCode::OK, Json(picks)).into_response(),
        Ok(None) => not_found("guide", &slug),
        Err(error) => could_not_load("recommendations", error),
    }
}

pub(crate) async fn related_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Path(slug): Path<String>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.related_for(&slug).await {
        Ok(Some(picks)) => (StatusCode::OK, Json(picks)).into_response(),
        Ok(None) => not_found("guide", &slug),
        Err(error) => could_not_load("related guides", error),
    }
}

pub(crate) async fn featured_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Path(slug): Path<String>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.featured_for_page(&slug).await {
        Ok(properties) => (StatusCode::OK, Json(properties)).into_response(),
        Err(error) => could_not_load("featured properties", error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeasonalQuery {
    month: Option<u32>,
}

pub(crate) async fn seasonal_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Query(query): Query<SeasonalQuery>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    let month = match query.month {
        Some(month @ 1..=12) => month,
        Some(other) => {
            let payload = json!({ "error": format!("month {other} is out of range (1-12)") });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
        None => Local::now().date_naive().month(),
    };

    match service.seasonal_digest(month).await {
        Ok(digest) => (StatusCode::OK, Json(digest)).into_response(),
        Err(error) => could_not_load("seasonal guides", error),
    }
}

pub(crate) async fn taxonomies_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.taxonomies().await {
        Ok(set) => (StatusCode::OK, Json(set)).into_response(),
        Err(error) => could_not_load("filters", error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageMetaQuery {
    path: String,
}

pub(crate) async fn page_meta_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Query(query): Query<PageMetaQuery>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    match service.page_answer(&query.path).await {
        Ok(answer) => (StatusCode::OK, Json(answer)).into_response(),
        Err(error) => could_not_load("page metadata", error),
    }
}

fn enquiry_response(result: Result<(), EnquirySubmitError>) -> Response {
    match result {
        Ok(()) => {
            let payload = json!({ "success": true });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(EnquirySubmitError::Validation(error)) => {
            let payload = json!({ "success": false, "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(EnquirySubmitError::Relay(error)) => {
            warn!(%error, "enquiry relay failed");
            let payload = json!({
                "success": false,
                "error": "we couldn't send your enquiry, please try again",
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn contact_enquiry_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Json(enquiry): Json<ContactEnquiry>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    enquiry_response(service.submit_contact(&enquiry).await)
}

pub(crate) async fn property_enquiry_handler<G, R>(
    State(service): State<Arc<SiteService<G, R>>>,
    Json(enquiry): Json<PropertyEnquiry>,
) -> Response
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    enquiry_response(service.submit_property(&enquiry).await)
}
