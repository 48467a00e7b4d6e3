use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use coastline_stays::enquiry::relay::FormRelay;
use coastline_stays::gateway::DataGateway;
use coastline_stays::router::site_router;
use coastline_stays::service::SiteService;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_site_routes<G, R>(service: Arc<SiteService<G, R>>) -> axum::Router
where
    G: DataGateway + 'static,
    R: FormRelay + 'static,
{
    site_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{demo_site_info, InMemoryDataGateway, RecordingFormRelay};
    use axum::body::Body;
    use axum::http::Request;
    use coastline_stays::domain::ContactEnquiry;
    use tower::util::ServiceExt;

    fn test_router() -> (axum::Router, RecordingFormRelay) {
        let relay = RecordingFormRelay::default();
        let service = Arc::new(SiteService::new(
            Arc::new(InMemoryDataGateway::with_demo_data()),
            Arc::new(relay.clone()),
            demo_site_info(),
        ));
        (site_router(service), relay)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn properties_endpoint_filters_by_query() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/properties?pet_friendly=true")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let slugs: Vec<&str> = body
            .as_array()
            .expect("array body")
            .iter()
            .map(|p| p["slug"].as_str().expect("slug"))
            .collect();
        assert_eq!(slugs, vec!["driftwood-villa", "saltbush-cottage"]);
    }

    #[tokio::test]
    async fn unknown_property_returns_not_found() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/properties/no-such-place")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn recommendations_endpoint_returns_reasoned_picks() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/discover/pet-friendly-getaways/recommendations")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let picks = body.as_array().expect("array body");
        assert!(!picks.is_empty());
        assert!(picks.len() <= 3);
        for pick in picks {
            assert!(pick["property"]["slug"].is_string());
            assert!(pick["reason"].is_string());
        }
    }

    #[tokio::test]
    async fn featured_endpoint_ranks_the_demo_catalog() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/landing/fishing-getaways/featured")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let slugs: Vec<&str> = body
            .as_array()
            .expect("array body")
            .iter()
            .map(|p| p["slug"].as_str().expect("slug"))
            .collect();
        assert_eq!(slugs.len(), 3);
        // The Boathouse carries jetty access, boat parking, and water
        // activities, so it should lead the fishing page.
        assert_eq!(slugs[0], "the-boathouse");
    }

    #[tokio::test]
    async fn seasonal_endpoint_validates_the_month() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/seasonal?month=13")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn seasonal_endpoint_returns_winter_digest_for_july() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/seasonal?month=7")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["season"], "winter");
        assert_eq!(body["activities"].as_array().expect("activities").len(), 3);
    }

    #[tokio::test]
    async fn contact_enquiry_round_trips_through_the_relay() {
        let (router, relay) = test_router();
        let enquiry = ContactEnquiry {
            name: "Robin Shaw".to_string(),
            email: "robin@example.com".to_string(),
            phone: None,
            subject: None,
            message: "Availability over Easter?".to_string(),
            enquiry_type: "booking".to_string(),
        };

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/enquiries/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&enquiry).expect("serializes"),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(relay.contact_submissions().len(), 1);
    }

    #[tokio::test]
    async fn property_enquiry_round_trips_through_the_relay() {
        let (router, relay) = test_router();
        let enquiry = coastline_stays::domain::PropertyEnquiry {
            property_slug: "saltbush-cottage".to_string(),
            property_name: "Saltbush Cottage".to_string(),
            name: "Robin Shaw".to_string(),
            email: "robin@example.com".to_string(),
            phone: None,
            check_in: None,
            check_out: None,
            guests: Some(4),
            message: None,
        };

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/enquiries/property")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&enquiry).expect("serializes"),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let sent = relay.property_submissions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].property_slug, "saltbush-cottage");
    }

    #[tokio::test]
    async fn invalid_enquiry_is_unprocessable() {
        let (router, _relay) = test_router();
        let enquiry = ContactEnquiry {
            name: "Robin Shaw".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            subject: None,
            message: "Hello".to_string(),
            enquiry_type: "general".to_string(),
        };

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/enquiries/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&enquiry).expect("serializes"),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn page_meta_endpoint_answers_redirects() {
        let (router, _relay) = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/pages/meta?path=/blog/whale-watching-winter-wildlife")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["kind"], "redirect");
        assert_eq!(body["location"], "/discover/whale-watching-winter-wildlife");
    }
}
