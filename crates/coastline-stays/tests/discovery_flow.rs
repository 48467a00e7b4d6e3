mod common;

use std::sync::Arc;

use coastline_stays::discovery::{CuratedMap, RecommendationEngine};
use coastline_stays::domain::TaxonomySet;
use coastline_stays::gateway::{ContentFilter, PropertyFilter};
use coastline_stays::service::SiteService;
use common::{
    category, content, property, site_info, taxonomy_entry, FixtureGateway, RecordingRelay,
    UnavailableGateway,
};

fn fixture_gateway() -> FixtureGateway {
    let mut pets = property("saltbush-cottage", "Saltbush Cottage");
    pets.pet_friendly = true;

    let mut waterfront = property("heron-point-retreat", "Heron Point Retreat");
    waterfront.water_views = true;
    waterfront.bedrooms = 3;

    let mut boathouse = property("the-boathouse", "The Boathouse");
    boathouse.boat_parking = true;

    let plain = property("driftwood-villa", "Driftwood Villa");

    let mut pet_guide = content("pet-friendly-getaways", "Pet-Friendly Getaways");
    pet_guide.excerpt = Some("Where the dog is welcome too.".to_string());

    let seafood_guide = content(
        "seasonal-seafood-sustainability",
        "Seasonal Seafood & Sustainability",
    );

    let mut whale_guide = content("whale-watching-winter-wildlife", "Whale Watching Season");
    whale_guide.seasons = vec!["winter".to_string()];
    whale_guide.category = Some(category("nature"));

    let mut storm_guide = content("storm-watching-lookouts", "Storm Watching Lookouts");
    storm_guide.category = Some(category("nature"));

    let taxonomies = TaxonomySet {
        categories: vec![taxonomy_entry("nature"), taxonomy_entry("dining")],
        seasons: vec![taxonomy_entry("winter"), taxonomy_entry("summer")],
        audiences: vec![taxonomy_entry("families"), taxonomy_entry("couples")],
        activity_levels: vec![taxonomy_entry("relaxed")],
    };

    FixtureGateway {
        properties: vec![pets, waterfront, boathouse, plain],
        content: vec![pet_guide, seafood_guide, whale_guide, storm_guide],
        taxonomies,
        ..FixtureGateway::default()
    }
}

fn service_with(
    gateway: FixtureGateway,
    curated: &[(&str, &[&str])],
) -> SiteService<FixtureGateway, RecordingRelay> {
    let mut map = CuratedMap::default();
    for (slug, picks) in curated {
        map.insert(slug, picks.iter().map(|p| p.to_string()).collect());
    }
    SiteService::with_engine(
        Arc::new(gateway),
        Arc::new(RecordingRelay::default()),
        site_info(),
        RecommendationEngine::new(map),
    )
}

#[tokio::test]
async fn curated_picks_resolve_before_fallback() {
    let service = service_with(
        fixture_gateway(),
        &[(
            "pet-friendly-getaways",
            &["the-boathouse", "ghost-property", "driftwood-villa", "saltbush-cottage"],
        )],
    );

    let picks = service
        .recommendations_for("pet-friendly-getaways")
        .await
        .expect("gateway reachable")
        .expect("guide exists");

    let slugs: Vec<&str> = picks.iter().map(|p| p.property.slug.as_str()).collect();
    assert_eq!(slugs, vec!["the-boathouse", "driftwood-villa", "saltbush-cottage"]);
}

#[tokio::test]
async fn fallback_gates_on_content_keywords() {
    let service = service_with(fixture_gateway(), &[]);

    let picks = service
        .recommendations_for("pet-friendly-getaways")
        .await
        .expect("gateway reachable")
        .expect("guide exists");

    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].property.slug, "saltbush-cottage");
    assert_eq!(picks[0].reason, "Pet-friendly");
}

#[tokio::test]
async fn keep_all_fallback_respects_catalog_order_and_limit() {
    let service = service_with(fixture_gateway(), &[]);

    let picks = service
        .recommendations_for("seasonal-seafood-sustainability")
        .await
        .expect("gateway reachable")
        .expect("guide exists");

    // Catalog order is title order from the gateway, truncated to three.
    let slugs: Vec<&str> = picks.iter().map(|p| p.property.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["driftwood-villa", "heron-point-retreat", "saltbush-cottage"]
    );
}

#[tokio::test]
async fn unknown_guide_yields_none_not_error() {
    let service = service_with(fixture_gateway(), &[]);
    let picks = service
        .recommendations_for("no-such-guide")
        .await
        .expect("gateway reachable");
    assert!(picks.is_none());
}

#[tokio::test]
async fn empty_catalog_yields_empty_recommendations() {
    let mut gateway = fixture_gateway();
    gateway.properties.clear();
    let service = service_with(gateway, &[]);

    let picks = service
        .recommendations_for("seasonal-seafood-sustainability")
        .await
        .expect("gateway reachable")
        .expect("guide exists");
    assert!(picks.is_empty());
}

#[tokio::test]
async fn seasonal_digest_filters_by_month() {
    let service = service_with(fixture_gateway(), &[]);

    let digest = service.seasonal_digest(7).await.expect("gateway reachable");
    assert_eq!(digest.label, "Winter");
    assert_eq!(digest.activities.len(), 3);
    let slugs: Vec<&str> = digest.picks.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["whale-watching-winter-wildlife"]);
}

#[tokio::test]
async fn seasonal_digest_tolerates_zero_matches() {
    let service = service_with(fixture_gateway(), &[]);

    let digest = service.seasonal_digest(4).await.expect("gateway reachable");
    assert_eq!(digest.label, "Autumn");
    assert!(digest.picks.is_empty());
}

#[tokio::test]
async fn related_guides_rank_by_taxonomy_overlap() {
    let service = service_with(fixture_gateway(), &[]);

    let picks = service
        .related_for("whale-watching-winter-wildlife")
        .await
        .expect("gateway reachable")
        .expect("guide exists");

    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].content.slug, "storm-watching-lookouts");
    assert_eq!(picks[0].score, 3);
}

#[tokio::test]
async fn taxonomies_pass_through_from_the_gateway() {
    let service = service_with(fixture_gateway(), &[]);

    let set = service.taxonomies().await.expect("gateway reachable");
    assert_eq!(set.categories.len(), 2);
    assert_eq!(set.audiences.len(), 2);
}

#[tokio::test]
async fn gateway_outage_surfaces_as_error() {
    let service = SiteService::new(
        Arc::new(UnavailableGateway),
        Arc::new(RecordingRelay::default()),
        site_info(),
    );

    assert!(service.properties(&PropertyFilter::default()).await.is_err());
    assert!(service.content(&ContentFilter::default()).await.is_err());
    assert!(service.recommendations_for("anything").await.is_err());
}
