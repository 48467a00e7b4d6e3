use crate::cli::ServeArgs;
use crate::infra::{demo_site_info, AppState, InMemoryDataGateway, RecordingFormRelay};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use coastline_stays::config::AppConfig;
use coastline_stays::enquiry::relay::HttpFormRelay;
use coastline_stays::error::AppError;
use coastline_stays::gateway::HostedDataClient;
use coastline_stays::pages::SiteInfo;
use coastline_stays::service::SiteService;
use coastline_stays::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let routes = if args.demo {
        let gateway = Arc::new(InMemoryDataGateway::with_demo_data());
        let relay = Arc::new(RecordingFormRelay::default());
        with_site_routes(Arc::new(SiteService::new(gateway, relay, demo_site_info())))
    } else {
        let gateway = Arc::new(HostedDataClient::new(&config.gateway)?);
        let relay = Arc::new(HttpFormRelay::new(&config.relay)?);
        let site = SiteInfo::from_config(&config.site);
        with_site_routes(Arc::new(SiteService::new(gateway, relay, site)))
    };

    let app = routes.layer(Extension(app_state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, demo = args.demo, "discovery and enquiry service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
