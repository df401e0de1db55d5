use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use storefront::adapters::http::{build_router, AppServices};
use storefront::adapters::product::HttpProductService;
use storefront::adapters::storage::{InMemoryCustomerRepository, InMemoryOrderRepository};
use storefront::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let services = AppServices {
        customers: Arc::new(InMemoryCustomerRepository::new()),
        orders: Arc::new(InMemoryOrderRepository::new()),
        products: Arc::new(HttpProductService::new(
            config.product_service.base_url.clone(),
            Duration::from_secs(config.product_service.timeout_secs),
        )),
    };

    let mut app = build_router(services)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    if !origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST]),
        );
    }

    let addr = config.server.socket_addr().expect("Invalid bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("server terminated unexpectedly");
}
