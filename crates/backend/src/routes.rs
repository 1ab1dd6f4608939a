use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::shared::state::AppState;
use crate::{handlers, system};

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        // ========================================
        // CAMPAIGNS API
        // ========================================
        .route("/api/v1/campaigns", get(handlers::a001_campaign::list))
        .route(
            "/api/v1/campaigns/active",
            get(handlers::a001_campaign::list_active),
        )
        .route(
            "/api/v1/campaigns/types",
            get(handlers::a001_campaign::list_types),
        )
        .route(
            "/api/v1/campaigns/segments",
            get(handlers::a001_campaign::list_segments),
        )
        .route(
            "/api/v1/campaigns/brands",
            get(handlers::a001_campaign::list_brands),
        )
        .route(
            "/api/v1/campaigns/product/:product_id",
            get(handlers::a001_campaign::get_by_product),
        )
        .route(
            "/api/v1/campaigns/validate",
            post(handlers::a001_campaign::validate),
        )
        .route(
            "/api/v1/campaigns/validate/record",
            post(handlers::a001_campaign::validate_one),
        )
        .route(
            "/api/v1/campaigns/export",
            get(handlers::p100_falcon_export::export),
        )
        .route(
            "/api/v1/campaigns/summary",
            get(handlers::d100_campaign_summary::get_summary),
        )
        // ========================================
        // DASHBOARD
        // ========================================
        .route("/dashboard", get(handlers::d100_campaign_summary::home))
        .route("/dashboard/", get(handlers::d100_campaign_summary::home))
        .route(
            "/dashboard/campaigns",
            get(handlers::d100_campaign_summary::campaigns_page),
        )
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
        .with_state(state)
}
