use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod species;
pub mod store;

use store::FishingResultStore;

/// Build the service router over `store`.
pub fn app(store: FishingResultStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Fishing Results API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Fishing result endpoints
        .route(
            "/fishing-results",
            get(routes::fishing_results::get_fishing_results)
                .post(routes::fishing_results::create_fishing_result),
        )
        .route("/fishing-result", get(routes::fishing_results::get_fishing_result_by_id))
        .route("/fishing-results/checkout", patch(routes::fishing_results::checkout_fishing_result))
        .route("/fishing-results/return", patch(routes::fishing_results::return_fishing_result))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
